//! Relative path computation for site-root references.
//!
//! This is a web-path operation, not a filesystem operation: input and
//! output are POSIX-style forward-slash paths on every host OS.

/// Compute the path of `to` relative to the directory `from_dir`.
///
/// `to` is an absolute-rooted reference (`/assets/style.css`); `from_dir` is
/// the page's output directory (`blog/post1`, leading/trailing slashes
/// tolerated, empty for the site root). A trailing slash on `to` is
/// preserved so directory references stay directory references.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(relative_path("blog/post1", "/assets/style.css"), "../../assets/style.css");
/// assert_eq!(relative_path("blog/post1", "/"), "../../");
/// assert_eq!(relative_path("", "/docs/"), "docs/");
/// ```
pub fn relative_path(from_dir: &str, to: &str) -> String {
    let trailing = to.ends_with('/');

    let from_segs: Vec<&str> = segments(from_dir);
    let to_segs: Vec<&str> = segments(to);

    // Common ancestor: longest shared prefix of both segment lists
    let common = from_segs
        .iter()
        .zip(to_segs.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let ups = from_segs.len() - common;
    let mut parts: Vec<&str> = Vec::with_capacity(ups + to_segs.len() - common);
    parts.extend(std::iter::repeat_n("..", ups));
    parts.extend(&to_segs[common..]);

    let mut path = if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    };

    if trailing {
        path.push('/');
    }
    path
}

/// Split a path into non-empty segments.
fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
