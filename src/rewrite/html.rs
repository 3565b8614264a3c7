//! HTML pass: rewrite absolute-rooted references in element attributes.
//!
//! Parses the page with html5ever, walks the tree, and rewrites the
//! designated reference attribute of anchor, image, link, and script
//! elements when the value is absolute-rooted. The tree is then serialized
//! back to text.

use html5ever::parse_document;
use html5ever::serialize::{SerializeOpts, serialize};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use super::relpath::relative_path;

/// Reference attribute inspected for a given element name.
fn target_attr(element: &str) -> Option<&'static str> {
    match element {
        "a" | "link" => Some("href"),
        "img" | "script" => Some("src"),
        _ => None,
    }
}

/// Rewrite absolute-rooted `href`/`src` attributes relative to `page_dir`.
///
/// Input that cannot be parsed or serialized is returned unchanged; the
/// pass never corrupts unrelated content.
pub fn rewrite_html(output: &str, page_dir: &str) -> String {
    let Ok(dom) = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut output.as_bytes())
    else {
        return output.to_string();
    };

    walk(&dom.document, page_dir);

    let mut buf: Vec<u8> = Vec::new();
    let serializable: SerializableHandle = dom.document.into();
    if serialize(&mut buf, &serializable, SerializeOpts::default()).is_err() {
        return output.to_string();
    }

    String::from_utf8(buf).unwrap_or_else(|_| output.to_string())
}

/// Recursively rewrite reference attributes below `node`.
fn walk(node: &Handle, page_dir: &str) {
    if let NodeData::Element {
        ref name,
        ref attrs,
        ..
    } = node.data
        && let Some(attr_name) = target_attr(name.local.as_ref())
    {
        for attr in attrs.borrow_mut().iter_mut() {
            if &*attr.name.local == attr_name && attr.value.starts_with('/') {
                let rewritten = relative_path(page_dir, &attr.value);
                attr.value.clear();
                attr.value.push_slice(&rewritten);
            }
        }
    }

    for child in node.children.borrow().iter() {
        walk(child, page_dir);
    }
}
