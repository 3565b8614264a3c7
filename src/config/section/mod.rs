//! Configuration section definitions.
//!
//! Each module corresponds to a section in `lectern.toml`:
//!
//! | Module    | TOML Section | Purpose                             |
//! |-----------|--------------|-------------------------------------|
//! | `site`    | `[site]`     | Site metadata (title, url, tz)      |
//! | `rewrite` | `[rewrite]`  | Post-render path rewriting          |

mod rewrite;
mod site;

pub use rewrite::RewriteConfig;
pub use site::SiteSectionConfig;
