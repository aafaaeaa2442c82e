// src/specs/whatsnew.rs
//! Scraping spec for the "What's New in Python" index and its release
//! pages. The index's toctree lists one top-level item per release;
//! each release page opens with an `<h1>` title and a `<dl>` naming the
//! editors/authors.

use url::Url;

use crate::config::consts::{TOCTREE_CLASS, TOCTREE_ITEM_CLASS, WHATS_NEW_ID};
use crate::core::html::{attr_value, has_class, locate, next_tag_ci, text};
use crate::error::ScrapeError;

/// Per-release links from the toctree, resolved absolute, in document order.
pub fn release_links(doc: &str, base: &Url) -> Result<Vec<Url>, ScrapeError> {
    let section = locate(doc, "section", &[("id", WHATS_NEW_ID)])?;
    let wrapper = locate(section.inner, "div", &[("class", TOCTREE_CLASS)])?;

    let mut links = Vec::new();
    let mut pos = 0usize;
    while let Some(li) = next_tag_ci(wrapper.inner, "li", pos) {
        if !has_class(li.opener, TOCTREE_ITEM_CLASS) {
            // descend: top-level items can sit below intermediate lists
            pos = li.start + 1;
            continue;
        }
        pos = li.end;

        let anchor = match next_tag_ci(li.inner, "a", 0) {
            Some(a) => a,
            None => continue,
        };
        let href = match attr_value(anchor.opener, "href") {
            Some(h) => h,
            None => continue,
        };
        match base.join(href) {
            Ok(u) => links.push(u),
            Err(e) => logw!("unresolvable link {href:?} in toctree: {e}"),
        }
    }
    Ok(links)
}

/// Title and editor line from one release page.
pub fn page_summary(doc: &str) -> Result<(String, String), ScrapeError> {
    let h1 = locate(doc, "h1", &[])?;
    let dl = locate(doc, "dl", &[])?;
    Ok((text(&h1), text(&dl)))
}
