// src/specs/pep_index.rs
//! Scraping spec for the PEP index.
//!
//! The index lists every PEP in "status summary" tables inside the
//! `pep-content` section. A data row carries an optional `<abbr>` whose
//! text is a type glyph followed by the one-letter status code, and an
//! anchor pointing at the PEP's own page. Rows without an anchor are
//! section headers, not data.

use url::Url;

use crate::config::consts::{PEP_CONTENT_ID, PEP_TABLE_CLASS};
use crate::core::html::{self, attr_value, locate, next_tag_ci};
use crate::error::ScrapeError;

/// One qualifying index row. Discarded after reconciliation.
#[derive(Clone, Debug)]
pub struct IndexEntry {
    /// One-letter status code, or empty when the row has no `<abbr>`.
    pub status_code: String,
    /// Absolute link to the PEP's detail page.
    pub detail_link: Url,
}

/// Entries in document order: tables in order, rows within each table.
pub fn crawl_index(doc: &str, base: &Url) -> Result<Vec<IndexEntry>, ScrapeError> {
    let section = locate(doc, "section", &[("id", PEP_CONTENT_ID)])?;

    let mut entries = Vec::new();
    let mut pos = 0usize;
    while let Some(table) = next_tag_ci(section.inner, "table", pos) {
        pos = table.end;
        if !html::has_class(table.opener, PEP_TABLE_CLASS) {
            continue;
        }

        let mut row_pos = 0usize;
        while let Some(tr) = next_tag_ci(table.inner, "tr", row_pos) {
            row_pos = tr.end;

            let anchor = match next_tag_ci(tr.inner, "a", 0) {
                Some(a) => a,
                None => continue, // header row
            };
            let href = match attr_value(anchor.opener, "href") {
                Some(h) => h,
                None => continue,
            };
            let detail_link = match base.join(href) {
                Ok(u) => u,
                Err(e) => {
                    logw!("unresolvable link {href:?} in index row: {e}");
                    continue;
                }
            };

            let status_code = match next_tag_ci(tr.inner, "abbr", 0) {
                Some(abbr) => strip_type_glyph(&html::text(&abbr)),
                None => s!(),
            };

            entries.push(IndexEntry { status_code, detail_link });
        }
    }
    Ok(entries)
}

// The abbr text leads with the PEP type glyph; the status code is the rest.
fn strip_type_glyph(txt: &str) -> String {
    let mut chars = txt.chars();
    chars.next();
    chars.as_str().to_string()
}
