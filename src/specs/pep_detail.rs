// src/specs/pep_detail.rs
//! Scraping spec for a single PEP page.
//!
//! The authoritative status lives in the RFC-2822-style field list near
//! the top of `pep-content`: alternating `<dt>` label / `<dd>` value
//! elements. Whitespace between them is markup noise; walking element
//! blocks only keeps it out of the sequence.

use crate::config::consts::{PEP_CONTENT_ID, PEP_FIELD_LIST_CLASS, STATUS_LABEL};
use crate::core::html::{locate, next_tag_ci, text};
use crate::error::ScrapeError;

/// Declared status from the metadata field list. `Ok(None)` means the
/// list is present but carries no "Status:" field. That is distinct
/// from a failed fetch, and from a missing section or list (fatal).
pub fn extract_status(doc: &str) -> Result<Option<String>, ScrapeError> {
    let section = locate(doc, "section", &[("id", PEP_CONTENT_ID)])?;
    let dl = locate(section.inner, "dl", &[("class", PEP_FIELD_LIST_CLASS)])?;

    let fields = field_texts(dl.inner);
    Ok(status_from_fields(&fields))
}

// Label/value texts in document order, dt and dd interleaved.
fn field_texts(dl_inner: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    loop {
        let dt = next_tag_ci(dl_inner, "dt", pos);
        let dd = next_tag_ci(dl_inner, "dd", pos);
        let next = match (dt, dd) {
            (Some(a), Some(b)) => {
                if a.start < b.start { a } else { b }
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => break,
        };
        out.push(text(&next));
        pos = next.end;
    }
    out
}

fn status_from_fields(fields: &[String]) -> Option<String> {
    let at = fields.iter().position(|f| f == STATUS_LABEL)?;
    fields.get(at + 1).cloned()
}
