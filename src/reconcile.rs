// src/reconcile.rs
//! Index-vs-detail status reconciliation.

use url::Url;

use crate::config::consts::EXPECTED_STATUS;
use crate::specs::pep_index::IndexEntry;

/// Acceptable declared statuses per index status code. Passed into the
/// reconciler explicitly so tests can substitute their own table.
pub struct ExpectedStatuses {
    table: Vec<(String, Vec<String>)>,
}

impl ExpectedStatuses {
    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Self {
        let table = pairs
            .iter()
            .map(|(code, set)| (s!(*code), set.iter().map(|s| s!(*s)).collect()))
            .collect();
        Self { table }
    }

    /// Every code the index crawler can emit must be mapped, including
    /// the empty one. An unmapped code is a table defect, not bad page
    /// data, so it panics instead of erroring.
    pub fn expected_for(&self, code: &str) -> &[String] {
        self.table
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, set)| set.as_slice())
            .unwrap_or_else(|| panic!("no expected statuses for code {code:?}"))
    }
}

impl Default for ExpectedStatuses {
    fn default() -> Self {
        Self::from_pairs(EXPECTED_STATUS)
    }
}

/// A disagreement between the index code and the detail page. Reported
/// when it happens, never stored.
#[derive(Debug, PartialEq, Eq)]
pub struct Mismatch<'a> {
    pub detail_link: &'a Url,
    pub declared: &'a str,
    pub expected: &'a [String],
}

/// Compare a declared status against the entry's expected set. A
/// mismatch is a warning only: the declared status still counts as-is.
/// Entries without a code reconcile against the default set.
pub fn reconcile<'a>(
    expected: &'a ExpectedStatuses,
    entry: &'a IndexEntry,
    declared: &'a str,
) -> Option<Mismatch<'a>> {
    let set = expected.expected_for(&entry.status_code);
    if set.iter().any(|s| s == declared) {
        return None;
    }
    logw!(
        "status mismatch: {} declared {:?}, expected one of {:?}",
        entry.detail_link,
        declared,
        set
    );
    Some(Mismatch {
        detail_link: &entry.detail_link,
        declared,
        expected: set,
    })
}
