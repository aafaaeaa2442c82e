// src/config/consts.rs

use std::sync::OnceLock;
use url::Url;

// Crawl targets
pub const PEP_INDEX_URL: &str = "https://peps.python.org/";
pub const MAIN_DOC_URL: &str = "https://docs.python.org/3/";
pub const WHATS_NEW_PATH: &str = "whatsnew/";

// Markup anchors on peps.python.org
pub const PEP_CONTENT_ID: &str = "pep-content";
pub const PEP_TABLE_CLASS: &str = "pep-zero-table";
pub const PEP_FIELD_LIST_CLASS: &str = "rfc2822 field-list simple";
pub const STATUS_LABEL: &str = "Status:";

// Markup anchors on docs.python.org
pub const SIDEBAR_CLASS: &str = "sphinxsidebarwrapper";
pub const ALL_VERSIONS_MARK: &str = "All versions";
pub const WHATS_NEW_ID: &str = "what-s-new-in-python";
pub const TOCTREE_CLASS: &str = "toctree-wrapper";
pub const TOCTREE_ITEM_CLASS: &str = "toctree-l1";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const PAGES_SUBDIR: &str = "pages";

/// Acceptable declared statuses per one-letter index code. The empty
/// code covers index rows without an abbreviation.
pub const EXPECTED_STATUS: &[(&str, &[&str])] = &[
    ("A", &["Active", "Accepted"]),
    ("D", &["Deferred"]),
    ("F", &["Final"]),
    ("P", &["Provisional"]),
    ("R", &["Rejected"]),
    ("S", &["Superseded"]),
    ("W", &["Withdrawn"]),
    ("", &["Draft", "Active"]),
];

pub fn pep_index_url() -> &'static Url {
    static U: OnceLock<Url> = OnceLock::new();
    U.get_or_init(|| Url::parse(PEP_INDEX_URL).expect("constant URL"))
}

pub fn main_doc_url() -> &'static Url {
    static U: OnceLock<Url> = OnceLock::new();
    U.get_or_init(|| Url::parse(MAIN_DOC_URL).expect("constant URL"))
}

pub fn whats_new_url() -> &'static Url {
    static U: OnceLock<Url> = OnceLock::new();
    U.get_or_init(|| main_doc_url().join(WHATS_NEW_PATH).expect("constant URL"))
}
