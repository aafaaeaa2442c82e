// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific scraping specifications: each spec encodes *where the
//! ground truth lives in the HTML* of one page kind and *how to extract
//! it*, using the `core::html` block scanners. Specs are pure: they
//! take a fetched document and return shaped data. Fetching, caching
//! and cross-page orchestration live in `scrape`.
//!
//! Conventions:
//! - Case-insensitive tag detection; prefer scanning within a located
//!   block over full-document searches.
//! - Structural anchors (section ids, table/list classes) come from
//!   `config::consts` and are fatal when missing (`core::html::locate`).
//! - Stable row shapes per page, documented in each spec.

pub mod pep_detail;
pub mod pep_index;
pub mod versions;
pub mod whatsnew;
