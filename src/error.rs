// src/error.rs
use thiserror::Error;

/// Failures that abort a page's processing, or the whole run when nobody
/// above catches them. Transport troubles never reach this type from the
/// fetcher; it collapses them to a logged absence instead.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A structural assumption about the target markup failed. Fatal:
    /// counts computed over a page of unexpected shape would be garbage.
    #[error("tag not found: <{tag}> {filter}")]
    TagNotFound { tag: String, filter: String },

    #[error("http error: {0}")]
    Http(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
