// src/core/net.rs
//
// Blocking HTTP GET. The target sites occasionally mislabel their
// charset, so bodies are decoded as UTF-8 regardless of headers.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::error::ScrapeError;
use crate::store;

const TIMEOUT_SECS: u64 = 15;
const USER_AGENT: &str = "pep_scrape/0.1";

fn client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

pub fn http_get(url: &Url) -> Result<String, ScrapeError> {
    let resp = client().get(url.clone()).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Http(format!("HTTP {status} for {url}")));
    }
    let bytes = resp.bytes()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Page source for a crawl. Implementations may serve cached bodies
/// instead of touching the network.
pub trait Fetch {
    /// Transport failures are logged and collapse to `None`; callers
    /// skip the page and keep crawling.
    fn get(&self, url: &Url) -> Option<String>;
}

/// Live fetcher backed by the on-disk page cache.
pub struct HttpFetcher {
    pub use_cache: bool,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self { use_cache: true }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &Url) -> Option<String> {
        if self.use_cache {
            if let Some(body) = store::load_page(url) {
                return Some(body);
            }
        }
        match http_get(url) {
            Ok(body) => {
                if self.use_cache {
                    // cache, but ignore any IO error (best-effort)
                    let _ = store::save_page(url, &body);
                }
                Some(body)
            }
            Err(e) => {
                loge!("fetch failed: {url}: {e}");
                None
            }
        }
    }
}
