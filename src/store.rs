// src/store.rs
// On-disk page cache: one file per fetched URL under .store/pages/.
// Serving byte-identical bodies on reruns keeps reports reproducible.

use std::{fs, io, path::PathBuf};

use url::Url;

use crate::config::consts::{PAGES_SUBDIR, STORE_DIR};
use crate::core::sanitize::sanitize_cache_filename;

fn pages_dir() -> PathBuf {
    PathBuf::from(STORE_DIR).join(PAGES_SUBDIR)
}

fn page_path(url: &Url) -> PathBuf {
    pages_dir().join(sanitize_cache_filename(url.as_str()))
}

pub fn load_page(url: &Url) -> Option<String> {
    fs::read_to_string(page_path(url)).ok()
}

pub fn save_page(url: &Url, body: &str) -> io::Result<()> {
    let p = page_path(url);
    if let Some(parent) = p.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(p, body)
}

pub fn clear_pages() -> io::Result<()> {
    let dir = pages_dir();
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    Ok(())
}
