// src/config/options.rs
use std::path::PathBuf;

use crate::csv::Delim;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Pep,
    LatestVersions,
    WhatsNew,
}

#[derive(Clone, Debug)]
pub struct RunOptions {
    pub mode: Mode,              // which crawl to run
    pub out: Option<PathBuf>,    // file output; stdout table when None
    pub format: Delim,           // file format for --out
    pub clear_cache: bool,       // drop cached pages before crawling
}

impl RunOptions {
    pub fn new() -> Self {
        Self {
            mode: Mode::Pep,
            out: None,
            format: Delim::Csv,
            clear_cache: false,
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new()
    }
}
