// src/params.rs
use std::path::PathBuf;

use crate::csv::Delim;

pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_ROWS_STEM: &str = "rows";
pub const DEFAULT_SCHEMA_FILENAME: &str = "schema.json";

/// Sites vary in how they treat obvious bots; present as a desktop browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Default pause between page fetches during a multi-page crawl.
pub const DEFAULT_DELAY_MS: u64 = 2000;

/// One page to process: fetched over HTTP or read from disk (saved
/// fixtures work offline).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

#[derive(Clone)]
pub struct Params {
    pub sources: Vec<Source>,          // pages, processed in order
    pub pick: Option<String>,          // simulated click: first match of this selector
    pub locator: Option<String>,       // print the locator for this selector's first match
    pub crawl: bool,                   // replay the stored schema over the sources
    pub schema_path: PathBuf,          // schema JSON location (pick writes, crawl reads)
    pub out: Option<PathBuf>,          // crawl output file
    pub format: Delim,
    pub include_headers: bool,
    pub delay_ms: u64,                 // inter-request pacing
}

impl Params {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            pick: None,
            locator: None,
            crawl: false,
            schema_path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_SCHEMA_FILENAME),
            out: None,
            format: Delim::Csv,
            include_headers: true,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
