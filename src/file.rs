// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::csv::{Delim, to_export_string};
use crate::params::{DEFAULT_OUT_DIR, DEFAULT_ROWS_STEM};

pub fn ensure_directory(p: &Path) -> io::Result<()> {
    if !p.exists() {
        fs::create_dir_all(p)?;
    }
    Ok(())
}

/// Default crawl output path, extension tracking the delimiter:
/// `out/rows.csv` or `out/rows.tsv`.
pub fn default_out_path(delim: Delim) -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR).join(format!("{}.{}", DEFAULT_ROWS_STEM, delim.extension()))
}

/// Write one export file; parent directories are created as needed.
/// Returns the path written to.
pub fn write_export_single(
    path: &Path,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    include_headers: bool,
    delim: Delim,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(headers, rows, include_headers, delim);
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}
