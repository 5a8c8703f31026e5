//! Input directory scanner.
//!
//! Lists the files directly inside the input directory and splits them into
//! map files (by configured extension) and everything else.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{MgmError, Result};

use super::config::Config;

/// Result of scanning a directory for maps.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Map files, sorted by file name.
    pub maps: Vec<PathBuf>,
    /// Files without a map extension.
    pub skipped: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of maps found.
    pub fn total(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

/// Scan a directory (non-recursively) for map files.
///
/// Fails if the directory or any entry in it cannot be read.
pub fn scan_directory(root: &Path, config: &Config) -> Result<ScanResult> {
    let mut result = ScanResult::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| MgmError::Io {
            path: e.path().unwrap_or(root).to_path_buf(),
            message: format!("Failed to read input directory: {}", e),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        if config.is_map_file(&path) {
            result.maps.push(path);
        } else {
            result.skipped.push(path);
        }
    }

    Ok(result)
}
