//! Map discovery for batch conversion.
//!
//! Finds the map files in an input directory and the conversion config that
//! applies to them, either given explicitly or read from an `mgmconv.yaml`
//! inside the input directory.
//!
//! # Example
//!
//! ```ignore
//! use mgmconv::discovery::discover;
//!
//! let result = discover("./maps", None)?;
//! println!("Found {} maps", result.scan.total());
//! ```

mod config;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use config::Config;
pub use scanner::{scan_directory, ScanResult};

/// The name of the config file looked up in the input directory.
pub const CONFIG_FILENAME: &str = "mgmconv.yaml";

/// Result of discovering maps in an input directory.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The input directory.
    pub root: PathBuf,

    /// The loaded config (default if none was found).
    pub config: Config,

    /// Where the config came from, if a file was read.
    pub config_path: Option<PathBuf>,

    /// Discovered map files.
    pub scan: ScanResult,
}

/// Discover maps in an input directory.
///
/// An explicit `config_path` wins; otherwise `mgmconv.yaml` in `root` is used
/// when present.
pub fn discover(root: impl AsRef<Path>, config_path: Option<&Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let config_path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => Some(root.join(CONFIG_FILENAME)).filter(|p| p.is_file()),
    };

    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let scan = scan_directory(&root, &config)?;

    Ok(DiscoveryResult {
        root,
        config,
        config_path,
        scan,
    })
}
