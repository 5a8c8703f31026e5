use miette::Diagnostic;
use thiserror::Error;

use crate::decoder::FormatError;

/// Main error type for mgmconv operations
#[derive(Error, Diagnostic, Debug)]
pub enum MgmError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] FormatError),

    #[error("IO error: {0}")]
    #[diagnostic(code(mgm::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mgm::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(mgm::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(mgm::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Export error: {message}")]
    #[diagnostic(code(mgm::export))]
    Export {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{failed} of {total} map(s) failed to convert")]
    #[diagnostic(code(mgm::batch))]
    Batch { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, MgmError>;
