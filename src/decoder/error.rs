//! Structural errors raised while decoding a map buffer.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// The part of a map file being read when decoding failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    StartLocations,
    HeightMap,
    SurfaceMap,
    ResourceMap,
}

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::StartLocations => "start locations",
            Section::HeightMap => "height map",
            Section::SurfaceMap => "surface map",
            Section::ResourceMap => "resource map",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoding failure. No partial map is ever returned alongside one.
#[derive(Error, Diagnostic, Debug)]
pub enum FormatError {
    #[error("unsupported version: {version}")]
    #[diagnostic(
        code(mgm::format::version),
        help("only version 1 and version 2 maps are understood")
    )]
    UnsupportedVersion { version: i32 },

    #[error("truncated map data: {section} at offset {offset} needs {needed} byte(s), {available} available")]
    #[diagnostic(code(mgm::format::truncated))]
    Truncated {
        section: Section,
        offset: usize,
        needed: u64,
        available: usize,
    },

    #[error("invalid UTF-8 in {field} field at offset {offset}")]
    #[diagnostic(code(mgm::format::text))]
    TextDecoding {
        field: &'static str,
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("negative {field} in header: {value}")]
    #[diagnostic(code(mgm::format::count))]
    NegativeCount { field: &'static str, value: i32 },
}

impl FormatError {
    /// The section that underflowed, for truncation errors.
    pub fn section(&self) -> Option<Section> {
        match self {
            FormatError::Truncated { section, .. } => Some(*section),
            _ => None,
        }
    }
}
