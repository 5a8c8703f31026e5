//! mgmconv - terrain map converter
//!
//! A library for decoding binary `.mgm`/`.gbm` terrain maps (format versions
//! 1 and 2) and exporting them as JSON documents and PNG previews.

pub mod cli;
pub mod decoder;
pub mod discovery;
pub mod error;
pub mod export;
pub mod output;
pub mod render;
pub mod types;

pub use decoder::{decode, decode_with_trailing, FormatError, Section};
pub use discovery::{discover, Config, DiscoveryResult, ScanResult};
pub use error::{MgmError, Result};
pub use export::{json_file_name, to_json, write_json};
pub use render::{write_png, HeightRenderer, SplatRenderer, TileSet};
pub use types::{Colour, DecodedMap, StartLocation};
