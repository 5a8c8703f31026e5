//! Fixed 536-byte map header.
//!
//! Both versions share the first six integers and the title/author fields.
//! Version 1 follows them with a 256-byte description; version 2 uses a
//! 128-byte description followed by `magic`, `cliffLevel`, `cameraHeight`
//! and a reserved trailer.

use super::error::{FormatError, Section};
use super::reader::MapReader;

/// Size of the header for every supported version.
pub const HEADER_LEN: usize = 536;

/// Width of the title and author fields.
pub const NAME_LEN: usize = 128;

/// Width of the reserved block closing a version 2 header.
pub const RESERVED_LEN: usize = 116;

/// The header layouts this decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    V1,
    V2,
}

impl HeaderLayout {
    pub fn from_version(version: i32) -> Result<Self, FormatError> {
        match version {
            1 => Ok(HeaderLayout::V1),
            2 => Ok(HeaderLayout::V2),
            _ => Err(FormatError::UnsupportedVersion { version }),
        }
    }

    pub fn description_len(self) -> usize {
        match self {
            HeaderLayout::V1 => 256,
            HeaderLayout::V2 => 128,
        }
    }
}

/// Version 2 only fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderTrailer {
    pub magic: i32,
    pub cliff_level: i32,
    pub camera_height: i32,
}

/// Decoded header fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: i32,
    pub max_factions: i32,
    pub width: i32,
    pub height: i32,
    pub height_factor: i32,
    pub water_level: i32,
    pub title: String,
    pub author: String,
    pub description: String,
    pub trailer: Option<HeaderTrailer>,
}

impl Header {
    /// Read the header from the start of the buffer.
    ///
    /// The version tag is checked before the header length so a short buffer
    /// with an unknown tag reports the version, not a truncation.
    pub fn read(reader: &mut MapReader<'_>) -> Result<Self, FormatError> {
        let start = reader.position();
        let version = reader.read_i32_le(Section::Header)?;
        let layout = HeaderLayout::from_version(version)?;

        let base = reader.position();
        let block = reader.take(Section::Header, (HEADER_LEN - (base - start)) as u64)?;
        let mut fields = MapReader::new(block);

        let max_factions = fields.read_i32_le(Section::Header)?;
        let width = fields.read_i32_le(Section::Header)?;
        let height = fields.read_i32_le(Section::Header)?;
        let height_factor = fields.read_i32_le(Section::Header)?;
        let water_level = fields.read_i32_le(Section::Header)?;

        let title = read_text(&mut fields, base, "title", NAME_LEN)?;
        let author = read_text(&mut fields, base, "author", NAME_LEN)?;
        let description = read_text(&mut fields, base, "description", layout.description_len())?;

        let trailer = match layout {
            HeaderLayout::V1 => None,
            HeaderLayout::V2 => {
                let trailer = HeaderTrailer {
                    magic: fields.read_i32_le(Section::Header)?,
                    cliff_level: fields.read_i32_le(Section::Header)?,
                    camera_height: fields.read_i32_le(Section::Header)?,
                };
                fields.take(Section::Header, RESERVED_LEN as u64)?;
                Some(trailer)
            }
        };

        Ok(Self {
            version,
            max_factions,
            width,
            height,
            height_factor,
            water_level,
            title,
            author,
            description,
            trailer,
        })
    }
}

/// Decode a fixed-width, NUL-padded UTF-8 field.
fn read_text(
    fields: &mut MapReader<'_>,
    base: usize,
    field: &'static str,
    len: usize,
) -> Result<String, FormatError> {
    let offset = base + fields.position();
    let bytes = fields.take(Section::Header, len as u64)?;
    let text = std::str::from_utf8(bytes).map_err(|source| FormatError::TextDecoding {
        field,
        offset,
        source,
    })?;
    Ok(text.trim_end_matches('\0').to_string())
}
