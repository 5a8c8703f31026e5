//! Binary map decoder.
//!
//! Reads a complete `.mgm`/`.gbm` buffer into a [`DecodedMap`]. The layout is
//! a fixed 536-byte header followed by four sections whose sizes come from
//! the header:
//!
//! | Section | Size |
//! |---|---|
//! | start locations | `maxFactions * 8` (pairs of LE `i32`) |
//! | height map | `width * height * 4` (LE `f32`, row-major) |
//! | surface map | `width * height` (unsigned bytes) |
//! | resource map | `width * height` (unsigned bytes) |
//!
//! Decoding is strict: a short buffer fails with [`FormatError::Truncated`]
//! naming the section, and no partial map is returned. Bytes left over after
//! the resource map are ignored.
//!
//! # Example
//!
//! ```ignore
//! let bytes = std::fs::read("maps/conflict.gbm")?;
//! let map = mgmconv::decode(&bytes)?;
//! println!("{} is {}x{}", map.title, map.width, map.height);
//! ```

mod error;
mod header;
mod reader;

pub use error::{FormatError, Section};
pub use header::{Header, HeaderLayout, HeaderTrailer, HEADER_LEN, NAME_LEN, RESERVED_LEN};
pub use reader::MapReader;

use crate::types::{DecodedMap, StartLocation};

use reader::{f32s_le, i32s_le};

/// Decode a complete map buffer.
pub fn decode(buffer: &[u8]) -> Result<DecodedMap, FormatError> {
    decode_with_trailing(buffer).map(|(map, _)| map)
}

/// Decode a complete map buffer, also returning how many bytes were left
/// unread after the resource map.
pub fn decode_with_trailing(buffer: &[u8]) -> Result<(DecodedMap, usize), FormatError> {
    let mut reader = MapReader::new(buffer);
    let header = Header::read(&mut reader)?;

    let factions = non_negative("maxFactions", header.max_factions)?;
    let width = non_negative("width", header.width)?;
    let height = non_negative("height", header.height)?;
    let cells = width * height;

    let start_bytes = reader.take(Section::StartLocations, factions * 8)?;
    let coords: Vec<i32> = i32s_le(start_bytes).collect();
    let start_locations = coords
        .chunks_exact(2)
        .map(|pair| StartLocation::new(pair[0], pair[1]))
        .collect();

    let height_bytes = reader.take(Section::HeightMap, cells * 4)?;
    let height_map = f32s_le(height_bytes).collect();

    let surface_map = reader.take(Section::SurfaceMap, cells)?.to_vec();
    let resource_map = reader.take(Section::ResourceMap, cells)?.to_vec();

    let trailer = header.trailer;
    let map = DecodedMap {
        version: header.version,
        max_factions: header.max_factions,
        width: header.width,
        height: header.height,
        height_factor: header.height_factor,
        water_level: header.water_level,
        title: header.title,
        author: header.author,
        description: header.description,
        magic: trailer.map(|t| t.magic),
        cliff_level: trailer.map(|t| t.cliff_level),
        camera_height: trailer.map(|t| t.camera_height),
        start_locations,
        height_map,
        surface_map,
        resource_map,
    };

    Ok((map, reader.remaining()))
}

/// Widen a header count to `u64`; `i32::MAX * i32::MAX * 4` still fits.
fn non_negative(field: &'static str, value: i32) -> Result<u64, FormatError> {
    u64::try_from(value).map_err(|_| FormatError::NegativeCount { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal version 2 encoder for decoder tests.
    fn encode(width: i32, height: i32, factions: &[(i32, i32)], grid_byte: u8) -> Vec<u8> {
        let cells = (width * height) as usize;
        let mut bytes = Vec::new();
        for value in [2, factions.len() as i32, width, height, 1, 0] {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes.resize(HEADER_LEN, 0);
        for (x, y) in factions {
            bytes.extend_from_slice(&x.to_le_bytes());
            bytes.extend_from_slice(&y.to_le_bytes());
        }
        for i in 0..cells {
            bytes.extend_from_slice(&(i as f32 * 0.5).to_le_bytes());
        }
        bytes.extend(std::iter::repeat(grid_byte).take(cells));
        bytes.extend(std::iter::repeat(grid_byte).take(cells));
        bytes
    }

    #[test]
    fn test_decode_sections() {
        let bytes = encode(3, 2, &[(1, 2), (5, -6)], 1);
        let map = decode(&bytes).unwrap();

        assert_eq!(map.version, 2);
        assert_eq!(map.width, 3);
        assert_eq!(map.height, 2);
        assert_eq!(
            map.start_locations,
            vec![StartLocation::new(1, 2), StartLocation::new(5, -6)]
        );
        assert_eq!(map.height_map, vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5]);
        assert_eq!(map.surface_map, vec![1; 6]);
        assert_eq!(map.resource_map, vec![1; 6]);
        assert_eq!(map.magic, Some(0));
    }

    #[test]
    fn test_grid_bytes_are_unsigned() {
        let bytes = encode(2, 1, &[], 0x80);
        let map = decode(&bytes).unwrap();
        assert_eq!(map.surface_map, vec![128, 128]);
        assert_eq!(map.resource_map, vec![128, 128]);

        let bytes = encode(1, 1, &[], 0xFF);
        assert_eq!(decode(&bytes).unwrap().surface_map, vec![255]);
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let mut bytes = encode(2, 2, &[(0, 0)], 0);
        bytes.extend_from_slice(&[9, 9, 9]);

        let (map, trailing) = decode_with_trailing(&bytes).unwrap();
        assert_eq!(trailing, 3);
        assert_eq!(map.resource_map, vec![0; 4]);
    }

    #[test]
    fn test_truncated_resource_map() {
        let bytes = encode(2, 2, &[], 0);
        let err = decode(&bytes[..bytes.len() - 1]).unwrap_err();
        assert_eq!(err.section(), Some(Section::ResourceMap));
    }

    #[test]
    fn test_truncated_start_locations() {
        let bytes = encode(2, 2, &[(1, 1), (2, 2)], 0);
        let err = decode(&bytes[..HEADER_LEN + 12]).unwrap_err();
        assert_eq!(err.section(), Some(Section::StartLocations));
    }

    #[test]
    fn test_negative_width() {
        let mut bytes = encode(2, 2, &[], 0);
        bytes[8..12].copy_from_slice(&(-2i32).to_le_bytes());
        assert!(matches!(
            decode(&bytes),
            Err(FormatError::NegativeCount { field: "width", value: -2 })
        ));
    }

    #[test]
    fn test_huge_dimensions_fail_as_truncated() {
        let mut bytes = encode(1, 1, &[], 0);
        bytes[8..12].copy_from_slice(&i32::MAX.to_le_bytes());
        bytes[12..16].copy_from_slice(&i32::MAX.to_le_bytes());
        let err = decode(&bytes).unwrap_err();
        assert_eq!(err.section(), Some(Section::HeightMap));
    }

    #[test]
    fn test_empty_buffer() {
        let err = decode(&[]).unwrap_err();
        assert_eq!(err.section(), Some(Section::Header));
    }

    #[test]
    fn test_zero_sized_map() {
        let bytes = encode(0, 5, &[], 0);
        let map = decode(&bytes).unwrap();
        assert!(map.height_map.is_empty());
        assert!(map.surface_map.is_empty());
        assert_eq!(map.height, 5);
    }
}
