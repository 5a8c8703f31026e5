//! Test-only map encoder. Production code never writes maps.

#![allow(dead_code)]

use mgmconv::decoder::{HEADER_LEN, NAME_LEN, RESERVED_LEN};
use mgmconv::{DecodedMap, StartLocation};

/// Write `text` into a zero-padded field of `len` bytes.
fn push_text(out: &mut Vec<u8>, text: &str, len: usize) {
    let mut field = text.as_bytes().to_vec();
    assert!(field.len() <= len, "text too long for field");
    field.resize(len, 0);
    out.extend_from_slice(&field);
}

/// Encode a map using the header layout of `map.version`.
pub fn encode(map: &DecodedMap) -> Vec<u8> {
    let mut out = Vec::new();
    for value in [
        map.version,
        map.max_factions,
        map.width,
        map.height,
        map.height_factor,
        map.water_level,
    ] {
        out.extend_from_slice(&value.to_le_bytes());
    }
    push_text(&mut out, &map.title, NAME_LEN);
    push_text(&mut out, &map.author, NAME_LEN);

    if map.version == 1 {
        push_text(&mut out, &map.description, 256);
    } else {
        push_text(&mut out, &map.description, 128);
        for value in [
            map.magic.unwrap_or(0),
            map.cliff_level.unwrap_or(0),
            map.camera_height.unwrap_or(0),
        ] {
            out.extend_from_slice(&value.to_le_bytes());
        }
        out.extend(std::iter::repeat(0u8).take(RESERVED_LEN));
    }
    assert_eq!(out.len(), HEADER_LEN);

    for start in &map.start_locations {
        out.extend_from_slice(&start.x().to_le_bytes());
        out.extend_from_slice(&start.y().to_le_bytes());
    }
    for height in &map.height_map {
        out.extend_from_slice(&height.to_le_bytes());
    }
    out.extend_from_slice(&map.surface_map);
    out.extend_from_slice(&map.resource_map);
    out
}

/// A version 2 map with all-zero grids.
pub fn blank_map(width: i32, height: i32, starts: &[(i32, i32)]) -> DecodedMap {
    let cells = (width * height) as usize;
    DecodedMap {
        version: 2,
        max_factions: starts.len() as i32,
        width,
        height,
        height_factor: 0,
        water_level: 0,
        title: String::new(),
        author: String::new(),
        description: String::new(),
        magic: Some(0),
        cliff_level: Some(0),
        camera_height: Some(0),
        start_locations: starts.iter().map(|&(x, y)| StartLocation::new(x, y)).collect(),
        height_map: vec![0.0; cells],
        surface_map: vec![0; cells],
        resource_map: vec![0; cells],
    }
}

/// A version 2 map with varied values in every field.
pub fn varied_map() -> DecodedMap {
    let (width, height) = (5, 3);
    let cells = (width * height) as usize;
    DecodedMap {
        version: 2,
        max_factions: 4,
        width,
        height,
        height_factor: 3,
        water_level: 4,
        title: "Twin Rivers".to_string(),
        author: "Jörg".to_string(),
        description: "Two rivers split the valley.".to_string(),
        magic: Some(0x0102_0304),
        cliff_level: Some(20),
        camera_height: Some(-5),
        start_locations: vec![
            StartLocation::new(1, 1),
            StartLocation::new(3, 1),
            StartLocation::new(1, 2),
            StartLocation::new(-1, 7),
        ],
        height_map: (0..cells).map(|i| i as f32 * 0.75 - 2.0).collect(),
        surface_map: (0..cells).map(|i| (i * 37 % 256) as u8).collect(),
        resource_map: (0..cells).map(|i| (i % 4) as u8).collect(),
    }
}
