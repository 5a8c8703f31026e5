//! Inspect command implementation.
//!
//! Prints a map's header, start locations and a summary of its grids.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::decoder::decode_with_trailing;
use crate::error::{MgmError, Result};
use crate::types::DecodedMap;

/// Print a summary of a map file
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Map file to inspect
    pub file: PathBuf,
}

/// Aggregate figures over a map's grids.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSummary {
    /// Lowest and highest finite height, if any.
    pub height_range: Option<(f32, f32)>,
    /// Cell count per surface code.
    pub surface_codes: BTreeMap<u8, usize>,
    /// Cell count per resource code.
    pub resource_codes: BTreeMap<u8, usize>,
}

impl GridSummary {
    pub fn of(map: &DecodedMap) -> Self {
        let height_range = map
            .height_map
            .iter()
            .copied()
            .filter(|h| h.is_finite())
            .fold(None, |range, h| match range {
                None => Some((h, h)),
                Some((lo, hi)) => Some((f32::min(lo, h), f32::max(hi, h))),
            });

        Self {
            height_range,
            surface_codes: count_codes(&map.surface_map),
            resource_codes: count_codes(&map.resource_map),
        }
    }
}

fn count_codes(grid: &[u8]) -> BTreeMap<u8, usize> {
    let mut counts = BTreeMap::new();
    for &code in grid {
        *counts.entry(code).or_insert(0) += 1;
    }
    counts
}

pub fn run(args: InspectArgs) -> Result<()> {
    let bytes = fs::read(&args.file).map_err(|e| MgmError::Io {
        path: args.file.clone(),
        message: format!("Failed to read map: {}", e),
    })?;
    let (map, trailing) = decode_with_trailing(&bytes)?;

    print!("{}", describe(&map, trailing));
    Ok(())
}

/// Render the human-readable summary printed by `inspect`.
pub fn describe(map: &DecodedMap, trailing: usize) -> String {
    let mut out = String::new();
    let summary = GridSummary::of(map);

    let _ = writeln!(out, "title:         {}", map.title);
    let _ = writeln!(out, "author:        {}", map.author);
    let _ = writeln!(out, "description:   {}", map.description);
    let _ = writeln!(out, "version:       {}", map.version);
    let _ = writeln!(out, "size:          {}x{}", map.width, map.height);
    let _ = writeln!(out, "max factions:  {}", map.max_factions);
    let _ = writeln!(out, "height factor: {}", map.height_factor);
    let _ = writeln!(out, "water level:   {}", map.water_level);
    if let Some(magic) = map.magic {
        let _ = writeln!(out, "magic:         {:#010x}", magic);
    }
    if let Some(cliff_level) = map.cliff_level {
        let _ = writeln!(out, "cliff level:   {}", cliff_level);
    }
    if let Some(camera_height) = map.camera_height {
        let _ = writeln!(out, "camera height: {}", camera_height);
    }

    let _ = writeln!(out, "start locations:");
    for (i, start) in map.start_locations.iter().enumerate() {
        let _ = writeln!(out, "  {}: ({}, {})", i + 1, start.x(), start.y());
    }

    match summary.height_range {
        Some((lo, hi)) => {
            let _ = writeln!(out, "heights:       {} to {}", lo, hi);
        }
        None => {
            let _ = writeln!(out, "heights:       none");
        }
    }
    let _ = writeln!(out, "surface codes: {}", format_counts(&summary.surface_codes));
    let _ = writeln!(out, "resources:     {}", format_counts(&summary.resource_codes));

    if trailing > 0 {
        let _ = writeln!(out, "trailing:      {} byte(s) after resource map", trailing);
    }

    out
}

fn format_counts(counts: &BTreeMap<u8, usize>) -> String {
    if counts.is_empty() {
        return "none".to_string();
    }
    counts
        .iter()
        .map(|(code, n)| format!("{}:{}", code, n))
        .collect::<Vec<_>>()
        .join(", ")
}
