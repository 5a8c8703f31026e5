//! Decoded terrain map.
//!
//! A `DecodedMap` is built once by the decoder from a complete `.mgm`/`.gbm`
//! buffer and is only read afterwards by the exporters. Field names serialize
//! in camelCase so the JSON output keeps the names used by the map format's
//! own tooling (`maxFactions`, `heightMap`, ...).

use serde::{Deserialize, Serialize};

/// A player start position in cell coordinates.
///
/// Serializes as a two-element `[x, y]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StartLocation(pub i32, pub i32);

impl StartLocation {
    pub const fn new(x: i32, y: i32) -> Self {
        Self(x, y)
    }

    pub const fn x(self) -> i32 {
        self.0
    }

    pub const fn y(self) -> i32 {
        self.1
    }
}

/// A fully decoded terrain map.
///
/// Grids are row-major: the cell at column `x`, row `y` lives at index
/// `y * width + x`. Every grid holds exactly `width * height` entries and
/// `start_locations` holds exactly `max_factions` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedMap {
    /// Format version (1 or 2).
    pub version: i32,
    pub max_factions: i32,
    pub width: i32,
    pub height: i32,
    pub height_factor: i32,
    pub water_level: i32,

    pub title: String,
    pub author: String,
    pub description: String,

    /// Only present in version 2 maps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magic: Option<i32>,
    /// Only present in version 2 maps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cliff_level: Option<i32>,
    /// Only present in version 2 maps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_height: Option<i32>,

    pub start_locations: Vec<StartLocation>,
    pub height_map: Vec<f32>,
    pub surface_map: Vec<u8>,
    pub resource_map: Vec<u8>,
}

impl DecodedMap {
    /// Width in cells, clamped to zero.
    pub fn columns(&self) -> usize {
        self.width.max(0) as usize
    }

    /// Height in cells, clamped to zero.
    pub fn rows(&self) -> usize {
        self.height.max(0) as usize
    }

    /// Number of cells in each grid.
    pub fn cell_count(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Row-major grid index of a cell, or `None` if out of bounds.
    pub fn cell_index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.columns() && y < self.rows() {
            Some(y * self.columns() + x)
        } else {
            None
        }
    }

    /// Surface code at a cell.
    pub fn surface_at(&self, x: usize, y: usize) -> Option<u8> {
        self.cell_index(x, y)
            .and_then(|i| self.surface_map.get(i).copied())
    }

    /// Resource code at a cell.
    pub fn resource_at(&self, x: usize, y: usize) -> Option<u8> {
        self.cell_index(x, y)
            .and_then(|i| self.resource_map.get(i).copied())
    }

    /// Height value at a cell.
    pub fn height_at(&self, x: usize, y: usize) -> Option<f32> {
        self.cell_index(x, y)
            .and_then(|i| self.height_map.get(i).copied())
    }

    /// Iterate over all cells in row-major order as `(x, y, index)`.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let columns = self.columns();
        (0..self.rows()).flat_map(move |y| (0..columns).map(move |x| (x, y, y * columns + x)))
    }
}
