//! Splat map renderer.
//!
//! Draws one tile per cell for the recognised surface codes on top of a flat
//! background, then turns the image 180° to match the in-game orientation.

use image::imageops;
use image::RgbImage;

use crate::error::Result;
use crate::types::{Colour, DecodedMap};

use super::canvas::{blank_canvas, paste_masked};
use super::tiles::TileSet;

/// Renders a map's surface grid using a tile set.
pub struct SplatRenderer<'a> {
    tiles: &'a TileSet,
    background: Colour,
}

impl<'a> SplatRenderer<'a> {
    pub fn new(tiles: &'a TileSet) -> Self {
        Self {
            tiles,
            background: Colour::GREEN,
        }
    }

    pub fn with_background(mut self, background: Colour) -> Self {
        self.background = background;
        self
    }

    /// Render the final, rotated splat image.
    pub fn render(&self, map: &DecodedMap) -> Result<RgbImage> {
        Ok(imageops::rotate180(&self.compose(map)?))
    }

    /// Composite the tiles without the final rotation. Cell `(x, y)` covers
    /// pixels starting at `(x * size, y * size)`.
    pub fn compose(&self, map: &DecodedMap) -> Result<RgbImage> {
        let size = self.tiles.size();
        let mut canvas = blank_canvas(map, size, self.background)?;

        for (x, y, index) in map.iter_cells() {
            let Some(&code) = map.surface_map.get(index) else {
                break;
            };
            if let Some(tile) = self.tiles.surface(code) {
                paste_masked(&mut canvas, tile, x as u32 * size, y as u32 * size);
            }
        }

        Ok(canvas)
    }
}
