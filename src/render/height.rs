//! Height stack renderer.
//!
//! Each cell gets the height unit tile pasted `floor(height)` times at the
//! same spot, so a translucent unit tile brightens with elevation.

use image::imageops;
use image::RgbImage;

use crate::error::Result;
use crate::types::{Colour, DecodedMap};

use super::canvas::{blank_canvas, paste_masked};
use super::tiles::TileSet;

/// Renders a map's height grid by stacking the height unit tile.
pub struct HeightRenderer<'a> {
    tiles: &'a TileSet,
    background: Colour,
}

impl<'a> HeightRenderer<'a> {
    pub fn new(tiles: &'a TileSet) -> Self {
        Self {
            tiles,
            background: Colour::BLACK,
        }
    }

    pub fn with_background(mut self, background: Colour) -> Self {
        self.background = background;
        self
    }

    /// Render the final, rotated height image.
    pub fn render(&self, map: &DecodedMap) -> Result<RgbImage> {
        Ok(imageops::rotate180(&self.compose(map)?))
    }

    /// Stack the height tiles without the final rotation.
    pub fn compose(&self, map: &DecodedMap) -> Result<RgbImage> {
        let size = self.tiles.size();
        let unit = self.tiles.height_unit();
        let mut canvas = blank_canvas(map, size, self.background)?;

        for (x, y, index) in map.iter_cells() {
            let Some(&height) = map.height_map.get(index) else {
                break;
            };

            // Once a paste leaves the cell unchanged every later one would too.
            for _ in 0..stack_count(height) {
                if !paste_masked(&mut canvas, unit, x as u32 * size, y as u32 * size) {
                    break;
                }
            }
        }

        Ok(canvas)
    }
}

/// Number of unit tiles stacked for a height value: `floor(height)`, with
/// negative and non-finite heights drawing nothing.
pub fn stack_count(height: f32) -> u64 {
    if height.is_finite() && height >= 1.0 {
        height.floor() as u64
    } else {
        0
    }
}
