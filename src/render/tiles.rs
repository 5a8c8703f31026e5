//! Tile bitmaps used by the renderers.
//!
//! A tile set holds one bitmap per recognised surface code and one "height
//! unit" bitmap that the height renderer stacks per cell. All four are
//! square and share one edge length.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::{MgmError, Result};

/// Surface codes that have a tile bitmap.
pub const SURFACE_CODES: [u8; 3] = [1, 2, 3];

/// File names read by [`TileSet::load`], in surface-code order.
pub const SURFACE_TILE_FILES: [&str; 3] = ["1.png", "2.png", "3.png"];

/// File name of the height unit bitmap read by [`TileSet::load`].
pub const HEIGHT_TILE_FILE: &str = "height.png";

/// Fixed tile bitmaps handed to the renderers.
#[derive(Debug, Clone)]
pub struct TileSet {
    surface: [RgbaImage; 3],
    height_unit: RgbaImage,
    size: u32,
}

impl TileSet {
    /// Build a tile set from bitmaps, checking they are square and equally sized.
    pub fn new(surface: [RgbaImage; 3], height_unit: RgbaImage) -> Result<Self> {
        let size = height_unit.width();
        if size == 0 {
            return Err(MgmError::Render {
                message: "Tile bitmaps must not be empty".to_string(),
                help: None,
            });
        }

        let labels = ["surface tile 1", "surface tile 2", "surface tile 3", "height tile"];
        let tiles = surface.iter().chain(std::iter::once(&height_unit));
        for (label, tile) in labels.iter().zip(tiles) {
            if tile.dimensions() != (size, size) {
                return Err(MgmError::Render {
                    message: format!(
                        "{} is {}x{}, expected {}x{}",
                        label,
                        tile.width(),
                        tile.height(),
                        size,
                        size
                    ),
                    help: Some("All tile bitmaps must be square and the same size".to_string()),
                });
            }
        }

        Ok(Self {
            surface,
            height_unit,
            size,
        })
    }

    /// Load `1.png`, `2.png`, `3.png` and `height.png` from a directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let [one, two, three] = SURFACE_TILE_FILES;
        Self::new(
            [
                load_tile(&dir.join(one))?,
                load_tile(&dir.join(two))?,
                load_tile(&dir.join(three))?,
            ],
            load_tile(&dir.join(HEIGHT_TILE_FILE))?,
        )
    }

    /// Generate flat-colour tiles so maps can be previewed without assets.
    ///
    /// The height unit is a faint white, so stacked cells brighten with
    /// elevation.
    pub fn builtin(size: u32) -> Result<Self> {
        let flat = |colour: [u8; 4]| RgbaImage::from_pixel(size, size, Rgba(colour));
        Self::new(
            [
                flat([34, 139, 34, 255]),
                flat([189, 183, 107, 255]),
                flat([139, 115, 85, 255]),
            ],
            flat([255, 255, 255, 24]),
        )
    }

    /// Edge length of every tile in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Bitmap for a surface code, or `None` when the code has no tile.
    pub fn surface(&self, code: u8) -> Option<&RgbaImage> {
        SURFACE_CODES
            .iter()
            .position(|&c| c == code)
            .map(|i| &self.surface[i])
    }

    pub fn height_unit(&self) -> &RgbaImage {
        &self.height_unit
    }
}

fn load_tile(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| MgmError::Render {
        message: format!("Failed to load tile {}: {}", path.display(), e),
        help: Some(format!(
            "A tile directory needs {}, {}, {} and {}",
            SURFACE_TILE_FILES[0], SURFACE_TILE_FILES[1], SURFACE_TILE_FILES[2], HEIGHT_TILE_FILE
        )),
    })?;
    Ok(img.to_rgba8())
}
