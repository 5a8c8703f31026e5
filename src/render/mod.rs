//! Rendering module for mgmconv.
//!
//! This module turns decoded maps into PNG previews: a splat image of the
//! surface grid and a stacked height image. Tile bitmaps are passed in as a
//! [`TileSet`].

mod canvas;
mod height;
mod png;
mod splat;
mod tiles;

pub use canvas::{blank_canvas, paste_masked, MAX_CANVAS_BYTES};
pub use height::{stack_count, HeightRenderer};
pub use png::write_png;
pub use splat::SplatRenderer;
pub use tiles::{TileSet, HEIGHT_TILE_FILE, SURFACE_CODES, SURFACE_TILE_FILES};
