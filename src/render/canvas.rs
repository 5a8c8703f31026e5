//! Canvas allocation and masked tile pasting shared by the renderers.

use image::{RgbImage, RgbaImage};

use crate::error::{MgmError, Result};
use crate::types::{Colour, DecodedMap};

/// Largest canvas allocation in bytes (1 GiB of RGB pixels).
pub const MAX_CANVAS_BYTES: u64 = 1 << 30;

/// Allocate a `columns * tile` by `rows * tile` canvas filled with `background`.
///
/// Fails when either side overflows `u32` or the pixel buffer would exceed
/// [`MAX_CANVAS_BYTES`].
pub fn blank_canvas(map: &DecodedMap, tile_size: u32, background: Colour) -> Result<RgbImage> {
    let too_large = || MgmError::Render {
        message: format!(
            "Map '{}' ({}x{}) is too large to render at {}px tiles",
            map.title, map.width, map.height, tile_size
        ),
        help: Some("Try a smaller --tile-size".to_string()),
    };

    let width = u32::try_from(map.columns())
        .ok()
        .and_then(|w| w.checked_mul(tile_size))
        .ok_or_else(too_large)?;
    let height = u32::try_from(map.rows())
        .ok()
        .and_then(|h| h.checked_mul(tile_size))
        .ok_or_else(too_large)?;

    let bytes = u64::from(width) * u64::from(height) * 3;
    if bytes > MAX_CANVAS_BYTES {
        return Err(too_large());
    }

    Ok(RgbImage::from_pixel(width, height, background.to_rgb()))
}

/// Paste `tile` onto `canvas` with its top-left corner at `(x, y)`, using the
/// tile's alpha channel as the paste mask. Pixels falling outside the canvas
/// are clipped.
///
/// Returns whether any canvas pixel changed.
pub fn paste_masked(canvas: &mut RgbImage, tile: &RgbaImage, x: u32, y: u32) -> bool {
    let mut changed = false;

    for (tx, ty, src) in tile.enumerate_pixels() {
        let (Some(cx), Some(cy)) = (x.checked_add(tx), y.checked_add(ty)) else {
            continue;
        };
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }

        let [r, g, b, alpha] = src.0;
        if alpha == 0 {
            continue;
        }

        let dest = canvas.get_pixel_mut(cx, cy);
        let blended = [
            blend(r, dest.0[0], alpha),
            blend(g, dest.0[1], alpha),
            blend(b, dest.0[2], alpha),
        ];
        if blended != dest.0 {
            dest.0 = blended;
            changed = true;
        }
    }

    changed
}

/// Move `dst` toward `src` by `alpha / 255`, rounded to nearest.
///
/// The result always lies between `dst` and `src`, so repeated pastes of the
/// same tile settle on a fixed point.
fn blend(src: u8, dst: u8, alpha: u8) -> u8 {
    let dst = i32::from(dst);
    let t = (i32::from(src) - dst) * i32::from(alpha) + 128;
    (dst + (((t >> 8) + t) >> 8)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    use crate::types::StartLocation;

    fn map(width: i32, height: i32) -> DecodedMap {
        let cells = (width.max(0) * height.max(0)) as usize;
        DecodedMap {
            version: 2,
            max_factions: 1,
            width,
            height,
            height_factor: 0,
            water_level: 0,
            title: "canvas".to_string(),
            author: String::new(),
            description: String::new(),
            magic: Some(0),
            cliff_level: Some(0),
            camera_height: Some(0),
            start_locations: vec![StartLocation::new(0, 0)],
            height_map: vec![0.0; cells],
            surface_map: vec![0; cells],
            resource_map: vec![0; cells],
        }
    }

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend(200, 10, 255), 200);
        assert_eq!(blend(10, 200, 255), 10);
        assert_eq!(blend(200, 10, 0), 10);
    }

    #[test]
    fn test_blend_half() {
        assert_eq!(blend(255, 0, 128), 128);
        assert_eq!(blend(0, 255, 128), 127);
    }

    #[test]
    fn test_blank_canvas_size() {
        let canvas = blank_canvas(&map(3, 2), 16, Colour::GREEN).unwrap();
        assert_eq!(canvas.dimensions(), (48, 32));
        assert_eq!(*canvas.get_pixel(47, 31), Rgb([0, 255, 0]));
    }

    #[test]
    fn test_blank_canvas_too_large() {
        let mut huge = map(0, 0);
        huge.width = i32::MAX;
        huge.height = 1;
        assert!(blank_canvas(&huge, 16, Colour::BLACK).is_err());
    }

    #[test]
    fn test_blank_canvas_over_byte_limit() {
        let mut big = map(0, 0);
        big.width = 4096;
        big.height = 4096;
        let err = blank_canvas(&big, 16, Colour::BLACK).unwrap_err();
        assert!(matches!(err, MgmError::Render { .. }));
    }

    #[test]
    fn test_paste_masked_respects_alpha() {
        let mut canvas = RgbImage::from_pixel(2, 1, Rgb([0, 0, 0]));
        let mut tile = RgbaImage::new(2, 1);
        tile.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        tile.put_pixel(1, 0, Rgba([255, 255, 255, 0]));

        assert!(paste_masked(&mut canvas, &tile, 0, 0));
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*canvas.get_pixel(1, 0), Rgb([0, 0, 0]));

        // Pasting again changes nothing.
        assert!(!paste_masked(&mut canvas, &tile, 0, 0));
    }

    #[test]
    fn test_paste_masked_clips() {
        let mut canvas = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        let tile = RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]));

        paste_masked(&mut canvas, &tile, 1, 1);
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(1, 1), Rgb([9, 9, 9]));
    }
}
