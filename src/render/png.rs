//! PNG output for rendered map previews.

use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::{MgmError, Result};

/// Write a rendered image to a PNG file.
///
/// Zero-sized images (maps with no cells) cannot be encoded and are reported
/// as render errors.
pub fn write_png(img: &RgbImage, path: &Path) -> Result<()> {
    if img.width() == 0 || img.height() == 0 {
        return Err(MgmError::Render {
            message: format!(
                "Cannot write {}: image is {}x{}",
                path.display(),
                img.width(),
                img.height()
            ),
            help: Some("The map has no cells to draw".to_string()),
        });
    }

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| MgmError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}
