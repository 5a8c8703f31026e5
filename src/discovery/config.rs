//! Conversion config (mgmconv.yaml) parsing.
//!
//! The config controls which files count as maps, the tile assets used for
//! the PNG previews and the names of the generated files. Every key is
//! optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MgmError, Result};
use crate::types::Colour;

/// Conversion settings loaded from mgmconv.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File extensions treated as maps (without the dot, case-insensitive).
    pub extensions: Vec<String>,

    /// Edge length of a tile bitmap in pixels.
    pub tile_size: u32,

    /// Directory holding `1.png`, `2.png`, `3.png` and `height.png`.
    /// Built-in tiles are generated when unset.
    pub tiles: Option<PathBuf>,

    /// Background of the splat image.
    pub splat_background: Colour,

    /// Background of the height image.
    pub height_background: Colour,

    /// File name of the splat image inside each map directory.
    pub splat_image: String,

    /// File name of the height image inside each map directory.
    pub height_image: String,

    /// Indent JSON output.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: vec!["mgm".to_string(), "gbm".to_string()],
            tile_size: 16,
            tiles: None,
            splat_background: Colour::GREEN,
            height_background: Colour::BLACK,
            splat_image: "splatmap.png".to_string(),
            height_image: "heightmap.png".to_string(),
            pretty: false,
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// A relative `tiles` path is resolved against the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MgmError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;
        if let Some(dir) = path.parent() {
            config.tiles = config
                .tiles
                .take()
                .map(|tiles| if tiles.is_relative() { dir.join(tiles) } else { tiles });
        }
        Ok(config)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| MgmError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check mgmconv.yaml syntax".to_string()),
        })?;

        if config.tile_size == 0 {
            return Err(MgmError::Parse {
                message: "Invalid config: tile_size must be at least 1".to_string(),
                help: None,
            });
        }

        Ok(config)
    }

    /// Check whether a path has one of the configured map extensions.
    pub fn is_map_file(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };

        self.extensions
            .iter()
            .any(|known| known.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("tile_size: 8").unwrap();

        assert_eq!(config.tile_size, 8);
        assert_eq!(config.extensions, vec!["mgm", "gbm"]);
        assert!(config.tiles.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
extensions:
  - mgm
tile_size: 32
tiles: assets/tiles
splat_background: "#336633"
height_background: "#000"
splat_image: surface.png
height_image: elevation.png
pretty: true
"##;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.extensions, vec!["mgm"]);
        assert_eq!(config.tile_size, 32);
        assert_eq!(config.tiles, Some(PathBuf::from("assets/tiles")));
        assert_eq!(config.splat_background, Colour::rgb(0x33, 0x66, 0x33));
        assert_eq!(config.height_background, Colour::BLACK);
        assert_eq!(config.splat_image, "surface.png");
        assert_eq!(config.height_image, "elevation.png");
        assert!(config.pretty);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.tile_size, 16);
        assert_eq!(config.splat_background, Colour::GREEN);
        assert_eq!(config.height_background, Colour::BLACK);
        assert_eq!(config.splat_image, "splatmap.png");
        assert_eq!(config.height_image, "heightmap.png");
        assert!(!config.pretty);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_bad_colour() {
        assert!(Config::parse("splat_background: not-a-colour").is_err());
    }

    #[test]
    fn test_parse_zero_tile_size() {
        assert!(Config::parse("tile_size: 0").is_err());
    }

    #[test]
    fn test_is_map_file() {
        let config = Config::default();

        assert!(config.is_map_file(Path::new("maps/conflict.gbm")));
        assert!(config.is_map_file(Path::new("6player.MGM")));
        assert!(!config.is_map_file(Path::new("readme.txt")));
        assert!(!config.is_map_file(Path::new("mgm")));
    }

    #[test]
    fn test_is_map_file_with_dotted_extension() {
        let config = Config {
            extensions: vec![".map".to_string()],
            ..Default::default()
        };
        assert!(config.is_map_file(Path::new("a.map")));
        assert!(!config.is_map_file(Path::new("a.mgm")));
    }

    #[test]
    fn test_load_resolves_relative_tiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mgmconv.yaml");
        std::fs::write(&path, "tiles: tiles").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.tiles, Some(dir.path().join("tiles")));
    }
}
