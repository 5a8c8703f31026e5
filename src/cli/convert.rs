//! Convert command implementation.
//!
//! Decodes every map in an input directory and writes, per map, a folder
//! holding the JSON document and the splat and height PNGs. A map that
//! fails is reported and skipped; the command fails at the end if any did.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::decoder::decode;
use crate::discovery::{discover, Config};
use crate::error::{MgmError, Result};
use crate::export::{json_file_name, write_json};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_png, HeightRenderer, SplatRenderer, TileSet};

/// Convert a directory of maps to JSON and PNG previews
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Directory containing .mgm/.gbm map files
    pub input: PathBuf,

    /// Directory to create one folder per map in
    pub output: PathBuf,

    /// Directory with 1.png, 2.png, 3.png and height.png tile bitmaps
    #[arg(long)]
    pub tiles: Option<PathBuf>,

    /// Edge length of the built-in tiles in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub tile_size: Option<u32>,

    /// Config file (default: <INPUT>/mgmconv.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Files written for one converted map.
#[derive(Debug, Clone)]
pub struct ConvertedMap {
    /// Per-map output folder.
    pub dir: PathBuf,
    pub json: PathBuf,
    /// Image paths; `None` when the map has no cells to draw.
    pub images: Option<(PathBuf, PathBuf)>,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let discovery = discover(&args.input, args.config.as_deref())?;
    if let Some(path) = &discovery.config_path {
        printer.info("Config", &display_path(path));
    }

    let config = apply_overrides(discovery.config, &args);
    let tiles = load_tiles(&config)?;

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| MgmError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    for path in &discovery.scan.skipped {
        printer.warning("Skipping", &display_path(path));
    }

    let total = discovery.scan.total();
    let names = output_dir_names(&discovery.scan.maps);
    let mut used = HashSet::new();
    let mut failed = 0;

    for (i, (path, name)) in discovery.scan.maps.iter().zip(&names).enumerate() {
        printer.progress("Converting", name, i + 1, total);

        let result = if used.insert(name.as_str()) {
            convert_file(path, &args.output.join(name), &config, &tiles)
        } else {
            Err(MgmError::Export {
                message: format!("output folder '{}' is already used by another map", name),
                help: Some("Rename one of the input files".to_string()),
            })
        };

        match result {
            Ok(converted) => {
                if converted.images.is_none() {
                    printer.warning(
                        "Empty",
                        &format!("{} has no cells, images skipped", display_path(path)),
                    );
                }
            }
            Err(e) => {
                failed += 1;
                printer.error("Failed", &format!("{}: {}", display_path(path), e));
            }
        }
    }

    if failed > 0 {
        return Err(MgmError::Batch { failed, total });
    }

    printer.status(
        "Finished",
        &format!("{} to {}", plural(total, "map", "maps"), display_path(&args.output)),
    );

    Ok(())
}

/// Decode one map file and write its outputs into `dir`.
pub fn convert_file(
    path: &Path,
    dir: &Path,
    config: &Config,
    tiles: &TileSet,
) -> Result<ConvertedMap> {
    let bytes = fs::read(path).map_err(|e| MgmError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read map: {}", e),
    })?;
    let map = decode(&bytes)?;

    let stem = map_stem(path);
    let dir = dir.to_path_buf();
    fs::create_dir_all(&dir).map_err(|e| MgmError::Io {
        path: dir.clone(),
        message: format!("Failed to create map directory: {}", e),
    })?;

    let images = if map.cell_count() == 0 {
        None
    } else {
        let splat = SplatRenderer::new(tiles)
            .with_background(config.splat_background)
            .render(&map)?;
        let height = HeightRenderer::new(tiles)
            .with_background(config.height_background)
            .render(&map)?;

        let splat_path = dir.join(&config.splat_image);
        let height_path = dir.join(&config.height_image);
        write_png(&splat, &splat_path)?;
        write_png(&height, &height_path)?;
        Some((splat_path, height_path))
    };

    let json = dir.join(json_file_name(&map, &stem));
    write_json(&map, &json, config.pretty)?;

    Ok(ConvertedMap { dir, json, images })
}

/// Load the configured tile directory, or generate built-in tiles.
pub fn load_tiles(config: &Config) -> Result<TileSet> {
    match &config.tiles {
        Some(dir) => TileSet::load(dir),
        None => TileSet::builtin(config.tile_size),
    }
}

fn apply_overrides(mut config: Config, args: &ConvertArgs) -> Config {
    if let Some(tiles) = &args.tiles {
        config.tiles = Some(tiles.clone());
    }
    if let Some(size) = args.tile_size {
        config.tile_size = size;
    }
    if args.pretty {
        config.pretty = true;
    }
    config
}

/// Output folder name per map: the file stem, or the whole file name when
/// several inputs share a stem (`a.mgm` and `a.gbm`).
pub fn output_dir_names(maps: &[PathBuf]) -> Vec<String> {
    let mut stems: HashMap<String, usize> = HashMap::new();
    for path in maps {
        *stems.entry(map_stem(path)).or_insert(0) += 1;
    }

    maps.iter()
        .map(|path| {
            let stem = map_stem(path);
            if stems.get(&stem).copied().unwrap_or(0) > 1 {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .map(str::to_string)
                    .unwrap_or(stem)
            } else {
                stem
            }
        })
        .collect()
}

/// The file name up to its extension.
fn map_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("map")
        .to_string()
}
