//! JSON command implementation.
//!
//! Converts a single map to `<title>.json`, or prints it to stdout.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::decoder::decode;
use crate::error::{MgmError, Result};
use crate::export::{json_file_name, to_json, write_json};
use crate::output::{display_path, Printer};

/// Convert a single map to JSON
#[derive(Args, Debug)]
pub struct JsonArgs {
    /// Map file to convert
    pub file: PathBuf,

    /// Output directory
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,

    /// Print the JSON document to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: JsonArgs, printer: &Printer) -> Result<()> {
    let bytes = fs::read(&args.file).map_err(|e| MgmError::Io {
        path: args.file.clone(),
        message: format!("Failed to read map: {}", e),
    })?;
    let map = decode(&bytes)?;

    if args.stdout {
        println!("{}", to_json(&map, args.pretty)?);
        return Ok(());
    }

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| MgmError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let stem = args
        .file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("map");
    let path = args.output.join(json_file_name(&map, stem));
    write_json(&map, &path, args.pretty)?;

    printer.status("Wrote", &display_path(&path));
    Ok(())
}
