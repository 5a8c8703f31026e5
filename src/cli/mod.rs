pub mod completions;
pub mod convert;
pub mod inspect;
pub mod json;

use clap::{Parser, Subcommand};

/// mgmconv - terrain map converter
#[derive(Parser, Debug)]
#[command(name = "mgmconv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a directory of maps to JSON and PNG previews
    Convert(convert::ConvertArgs),

    /// Convert a single map to JSON
    Json(json::JsonArgs),

    /// Print a summary of a map file
    Inspect(inspect::InspectArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
