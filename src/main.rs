use clap::Parser;
use miette::Result;
use mgmconv::cli::{Cli, Commands};
use mgmconv::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Convert(args) => mgmconv::cli::convert::run(args, &printer)?,
        Commands::Json(args) => mgmconv::cli::json::run(args, &printer)?,
        Commands::Inspect(args) => mgmconv::cli::inspect::run(args)?,
        Commands::Completions(args) => mgmconv::cli::completions::run(args)?,
    }

    Ok(())
}
