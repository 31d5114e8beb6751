//! CLI module for ged2graph

mod args;

pub use args::Args;

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::convert::Converter;
use crate::error::Result;
use std::path::Path;
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    let config = Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;
    log::debug!(
        "parse mode {:?}, resolution {:?}",
        config.parse.mode,
        config.parse.resolution
    );

    let converter = Converter::new(config);
    let stats = converter.convert_file(&args.gedcom, &args.json)?;

    log::info!("{}", stats.summary());
    println!("JSON written to: {}", args.json.display());
    Ok(())
}
