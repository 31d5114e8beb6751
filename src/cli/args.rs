//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Convert a GEDCOM file into a node-link JSON graph
#[derive(Parser, Debug)]
#[command(name = "ged2graph")]
#[command(about = "Convert a GEDCOM file into a node-link JSON graph")]
#[command(version)]
pub struct Args {
    /// Path to the GEDCOM file
    pub gedcom: PathBuf,

    /// Path to the JSON file to write
    pub json: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_paths() {
        let args = Args::try_parse_from(["ged2graph", "family.ged", "out/family.json"]).unwrap();
        assert_eq!(args.gedcom, PathBuf::from("family.ged"));
        assert_eq!(args.json, PathBuf::from("out/family.json"));
    }

    #[test]
    fn test_missing_output_path() {
        assert!(Args::try_parse_from(["ged2graph", "family.ged"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Args::try_parse_from(["ged2graph", "--strict", "a.ged", "b.json"]).is_err());
    }
}
