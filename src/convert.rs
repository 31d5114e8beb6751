// GEDCOM -> JSON conversion pipeline

use crate::config::Config;
use crate::error::{Error, Result};
use crate::graph::{build_graph, BuildStats, Graph};
use crate::output::write_json_file;
use crate::parser::decode;
use std::path::Path;

/// A finished conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    pub graph: Graph,
    pub stats: BuildStats,
}

/// Runs decode, scan, link and prune with one configuration
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Convert already decoded GEDCOM text
    pub fn convert_str(&self, text: &str) -> Result<Conversion> {
        let (graph, stats) = build_graph(text, &self.config)?;
        Ok(Conversion { graph, stats })
    }

    /// Decode raw bytes according to the parse mode, then convert
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<Conversion> {
        let text = decode(bytes, self.config.parse.mode)?;
        self.convert_str(&text)
    }

    /// Read a GEDCOM file and write the graph JSON to `output`
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<BuildStats> {
        if !input.exists() {
            return Err(Error::PathNotFound(input.to_path_buf()));
        }

        let bytes = std::fs::read(input).map_err(|e| {
            Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", input.display(), e)))
        })?;
        log::debug!("read {} bytes from {}", bytes.len(), input.display());

        let conversion = self.convert_bytes(&bytes)?;
        write_json_file(&conversion.graph, output, self.config.output.indent)?;
        Ok(conversion.stats)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
