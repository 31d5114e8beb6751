use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the working directory when no config is given
pub const DEFAULT_CONFIG_FILE: &str = "ged2graph.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parse: ParseConfig,
    pub estimate: EstimateConfig,
    pub output: OutputConfig,
}

/// Parsing settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    pub mode: ParseMode,
    pub resolution: LinkResolution,
}

/// Birth year estimation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    pub enabled: bool,
    /// Years subtracted from a child's birth year to guess a parent's
    pub generation_gap: i32,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per indentation level; 0 writes compact JSON
    pub indent: usize,
}

/// How strictly input is decoded and tokenized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Skip undecodable bytes and malformed lines
    #[default]
    Tolerant,
    /// Fail on undecodable bytes and malformed lines
    Strict,
}

/// When HUSB/WIFE/CHIL references are resolved against individuals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LinkResolution {
    /// Only individuals declared earlier in the document can be linked
    #[default]
    DocumentOrder,
    /// Collect every individual first, then resolve families
    Deferred,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            generation_gap: 20,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { indent: 3 }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file if it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            log::debug!("loading config from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.estimate.generation_gap < 1 {
            return Err(Error::config_validation("generation_gap must be at least 1"));
        }

        if self.estimate.generation_gap > 100 {
            return Err(Error::config_validation("generation_gap cannot exceed 100"));
        }

        if self.output.indent > 16 {
            return Err(Error::config_validation("indent cannot exceed 16"));
        }

        Ok(())
    }
}
