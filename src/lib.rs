//! ged2graph - Convert GEDCOM family trees into node-link JSON graphs
//!
//! Individuals become nodes carrying their birth year as `value`, and
//! parent -> child relationships from FAM records become directed links.
//! Individuals without any link are dropped.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod graph;
pub mod output;
pub mod parser;

// Re-export main types
pub use config::Config;
pub use convert::{Conversion, Converter};
pub use error::{Error, Result};
pub use graph::{Graph, Individual, Link};
