// Graph construction from classified GEDCOM lines

pub mod builder;
pub mod estimate;
pub mod family;
pub mod individual;
pub mod model;

pub use builder::{build_graph, BuildStats, GraphBuilder, Pass};
pub use estimate::YearEstimator;
pub use family::{ChildLinks, FamilyLinker};
pub use individual::{clean_name, extract_birth_year, IndividualBuilder};
pub use model::{Graph, Individual, Link, NodeSet};
