// Parser context driving the graph construction
//
// The builder receives classified lines one at a time and owns all scan state:
// the open individual, the open family context, and the record kind the
// scanner is currently inside.

use crate::config::{Config, LinkResolution};
use crate::error::Result;
use crate::graph::estimate::YearEstimator;
use crate::graph::family::FamilyLinker;
use crate::graph::individual::IndividualBuilder;
use crate::graph::model::{Graph, Individual, Link, NodeSet};
use crate::parser::{Field, Scanner};

/// Level-0 record the scan is currently inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordKind {
    None,
    Individual,
    Family,
    Other,
}

/// Which kinds of fields a scan applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pass {
    pub individuals: bool,
    pub families: bool,
}

impl Pass {
    pub const ALL: Pass = Pass { individuals: true, families: true };
    pub const INDIVIDUALS: Pass = Pass { individuals: true, families: false };
    pub const FAMILIES: Pass = Pass { individuals: false, families: true };
}

/// Counters collected while building a graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Individual records read, including repeated ids
    pub individuals: usize,
    pub links: usize,
    pub estimated_years: usize,
    pub orphans_removed: usize,
}

impl BuildStats {
    pub fn summary(&self) -> String {
        format!(
            "{} individuals read, {} links, {} birth years estimated, {} orphans removed",
            self.individuals, self.links, self.estimated_years, self.orphans_removed
        )
    }
}

/// Explicit scan context turning classified lines into a graph
pub struct GraphBuilder {
    nodes: NodeSet,
    links: Vec<Link>,
    individual: IndividualBuilder,
    family: FamilyLinker,
    estimator: YearEstimator,
    record: RecordKind,
    pass: Pass,
    stats: BuildStats,
}

impl GraphBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            nodes: NodeSet::new(),
            links: Vec::new(),
            individual: IndividualBuilder::new(),
            family: FamilyLinker::new(),
            estimator: YearEstimator::new(&config.estimate),
            record: RecordKind::None,
            pass: Pass::ALL,
            stats: BuildStats::default(),
        }
    }

    /// Start another scan over the document applying only `pass` fields.
    /// Individuals from earlier passes stay registered.
    pub fn start_pass(&mut self, pass: Pass) {
        self.close_record(RecordKind::None);
        self.family.begin();
        self.pass = pass;
    }

    /// Apply one classified line
    pub fn apply(&mut self, field: Field<'_>) {
        let individuals = self.pass.individuals && self.record == RecordKind::Individual;
        let families = self.pass.families && self.record == RecordKind::Family;

        match field {
            Field::BeginIndividual(id) => {
                self.close_record(RecordKind::Individual);
                if self.pass.individuals {
                    if let Some(previous) = self.individual.begin(id) {
                        self.register(previous);
                    }
                }
            }
            Field::BeginFamily => {
                self.close_record(RecordKind::Family);
                self.family.begin();
            }
            Field::BeginRecord => self.close_record(RecordKind::Other),
            Field::Name(value) if individuals => self.individual.set_name(value),
            Field::Birth(date) if individuals => self.individual.set_birth(date),
            Field::Husband(id) if families => self.family.set_husband(id, &self.nodes),
            Field::Wife(id) if families => self.family.set_wife(id, &self.nodes),
            Field::Child(id) if families => {
                let outcome =
                    self.family
                        .add_child(id, &mut self.nodes, &self.estimator, &mut self.links);
                self.stats.links += outcome.links;
                self.stats.estimated_years += outcome.estimated;
            }
            _ => {}
        }
    }

    /// Close the scan, prune orphans and return the finished graph
    pub fn finish(mut self) -> (Graph, BuildStats) {
        self.close_record(RecordKind::None);

        let mut graph = Graph::new(self.nodes.into_vec(), self.links);
        let removed = graph.prune_orphans(self.family.connected());
        self.stats.orphans_removed = removed.len();

        (graph, self.stats)
    }

    /// Finalize the open individual and switch to a new record kind
    fn close_record(&mut self, next: RecordKind) {
        if let Some(done) = self.individual.finish() {
            self.register(done);
        }
        self.record = next;
    }

    fn register(&mut self, individual: Individual) {
        self.stats.individuals += 1;
        self.nodes.insert(individual);
    }
}

/// Build the pruned graph for a decoded GEDCOM document
pub fn build_graph(text: &str, config: &Config) -> Result<(Graph, BuildStats)> {
    let mut builder = GraphBuilder::new(config);

    match config.parse.resolution {
        LinkResolution::DocumentOrder => scan(&mut builder, text, config)?,
        LinkResolution::Deferred => {
            builder.start_pass(Pass::INDIVIDUALS);
            scan(&mut builder, text, config)?;
            builder.start_pass(Pass::FAMILIES);
            scan(&mut builder, text, config)?;
        }
    }

    Ok(builder.finish())
}

fn scan(builder: &mut GraphBuilder, text: &str, config: &Config) -> Result<()> {
    for scanned in Scanner::new(text, config.parse.mode) {
        builder.apply(scanned?.field);
    }
    Ok(())
}
