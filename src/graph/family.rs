// Resolving FAM records into parent -> child links

use crate::graph::estimate::YearEstimator;
use crate::graph::model::{Link, NodeSet};
use std::collections::HashSet;

/// Links and estimates produced by one CHIL line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChildLinks {
    pub links: usize,
    pub estimated: usize,
}

/// Husband/wife context of the open FAM record, plus every id that has been
/// linked so far.
#[derive(Debug, Default)]
pub struct FamilyLinker {
    husband: Option<String>,
    wife: Option<String>,
    connected: HashSet<String>,
}

impl FamilyLinker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the parent context for a new family
    pub fn begin(&mut self) {
        self.husband = None;
        self.wife = None;
    }

    pub fn set_husband(&mut self, id: &str, nodes: &NodeSet) {
        self.husband = known(id, nodes, "husband");
    }

    pub fn set_wife(&mut self, id: &str, nodes: &NodeSet) {
        self.wife = known(id, nodes, "wife");
    }

    pub fn husband(&self) -> Option<&str> {
        self.husband.as_deref()
    }

    pub fn wife(&self) -> Option<&str> {
        self.wife.as_deref()
    }

    /// Link each known parent of the open family to `child`
    pub fn add_child(
        &mut self,
        child: &str,
        nodes: &mut NodeSet,
        estimator: &YearEstimator,
        links: &mut Vec<Link>,
    ) -> ChildLinks {
        let mut outcome = ChildLinks::default();
        if !nodes.contains(child) {
            log::debug!("child {} is not a known individual, no link", child);
            return outcome;
        }

        for parent in [self.husband.as_deref(), self.wife.as_deref()].into_iter().flatten() {
            links.push(Link::new(parent, child));
            self.connected.insert(parent.to_string());
            outcome.links += 1;
            if estimator.estimate(nodes, parent, child).is_some() {
                outcome.estimated += 1;
            }
        }

        if outcome.links > 0 {
            self.connected.insert(child.to_string());
        }
        outcome
    }

    /// Ids that took part in at least one link
    pub fn connected(&self) -> &HashSet<String> {
        &self.connected
    }
}

fn known(id: &str, nodes: &NodeSet, role: &str) -> Option<String> {
    if nodes.contains(id) {
        Some(id.to_string())
    } else {
        log::debug!("{} {} is not a known individual, ignoring", role, id);
        None
    }
}
