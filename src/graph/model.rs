// Node-link graph of individuals and parent -> child links

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A person in the output graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Cross-reference id from the INDI record, e.g. `@I1@`
    pub id: String,
    /// Display name without surname slashes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Parsed or estimated birth year
    #[serde(rename = "value", default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
}

impl Individual {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            birth_year: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }
}

/// A directed parent -> child edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Parent id
    pub source: String,
    /// Child id
    pub target: String,
    pub directed: bool,
}

impl Link {
    pub fn new(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            source: parent.into(),
            target: child.into(),
            directed: true,
        }
    }
}

/// Individuals registered during a scan, in first-seen order
#[derive(Debug, Default)]
pub struct NodeSet {
    nodes: Vec<Individual>,
    index: HashMap<String, usize>,
}

impl NodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a finished individual. A repeated id replaces the stored
    /// record but keeps its original position.
    pub fn insert(&mut self, individual: Individual) {
        match self.index.get(&individual.id) {
            Some(&idx) => {
                log::debug!("duplicate individual {}, keeping the last record", individual.id);
                self.nodes[idx] = individual;
            }
            None => {
                self.index.insert(individual.id.clone(), self.nodes.len());
                self.nodes.push(individual);
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Individual> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Individual> {
        self.index.get(id).map(|&idx| &mut self.nodes[idx])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_vec(self) -> Vec<Individual> {
        self.nodes
    }
}

/// The graph written to JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Individual>,
    pub links: Vec<Link>,
}

impl Graph {
    pub fn new(nodes: Vec<Individual>, links: Vec<Link>) -> Self {
        Self { nodes, links }
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Individual> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Remove every individual whose id is not in `connected` and return the
    /// removed ones in their original order.
    pub fn prune_orphans(&mut self, connected: &HashSet<String>) -> Vec<Individual> {
        let (kept, removed): (Vec<_>, Vec<_>) = std::mem::take(&mut self.nodes)
            .into_iter()
            .partition(|n| connected.contains(&n.id));
        self.nodes = kept;

        for orphan in &removed {
            match &orphan.name {
                Some(name) => log::info!("removing orphan {}: {}", orphan.id, name),
                None => log::info!("removing orphan {} (no displayable name)", orphan.id),
            }
        }

        removed
    }
}
