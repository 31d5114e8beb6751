// Parent birth year inference

use crate::config::EstimateConfig;
use crate::graph::model::NodeSet;

/// Guesses a parent's birth year from a child's using a fixed generation gap
#[derive(Debug, Clone, Copy)]
pub struct YearEstimator {
    enabled: bool,
    generation_gap: i32,
}

impl YearEstimator {
    pub fn new(config: &EstimateConfig) -> Self {
        Self {
            enabled: config.enabled,
            generation_gap: config.generation_gap,
        }
    }

    /// Fill in the parent's birth year if it is missing and the child's is
    /// known. Returns the estimated year.
    pub fn estimate(&self, nodes: &mut NodeSet, parent: &str, child: &str) -> Option<i32> {
        if !self.enabled {
            return None;
        }

        let child_year = nodes.get(child)?.birth_year?;
        let parent = nodes.get_mut(parent)?;
        if parent.birth_year.is_some() {
            return None;
        }

        let year = child_year - self.generation_gap;
        parent.birth_year = Some(year);
        log::info!(
            "estimated birth for {} ({}): {}",
            parent.id,
            parent.name.as_deref().unwrap_or("unnamed"),
            year
        );
        Some(year)
    }
}

impl Default for YearEstimator {
    fn default() -> Self {
        Self::new(&EstimateConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::Individual;

    fn nodes(parent: Option<i32>, child: Option<i32>) -> NodeSet {
        let mut nodes = NodeSet::new();
        let mut p = Individual::new("@P@");
        p.birth_year = parent;
        let mut c = Individual::new("@C@");
        c.birth_year = child;
        nodes.insert(p);
        nodes.insert(c);
        nodes
    }

    #[test]
    fn test_estimates_missing_parent_year() {
        let mut nodes = nodes(None, Some(1990));
        let year = YearEstimator::default().estimate(&mut nodes, "@P@", "@C@");
        assert_eq!(year, Some(1970));
        assert_eq!(nodes.get("@P@").unwrap().birth_year, Some(1970));
    }

    #[test]
    fn test_keeps_known_parent_year() {
        let mut nodes = nodes(Some(1960), Some(1990));
        assert_eq!(YearEstimator::default().estimate(&mut nodes, "@P@", "@C@"), None);
        assert_eq!(nodes.get("@P@").unwrap().birth_year, Some(1960));
    }

    #[test]
    fn test_no_estimate_without_child_year() {
        let mut nodes = nodes(None, None);
        assert_eq!(YearEstimator::default().estimate(&mut nodes, "@P@", "@C@"), None);
        assert_eq!(nodes.get("@P@").unwrap().birth_year, None);
    }

    #[test]
    fn test_custom_gap_and_disabled() {
        let mut config = EstimateConfig {
            enabled: true,
            generation_gap: 30,
        };
        let mut set = nodes(None, Some(1990));
        assert_eq!(YearEstimator::new(&config).estimate(&mut set, "@P@", "@C@"), Some(1960));

        config.enabled = false;
        let mut set = nodes(None, Some(1990));
        assert_eq!(YearEstimator::new(&config).estimate(&mut set, "@P@", "@C@"), None);
    }
}
