//! Cluster specification root

use crate::cluster::devcontainer::Devcontainer;
use crate::cluster::infrastructure::Infrastructure;
use crate::cluster::node::Node;
use crate::cluster::trimmed::TrimmedString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The whole cluster specification document.
///
/// Entities are constructed once by deserialization, mutated only by the
/// defaulting pass, and consumed read-only by code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Cluster name.
    pub name: TrimmedString,

    /// Infrastructure backends where nodes may be deployed.
    pub infrastructure: Vec<Infrastructure>,

    /// Nodes where devcontainers will be deployed.
    pub nodes: Vec<Node>,

    /// Devcontainers to deploy on the nodes.
    pub devcontainers: Vec<Devcontainer>,
}

impl Cluster {
    /// Returns an id-to-node lookup map.
    #[must_use]
    pub fn node_map(&self) -> HashMap<&str, &Node> {
        self.nodes.iter().map(|n| (n.id.as_str(), n)).collect()
    }

    /// Returns an id-to-backend lookup map.
    #[must_use]
    pub fn infrastructure_map(&self) -> HashMap<&str, &Infrastructure> {
        self.infrastructure
            .iter()
            .map(|i| (i.id.as_str(), i))
            .collect()
    }

    /// Groups devcontainers by their owning node, preserving
    /// declaration order within each group.
    #[must_use]
    pub fn devcontainers_by_node(&self) -> HashMap<&str, Vec<&Devcontainer>> {
        let mut groups: HashMap<&str, Vec<&Devcontainer>> = HashMap::new();
        for dc in &self.devcontainers {
            groups.entry(dc.node_id.as_str()).or_default().push(dc);
        }
        groups
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cluster({}): {} backend(s), {} node(s), {} devcontainer(s)",
            self.name,
            self.infrastructure.len(),
            self.nodes.len(),
            self.devcontainers.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::test_fixtures::minimal_cluster;

    #[test]
    fn test_lookup_maps() {
        let cluster = minimal_cluster();
        assert!(cluster.node_map().contains_key("n1"));
        assert!(cluster.infrastructure_map().contains_key("i1"));
    }

    #[test]
    fn test_devcontainers_by_node_preserves_order() {
        let mut cluster = minimal_cluster();
        let mut second = cluster.devcontainers[0].clone();
        second.id = "d2".into();
        cluster.devcontainers.push(second);

        let groups = cluster.devcontainers_by_node();
        let ids: Vec<&str> = groups["n1"].iter().map(|dc| dc.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d2"]);
    }

    #[test]
    fn test_display() {
        let cluster = minimal_cluster();
        assert_eq!(
            cluster.to_string(),
            "Cluster(test-cluster): 1 backend(s), 1 node(s), 1 devcontainer(s)"
        );
    }
}
