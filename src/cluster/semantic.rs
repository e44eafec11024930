//! Semantic validation of the typed cluster model
//!
//! Enforces the cross-entity invariants the structural schema cannot
//! express. Rules run in a fixed order and fail fast, so error reporting
//! is deterministic and follows declaration order within each collection.

use crate::cluster::errors::SemanticError;
use crate::cluster::infrastructure::{InfrastructureKind, Provider};
use crate::cluster::Cluster;
use std::collections::{HashMap, HashSet};

/// Validates all cross-entity invariants of a structurally valid model.
///
/// # Errors
///
/// Returns the first [`SemanticError`] encountered, naming the offending
/// entity and the violated rule.
pub fn validate(cluster: &Cluster) -> Result<(), SemanticError> {
    validate_infrastructure(cluster)?;
    validate_nodes(cluster)?;
    validate_devcontainers(cluster)?;
    Ok(())
}

fn validate_infrastructure(cluster: &Cluster) -> Result<(), SemanticError> {
    let mut seen_ids = HashSet::new();
    let mut seen_environments: HashMap<(InfrastructureKind, Provider, &str), &str> =
        HashMap::new();

    for (index, infra) in cluster.infrastructure.iter().enumerate() {
        if infra.id.is_empty() {
            return Err(SemanticError::InfrastructureIdMissing { index });
        }
        if !seen_ids.insert(infra.id.as_str()) {
            return Err(SemanticError::DuplicateInfrastructureId {
                id: infra.id.to_string(),
            });
        }
        if infra.region.is_empty() {
            return Err(SemanticError::RegionMissing {
                id: infra.id.to_string(),
            });
        }

        // Two backends must not describe the identical target environment.
        let environment = (infra.kind, infra.provider, infra.region.as_str());
        if let Some(previous) = seen_environments.insert(environment, infra.id.as_str()) {
            return Err(SemanticError::DuplicateEnvironment {
                id: infra.id.to_string(),
                kind: infra.kind.to_string(),
                provider: infra.provider.to_string(),
                region: infra.region.to_string(),
                previous: previous.to_string(),
            });
        }
    }

    // Referential closure. A dangling reference is reported before any
    // orphaned backend, otherwise the orphan it fabricates would mask it.
    let mut referenced = HashSet::new();
    for node in &cluster.nodes {
        if node.infrastructure_id.is_empty() {
            continue;
        }
        if !seen_ids.contains(node.infrastructure_id.as_str()) {
            return Err(SemanticError::UnknownInfrastructure {
                id: node.id.to_string(),
                infrastructure_id: node.infrastructure_id.to_string(),
            });
        }
        referenced.insert(node.infrastructure_id.as_str());
    }
    for infra in &cluster.infrastructure {
        if !referenced.contains(infra.id.as_str()) {
            return Err(SemanticError::UnreferencedInfrastructure {
                id: infra.id.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_nodes(cluster: &Cluster) -> Result<(), SemanticError> {
    let infrastructure_ids: HashSet<&str> = cluster
        .infrastructure
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    let mut seen = HashSet::new();

    for (index, node) in cluster.nodes.iter().enumerate() {
        if node.id.is_empty() {
            return Err(SemanticError::NodeIdMissing { index });
        }
        if !seen.insert(node.id.as_str()) {
            return Err(SemanticError::DuplicateNodeId {
                id: node.id.to_string(),
            });
        }
        if node.infrastructure_id.is_empty() {
            return Err(SemanticError::InfrastructureRefMissing {
                id: node.id.to_string(),
            });
        }
        if !infrastructure_ids.contains(node.infrastructure_id.as_str()) {
            return Err(SemanticError::UnknownInfrastructure {
                id: node.id.to_string(),
                infrastructure_id: node.infrastructure_id.to_string(),
            });
        }
        if node.properties.instance_type.is_empty() {
            return Err(SemanticError::InstanceTypeMissing {
                id: node.id.to_string(),
            });
        }
        if node.remote_access.public_ssh_key.is_empty() {
            return Err(SemanticError::PublicSshKeyMissing {
                id: node.id.to_string(),
            });
        }
        if let Some(dns) = &node.dns {
            if dns.high_level_domain.is_empty() {
                return Err(SemanticError::HighLevelDomainMissing {
                    id: node.id.to_string(),
                });
            }
        }
    }

    // Referential closure: every node must host at least one
    // devcontainer, and every devcontainer reference must resolve.
    let mut referenced = HashSet::new();
    for dc in &cluster.devcontainers {
        if dc.node_id.is_empty() {
            continue;
        }
        if !seen.contains(dc.node_id.as_str()) {
            return Err(SemanticError::UnknownNode {
                id: dc.id.to_string(),
                node_id: dc.node_id.to_string(),
            });
        }
        referenced.insert(dc.node_id.as_str());
    }
    for node in &cluster.nodes {
        if !referenced.contains(node.id.as_str()) {
            return Err(SemanticError::UnreferencedNode {
                id: node.id.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_devcontainers(cluster: &Cluster) -> Result<(), SemanticError> {
    let nodes = cluster.node_map();
    let mut seen = HashSet::new();

    for (index, dc) in cluster.devcontainers.iter().enumerate() {
        if dc.id.is_empty() {
            return Err(SemanticError::DevcontainerIdMissing { index });
        }
        if !seen.insert(dc.id.as_str()) {
            return Err(SemanticError::DuplicateDevcontainerId {
                id: dc.id.to_string(),
            });
        }
        if dc.node_id.is_empty() {
            return Err(SemanticError::NodeRefMissing {
                id: dc.id.to_string(),
            });
        }
        let Some(node) = nodes.get(dc.node_id.as_str()) else {
            return Err(SemanticError::UnknownNode {
                id: dc.id.to_string(),
                node_id: dc.node_id.to_string(),
            });
        };

        let Some(source) = dc.source.as_ref().filter(|s| !s.url.is_empty()) else {
            return Err(SemanticError::SourceUrlMissing {
                id: dc.id.to_string(),
            });
        };

        // SSH-style URLs require a key; any other URL must not carry one.
        if source.is_ssh_url() {
            match &source.ssh_key {
                None => {
                    return Err(SemanticError::SshKeyRequired {
                        id: dc.id.to_string(),
                    });
                }
                Some(key) if key.reference.is_empty() => {
                    return Err(SemanticError::SshKeyReferenceMissing {
                        id: dc.id.to_string(),
                    });
                }
                Some(_) => {}
            }
        } else if source.ssh_key.is_some() {
            return Err(SemanticError::SshKeyForbidden {
                id: dc.id.to_string(),
            });
        }

        // A node-level DNS binding implies externally routed ports.
        let has_fixed_port = dc
            .remote_access
            .as_ref()
            .and_then(|ra| ra.openvscode_server.as_ref())
            .and_then(|server| server.port)
            .is_some();
        if node.dns.is_some() && has_fixed_port {
            return Err(SemanticError::PortWithDns {
                id: dc.id.to_string(),
                node_id: dc.node_id.to_string(),
            });
        }
    }
    Ok(())
}
