//! Shared cluster fixtures for unit tests

use crate::cluster::devcontainer::{Devcontainer, Source};
use crate::cluster::infrastructure::{Infrastructure, InfrastructureKind, Provider};
use crate::cluster::node::{Node, NodeProperties, NodeRemoteAccess};
use crate::cluster::trimmed::TrimmedString;
use crate::cluster::Cluster;

/// One backend, one node, one devcontainer; semantically valid.
pub(crate) fn minimal_cluster() -> Cluster {
    Cluster {
        name: "test-cluster".into(),
        infrastructure: vec![Infrastructure {
            id: "i1".into(),
            kind: InfrastructureKind::Vm,
            provider: Provider::Aws,
            region: "us-west-2".into(),
        }],
        nodes: vec![Node {
            id: "n1".into(),
            infrastructure_id: "i1".into(),
            properties: NodeProperties {
                instance_type: "t3.micro".into(),
            },
            remote_access: NodeRemoteAccess {
                public_ssh_key: "~/.ssh/id_rsa.pub".into(),
            },
            dns: None,
        }],
        devcontainers: vec![Devcontainer {
            id: "d1".into(),
            node_id: "n1".into(),
            source: Some(Source {
                url: "https://github.com/example/repo".into(),
                branch: TrimmedString::default(),
                devcontainer_path: TrimmedString::default(),
                ssh_key: None,
            }),
            remote_access: None,
        }],
    }
}
