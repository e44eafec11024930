//! Module block generation
//!
//! One module block per node, nesting the devcontainers assigned to it,
//! the node's public SSH key and its optional DNS binding.

use crate::cluster::devcontainer::{Devcontainer, RemoteAccess, Source};
use crate::cluster::errors::GenerationError;
use crate::cluster::node::Node;
use crate::cluster::Cluster;
use crate::codegen::document::{Block, Document, Value};
use crate::codegen::providers::provider_key;
use crate::codegen::MODULE_SOURCE;

/// Appends one module block per node, in node declaration order.
pub(crate) fn append(doc: &mut Document, cluster: &Cluster) -> Result<(), GenerationError> {
    let backends = cluster.infrastructure_map();
    let by_node = cluster.devcontainers_by_node();

    for node in &cluster.nodes {
        let mut module = Block::new("module").label(node.id.as_str());
        module.set_attribute("source", Value::string(MODULE_SOURCE));
        module.set_attribute("name", Value::string(node.id.as_str()));
        module.set_attribute(
            "instance_type",
            Value::string(node.properties.instance_type.as_str()),
        );

        // The providers map binds the logical provider key to the
        // aliased provider declared for the node's backend.
        if let Some(backend) = backends.get(node.infrastructure_id.as_str()) {
            let key = provider_key(backend)?;
            module.set_attribute(
                "providers",
                Value::Object(vec![(
                    key.to_string(),
                    Value::reference(format!("{key}.{}", backend.id)),
                )]),
            );
        }

        let devcontainers = by_node
            .get(node.id.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();
        module.set_attribute(
            "devcontainers",
            Value::List(
                devcontainers
                    .iter()
                    .map(|dc| devcontainer_value(dc, node))
                    .collect(),
            ),
        );

        let mut key_block = Block::new("public_ssh_key");
        key_block.set_attribute(
            "local_key_path",
            Value::string(node.remote_access.public_ssh_key.as_str()),
        );
        module.add_block(key_block);

        if let Some(dns) = &node.dns {
            let mut dns_block = Block::new("dns");
            dns_block.set_attribute(
                "high_level_domain",
                Value::string(dns.high_level_domain.as_str()),
            );
            module.add_block(dns_block);
        }

        doc.push(module);
    }
    Ok(())
}

fn devcontainer_value(dc: &Devcontainer, node: &Node) -> Value {
    let mut entry = vec![("id".to_string(), Value::string(dc.id.as_str()))];
    if let Some(source) = &dc.source {
        entry.push(("source".to_string(), source_value(source)));
    }
    entry.push((
        "remote_access".to_string(),
        remote_access_value(dc.remote_access.as_ref(), node),
    ));
    Value::Object(entry)
}

fn source_value(source: &Source) -> Value {
    let mut entries = vec![("url".to_string(), Value::string(source.url.as_str()))];
    if !source.branch.is_empty() {
        entries.push(("branch".to_string(), Value::string(source.branch.as_str())));
    }
    if !source.devcontainer_path.is_empty() {
        entries.push((
            "devcontainer_path".to_string(),
            Value::string(source.devcontainer_path.as_str()),
        ));
    }
    if let Some(key) = &source.ssh_key {
        entries.push((
            "ssh_key".to_string(),
            Value::Object(vec![
                ("ref".to_string(), Value::string(key.reference.as_str())),
                ("src".to_string(), Value::string(key.source.to_string())),
            ]),
        ));
    }
    Value::Object(entries)
}

fn remote_access_value(remote_access: Option<&RemoteAccess>, node: &Node) -> Value {
    let Some(ra) = remote_access else {
        return Value::Object(Vec::new());
    };
    let mut entries = Vec::new();
    if let Some(server) = &ra.openvscode_server {
        let mut server_entries = Vec::new();
        if let Some(port) = server.port {
            server_entries.push(("port".to_string(), Value::Int(i64::from(port))));
        }
        entries.push(("openvscode_server".to_string(), Value::Object(server_entries)));
    }
    if let Some(ssh) = &ra.ssh {
        let mut ssh_entries = Vec::new();
        if let Some(port) = ssh.port {
            ssh_entries.push(("port".to_string(), Value::Int(i64::from(port))));
        }
        // The node's key is the implicit default; only an override is
        // worth emitting.
        if !ssh.public_ssh_key.is_empty()
            && ssh.public_ssh_key != node.remote_access.public_ssh_key
        {
            ssh_entries.push((
                "public_ssh_key".to_string(),
                Value::Object(vec![(
                    "local_key_path".to_string(),
                    Value::string(ssh.public_ssh_key.as_str()),
                )]),
            ));
        }
        entries.push(("ssh".to_string(), Value::Object(ssh_entries)));
    }
    Value::Object(entries)
}
