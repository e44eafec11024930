//! Output block generation

use crate::cluster::node::Node;
use crate::codegen::document::{Block, Document, Value};

/// Appends one sensitive output block per node, in node declaration
/// order. Validation guarantees every node hosts at least one
/// devcontainer, so no node is skipped here.
pub(crate) fn append(doc: &mut Document, nodes: &[Node]) {
    for node in nodes {
        let mut output = Block::new("output").label(format!("{}_output", node.id));
        output.set_attribute(
            "value",
            Value::Object(vec![(
                "module".to_string(),
                Value::reference(format!("module.{}", node.id)),
            )]),
        );
        // Module outputs embed access tokens and URLs; keep them out of
        // the provisioning engine's default summary.
        output.set_attribute("sensitive", Value::Bool(true));
        doc.push(output);
    }
}
