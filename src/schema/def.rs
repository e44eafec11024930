//! Declarative structural schema for cluster specifications
//!
//! The schema is an explicit, hand-authored data structure, built once at
//! module initialization and passed by reference into the checker. It is
//! deliberately decoupled from the entity type definitions so the two can
//! be tested against each other.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

/// Identifier rule shared by entity ids and references: starts with a
/// letter or underscore, alphanumeric/underscore/hyphen body, must not
/// end in a hyphen.
pub const ID_PATTERN: &str = "^[_a-zA-Z][a-zA-Z0-9_-]*[a-zA-Z0-9_]$";

/// A compiled string pattern with its source text kept for reporting.
#[derive(Debug)]
pub struct Pattern {
    /// Source text of the pattern.
    pub raw: &'static str,
    /// Compiled form.
    pub regex: Regex,
}

impl Pattern {
    fn new(raw: &'static str) -> Self {
        let regex = Regex::new(raw).expect("schema pattern must compile");
        Self { raw, regex }
    }
}

/// Constraints on a string value.
#[derive(Debug)]
pub struct StringRule {
    /// Minimum length after normalization (0 when unconstrained).
    pub min_len: usize,
    /// Optional pattern the whole value must match.
    pub pattern: Option<Pattern>,
}

/// Constraints on an array value.
#[derive(Debug)]
pub struct ArrayRule {
    /// Minimum number of items.
    pub min_items: usize,
    /// Whether two identical items are rejected.
    pub unique_items: bool,
    /// Schema every item must satisfy.
    pub items: Box<ValueRule>,
}

/// One named field of an object schema.
#[derive(Debug)]
pub struct Field {
    /// Field name as it appears in the document.
    pub name: &'static str,
    /// Whether the field must be present.
    pub required: bool,
    /// Schema of the field value.
    pub rule: ValueRule,
}

/// An object schema. Objects are closed: fields not declared here are
/// rejected.
#[derive(Debug)]
pub struct ObjectRule {
    /// Declared fields, in document order.
    pub fields: Vec<Field>,
}

impl ObjectRule {
    /// Looks up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Schema of a single value.
#[derive(Debug)]
pub enum ValueRule {
    /// A string with optional length/pattern constraints.
    String(StringRule),
    /// A string restricted to an enumeration.
    Enum(&'static [&'static str]),
    /// An integer within an inclusive range.
    Integer {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },
    /// An array of homogeneous items.
    Array(ArrayRule),
    /// A closed object.
    Object(ObjectRule),
}

/// The structural schema of a whole document.
#[derive(Debug)]
pub struct Schema {
    /// Shape of the document root.
    pub root: ObjectRule,
}

fn string(min_len: usize) -> ValueRule {
    ValueRule::String(StringRule {
        min_len,
        pattern: None,
    })
}

fn identifier() -> ValueRule {
    ValueRule::String(StringRule {
        min_len: 1,
        pattern: Some(Pattern::new(ID_PATTERN)),
    })
}

fn port() -> ValueRule {
    ValueRule::Integer {
        min: 1024,
        max: 65535,
    }
}

fn array(min_items: usize, items: ValueRule) -> ValueRule {
    ValueRule::Array(ArrayRule {
        min_items,
        unique_items: true,
        items: Box::new(items),
    })
}

fn object(fields: Vec<Field>) -> ValueRule {
    ValueRule::Object(ObjectRule { fields })
}

fn req(name: &'static str, rule: ValueRule) -> Field {
    Field {
        name,
        required: true,
        rule,
    }
}

fn opt(name: &'static str, rule: ValueRule) -> Field {
    Field {
        name,
        required: false,
        rule,
    }
}

fn infrastructure_rule() -> ValueRule {
    object(vec![
        req("id", identifier()),
        req("kind", ValueRule::Enum(&["vm"])),
        req("provider", ValueRule::Enum(&["aws"])),
        req("region", string(1)),
    ])
}

fn node_rule() -> ValueRule {
    object(vec![
        req("id", identifier()),
        req("infrastructure_id", identifier()),
        req("properties", object(vec![req("instance_type", string(1))])),
        req("remote_access", object(vec![req("public_ssh_key", string(1))])),
        opt("dns", object(vec![req("high_level_domain", string(1))])),
    ])
}

fn devcontainer_rule() -> ValueRule {
    let ssh_key = object(vec![
        req("reference", string(1)),
        req("source", ValueRule::Enum(&["secrets_manager", "ssm_parameter_store"])),
    ]);
    let source = object(vec![
        req("url", string(1)),
        opt("branch", string(0)),
        opt("devcontainer_path", string(0)),
        opt("ssh_key", ssh_key),
    ]);
    let remote_access = object(vec![
        opt("openvscode_server", object(vec![opt("port", port())])),
        opt(
            "ssh",
            object(vec![opt("port", port()), opt("public_ssh_key", string(0))]),
        ),
    ]);
    object(vec![
        req("id", identifier()),
        req("node_id", identifier()),
        req("source", source),
        opt("remote_access", remote_access),
    ])
}

static CLUSTER_SCHEMA: Lazy<Schema> = Lazy::new(|| Schema {
    root: ObjectRule {
        fields: vec![
            req("name", string(1)),
            req("infrastructure", array(1, infrastructure_rule())),
            req("nodes", array(1, node_rule())),
            req("devcontainers", array(1, devcontainer_rule())),
        ],
    },
});

/// Returns the structural schema for cluster specifications.
#[must_use]
pub fn cluster_schema() -> &'static Schema {
    &CLUSTER_SCHEMA
}

impl Schema {
    /// Renders the schema as a JSON Schema document, suitable for
    /// editor integration.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let mut root = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "additionalProperties": false,
        });
        merge_object_rule(&mut root, &self.root);
        root
    }
}

fn merge_object_rule(target: &mut Value, rule: &ObjectRule) {
    let Value::Object(map) = target else { return };
    let required: Vec<&str> = rule
        .fields
        .iter()
        .filter(|f| f.required)
        .map(|f| f.name)
        .collect();
    if !required.is_empty() {
        map.insert("required".to_string(), json!(required));
    }
    let mut properties = serde_json::Map::new();
    for field in &rule.fields {
        properties.insert(field.name.to_string(), rule_to_json(&field.rule));
    }
    map.insert("properties".to_string(), Value::Object(properties));
}

fn rule_to_json(rule: &ValueRule) -> Value {
    match rule {
        ValueRule::String(s) => {
            let mut out = json!({"type": "string"});
            if let Value::Object(map) = &mut out {
                if s.min_len > 0 {
                    map.insert("minLength".to_string(), json!(s.min_len));
                }
                if let Some(pattern) = &s.pattern {
                    map.insert("pattern".to_string(), json!(pattern.raw));
                }
            }
            out
        }
        ValueRule::Enum(allowed) => json!({"type": "string", "enum": allowed}),
        ValueRule::Integer { min, max } => {
            json!({"type": "integer", "minimum": min, "maximum": max})
        }
        ValueRule::Array(a) => json!({
            "type": "array",
            "minItems": a.min_items,
            "uniqueItems": a.unique_items,
            "items": rule_to_json(&a.items),
        }),
        ValueRule::Object(o) => {
            let mut out = json!({"type": "object", "additionalProperties": false});
            merge_object_rule(&mut out, o);
            out
        }
    }
}
