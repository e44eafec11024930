//! Provisioning document model
//!
//! A typed tree of blocks and attributes covering the subset of HCL this
//! domain needs, with a deterministic renderer. Insertion order is
//! preserved everywhere, so generating twice from the same model yields
//! byte-identical text.

use std::fmt;
use std::fmt::Write as _;

/// An attribute value or expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A quoted string literal.
    String(String),
    /// An integer literal.
    Int(i64),
    /// A boolean literal.
    Bool(bool),
    /// A raw, unquoted reference such as `module.n1` or `aws.i1`.
    Ref(String),
    /// An object with ordered keys.
    Object(Vec<(String, Value)>),
    /// A list of values.
    List(Vec<Value>),
}

impl Value {
    /// Creates a string literal value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Creates a raw reference value.
    pub fn reference(value: impl Into<String>) -> Self {
        Self::Ref(value.into())
    }

    fn render(&self, out: &mut String, indent: usize) {
        match self {
            Self::String(s) => {
                out.push('"');
                escape_into(s, out);
                out.push('"');
            }
            Self::Int(n) => {
                let _ = write!(out, "{n}");
            }
            Self::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            Self::Ref(r) => out.push_str(r),
            Self::Object(entries) => {
                if entries.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str("{\n");
                for (key, value) in entries {
                    push_indent(out, indent + 1);
                    out.push_str(key);
                    out.push_str(" = ");
                    value.render(out, indent + 1);
                    out.push('\n');
                }
                push_indent(out, indent);
                out.push('}');
            }
            Self::List(items) => {
                if items.is_empty() {
                    out.push_str("[]");
                    return;
                }
                out.push_str("[\n");
                for item in items {
                    push_indent(out, indent + 1);
                    item.render(out, indent + 1);
                    out.push_str(",\n");
                }
                push_indent(out, indent);
                out.push(']');
            }
        }
    }
}

fn escape_into(raw: &str, out: &mut String) {
    for c in raw.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
}

fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}

/// One entry of a block body; order of entries is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BodyItem {
    Attribute { name: String, value: Value },
    Block(Block),
}

/// A named block with optional labels and a body of attributes and
/// nested blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    kind: String,
    labels: Vec<String>,
    items: Vec<BodyItem>,
}

impl Block {
    /// Creates an empty block of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            labels: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Adds a quoted label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Appends an attribute; body order is preserved.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: Value) {
        self.items.push(BodyItem::Attribute {
            name: name.into(),
            value,
        });
    }

    /// Appends a nested block; body order is preserved.
    pub fn add_block(&mut self, block: Block) {
        self.items.push(BodyItem::Block(block));
    }

    fn render(&self, out: &mut String, indent: usize) {
        push_indent(out, indent);
        out.push_str(&self.kind);
        for label in &self.labels {
            out.push_str(" \"");
            escape_into(label, out);
            out.push('"');
        }
        out.push_str(" {\n");
        for item in &self.items {
            match item {
                BodyItem::Attribute { name, value } => {
                    push_indent(out, indent + 1);
                    out.push_str(name);
                    out.push_str(" = ");
                    value.render(out, indent + 1);
                    out.push('\n');
                }
                BodyItem::Block(block) => block.render(out, indent + 1),
            }
        }
        push_indent(out, indent);
        out.push_str("}\n");
    }
}

/// An ordered sequence of top-level blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Returns the top-level blocks in emission order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Renders the document as HCL text.
    #[must_use]
    pub fn to_hcl(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for (index, block) in self.blocks.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            block.render(&mut out, 0);
        }
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_simple_block() {
        let mut block = Block::new("provider").label("aws");
        block.set_attribute("region", Value::string("us-west-2"));
        block.set_attribute("alias", Value::string("i1"));
        let mut doc = Document::new();
        doc.push(block);
        assert_eq!(
            doc.to_hcl(),
            "provider \"aws\" {\n  region = \"us-west-2\"\n  alias = \"i1\"\n}\n"
        );
    }

    #[test]
    fn test_render_nested_block_and_reference() {
        let mut output = Block::new("output").label("n1_output");
        output.set_attribute(
            "value",
            Value::Object(vec![("module".to_string(), Value::reference("module.n1"))]),
        );
        output.set_attribute("sensitive", Value::Bool(true));
        let mut doc = Document::new();
        doc.push(output);
        assert_eq!(
            doc.to_hcl(),
            "output \"n1_output\" {\n  value = {\n    module = module.n1\n  }\n  sensitive = true\n}\n"
        );
    }

    #[test]
    fn test_render_list_of_objects() {
        let mut module = Block::new("module").label("n1");
        module.set_attribute(
            "devcontainers",
            Value::List(vec![Value::Object(vec![(
                "id".to_string(),
                Value::string("d1"),
            )])]),
        );
        let mut doc = Document::new();
        doc.push(module);
        assert_eq!(
            doc.to_hcl(),
            "module \"n1\" {\n  devcontainers = [\n    {\n      id = \"d1\"\n    },\n  ]\n}\n"
        );
    }

    #[test]
    fn test_blocks_are_separated_by_blank_lines() {
        let mut doc = Document::new();
        doc.push(Block::new("provider").label("aws"));
        doc.push(Block::new("output").label("o"));
        assert_eq!(doc.to_hcl(), "provider \"aws\" {\n}\n\noutput \"o\" {\n}\n");
    }

    #[test]
    fn test_string_escaping() {
        let mut block = Block::new("provider");
        block.set_attribute("region", Value::string("a\"b\\c\nd"));
        let mut doc = Document::new();
        doc.push(block);
        assert_eq!(
            doc.to_hcl(),
            "provider {\n  region = \"a\\\"b\\\\c\\nd\"\n}\n"
        );
    }

    #[test]
    fn test_empty_object_and_list() {
        let mut block = Block::new("module").label("m");
        block.set_attribute("devcontainers", Value::List(vec![]));
        block.set_attribute("remote_access", Value::Object(vec![]));
        let mut doc = Document::new();
        doc.push(block);
        assert_eq!(
            doc.to_hcl(),
            "module \"m\" {\n  devcontainers = []\n  remote_access = {}\n}\n"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut block = Block::new("module").label("n1");
        block.set_attribute("name", Value::string("n1"));
        let mut nested = Block::new("dns");
        nested.set_attribute("high_level_domain", Value::string("example.com"));
        block.add_block(nested);
        let mut doc = Document::new();
        doc.push(block);
        assert_eq!(doc.to_hcl(), doc.to_hcl());
    }
}
