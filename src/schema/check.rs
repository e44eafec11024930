//! Structural schema checker
//!
//! Walks a raw `serde_json::Value` against the declarative schema and
//! reports the first violation with a path to the offending node. Knows
//! nothing about cross-entity semantics.

use crate::cluster::errors::StructuralError;
use crate::schema::def::{ArrayRule, ObjectRule, Schema, StringRule, ValueRule};
use serde_json::Value;

/// Checks a raw document against the schema, fail-fast.
///
/// # Errors
///
/// Returns the first [`StructuralError`] encountered, carrying a path
/// such as `infrastructure[0].region`.
pub fn check(value: &Value, schema: &Schema) -> Result<(), StructuralError> {
    check_object(value, &schema.root, "")
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn check_value(value: &Value, rule: &ValueRule, path: &str) -> Result<(), StructuralError> {
    match rule {
        ValueRule::String(rule) => check_string(value, rule, path),
        ValueRule::Enum(allowed) => check_enum(value, allowed, path),
        ValueRule::Integer { min, max } => check_integer(value, *min, *max, path),
        ValueRule::Array(rule) => check_array(value, rule, path),
        ValueRule::Object(rule) => check_object(value, rule, path),
    }
}

fn check_string(value: &Value, rule: &StringRule, path: &str) -> Result<(), StructuralError> {
    let Value::String(raw) = value else {
        return Err(StructuralError::WrongType {
            path: path.to_string(),
            expected: "string",
            found: json_type(value),
        });
    };
    // Length and pattern apply to the normalized value the model will see.
    let trimmed = raw.trim();
    if trimmed.len() < rule.min_len {
        return Err(StructuralError::TooShort {
            path: path.to_string(),
            min: rule.min_len,
        });
    }
    if let Some(pattern) = &rule.pattern {
        if !pattern.regex.is_match(trimmed) {
            return Err(StructuralError::PatternMismatch {
                path: path.to_string(),
                value: trimmed.to_string(),
                pattern: pattern.raw.to_string(),
            });
        }
    }
    Ok(())
}

fn check_enum(
    value: &Value,
    allowed: &'static [&'static str],
    path: &str,
) -> Result<(), StructuralError> {
    let Value::String(raw) = value else {
        return Err(StructuralError::WrongType {
            path: path.to_string(),
            expected: "string",
            found: json_type(value),
        });
    };
    let trimmed = raw.trim();
    if !allowed.contains(&trimmed) {
        return Err(StructuralError::InvalidEnum {
            path: path.to_string(),
            value: trimmed.to_string(),
            allowed: allowed.to_vec(),
        });
    }
    Ok(())
}

fn check_integer(value: &Value, min: i64, max: i64, path: &str) -> Result<(), StructuralError> {
    let number = value.as_i64().ok_or_else(|| StructuralError::WrongType {
        path: path.to_string(),
        expected: "integer",
        found: json_type(value),
    })?;
    if number < min || number > max {
        return Err(StructuralError::OutOfRange {
            path: path.to_string(),
            value: number,
            min,
            max,
        });
    }
    Ok(())
}

fn check_array(value: &Value, rule: &ArrayRule, path: &str) -> Result<(), StructuralError> {
    let Value::Array(items) = value else {
        return Err(StructuralError::WrongType {
            path: path.to_string(),
            expected: "array",
            found: json_type(value),
        });
    };
    if items.len() < rule.min_items {
        return Err(StructuralError::TooFewItems {
            path: path.to_string(),
            min: rule.min_items,
        });
    }
    if rule.unique_items {
        for (second, item) in items.iter().enumerate().skip(1) {
            if let Some(first) = items[..second].iter().position(|other| other == item) {
                return Err(StructuralError::DuplicateItems {
                    path: path.to_string(),
                    first,
                    second,
                });
            }
        }
    }
    for (index, item) in items.iter().enumerate() {
        check_value(item, &rule.items, &format!("{path}[{index}]"))?;
    }
    Ok(())
}

fn check_object(value: &Value, rule: &ObjectRule, path: &str) -> Result<(), StructuralError> {
    let Value::Object(map) = value else {
        return Err(StructuralError::WrongType {
            path: path.to_string(),
            expected: "object",
            found: json_type(value),
        });
    };
    for field in &rule.fields {
        match map.get(field.name) {
            Some(inner) => check_value(inner, &field.rule, &join(path, field.name))?,
            None if field.required => {
                return Err(StructuralError::MissingField {
                    path: join(path, field.name),
                });
            }
            None => {}
        }
    }
    // Objects are closed: anything the schema does not declare is an error.
    for name in map.keys() {
        if rule.field(name).is_none() {
            return Err(StructuralError::UnknownField {
                path: join(path, name),
            });
        }
    }
    Ok(())
}
