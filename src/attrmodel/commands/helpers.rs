use crate::error::{ModelError, Result};
use crate::value::Value;

/// Rows read from JSON input.
#[derive(Debug, Clone, PartialEq)]
pub struct Rows {
    pub rows: Vec<serde_json::Value>,
    /// The input was one object rather than an array.
    pub single: bool,
}

/// Parse input holding a JSON object or an array of objects.
pub fn parse_rows(input: &str) -> Result<Rows> {
    match serde_json::from_str(input)? {
        object @ serde_json::Value::Object(_) => Ok(Rows {
            rows: vec![object],
            single: true,
        }),
        serde_json::Value::Array(items) => {
            if let Some(position) = items.iter().position(|item| !item.is_object()) {
                return Err(ModelError::Api(format!(
                    "Row {} is not a JSON object",
                    position + 1
                )));
            }
            Ok(Rows {
                rows: items,
                single: false,
            })
        }
        _ => Err(ModelError::Api(
            "Input must be a JSON object or an array of objects".to_string(),
        )),
    }
}

/// Parse a `NAME=VALUE` assignment. `VALUE` is read as JSON when it parses,
/// otherwise taken as a plain string.
pub fn parse_assignment(assignment: &str) -> Result<(String, Value)> {
    let (name, raw) = assignment
        .split_once('=')
        .ok_or_else(|| ModelError::Api(format!("Expected NAME=VALUE, got '{}'", assignment)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ModelError::Api(format!(
            "Missing attribute name in '{}'",
            assignment
        )));
    }

    let value = serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(raw));
    Ok((name.to_string(), value))
}
