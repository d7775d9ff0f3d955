//! Attribute kinds.

use crate::value::Value;

/// The kind of value an attribute holds.
///
/// Only `DateTime` and `Mixed` change the value on write (see [`crate::coerce`]);
/// every other kind stores what it is given and is checked at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Free-form text.
    String,

    /// Whole number.
    Int,

    /// Any number, whole or fractional.
    Number,

    /// Boolean flag. Defaults to `false` when the spec sets no default.
    Bool,

    /// Point in time.
    ///
    /// Written values are parsed from timestamps or date strings; falsy input is
    /// stored as null.
    DateTime,

    /// Anything at all.
    ///
    /// JSON strings are decoded on write, and maps may be turned into nested models.
    Mixed,

    /// One of a closed set of strings (see [`AttributeSpec::values`](super::AttributeSpec::values)).
    Enum,

    /// Identifier-like name: a letter followed by letters, digits or underscores.
    Handle,
}

impl AttributeKind {
    pub fn name(self) -> &'static str {
        match self {
            AttributeKind::String => "string",
            AttributeKind::Int => "int",
            AttributeKind::Number => "number",
            AttributeKind::Bool => "bool",
            AttributeKind::DateTime => "datetime",
            AttributeKind::Mixed => "mixed",
            AttributeKind::Enum => "enum",
            AttributeKind::Handle => "handle",
        }
    }

    /// Whether a stored value has the right shape for this kind.
    ///
    /// Null is always accepted; whether it is allowed is the `required` rule's call.
    pub fn accepts(self, value: &Value) -> bool {
        if value.is_null() {
            return true;
        }

        match self {
            AttributeKind::String | AttributeKind::Enum | AttributeKind::Handle => {
                matches!(value, Value::String(_))
            }
            AttributeKind::Int => match value {
                Value::Int(_) => true,
                Value::Float(v) => v.fract() == 0.0,
                Value::String(s) => s.trim().parse::<i64>().is_ok(),
                _ => false,
            },
            AttributeKind::Number => match value {
                Value::Int(_) | Value::Float(_) => true,
                Value::String(s) => s.trim().parse::<f64>().is_ok(),
                _ => false,
            },
            AttributeKind::Bool => match value {
                Value::Bool(_) => true,
                Value::Int(v) => *v == 0 || *v == 1,
                Value::String(s) => s == "0" || s == "1",
                _ => false,
            },
            AttributeKind::DateTime => matches!(value, Value::DateTime(_)),
            AttributeKind::Mixed => true,
        }
    }

    /// Message used when [`accepts`](Self::accepts) fails.
    pub(crate) fn mismatch_message(self) -> &'static str {
        match self {
            AttributeKind::String | AttributeKind::Handle => "must be a string.",
            AttributeKind::Int => "must be an integer.",
            AttributeKind::Number => "must be a number.",
            AttributeKind::Bool => "must be either true or false.",
            AttributeKind::DateTime => "must be a date.",
            AttributeKind::Enum => "is invalid.",
            AttributeKind::Mixed => "is invalid.",
        }
    }
}
