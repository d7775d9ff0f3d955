//! Attribute declarations.
//!
//! An [`AttributeSpec`] is the static, `const`-buildable declaration of one attribute:
//! its name, kind, default and validation options. A model class is nothing more
//! than a handle plus a slice of these (see [`ModelClass`]).

use super::AttributeKind;
use crate::registry::ModelClass;
use crate::value::Value;

/// A default value that can be written in a `static` declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'static str),
}

impl DefaultValue {
    pub fn to_value(self) -> Option<Value> {
        match self {
            DefaultValue::None => None,
            DefaultValue::Bool(v) => Some(Value::Bool(v)),
            DefaultValue::Int(v) => Some(Value::Int(v)),
            DefaultValue::Float(v) => Some(Value::Float(v)),
            DefaultValue::Str(v) => Some(Value::String(v.to_string())),
        }
    }
}

/// Declaration of a single attribute.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    /// The attribute name used in the API (e.g. "title", "sectionId")
    pub name: &'static str,

    /// The kind of value this attribute holds
    pub kind: AttributeKind,

    /// Value written when a model is constructed
    pub default: DefaultValue,

    /// Class used to build nested models from maps (only meaningful for `Mixed`)
    pub model: Option<&'static ModelClass>,

    /// Whether a blank value fails validation
    pub required: bool,

    /// Maximum number of characters for string-like kinds
    pub max_length: Option<usize>,

    /// Inclusive lower bound for numeric kinds
    pub min: Option<i64>,

    /// Inclusive upper bound for numeric kinds
    pub max: Option<i64>,

    /// Allowed values for `Enum`
    pub values: &'static [&'static str],

    /// Human-readable label; generated from the name when absent
    pub label: Option<&'static str>,
}

impl AttributeSpec {
    /// Create a new attribute spec with no default and no validation options.
    pub const fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            default: DefaultValue::None,
            model: None,
            required: false,
            max_length: None,
            min: None,
            max: None,
            values: &[],
            label: None,
        }
    }

    pub const fn default(mut self, default: DefaultValue) -> Self {
        self.default = default;
        self
    }

    /// Build maps assigned to this attribute as instances of `class`.
    pub const fn model(mut self, class: &'static ModelClass) -> Self {
        self.model = Some(class);
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub const fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn values(mut self, values: &'static [&'static str]) -> Self {
        self.values = values;
        self
    }

    pub const fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }
}
