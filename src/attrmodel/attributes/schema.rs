//! Normalized attribute schema.
//!
//! A [`Schema`] is derived from a class's [`AttributeSpec`] slice the first time a
//! model instance needs it, and then memoized on that instance. Normalization fills
//! in what the declarations leave implicit: owned default values, `false` for
//! booleans without a default, a 255-character cap on handles, and labels.

use indexmap::IndexMap;

use super::{AttributeKind, AttributeSpec};
use crate::registry::ModelClass;
use crate::value::Value;

const HANDLE_MAX_LENGTH: usize = 255;

/// An attribute declaration after normalization.
#[derive(Debug, Clone)]
pub struct AttributeConfig {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub default: Option<Value>,
    pub model: Option<&'static ModelClass>,
    pub required: bool,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub values: &'static [&'static str],
    pub label: String,
}

impl AttributeConfig {
    pub fn normalize(spec: &AttributeSpec) -> Self {
        let default = match (spec.default.to_value(), spec.kind) {
            (None, AttributeKind::Bool) => Some(Value::Bool(false)),
            (default, _) => default,
        };

        let max_length = match (spec.max_length, spec.kind) {
            (None, AttributeKind::Handle) => Some(HANDLE_MAX_LENGTH),
            (max_length, _) => max_length,
        };

        Self {
            name: spec.name,
            kind: spec.kind,
            default,
            model: spec.model,
            required: spec.required,
            max_length,
            min: spec.min,
            max: spec.max,
            values: spec.values,
            label: spec
                .label
                .map(str::to_string)
                .unwrap_or_else(|| generate_label(spec.name)),
        }
    }
}

/// Ordered map of attribute name to normalized config.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    configs: IndexMap<&'static str, AttributeConfig>,
}

impl Schema {
    pub fn from_specs(specs: &[AttributeSpec]) -> Self {
        Self {
            configs: specs
                .iter()
                .map(|spec| (spec.name, AttributeConfig::normalize(spec)))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeConfig> {
        self.configs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// Declared names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.configs.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeConfig> {
        self.configs.values()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

/// Turn an attribute name into a label: `sectionId` -> `Section Id`,
/// `title_format` -> `Title Format`.
pub fn generate_label(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in name.chars() {
        if ch == '_' || ch == '-' || ch == '.' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }

        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
