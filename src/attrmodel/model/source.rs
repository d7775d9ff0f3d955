//! Sources for mass assignment.

use indexmap::IndexMap;

use super::Model;
use crate::value::Value;

/// Anything that can feed [`Model::set_attributes`].
///
/// A source yields name/value pairs in its natural order. Sources that carry eagerly
/// loaded relations (see [`Record`](crate::record::Record)) also expose those, so they
/// can be bridged into plain attributes.
pub trait AttributeSource {
    /// Value of the relation `name`, if the source has it loaded.
    fn populated_relation(&self, _name: &str) -> Option<Value> {
        None
    }

    fn into_pairs(self) -> Vec<(String, Value)>;
}

impl AttributeSource for Model {
    fn into_pairs(self) -> Vec<(String, Value)> {
        self.get_attributes(None, false).into_iter().collect()
    }
}

impl AttributeSource for &Model {
    fn into_pairs(self) -> Vec<(String, Value)> {
        self.get_attributes(None, false).into_iter().collect()
    }
}

impl AttributeSource for IndexMap<String, Value> {
    fn into_pairs(self) -> Vec<(String, Value)> {
        self.into_iter().collect()
    }
}

/// Maps and models contribute their entries; any other value contributes nothing.
impl AttributeSource for Value {
    fn into_pairs(self) -> Vec<(String, Value)> {
        match self {
            Value::Map(map) => map.into_pairs(),
            Value::Model(model) => (*model).into_pairs(),
            _ => Vec::new(),
        }
    }
}

/// Objects contribute their entries; any other JSON value contributes nothing.
impl AttributeSource for serde_json::Value {
    fn into_pairs(self) -> Vec<(String, Value)> {
        match self {
            serde_json::Value::Object(map) => map.into_pairs(),
            _ => Vec::new(),
        }
    }
}

impl AttributeSource for serde_json::Map<String, serde_json::Value> {
    fn into_pairs(self) -> Vec<(String, Value)> {
        self.into_iter()
            .map(|(name, value)| (name, Value::from(value)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> AttributeSource for Vec<(K, V)> {
    fn into_pairs(self) -> Vec<(String, Value)> {
        self.into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> AttributeSource for [(K, V); N] {
    fn into_pairs(self) -> Vec<(String, Value)> {
        self.into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect()
    }
}

impl<S: AttributeSource> AttributeSource for Option<S> {
    fn populated_relation(&self, name: &str) -> Option<Value> {
        self.as_ref()
            .and_then(|source| source.populated_relation(name))
    }

    fn into_pairs(self) -> Vec<(String, Value)> {
        self.map(AttributeSource::into_pairs).unwrap_or_default()
    }
}
