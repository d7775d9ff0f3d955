//! Runtime attribute values.
//!
//! [`Value`] is what a [`Model`](crate::model::Model) stores for each attribute. It is a
//! superset of JSON: dates and nested models are first-class, so coercion can hand
//! back richer types than the raw input carried.
//!
//! ## Flattening
//!
//! Before values leave the process (persistence, JSON output) they are *flattened*:
//!
//! | In memory | Flattened |
//! |-----------|-----------|
//! | `DateTime` | `Int` (epoch seconds) |
//! | `Model` | `Map` of flattened attributes plus `"__model__": <handle>` |
//! | `List` / `Map` | flattened element-wise |
//!
//! The `__model__` marker is what lets a flattened nested model be expanded back into
//! a model when it is assigned to a `Mixed` attribute.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::model::Model;

/// Key that carries the class handle of a flattened nested model.
pub const MODEL_KEY: &str = "__model__";

/// Runtime representation of an attribute value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(DateTime<Utc>),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    /// A nested model instance (see [`AttributeSpec::model`](crate::attributes::AttributeSpec::model)).
    Model(Box<Model>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is "truthy".
    ///
    /// - Null, `false`, `0`, `0.0`, `""` and `"0"` are falsy
    /// - Empty lists and maps are falsy
    /// - Dates and models are always truthy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(v) => *v,
            Value::Int(v) => *v != 0,
            Value::Float(v) => *v != 0.0,
            Value::String(v) => !v.is_empty() && v != "0",
            Value::DateTime(_) => true,
            Value::List(v) => !v.is_empty(),
            Value::Map(v) => !v.is_empty(),
            Value::Model(_) => true,
        }
    }

    /// Blank in the validation sense: null, empty string, empty list or map.
    ///
    /// Unlike [`is_truthy`](Self::is_truthy), `false` and `0` are not blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(v) => v.is_empty(),
            Value::List(v) => v.is_empty(),
            Value::Map(v) => v.is_empty(),
            _ => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Model(_) => "model",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::DateTime(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_model(&self) -> Option<&Model> {
        match self {
            Value::Model(v) => Some(v),
            _ => None,
        }
    }

    /// Convert dates and nested models into primitive, serializable forms.
    pub fn flatten(&self) -> Value {
        match self {
            Value::DateTime(dt) => Value::Int(dt.timestamp()),
            Value::Model(model) => {
                let mut map = IndexMap::new();
                map.insert(
                    MODEL_KEY.to_string(),
                    Value::String(model.class_handle().to_string()),
                );
                map.extend(model.get_attributes(None, true));
                Value::Map(map)
            }
            Value::List(items) => Value::List(items.iter().map(Value::flatten).collect()),
            Value::Map(map) => Value::Map(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.flatten()))
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    /// Flatten and convert into a `serde_json::Value`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(self.flatten())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
            Value::DateTime(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::Secs, true)),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::DateTime(v) => serializer.serialize_i64(v.timestamp()),
            Value::List(items) => serializer.collect_seq(items),
            Value::Map(map) => serializer.collect_map(map),
            Value::Model(_) => self.flatten().serialize(serializer),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(v) => Value::Bool(v),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(v) => serde_json::Value::Bool(v),
            Value::Int(v) => serde_json::Value::from(v),
            Value::Float(v) => serde_json::Number::from_f64(v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(v) => serde_json::Value::String(v),
            Value::DateTime(v) => serde_json::Value::from(v.timestamp()),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, serde_json::Value::from(value)))
                    .collect(),
            ),
            model @ Value::Model(_) => serde_json::Value::from(model.flatten()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Model> for Value {
    fn from(v: Model) -> Self {
        Value::Model(Box::new(v))
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(v: IndexMap<String, Value>) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}
