//! # Domain Model: Schema-Driven Attribute Models
//!
//! A [`Model`] is a dynamically typed record whose shape comes from a static
//! [`ModelClass`]. It owns its attribute values, coerces them on write according to the
//! declared [`AttributeKind`](crate::attributes::AttributeKind), and can be filled in bulk
//! from anything implementing [`AttributeSource`].
//!
//! ## Strict and Open Models
//!
//! Strict classes only accept declared attributes: writing anything else returns
//! `Ok(false)` and changes nothing. Open (loose) classes accept any name, and remember
//! undeclared ones as *extra* attributes, in the order they were first written:
//!
//! ```text
//! attribute_names() = [declared..., extra...]
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Defaults**: every declared default is written through `set_attribute`, so
//!    defaults are coerced like any other value.
//! 2. **Initial values**: applied with [`Model::set_attributes`].
//! 3. **Reads**: [`Model::get_attribute`] / [`Model::get_attributes`], raw or flattened.
//! 4. **Derivation**: [`Model::copy`] and the chain-setter ([`Model::call`],
//!    [`Model::with`]) produce new, independent instances.
//!
//! The normalized [`Schema`] is built on first use and memoized per instance.

use indexmap::IndexMap;
use once_cell::unsync::OnceCell;
use serde::{Serialize, Serializer};

use crate::attributes::{generate_label, Schema};
use crate::coerce;
use crate::error::{ModelError, Result};
use crate::registry::ModelClass;
use crate::value::Value;

mod source;
mod validation;

pub use crate::coerce::{DecodePolicy, Options};
pub use source::AttributeSource;

#[derive(Debug, Clone)]
enum Mode {
    Strict,
    Open { extra: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct Model {
    class: &'static ModelClass,
    mode: Mode,
    options: Options,
    schema: OnceCell<Schema>,
    values: IndexMap<String, Value>,
    errors: IndexMap<String, Vec<String>>,
}

impl Model {
    /// Create an instance of `class` holding only its declared defaults.
    pub fn new(class: &'static ModelClass) -> Result<Self> {
        Self::with_options(class, Options::default())
    }

    pub fn with_options(class: &'static ModelClass, options: Options) -> Result<Self> {
        let mode = if class.strict {
            Mode::Strict
        } else {
            Mode::Open { extra: Vec::new() }
        };

        let mut model = Self {
            class,
            mode,
            options,
            schema: OnceCell::new(),
            values: IndexMap::new(),
            errors: IndexMap::new(),
        };
        model.populate_defaults()?;
        tracing::trace!(model = class.handle, "created model");
        Ok(model)
    }

    fn populate_defaults(&mut self) -> Result<()> {
        let defaults: Vec<(&'static str, Value)> = self
            .schema()
            .iter()
            .filter_map(|config| config.default.clone().map(|value| (config.name, value)))
            .collect();

        for (name, value) in defaults {
            self.set_attribute(name, value)?;
        }
        Ok(())
    }

    pub fn class(&self) -> &'static ModelClass {
        self.class
    }

    pub fn class_handle(&self) -> &'static str {
        self.class.handle
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn is_strict(&self) -> bool {
        matches!(self.mode, Mode::Strict)
    }

    /// The normalized attribute schema, computed once per instance.
    pub fn schema(&self) -> &Schema {
        self.schema
            .get_or_init(|| Schema::from_specs(self.class.attributes))
    }

    /// Declared names in declaration order, followed by extra names in first-set order.
    pub fn attribute_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.schema().names().map(str::to_string).collect();
        names.extend(self.extra_attribute_names().iter().cloned());
        names
    }

    /// Names written to an open model without being declared. Always empty for strict models.
    pub fn extra_attribute_names(&self) -> &[String] {
        match &self.mode {
            Mode::Strict => &[],
            Mode::Open { extra } => extra,
        }
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.schema().contains(name) || self.extra_attribute_names().iter().any(|n| n == name)
    }

    /// Borrow the stored value. Unset and null attributes both read as `None`.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|value| !value.is_null())
    }

    /// Get an attribute's value, optionally flattened for persistence or serialization.
    pub fn get_attribute(&self, name: &str, flatten: bool) -> Option<Value> {
        self.attribute(name).map(|value| {
            if flatten {
                value.flatten()
            } else {
                value.clone()
            }
        })
    }

    /// Get the values of `names` (all attributes when `None`), in attribute-name order.
    ///
    /// Attributes without a value are included as `Value::Null`.
    pub fn get_attributes(&self, names: Option<&[&str]>, flatten: bool) -> IndexMap<String, Value> {
        self.attribute_names()
            .into_iter()
            .filter(|name| names.map_or(true, |names| names.contains(&name.as_str())))
            .map(|name| {
                let value = self.get_attribute(&name, flatten).unwrap_or_default();
                (name, value)
            })
            .collect()
    }

    /// Set an attribute's value.
    ///
    /// Returns `Ok(false)` without touching the model when it is strict and `name` is
    /// not declared. Coercion failures on declared attributes are returned as errors.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<Value>) -> Result<bool> {
        let value = value.into();
        let declared = self
            .schema()
            .get(name)
            .map(|config| (config.kind, config.model));

        let value = match declared {
            Some((kind, model)) => coerce::coerce(name, kind, model, value, self.options)?,
            None => match &mut self.mode {
                Mode::Strict => return Ok(false),
                Mode::Open { extra } => {
                    if !extra.iter().any(|existing| existing == name) {
                        extra.push(name.to_string());
                    }
                    value
                }
            },
        };

        self.values.insert(name.to_string(), value);
        Ok(true)
    }

    /// Mass-assign values from `source`.
    ///
    /// Populated relations on the source are bridged first, for every name this model
    /// knows; then every pair is applied in the source's own order. Undeclared names
    /// are skipped on strict models.
    pub fn set_attributes<S: AttributeSource>(&mut self, source: S) -> Result<()> {
        for name in self.attribute_names() {
            if let Some(value) = source.populated_relation(&name) {
                self.set_attribute(&name, value)?;
            }
        }

        for (name, value) in source.into_pairs() {
            self.set_attribute(&name, value)?;
        }
        Ok(())
    }

    /// A new instance of the same class, populated from this one's values.
    pub fn copy(&self) -> Result<Model> {
        self.class
            .populate_with(self.options, self.get_attributes(None, false))
    }

    /// Chain-setter: a copy of this model with `name` set to `args`.
    ///
    /// A single argument is set as-is, anything else as a list. Names that the model
    /// would not accept are an [`ModelError::UnknownOperation`].
    pub fn call(&self, name: &str, mut args: Vec<Value>) -> Result<Model> {
        if self.is_strict() && !self.schema().contains(name) {
            return Err(ModelError::UnknownOperation {
                model: self.class.handle.to_string(),
                name: name.to_string(),
            });
        }

        let value = if args.len() == 1 {
            args.remove(0)
        } else {
            Value::List(args)
        };

        let mut copy = self.copy()?;
        copy.set_attribute(name, value)?;
        Ok(copy)
    }

    /// Single-argument form of [`call`](Self::call).
    ///
    /// ```ignore
    /// let entry_type = base.with("name", "News")?.with("handle", "news")?;
    /// ```
    pub fn with(&self, name: &str, value: impl Into<Value>) -> Result<Model> {
        self.call(name, vec![value.into()])
    }

    pub fn attribute_label(&self, name: &str) -> String {
        self.schema()
            .get(name)
            .map(|config| config.label.clone())
            .unwrap_or_else(|| generate_label(name))
    }

    pub fn attribute_labels(&self) -> IndexMap<String, String> {
        self.attribute_names()
            .into_iter()
            .map(|name| {
                let label = self.attribute_label(&name);
                (name, label)
            })
            .collect()
    }

    /// Flattened attributes as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.get_attributes(None, true)
                .into_iter()
                .map(|(name, value)| (name, serde_json::Value::from(value)))
                .collect(),
        )
    }
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class
            && self.get_attributes(None, false) == other.get_attributes(None, false)
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.get_attributes(None, true))
    }
}
