//! Model classes and the registry of known classes.
//!
//! A [`ModelClass`] is a `static` descriptor: a handle, its attribute declarations and
//! whether it is strict. Classes refer to each other directly (`&'static ModelClass`)
//! when an attribute holds a nested model. The registry is only consulted when a class
//! has to be found by name, e.g. a flattened nested model carrying `"__model__"`, or a
//! handle given on the command line.

use std::fmt;

use indexmap::IndexMap;

use crate::attributes::AttributeSpec;
use crate::error::{ModelError, Result};
use crate::model::{AttributeSource, Model, Options};
use crate::models;

/// Static description of a model class.
pub struct ModelClass {
    pub handle: &'static str,
    pub attributes: &'static [AttributeSpec],
    /// Strict classes reject writes to undeclared attributes.
    pub strict: bool,
}

impl ModelClass {
    pub const fn new(handle: &'static str, attributes: &'static [AttributeSpec]) -> Self {
        Self {
            handle,
            attributes,
            strict: true,
        }
    }

    /// Allow extra, undeclared attributes on instances of this class.
    pub const fn loose(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Construct an instance of this class from `values`.
    pub fn populate<S: AttributeSource>(&'static self, values: S) -> Result<Model> {
        self.populate_with(Options::default(), values)
    }

    pub fn populate_with<S: AttributeSource>(
        &'static self,
        options: Options,
        values: S,
    ) -> Result<Model> {
        let mut model = Model::with_options(self, options)?;
        model.set_attributes(values)?;
        Ok(model)
    }

    /// Construct one instance per row.
    pub fn populate_models<I>(&'static self, rows: I) -> Result<Vec<Model>>
    where
        I: IntoIterator,
        I::Item: AttributeSource,
    {
        self.populate_models_with(Options::default(), rows)
    }

    pub fn populate_models_with<I>(&'static self, options: Options, rows: I) -> Result<Vec<Model>>
    where
        I: IntoIterator,
        I::Item: AttributeSource,
    {
        rows.into_iter()
            .map(|row| self.populate_with(options, row))
            .collect()
    }

    /// Construct one instance per row, keyed by the string form of `index_by`.
    ///
    /// Later rows replace earlier ones with the same key.
    pub fn populate_models_indexed<I>(
        &'static self,
        rows: I,
        index_by: &str,
    ) -> Result<IndexMap<String, Model>>
    where
        I: IntoIterator,
        I::Item: AttributeSource,
    {
        self.populate_models_indexed_with(Options::default(), rows, index_by)
    }

    pub fn populate_models_indexed_with<I>(
        &'static self,
        options: Options,
        rows: I,
        index_by: &str,
    ) -> Result<IndexMap<String, Model>>
    where
        I: IntoIterator,
        I::Item: AttributeSource,
    {
        let mut models = IndexMap::new();
        for row in rows {
            let model = self.populate_with(options, row)?;
            let key = model
                .attribute(index_by)
                .map(ToString::to_string)
                .unwrap_or_default();
            models.insert(key, model);
        }
        Ok(models)
    }
}

impl fmt::Debug for ModelClass {
    // Nested classes can refer back to each other, so only names are printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelClass")
            .field("handle", &self.handle)
            .field("strict", &self.strict)
            .field(
                "attributes",
                &self.attributes.iter().map(|spec| spec.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl PartialEq for ModelClass {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for ModelClass {}

/// Every class that can be found by handle.
pub static MODELS: &[&ModelClass] = &[
    &models::SECTION,
    &models::FIELD_LAYOUT,
    &models::ENTRY_TYPE,
    &models::TAG_GROUP,
    &models::TAG,
    &models::TAG_CRITERIA,
];

/// Look up a class by handle.
pub fn lookup(handle: &str) -> Option<&'static ModelClass> {
    MODELS.iter().copied().find(|class| class.handle == handle)
}

/// Like [`lookup`], but unknown handles are an error.
pub fn resolve(handle: &str) -> Result<&'static ModelClass> {
    lookup(handle).ok_or_else(|| ModelError::UnknownModel(handle.to_string()))
}

pub fn handles() -> impl Iterator<Item = &'static str> {
    MODELS.iter().map(|class| class.handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use serde_json::json;

    #[test]
    fn registry_has_expected_entries() {
        assert!(lookup("Section").is_some());
        assert!(lookup("FieldLayout").is_some());
        assert!(lookup("EntryType").is_some());
        assert!(lookup("TagGroup").is_some());
        assert!(lookup("Tag").is_some());
        assert!(lookup("TagCriteria").is_some());
    }

    #[test]
    fn unknown_handle_returns_none() {
        assert!(lookup("Nonexistent").is_none());
        assert!(matches!(
            resolve("Nonexistent"),
            Err(ModelError::UnknownModel(name)) if name == "Nonexistent"
        ));
    }

    #[test]
    fn handles_are_unique() {
        let all: Vec<_> = handles().collect();
        let mut deduped = all.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(all.len(), deduped.len());
    }

    #[test]
    fn classes_compare_by_identity() {
        assert_eq!(lookup("Tag").unwrap(), &models::TAG);
        assert_ne!(lookup("Tag").unwrap(), &models::TAG_GROUP);
    }

    #[test]
    fn populate_models_builds_one_per_row() {
        let rows = vec![
            json!({"id": 1, "name": "Blog", "handle": "blog"}),
            json!({"id": 2, "name": "News", "handle": "news"}),
        ];
        let sections = models::SECTION.populate_models(rows).unwrap();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].attribute("handle"), Some(&Value::from("news")));
    }

    #[test]
    fn populate_models_indexed_keys_by_attribute() {
        let rows = vec![
            json!({"id": 1, "name": "Blog", "handle": "blog"}),
            json!({"id": 2, "name": "News", "handle": "news"}),
        ];
        let sections = models::SECTION
            .populate_models_indexed(rows, "handle")
            .unwrap();

        let keys: Vec<_> = sections.keys().cloned().collect();
        assert_eq!(keys, vec!["blog", "news"]);
        assert_eq!(sections["news"].attribute("id"), Some(&Value::Int(2)));
    }

    #[test]
    fn populate_models_indexed_with_applies_options() {
        let rows = || vec![json!({"id": 3, "fields": "[oops"})];

        let lenient = models::FIELD_LAYOUT
            .populate_models_indexed(rows(), "id")
            .unwrap();
        assert_eq!(lenient["3"].attribute("fields"), Some(&Value::from("[oops")));

        let err = models::FIELD_LAYOUT
            .populate_models_indexed_with(Options::strict_decoding(), rows(), "id")
            .unwrap_err();
        assert!(matches!(err, ModelError::Decode { .. }));
    }
}
