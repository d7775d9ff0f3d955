//! # Element Types
//!
//! An element type describes one kind of content element: what it is called, which
//! capabilities it has, which model class holds its rows and which loose model class
//! holds the criteria used to find them.
//!
//! Element types never talk to a database. They turn rows into models, criteria params
//! into a criteria model, and criteria into the column [`Filter`]s a query layer would
//! apply.

use indexmap::IndexMap;

use crate::error::Result;
use crate::model::Model;
use crate::registry::ModelClass;
use crate::value::Value;

mod tag;

pub use tag::Tag;

/// A place in the control panel that lists elements, e.g. one tag group.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub key: String,
    pub label: String,
    /// Criteria params that select the elements of this source.
    pub criteria: IndexMap<String, Value>,
}

/// One column condition implied by a criteria model.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: &'static str,
    pub value: Value,
}

impl Filter {
    pub fn new(column: &'static str, value: Value) -> Self {
        Self { column, value }
    }
}

/// A legacy criteria param or form that was accepted and rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deprecation {
    pub key: &'static str,
    pub message: &'static str,
}

pub trait ElementType {
    /// Display name.
    fn name(&self) -> &'static str;

    fn has_content(&self) -> bool {
        false
    }

    fn has_titles(&self) -> bool {
        false
    }

    fn is_localized(&self) -> bool {
        false
    }

    /// Class of the element models.
    fn element_class(&self) -> &'static ModelClass;

    /// Class of the criteria models.
    fn criteria_class(&self) -> &'static ModelClass;

    /// Columns shown when listing elements, as attribute name to label.
    fn table_attributes(&self, source: Option<&str>) -> Vec<(&'static str, &'static str)>;

    /// Sources keyed by source key, built from the element's grouping models.
    fn sources(&self, groups: &[Model]) -> IndexMap<String, Source>;

    /// A criteria model, seeded with the criteria of `source` when given.
    fn criteria(&self, source: Option<&Source>) -> Result<Model> {
        self.criteria_class()
            .populate(source.map(|source| source.criteria.clone()))
    }

    /// Rewrite deprecated params in place, reporting each one that was used.
    fn normalize_criteria(&self, _criteria: &mut Model) -> Result<Vec<Deprecation>> {
        Ok(Vec::new())
    }

    /// Column conditions implied by `criteria`.
    fn criteria_filters(&self, _criteria: &Model) -> Vec<Filter> {
        Vec::new()
    }

    /// Build an element model from a result row.
    fn populate_element_model(&self, row: Value) -> Result<Model> {
        self.element_class().populate(row)
    }
}
