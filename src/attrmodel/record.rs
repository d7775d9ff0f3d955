//! Table rows with eagerly loaded relations.
//!
//! A [`Record`] is the smallest thing that can stand in for a database row when
//! populating models: a set of column values plus the relations that were loaded
//! alongside it. Nothing here queries or persists anything.
//!
//! When a record is mass-assigned into a [`Model`](crate::model::Model), any loaded
//! relation whose name matches a model attribute is written first, so a model with a
//! `section` attribute picks up the loaded section row without extra plumbing.

use indexmap::IndexMap;

use crate::error::{ModelError, Result};
use crate::model::AttributeSource;
use crate::value::Value;

/// A named one-to-one link from a record to a row in another table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub name: &'static str,
    pub table: &'static str,
    /// Column on the related table.
    pub foreign_key: &'static str,
    /// Column on this record holding the related id.
    pub local_key: &'static str,
}

impl Relation {
    pub const fn has_one(
        name: &'static str,
        table: &'static str,
        foreign_key: &'static str,
        local_key: &'static str,
    ) -> Self {
        Self {
            name,
            table,
            foreign_key,
            local_key,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct RecordClass {
    pub table: &'static str,
    pub relations: &'static [Relation],
}

impl RecordClass {
    pub const fn new(table: &'static str, relations: &'static [Relation]) -> Self {
        Self { table, relations }
    }

    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.iter().find(|relation| relation.name == name)
    }

    /// A record of this class holding `columns`, with no relations loaded.
    pub fn record<S: AttributeSource>(&'static self, columns: S) -> Record {
        Record {
            class: self,
            columns: columns.into_pairs().into_iter().collect(),
            related: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Record {
    class: &'static RecordClass,
    columns: IndexMap<String, Value>,
    related: IndexMap<String, Value>,
}

impl Record {
    pub fn class(&self) -> &'static RecordClass {
        self.class
    }

    pub fn column(&self, name: &str) -> Option<&Value> {
        self.columns.get(name)
    }

    pub fn columns(&self) -> &IndexMap<String, Value> {
        &self.columns
    }

    pub fn set_column(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.columns.insert(name.into(), value.into());
    }

    /// Attach the loaded value of relation `name`.
    pub fn populate_relation(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        if self.class.relation(name).is_none() {
            return Err(ModelError::UnknownRelation {
                table: self.class.table.to_string(),
                name: name.to_string(),
            });
        }
        self.related.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Builder form of [`populate_relation`](Self::populate_relation).
    pub fn with_relation(mut self, name: &str, value: impl Into<Value>) -> Result<Self> {
        self.populate_relation(name, value)?;
        Ok(self)
    }

    pub fn is_relation_populated(&self, name: &str) -> bool {
        self.related.contains_key(name)
    }

    pub fn related(&self, name: &str) -> Option<&Value> {
        self.related.get(name)
    }
}

impl AttributeSource for Record {
    fn populated_relation(&self, name: &str) -> Option<Value> {
        self.related.get(name).cloned()
    }

    fn into_pairs(self) -> Vec<(String, Value)> {
        self.columns.into_iter().collect()
    }
}

impl AttributeSource for &Record {
    fn populated_relation(&self, name: &str) -> Option<Value> {
        self.related.get(name).cloned()
    }

    fn into_pairs(self) -> Vec<(String, Value)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

static ENTRY_TYPE_RELATIONS: &[Relation] = &[
    Relation::has_one("section", "sections", "id", "sectionId"),
    Relation::has_one("fieldLayout", "fieldlayouts", "id", "fieldLayoutId"),
];

/// The `entrytypes` table.
pub static ENTRY_TYPE_RECORD: RecordClass = RecordClass::new("entrytypes", ENTRY_TYPE_RELATIONS);
