use indexmap::IndexMap;

use crate::model::Model;
use crate::value::Value;

pub mod classes;
pub mod helpers;
pub mod populate;
pub mod validate;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One attribute of a registered class, as shown by `attrmodel classes`.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSummary {
    pub name: &'static str,
    pub kind: &'static str,
    pub label: String,
    pub required: bool,
    pub default: Option<Value>,
    /// Handle of the nested model class, if any.
    pub model: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassSummary {
    pub handle: &'static str,
    pub strict: bool,
    pub attributes: Vec<AttributeSummary>,
}

/// Validation outcome for one input row (1-based).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub row: usize,
    pub errors: IndexMap<String, Vec<String>>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub models: Vec<Model>,
    /// The input was a single object rather than a list of rows.
    pub single_row: bool,
    pub classes: Vec<ClassSummary>,
    pub reports: Vec<ValidationReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_models(mut self, models: Vec<Model>, single_row: bool) -> Self {
        self.models = models;
        self.single_row = single_row;
        self
    }

    pub fn with_classes(mut self, classes: Vec<ClassSummary>) -> Self {
        self.classes = classes;
        self
    }

    pub fn with_reports(mut self, reports: Vec<ValidationReport>) -> Self {
        self.reports = reports;
        self
    }

    pub fn all_valid(&self) -> bool {
        self.reports.iter().all(ValidationReport::is_valid)
    }

    /// Flattened JSON for the populated models: an object for single-row input,
    /// otherwise an array.
    pub fn models_json(&self) -> serde_json::Value {
        match (self.single_row, self.models.as_slice()) {
            (true, [model]) => model.to_json(),
            _ => serde_json::Value::Array(self.models.iter().map(Model::to_json).collect()),
        }
    }
}
