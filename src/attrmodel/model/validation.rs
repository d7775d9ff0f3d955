//! Schema-derived validation.
//!
//! Rules come from the attribute declarations rather than a separate rule list:
//!
//! | Rule | Source |
//! |------|--------|
//! | required | `AttributeSpec::required` |
//! | type check | the attribute's kind |
//! | max length | `max_length` (handles default to 255) |
//! | min / max | `min`, `max` on `Int` and `Number` |
//! | membership | `values` on `Enum` |
//! | handle format, reserved words | `Handle` kind |
//!
//! Blank values are only checked by the required rule. Each failure is recorded per
//! attribute and also emitted as a `tracing` warning.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::Model;
use crate::attributes::{AttributeConfig, AttributeKind};
use crate::value::Value;

static HANDLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("handle pattern compiles"));

const RESERVED_HANDLES: &[&str] = &[
    "id",
    "dateCreated",
    "dateUpdated",
    "uid",
    "title",
    "this",
    "true",
    "false",
    "null",
];

impl Model {
    /// Validate every declared attribute, clearing previous errors first.
    pub fn validate(&mut self) -> bool {
        self.validate_attributes(None, true)
    }

    /// Validate the declared attributes in `names` (all when `None`).
    ///
    /// Returns `true` when the model has no errors afterwards. Failures are logged
    /// as warnings in addition to being recorded.
    pub fn validate_attributes(&mut self, names: Option<&[&str]>, clear_errors: bool) -> bool {
        if clear_errors {
            self.errors.clear();
        }

        let failures: Vec<(&'static str, String)> = self
            .schema()
            .iter()
            .filter(|config| names.map_or(true, |names| names.contains(&config.name)))
            .flat_map(|config| {
                let value = self.values.get(config.name).unwrap_or(&Value::Null);
                check(config, value)
                    .into_iter()
                    .map(move |message| (config.name, message))
            })
            .collect();

        for (attribute, message) in failures {
            self.add_error(attribute, message);
        }

        if !self.has_errors() {
            return true;
        }

        for (attribute, messages) in &self.errors {
            for message in messages {
                tracing::warn!(
                    model = self.class.handle,
                    attribute = attribute.as_str(),
                    "{}->{} failed validation: {}",
                    self.class.handle,
                    attribute,
                    message
                );
            }
        }

        false
    }

    pub fn errors(&self) -> &IndexMap<String, Vec<String>> {
        &self.errors
    }

    pub fn attribute_errors(&self, attribute: &str) -> &[String] {
        self.errors
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn first_error(&self, attribute: &str) -> Option<&str> {
        self.attribute_errors(attribute).first().map(String::as_str)
    }

    /// All error messages in a single list.
    pub fn all_errors(&self) -> Vec<String> {
        self.errors.values().flatten().cloned().collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn add_error(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(attribute.into())
            .or_default()
            .push(message.into());
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

fn check(config: &AttributeConfig, value: &Value) -> Vec<String> {
    let label = &config.label;

    if value.is_blank() {
        return if config.required {
            vec![format!("{} cannot be blank.", label)]
        } else {
            Vec::new()
        };
    }

    if !config.kind.accepts(value) {
        return vec![format!("{} {}", label, config.kind.mismatch_message())];
    }

    let mut messages = Vec::new();

    if let (Some(max_length), Value::String(s)) = (config.max_length, value) {
        if s.chars().count() > max_length {
            messages.push(format!(
                "{} should contain at most {} characters.",
                label, max_length
            ));
        }
    }

    if matches!(config.kind, AttributeKind::Int | AttributeKind::Number) {
        if let Some(number) = numeric(value) {
            if let Some(min) = config.min {
                if number < min as f64 {
                    messages.push(format!("{} must be no less than {}.", label, min));
                }
            }
            if let Some(max) = config.max {
                if number > max as f64 {
                    messages.push(format!("{} must be no greater than {}.", label, max));
                }
            }
        }
    }

    if config.kind == AttributeKind::Enum && !config.values.is_empty() {
        if let Some(s) = value.as_str() {
            if !config.values.contains(&s) {
                messages.push(format!("{} is invalid.", label));
            }
        }
    }

    if config.kind == AttributeKind::Handle {
        if let Some(handle) = value.as_str() {
            if !is_valid_handle(handle) {
                messages.push(format!("\"{}\" isn't a valid handle.", handle));
            } else if is_reserved_handle(handle) {
                messages.push(format!("\"{}\" is a reserved word.", handle));
            }
        }
    }

    messages
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        other => other.as_f64(),
    }
}

/// A letter followed by letters, digits or underscores.
pub fn is_valid_handle(handle: &str) -> bool {
    HANDLE_PATTERN.is_match(handle)
}

fn is_reserved_handle(handle: &str) -> bool {
    RESERVED_HANDLES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{AttributeSpec, DefaultValue};
    use crate::registry::ModelClass;
    use serde_json::json;

    static WIDGET_ATTRIBUTES: &[AttributeSpec] = &[
        AttributeSpec::new("name", AttributeKind::String)
            .required()
            .max_length(5),
        AttributeSpec::new("handle", AttributeKind::Handle),
        AttributeSpec::new("size", AttributeKind::Int).min(1).max(10),
        AttributeSpec::new("kind", AttributeKind::Enum)
            .values(&["a", "b"])
            .default(DefaultValue::Str("a")),
        AttributeSpec::new("ratio", AttributeKind::Number),
    ];
    static WIDGET: ModelClass = ModelClass::new("Widget", WIDGET_ATTRIBUTES);

    fn widget(values: serde_json::Value) -> Model {
        WIDGET.populate(values).unwrap()
    }

    #[test]
    fn valid_model_passes() {
        let mut model = widget(json!({"name": "bolt", "handle": "bolt", "size": 3}));
        assert!(model.validate());
        assert!(!model.has_errors());
        assert!(model.all_errors().is_empty());
    }

    #[test]
    fn required_blank_fails() {
        let mut model = widget(json!({"name": ""}));
        assert!(!model.validate());
        assert_eq!(model.first_error("name"), Some("Name cannot be blank."));
    }

    #[test]
    fn optional_blank_is_skipped() {
        let mut model = widget(json!({"name": "x", "size": null, "handle": ""}));
        assert!(model.validate());
    }

    #[test]
    fn max_length_counts_characters() {
        let mut ok = widget(json!({"name": "ééééé"}));
        assert!(ok.validate());

        let mut too_long = widget(json!({"name": "toolong"}));
        assert!(!too_long.validate());
        assert_eq!(
            too_long.first_error("name"),
            Some("Name should contain at most 5 characters.")
        );
    }

    #[test]
    fn type_mismatch_is_reported_once() {
        let mut model = widget(json!({"name": "x", "size": "big", "ratio": true}));
        assert!(!model.validate());
        assert_eq!(model.attribute_errors("size"), &["Size must be an integer."]);
        assert_eq!(model.attribute_errors("ratio"), &["Ratio must be a number."]);
    }

    #[test]
    fn numeric_bounds() {
        let mut model = widget(json!({"name": "x", "size": 11}));
        assert!(!model.validate());
        assert_eq!(
            model.first_error("size"),
            Some("Size must be no greater than 10.")
        );

        let mut model = widget(json!({"name": "x", "size": "0"}));
        assert!(!model.validate());
        assert_eq!(model.first_error("size"), Some("Size must be no less than 1."));
    }

    #[test]
    fn enum_membership() {
        let mut model = widget(json!({"name": "x", "kind": "c"}));
        assert!(!model.validate());
        assert_eq!(model.first_error("kind"), Some("Kind is invalid."));
    }

    #[test]
    fn handle_format_and_reserved_words() {
        let mut bad = widget(json!({"name": "x", "handle": "9lives"}));
        assert!(!bad.validate());
        assert_eq!(
            bad.first_error("handle"),
            Some("\"9lives\" isn't a valid handle.")
        );

        let mut reserved = widget(json!({"name": "x", "handle": "Title"}));
        assert!(!reserved.validate());
        assert_eq!(
            reserved.first_error("handle"),
            Some("\"Title\" is a reserved word.")
        );
    }

    #[test]
    fn validate_clears_previous_errors() {
        let mut model = widget(json!({"name": ""}));
        assert!(!model.validate());

        model.set_attribute("name", "ok").unwrap();
        assert!(model.validate());
        assert!(model.errors().is_empty());
    }

    #[test]
    fn validate_subset_without_clearing() {
        let mut model = widget(json!({"name": "", "size": 99}));
        model.add_error("custom", "Custom problem.");

        assert!(!model.validate_attributes(Some(&["size"]), false));
        assert_eq!(model.attribute_errors("custom"), &["Custom problem."]);
        assert!(model.attribute_errors("name").is_empty());
        assert_eq!(model.all_errors().len(), 2);
    }

    #[test]
    fn clear_errors_empties_everything() {
        let mut model = widget(json!({"name": ""}));
        model.validate();
        model.clear_errors();
        assert!(!model.has_errors());
    }

    #[test]
    fn handle_helper() {
        assert!(is_valid_handle("blogPosts_2"));
        assert!(!is_valid_handle("_private"));
        assert!(!is_valid_handle("with space"));
        assert!(!is_valid_handle(""));
    }
}
