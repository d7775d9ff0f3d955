//! # API Facade
//!
//! A thin facade over the command layer, and the single entry point for clients of
//! the library (the `attrmodel` CLI being the only one today).
//!
//! The facade:
//! - **Normalizes inputs**: raw JSON text into rows, `NAME=VALUE` strings into values
//! - **Applies settings**: model options come from the loaded [`Settings`]
//! - **Dispatches** to the command functions and returns `Result<CmdResult>`
//!
//! It does no I/O and no formatting; that belongs to the client.

use crate::commands;
use crate::commands::helpers::{parse_assignment, parse_rows};
use crate::config::Settings;
use crate::error::Result;

pub use crate::commands::{
    AttributeSummary, ClassSummary, CmdMessage, CmdResult, MessageLevel, ValidationReport,
};

pub struct ModelApi {
    settings: Settings,
}

impl ModelApi {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn classes(&self) -> Result<CmdResult> {
        commands::classes::run()
    }

    /// Populate `handle` models from JSON `input`, applying each `NAME=VALUE`
    /// assignment in order.
    pub fn populate<A: AsRef<str>>(
        &self,
        handle: &str,
        input: &str,
        assignments: &[A],
    ) -> Result<CmdResult> {
        let rows = parse_rows(input)?;
        let assignments = assignments
            .iter()
            .map(|assignment| parse_assignment(assignment.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        commands::populate::run(handle, rows, &assignments, self.settings.model_options())
    }

    pub fn validate(&self, handle: &str, input: &str) -> Result<CmdResult> {
        let rows = parse_rows(input)?;
        commands::validate::run(handle, rows, self.settings.model_options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::DecodePolicy;
    use crate::error::ModelError;

    fn api() -> ModelApi {
        ModelApi::new(Settings::default())
    }

    #[test]
    fn classes_dispatch() {
        assert_eq!(api().classes().unwrap().classes.len(), 6);
    }

    #[test]
    fn populate_parses_input_and_assignments() {
        let result = api()
            .populate(
                "Section",
                r#"{"name": "Blog", "handle": "blog"}"#,
                &["type=single", "id=4"],
            )
            .unwrap();

        assert!(result.single_row);
        let json = result.models_json();
        assert_eq!(json["type"], "single");
        assert_eq!(json["id"], 4);
    }

    #[test]
    fn populate_rejects_bad_assignment() {
        let err = api()
            .populate("Section", "{}", &["type"])
            .unwrap_err();
        assert!(matches!(err, ModelError::Api(_)));
    }

    #[test]
    fn settings_drive_decoding() {
        let strict = ModelApi::new(Settings {
            mixed_decoding: DecodePolicy::Strict,
            ..Settings::default()
        });
        let input = r#"{"fields": "[oops"}"#;

        assert!(api().populate::<&str>("FieldLayout", input, &[]).is_ok());
        assert!(strict.populate::<&str>("FieldLayout", input, &[]).is_err());
    }

    #[test]
    fn validate_dispatch() {
        let result = api()
            .validate("Tag", r#"[{"title": "ok"}, {"title": ""}]"#)
            .unwrap();
        assert_eq!(result.reports.len(), 2);
        assert!(!result.all_valid());
    }
}
