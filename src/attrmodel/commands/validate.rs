use crate::commands::{CmdMessage, CmdResult, ValidationReport};
use crate::error::Result;
use crate::model::Options;
use crate::registry;

use super::helpers::Rows;

/// Populate and validate one `handle` model per row.
///
/// Invalid rows are reported, not returned as errors.
pub fn run(handle: &str, input: Rows, options: Options) -> Result<CmdResult> {
    let class = registry::resolve(handle)?;
    let models = class.populate_models_with(options, input.rows)?;

    let mut result = CmdResult::default();
    let mut reports = Vec::with_capacity(models.len());

    for (index, mut model) in models.into_iter().enumerate() {
        let row = index + 1;
        if model.validate() {
            result.add_message(CmdMessage::success(format!("Row {}: valid", row)));
        } else {
            for message in model.all_errors() {
                result.add_message(CmdMessage::error(format!("Row {}: {}", row, message)));
            }
        }
        reports.push(ValidationReport {
            row,
            errors: model.errors().clone(),
        });
    }

    let invalid = reports.iter().filter(|report| !report.is_valid()).count();
    if invalid > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} of {} {} rows failed validation.",
            invalid,
            reports.len(),
            class.handle
        )));
    }

    Ok(result.with_reports(reports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(rows: Vec<serde_json::Value>) -> Rows {
        Rows { rows, single: false }
    }

    #[test]
    fn all_valid() {
        let input = rows(vec![json!({"name": "Topics", "handle": "topics"})]);
        let result = run("TagGroup", input, Options::default()).unwrap();

        assert!(result.all_valid());
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Row 1: valid");
    }

    #[test]
    fn invalid_rows_are_reported() {
        let input = rows(vec![
            json!({"name": "Topics", "handle": "topics"}),
            json!({"name": "", "handle": "2fast"}),
        ]);
        let result = run("TagGroup", input, Options::default()).unwrap();

        assert!(!result.all_valid());
        let report = &result.reports[1];
        assert_eq!(report.row, 2);
        assert_eq!(report.errors["name"], vec!["Name cannot be blank."]);
        assert_eq!(
            report.errors["handle"],
            vec!["\"2fast\" isn't a valid handle."]
        );

        let contents: Vec<_> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert!(contents.contains(&"Row 2: Name cannot be blank."));
        assert_eq!(
            contents.last(),
            Some(&"1 of 2 TagGroup rows failed validation.")
        );
    }
}
