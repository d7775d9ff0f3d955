//! Write-time coercion.
//!
//! Called by [`Model::set_attribute`](crate::model::Model::set_attribute) for declared
//! attributes. Two kinds transform their input:
//!
//! - **DateTime**: falsy input is stored as null (empty strings never make it into a
//!   date attribute). Integer timestamps, in any numeric or string form, are taken as
//!   epoch seconds. Everything else goes through [`parse_date_string`] or, for
//!   `{date, time}` maps, [`parse_date_map`]. Failure is a hard
//!   [`ModelError::Parse`].
//! - **Mixed**: strings that open with `{` or `[` are JSON-decoded. Malformed JSON is
//!   kept as the raw string under [`DecodePolicy::Lenient`] and rejected under
//!   [`DecodePolicy::Strict`]. Maps then become nested models, either of the class
//!   declared on the attribute or of the class named by a `"__model__"` key.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::attributes::AttributeKind;
use crate::error::{ModelError, Result};
use crate::registry::{self, ModelClass};
use crate::value::{Value, MODEL_KEY};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M%p"];

/// What to do with a `Mixed` value that looks like JSON but does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Keep the original string.
    #[default]
    Lenient,
    /// Fail the write with [`ModelError::Decode`].
    Strict,
}

impl FromStr for DecodePolicy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(DecodePolicy::Lenient),
            "strict" => Ok(DecodePolicy::Strict),
            other => Err(ModelError::Config(format!(
                "Unknown mixed decoding policy '{}' (expected lenient or strict)",
                other
            ))),
        }
    }
}

// Accepts the same spellings as `FromStr`, from files and environment alike.
impl<'de> Deserialize<'de> for DecodePolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Per-model coercion options, inherited by nested models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub mixed_decoding: DecodePolicy,
}

impl Options {
    pub fn strict_decoding() -> Self {
        Self {
            mixed_decoding: DecodePolicy::Strict,
        }
    }
}

/// Coerce `value` for a declared attribute of the given kind.
pub(crate) fn coerce(
    attribute: &str,
    kind: AttributeKind,
    model: Option<&'static ModelClass>,
    value: Value,
    options: Options,
) -> Result<Value> {
    match kind {
        AttributeKind::DateTime => to_datetime(attribute, value),
        AttributeKind::Mixed => to_mixed(attribute, model, value, options),
        _ => Ok(value),
    }
}

fn to_datetime(attribute: &str, value: Value) -> Result<Value> {
    if !value.is_truthy() {
        return Ok(Value::Null);
    }

    if matches!(value, Value::DateTime(_)) {
        return Ok(value);
    }

    let parsed = match timestamp_of(&value) {
        Some(ts) => Utc.timestamp_opt(ts, 0).single(),
        None => match &value {
            Value::String(s) => parse_date_string(s),
            Value::Map(map) => parse_date_map(map),
            _ => None,
        },
    };

    parsed.map(Value::DateTime).ok_or_else(|| ModelError::Parse {
        attribute: attribute.to_string(),
        value: value.to_string(),
    })
}

/// Integer timestamp carried by a value, if it is one.
pub fn timestamp_of(value: &Value) -> Option<i64> {
    match value {
        Value::Int(v) => Some(*v),
        Value::Float(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => Some(*v as i64),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Parse a date string. Values without an offset are taken as UTC.
pub fn parse_date_string(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Some(dt.and_utc());
    }
    parse_date(input)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Parse a `{date, time}` map, as sent by date and time pickers.
///
/// `time` is optional and defaults to midnight.
pub fn parse_date_map(map: &IndexMap<String, Value>) -> Option<DateTime<Utc>> {
    let date = parse_date(map.get("date")?.as_str()?.trim())?;

    let time = match map.get("time").and_then(Value::as_str).map(str::trim) {
        Some(time) if !time.is_empty() => TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(time, fmt).ok())?,
        _ => NaiveTime::from_hms_opt(0, 0, 0)?,
    };

    Some(date.and_time(time).and_utc())
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
}

fn to_mixed(
    attribute: &str,
    model: Option<&'static ModelClass>,
    value: Value,
    options: Options,
) -> Result<Value> {
    let value = match value {
        Value::String(raw) if raw.starts_with(['{', '[']) => {
            match serde_json::from_str::<serde_json::Value>(&raw) {
                Ok(json) => Value::from(json),
                Err(source) => match options.mixed_decoding {
                    DecodePolicy::Strict => {
                        return Err(ModelError::Decode {
                            attribute: attribute.to_string(),
                            source,
                        })
                    }
                    DecodePolicy::Lenient => {
                        tracing::debug!(
                            attribute,
                            error = %source,
                            "keeping undecodable JSON as a raw string"
                        );
                        Value::String(raw)
                    }
                },
            }
        }
        other => other,
    };

    match (value, model) {
        (Value::Map(map), Some(class)) => populate_nested(class, map, options),
        (Value::List(items), Some(class)) => items
            .into_iter()
            .map(|item| match item {
                Value::Map(map) => populate_nested(class, map, options),
                other => Ok(other),
            })
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        (value @ (Value::Map(_) | Value::List(_)), None) => expand_models(value, options),
        (value, _) => Ok(value),
    }
}

fn populate_nested(
    class: &'static ModelClass,
    mut map: IndexMap<String, Value>,
    options: Options,
) -> Result<Value> {
    map.shift_remove(MODEL_KEY);
    class.populate_with(options, map).map(Value::from)
}

/// Recursively turn maps carrying a `"__model__"` handle into model instances.
pub fn expand_models(value: Value, options: Options) -> Result<Value> {
    match value {
        Value::Map(mut map) => match map.shift_remove(MODEL_KEY) {
            Some(handle) => {
                let class = registry::resolve(&handle.to_string())?;
                class.populate_with(options, map).map(Value::from)
            }
            None => map
                .into_iter()
                .map(|(key, value)| expand_models(value, options).map(|value| (key, value)))
                .collect::<Result<IndexMap<_, _>>>()
                .map(Value::Map),
        },
        Value::List(items) => items
            .into_iter()
            .map(|item| expand_models(item, options))
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models;
    use serde_json::json;

    fn date(attribute_value: Value) -> Result<Value> {
        coerce(
            "dateCreated",
            AttributeKind::DateTime,
            None,
            attribute_value,
            Options::default(),
        )
    }

    fn mixed(value: Value, options: Options) -> Result<Value> {
        coerce("settings", AttributeKind::Mixed, None, value, options)
    }

    #[test]
    fn falsy_dates_become_null() {
        assert_eq!(date(Value::from("")).unwrap(), Value::Null);
        assert_eq!(date(Value::Int(0)).unwrap(), Value::Null);
        assert_eq!(date(Value::from("0")).unwrap(), Value::Null);
        assert_eq!(date(Value::Null).unwrap(), Value::Null);
        assert_eq!(date(Value::Bool(false)).unwrap(), Value::Null);
    }

    #[test]
    fn timestamps_in_any_form() {
        let expected = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        for input in [
            Value::Int(1_700_000_000),
            Value::Float(1_700_000_000.0),
            Value::from("1700000000"),
        ] {
            assert_eq!(date(input).unwrap(), Value::DateTime(expected));
        }
    }

    #[test]
    fn date_strings() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        for input in [
            "2024-05-17 09:30:00",
            "2024-05-17T09:30:00",
            "2024-05-17 09:30",
            "2024-05-17T11:30:00+02:00",
            "Fri, 17 May 2024 09:30:00 +0000",
        ] {
            assert_eq!(
                date(Value::from(input)).unwrap(),
                Value::DateTime(expected),
                "{}",
                input
            );
        }
    }

    #[test]
    fn bare_dates_are_midnight() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 17, 0, 0, 0).unwrap();
        assert_eq!(date(Value::from("2024-05-17")).unwrap(), Value::DateTime(expected));
        assert_eq!(date(Value::from("05/17/2024")).unwrap(), Value::DateTime(expected));
    }

    #[test]
    fn date_time_maps() {
        let input = Value::from(json!({"date": "2024-05-17", "time": "2:15 PM"}));
        let expected = Utc.with_ymd_and_hms(2024, 5, 17, 14, 15, 0).unwrap();
        assert_eq!(date(input).unwrap(), Value::DateTime(expected));

        let date_only = Value::from(json!({"date": "2024-05-17"}));
        assert_eq!(
            date(date_only).unwrap(),
            Value::DateTime(Utc.with_ymd_and_hms(2024, 5, 17, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn unparseable_dates_fail() {
        let err = date(Value::from("next tuesday-ish")).unwrap_err();
        assert!(matches!(
            err,
            ModelError::Parse { ref attribute, ref value }
                if attribute == "dateCreated" && value == "next tuesday-ish"
        ));
        assert!(date(Value::Bool(true)).is_err());
    }

    #[test]
    fn existing_dates_are_kept() {
        let now = Utc::now();
        assert_eq!(date(Value::DateTime(now)).unwrap(), Value::DateTime(now));
    }

    #[test]
    fn mixed_decodes_json_strings() {
        let decoded = mixed(Value::from(r#"{"a": [1, 2]}"#), Options::default()).unwrap();
        assert_eq!(decoded, Value::from(json!({"a": [1, 2]})));

        let list = mixed(Value::from("[true]"), Options::default()).unwrap();
        assert_eq!(list, Value::List(vec![Value::Bool(true)]));
    }

    #[test]
    fn mixed_leaves_plain_strings() {
        assert_eq!(
            mixed(Value::from("hello"), Options::default()).unwrap(),
            Value::from("hello")
        );
    }

    #[test]
    fn lenient_policy_keeps_malformed_json() {
        let raw = Value::from("{not json");
        assert_eq!(mixed(raw.clone(), Options::default()).unwrap(), raw);
    }

    #[test]
    fn strict_policy_rejects_malformed_json() {
        let err = mixed(Value::from("[1, 2"), Options::strict_decoding()).unwrap_err();
        assert!(matches!(err, ModelError::Decode { ref attribute, .. } if attribute == "settings"));
    }

    #[test]
    fn declared_model_class_builds_nested_model() {
        let value = Value::from(json!({"id": 4, "name": "Blog", "handle": "blog"}));
        let nested = coerce(
            "section",
            AttributeKind::Mixed,
            Some(&models::SECTION),
            value,
            Options::default(),
        )
        .unwrap();

        let section = nested.as_model().expect("nested model");
        assert_eq!(section.class_handle(), "Section");
        assert_eq!(section.attribute("handle"), Some(&Value::from("blog")));
    }

    #[test]
    fn declared_model_class_maps_lists() {
        let value = Value::from(json!([{"handle": "a"}, {"handle": "b"}]));
        let nested = coerce(
            "sections",
            AttributeKind::Mixed,
            Some(&models::SECTION),
            value,
            Options::default(),
        )
        .unwrap();

        let items = nested.as_list().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.as_model().is_some()));
    }

    #[test]
    fn model_marker_expands_nested_maps() {
        let value = Value::from(json!({
            "primary": {"__model__": "Section", "handle": "blog"},
            "plain": {"x": 1}
        }));
        let expanded = expand_models(value, Options::default()).unwrap();
        let map = expanded.as_map().unwrap();

        assert_eq!(map["primary"].as_model().unwrap().class_handle(), "Section");
        assert_eq!(map["plain"], Value::from(json!({"x": 1})));
    }

    #[test]
    fn unknown_model_marker_is_an_error() {
        let value = Value::from(json!([{"__model__": "Widget"}]));
        assert!(matches!(
            expand_models(value, Options::default()),
            Err(ModelError::UnknownModel(handle)) if handle == "Widget"
        ));
    }

    #[test]
    fn other_kinds_pass_through() {
        let value = Value::from("  spaced  ");
        assert_eq!(
            coerce("title", AttributeKind::String, None, value.clone(), Options::default())
                .unwrap(),
            value
        );
    }

    #[test]
    fn decode_policy_spellings() {
        assert_eq!("Strict".parse::<DecodePolicy>().unwrap(), DecodePolicy::Strict);
        assert_eq!(" lenient ".parse::<DecodePolicy>().unwrap(), DecodePolicy::Lenient);
        assert!("loose".parse::<DecodePolicy>().is_err());

        let parsed: DecodePolicy = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(parsed, DecodePolicy::Strict);
    }
}
