use attrmodel::attributes::{AttributeKind, AttributeSpec};
use attrmodel::error::ModelError;
use attrmodel::model::{Model, Options};
use attrmodel::models::{ENTRY_TYPE, SECTION, TAG, TAG_CRITERIA};
use attrmodel::record::ENTRY_TYPE_RECORD;
use attrmodel::registry::ModelClass;
use attrmodel::value::Value;
use chrono::{TimeZone, Utc};
use serde_json::json;

static NOTE_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("a", AttributeKind::Int),
    AttributeSpec::new("b", AttributeKind::Int),
    AttributeSpec::new("body", AttributeKind::String),
    AttributeSpec::new("publishedAt", AttributeKind::DateTime),
    AttributeSpec::new("meta", AttributeKind::Mixed),
];
static NOTE: ModelClass = ModelClass::new("Note", NOTE_ATTRIBUTES);
static OPEN_NOTE: ModelClass = ModelClass::new("OpenNote", NOTE_ATTRIBUTES).loose();

#[test]
fn set_then_get_returns_coerced_value() {
    let mut note = Model::new(&NOTE).unwrap();

    note.set_attribute("a", 1i64).unwrap();
    note.set_attribute("body", "hello").unwrap();
    note.set_attribute("publishedAt", "2020-02-03").unwrap();
    note.set_attribute("meta", r#"{"tags": ["x"]}"#).unwrap();

    assert_eq!(note.get_attribute("a", false), Some(Value::Int(1)));
    assert_eq!(note.get_attribute("body", false), Some(Value::from("hello")));
    assert_eq!(
        note.get_attribute("publishedAt", false),
        Some(Value::DateTime(
            Utc.with_ymd_and_hms(2020, 2, 3, 0, 0, 0).unwrap()
        ))
    );
    assert_eq!(
        note.get_attribute("meta", false),
        Some(Value::from(json!({"tags": ["x"]})))
    );
}

#[test]
fn strict_model_ignores_unknown_names() {
    let mut note = Model::new(&NOTE).unwrap();
    let names = note.attribute_names();

    assert!(!note.set_attribute("unknown", 5i64).unwrap());
    assert_eq!(note.attribute_names(), names);
}

#[test]
fn loose_model_lists_unknown_name_once() {
    let mut note = Model::new(&OPEN_NOTE).unwrap();

    assert!(note.set_attribute("unknown", 5i64).unwrap());
    assert!(note.set_attribute("unknown", 6i64).unwrap());

    let names = note.attribute_names();
    assert_eq!(names.iter().filter(|name| *name == "unknown").count(), 1);
    assert_eq!(note.get_attribute("unknown", false), Some(Value::Int(6)));
}

#[test]
fn loose_model_keeps_json_key_order() {
    let criteria = TAG_CRITERIA
        .populate(json!({"zeta": 1, "alpha": 2}))
        .unwrap();

    assert_eq!(criteria.extra_attribute_names(), ["zeta", "alpha"]);

    let names = criteria.attribute_names();
    assert_eq!(&names[names.len() - 2..], ["zeta", "alpha"]);

    let json = criteria.to_json();
    let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, names);
}

#[test]
fn date_time_coercion_rules() {
    let mut note = Model::new(&NOTE).unwrap();

    note.set_attribute("publishedAt", "").unwrap();
    assert_eq!(note.get_attribute("publishedAt", false), None);

    note.set_attribute("publishedAt", 0i64).unwrap();
    assert_eq!(note.get_attribute("publishedAt", false), None);

    note.set_attribute("publishedAt", 1_234_567_890i64).unwrap();
    assert_eq!(
        note.get_attribute("publishedAt", false),
        Some(Value::DateTime(Utc.timestamp_opt(1_234_567_890, 0).unwrap()))
    );

    assert!(matches!(
        note.set_attribute("publishedAt", "someday"),
        Err(ModelError::Parse { .. })
    ));
}

#[test]
fn copy_is_equal_and_independent() {
    let original = NOTE
        .populate(json!({"a": 1, "body": "x", "meta": {"list": [1]}}))
        .unwrap();
    let mut copy = original.copy().unwrap();
    assert_eq!(copy.get_attributes(None, false), original.get_attributes(None, false));

    copy.set_attribute("a", 2i64).unwrap();
    copy.set_attribute("meta", json!({"list": []}).to_string())
        .unwrap();

    assert_eq!(original.get_attribute("a", false), Some(Value::Int(1)));
    assert_eq!(
        original.get_attribute("meta", false),
        Some(Value::from(json!({"list": [1]})))
    );
}

#[test]
fn mass_assignment_then_filtered_read() {
    let mut note = Model::new(&NOTE).unwrap();
    note.set_attributes(json!({"a": 1, "b": 2})).unwrap();

    let only_a = note.get_attributes(Some(&["a"]), false);
    assert_eq!(only_a.len(), 1);
    assert_eq!(only_a["a"], Value::Int(1));
}

#[test]
fn flattened_dates_reconstruct_to_same_instant() {
    let instant = Utc.with_ymd_and_hms(2021, 7, 8, 9, 10, 11).unwrap();
    let note = NOTE.populate([("publishedAt", instant)]).unwrap();

    let flat = note.get_attribute("publishedAt", true).unwrap();
    assert_eq!(flat, Value::Int(instant.timestamp()));

    let rebuilt = NOTE.populate([("publishedAt", flat)]).unwrap();
    assert_eq!(
        rebuilt.get_attribute("publishedAt", false),
        Some(Value::DateTime(instant))
    );
}

#[test]
fn relations_bridge_from_records() {
    let section = SECTION
        .populate(json!({"id": 3, "name": "News", "handle": "news"}))
        .unwrap();
    let record = ENTRY_TYPE_RECORD
        .record(json!({"id": 1, "sectionId": 3, "name": "Story", "handle": "story"}))
        .with_relation("section", section.clone())
        .unwrap();

    let entry_type = ENTRY_TYPE.populate(&record).unwrap();
    assert_eq!(entry_type.get_attribute("section", false), Some(Value::from(section)));
    assert_eq!(entry_type.get_attribute("sectionId", false), Some(Value::Int(3)));
}

#[test]
fn nested_models_survive_flattening() {
    let entry_type = ENTRY_TYPE
        .populate(json!({
            "name": "Story",
            "handle": "story",
            "section": {"id": 3, "name": "News", "handle": "news"}
        }))
        .unwrap();

    let flat = entry_type.get_attributes(None, true);
    let mut note = Model::new(&OPEN_NOTE).unwrap();
    note.set_attribute("meta", Value::Map(flat)).unwrap();

    let meta = note.get_attribute("meta", false).unwrap();
    let section = meta.as_map().unwrap()["section"].as_model().unwrap();
    assert_eq!(section.class_handle(), "Section");
    assert_eq!(section.get_attribute("handle", false), Some(Value::from("news")));
}

#[test]
fn strict_decoding_is_opt_in() {
    let mut lenient = Model::new(&NOTE).unwrap();
    lenient.set_attribute("meta", "[1, 2").unwrap();
    assert_eq!(lenient.get_attribute("meta", false), Some(Value::from("[1, 2")));

    let mut strict = Model::with_options(&NOTE, Options::strict_decoding()).unwrap();
    assert!(matches!(
        strict.set_attribute("meta", "[1, 2"),
        Err(ModelError::Decode { .. })
    ));
}

#[test]
fn chain_setter_unknown_operation() {
    let tag = TAG.populate(json!({"title": "rust"})).unwrap();
    assert!(matches!(
        tag.with("slug", "rust"),
        Err(ModelError::UnknownOperation { .. })
    ));

    let criteria = TAG_CRITERIA.populate(None::<serde_json::Value>).unwrap();
    let extended = criteria.with("search", "ru").unwrap();
    assert_eq!(extended.get_attribute("search", false), Some(Value::from("ru")));
    assert_eq!(criteria.get_attribute("search", false), None);
}
