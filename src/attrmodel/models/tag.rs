use crate::attributes::{AttributeKind, AttributeSpec, DefaultValue};
use crate::registry::ModelClass;

static TAG_GROUP_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("id", AttributeKind::Int),
    AttributeSpec::new("name", AttributeKind::String).required(),
    AttributeSpec::new("handle", AttributeKind::Handle).required(),
    AttributeSpec::new("fieldLayoutId", AttributeKind::Int),
];

pub static TAG_GROUP: ModelClass = ModelClass::new("TagGroup", TAG_GROUP_ATTRIBUTES);

static TAG_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("id", AttributeKind::Int),
    AttributeSpec::new("groupId", AttributeKind::Int),
    AttributeSpec::new("title", AttributeKind::String)
        .required()
        .max_length(255),
    AttributeSpec::new("locale", AttributeKind::String).default(DefaultValue::Str("en-US")),
    AttributeSpec::new("enabled", AttributeKind::Bool).default(DefaultValue::Bool(true)),
    AttributeSpec::new("dateCreated", AttributeKind::DateTime),
    AttributeSpec::new("dateUpdated", AttributeKind::DateTime),
];

pub static TAG: ModelClass = ModelClass::new("Tag", TAG_ATTRIBUTES);

static TAG_CRITERIA_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("group", AttributeKind::Mixed),
    AttributeSpec::new("groupId", AttributeKind::Mixed),
    AttributeSpec::new("order", AttributeKind::String)
        .default(DefaultValue::Str("content.title asc")),
    // Deprecated in favor of `title`.
    AttributeSpec::new("name", AttributeKind::String),
    AttributeSpec::new("limit", AttributeKind::Int).default(DefaultValue::Int(100)),
    AttributeSpec::new("offset", AttributeKind::Int),
    AttributeSpec::new("status", AttributeKind::String).default(DefaultValue::Str("enabled")),
    AttributeSpec::new("locale", AttributeKind::String),
];

/// Criteria for querying tags. Loose, so callers can pass through params that only the
/// query layer understands.
pub static TAG_CRITERIA: ModelClass =
    ModelClass::new("TagCriteria", TAG_CRITERIA_ATTRIBUTES).loose();
