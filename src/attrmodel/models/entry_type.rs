use super::{FIELD_LAYOUT, SECTION};
use crate::attributes::{AttributeKind, AttributeSpec, DefaultValue};
use crate::registry::ModelClass;

static ENTRY_TYPE_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("id", AttributeKind::Int),
    AttributeSpec::new("sectionId", AttributeKind::Int),
    AttributeSpec::new("fieldLayoutId", AttributeKind::Int),
    AttributeSpec::new("name", AttributeKind::String).required(),
    AttributeSpec::new("handle", AttributeKind::Handle).required(),
    AttributeSpec::new("hasTitleField", AttributeKind::Bool).default(DefaultValue::Bool(true)),
    AttributeSpec::new("titleLabel", AttributeKind::String).default(DefaultValue::Str("Title")),
    AttributeSpec::new("titleFormat", AttributeKind::String),
    AttributeSpec::new("sortOrder", AttributeKind::Int),
    AttributeSpec::new("section", AttributeKind::Mixed).model(&SECTION),
    AttributeSpec::new("fieldLayout", AttributeKind::Mixed).model(&FIELD_LAYOUT),
    AttributeSpec::new("dateCreated", AttributeKind::DateTime),
    AttributeSpec::new("dateUpdated", AttributeKind::DateTime),
];

/// An entry type within a section.
///
/// `section` and `fieldLayout` hold nested models. They are filled either from nested
/// maps or, when populating from a record, from its loaded relations.
pub static ENTRY_TYPE: ModelClass = ModelClass::new("EntryType", ENTRY_TYPE_ATTRIBUTES);
