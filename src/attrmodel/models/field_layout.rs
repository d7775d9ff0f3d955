use crate::attributes::{AttributeKind, AttributeSpec};
use crate::registry::ModelClass;

static FIELD_LAYOUT_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("id", AttributeKind::Int),
    AttributeSpec::new("type", AttributeKind::String),
    AttributeSpec::new("fields", AttributeKind::Mixed),
];

pub static FIELD_LAYOUT: ModelClass = ModelClass::new("FieldLayout", FIELD_LAYOUT_ATTRIBUTES);
