use crate::attributes::{AttributeKind, AttributeSpec, DefaultValue};
use crate::registry::ModelClass;

pub const SECTION_TYPES: &[&str] = &["single", "channel", "structure"];

static SECTION_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("id", AttributeKind::Int),
    AttributeSpec::new("name", AttributeKind::String)
        .required()
        .max_length(255),
    AttributeSpec::new("handle", AttributeKind::Handle).required(),
    AttributeSpec::new("type", AttributeKind::Enum)
        .values(SECTION_TYPES)
        .default(DefaultValue::Str("channel")),
];

pub static SECTION: ModelClass = ModelClass::new("Section", SECTION_ATTRIBUTES);
