//! Concrete model classes.
//!
//! Each class is a `static` so that attribute declarations can point at other classes
//! for nested models. All of them are registered in [`registry::MODELS`](crate::registry::MODELS).

mod entry_type;
mod field_layout;
mod section;
mod tag;

pub use entry_type::ENTRY_TYPE;
pub use field_layout::FIELD_LAYOUT;
pub use section::{SECTION, SECTION_TYPES};
pub use tag::{TAG, TAG_CRITERIA, TAG_GROUP};
