//! # Attribute System
//!
//! Models declare their attributes statically and the rest of the crate works off
//! those declarations:
//!
//! - **Kinds** ([`AttributeKind`]): what a value is expected to be
//! - **Specs** ([`AttributeSpec`]): `const`-built declarations (default, nested model,
//!   validation options)
//! - **Schema** ([`Schema`]): the normalized, per-instance memoized view of a class's specs
//!
//! ## Attribute Kinds
//!
//! | Kind | Write-time behavior |
//! |------|---------------------|
//! | `String`, `Int`, `Number`, `Bool`, `Enum`, `Handle` | Stored as given, checked by `validate()` |
//! | `DateTime` | Timestamps and date strings parsed; falsy input becomes null |
//! | `Mixed` | JSON strings decoded; maps become nested models |
//!
//! ## Usage
//!
//! ```ignore
//! static ATTRIBUTES: &[AttributeSpec] = &[
//!     AttributeSpec::new("name", AttributeKind::String).required().max_length(255),
//!     AttributeSpec::new("section", AttributeKind::Mixed).model(&SECTION),
//! ];
//! ```

mod kind;
mod schema;
mod spec;

pub use kind::AttributeKind;
pub use schema::{generate_label, AttributeConfig, Schema};
pub use spec::{AttributeSpec, DefaultValue};
