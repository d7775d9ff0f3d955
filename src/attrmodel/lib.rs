//! # Attrmodel Architecture
//!
//! Attrmodel is a library of **schema-driven, dynamically typed models**: records whose
//! shape is declared once, statically, and whose values are coerced on write, filled in
//! bulk from heterogeneous sources, copied, derived through a chain-setter and
//! validated against their own declarations. A small CLI sits on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, reads input, prints JSON and messages  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) and commands (commands/*.rs)                  │
//! │  - Normalize raw input, apply settings, return CmdResult    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model layer                                                │
//! │  - model: Model, mass assignment, copy, validation          │
//! │  - attributes + coerce: declarations and write-time rules   │
//! │  - registry + models: static classes, lookup by handle      │
//! │  - record, elements: relation bridging, element types       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Classes Are Static Data
//!
//! A model class is a `static` [`registry::ModelClass`]: a handle, a slice of
//! [`attributes::AttributeSpec`] and a strictness flag. Nothing is registered at
//! runtime. Nested models point straight at their class, and the registry is only
//! consulted when a class has to be found by name.
//!
//! ## Logging
//!
//! The library emits `tracing` events (validation failures and deprecations at `warn`,
//! decode fallbacks at `debug`) and never installs a subscriber itself; see
//! [`logging`] for the one the binary uses.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Command implementations behind the facade
//! - [`model`]: The `Model` type and its sources
//! - [`attributes`]: Attribute kinds, specs and schemas
//! - [`coerce`]: Write-time coercion and decode options
//! - [`value`]: The dynamic `Value` type
//! - [`registry`]: Model classes and lookup by handle
//! - [`models`]: The concrete classes
//! - [`record`]: Rows with loaded relations
//! - [`elements`]: Element type descriptors
//! - [`config`]: Settings
//! - [`logging`]: Subscriber setup for the binary
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod coerce;
pub mod commands;
pub mod config;
pub mod elements;
pub mod error;
pub mod logging;
pub mod model;
pub mod models;
pub mod record;
pub mod registry;
pub mod value;
