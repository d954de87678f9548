//! # templar-types
//!
//! Domain types for the templar catalog.
//! This crate contains pure data types with zero external dependencies
//! (except serde for serialization).

pub mod error;
pub mod template;

// Re-exports for convenience.
pub use error::{ErrorKind, TemplarError};
pub use template::{format_tags, parse_tags, Template, TemplateDraft, TemplateSummary};
