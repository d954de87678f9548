//! # templar-registry
//!
//! Port definitions (abstract traits) for template persistence.
//! Adapter crates implement these traits.

pub mod repository;
pub mod seed;

pub use repository::{RepositoryError, TemplateRepository};
pub use seed::seed_if_empty;
