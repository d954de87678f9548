//! # templar-store-fs
//!
//! Filesystem adapter for the templar catalog.
//! Implements `TemplateRepository` over a directory holding one
//! pretty-printed JSON document per template, named `<id>.json`.
//!
//! There is no index or cache: every read re-scans the directory.

pub mod record;
pub mod repository;
mod repository_impl;
pub mod slug;

pub use record::RecordLoad;
pub use repository::FsTemplateRepository;
pub use slug::slugify;
