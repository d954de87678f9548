//! CLI command definitions.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod seed;
pub mod serve;
pub mod update;
