//! # templar-web
//!
//! The HTML interface: browse and search the catalog, create, edit and
//! delete templates through plain form posts.

mod error;
mod forms;
pub mod routes;
mod views;

pub use error::WebError;
pub use routes::{router, WebState};
pub use views::Views;
