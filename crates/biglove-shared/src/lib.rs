//! # biglove-shared
//!
//! Vocabulary shared by the Big Love Forum store and HTTP server: typed
//! entity ids, enums, request-value coercion and paging rules.

pub mod coerce;
pub mod constants;
pub mod query;
pub mod types;

pub use query::{ForumFilter, Page, PostQuery};
pub use types::*;
