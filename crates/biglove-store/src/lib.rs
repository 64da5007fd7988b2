//! # biglove-store
//!
//! In-memory repository for the Big Love Forum demo API.
//!
//! A [`ForumStore`] owns four append-only collections (users, forums, posts,
//! comments) seeded once from a [`Fixture`]. Reads are linear scans in
//! insertion order; the only mutations are inserting posts and comments and
//! bumping a post's vote counters or reaction tallies. Nothing is persisted.

pub mod fixture;
pub mod models;
pub mod store;
pub mod timestamp;

mod error;

pub use error::{Entity, StoreError};
pub use fixture::Fixture;
pub use models::*;
pub use store::{ForumStore, StoreCounts};
