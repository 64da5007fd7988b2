//! Seed data.
//!
//! A fixture is a JSON document with `users`, `forums`, `posts` and
//! `comments` arrays in the wire format of [`crate::models`]. Array order
//! becomes insertion order in the store.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Comment, Forum, Post, User};

/// English demo data compiled into the binary.
const BUILTIN: &str = include_str!("../fixtures/demo.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fixture {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub forums: Vec<Forum>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Fixture {
    /// The built-in demo set: 5 users, 5 forums, 6 posts, 9 comments.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load an alternate seed set from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "loading fixture");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
