use thiserror::Error;

/// Kind of record a lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Forum,
    Post,
    Comment,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Entity::User => "User",
            Entity::Forum => "Forum",
            Entity::Post => "Post",
            Entity::Comment => "Comment",
        };
        f.write_str(name)
    }
}

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// An id-keyed lookup matched nothing.
    #[error("{0} not found")]
    NotFound(Entity),

    /// Reading a fixture file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A fixture document is not valid seed data.
    #[error("Fixture parse error: {0}")]
    Fixture(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
