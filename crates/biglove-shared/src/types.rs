use serde::{Deserialize, Serialize};

/// Declares an integer id newtype that serializes as a bare JSON number.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Identifier of a user.
    UserId
);
entity_id!(
    /// Identifier of a forum.
    ForumId
);
entity_id!(
    /// Identifier of a post.
    PostId
);
entity_id!(
    /// Identifier of a comment.
    CommentId
);

impl PostId {
    /// Ids are handed out as `count + 1`, so they start at 1.
    pub fn nth(count: usize) -> Self {
        Self(next_id(count))
    }
}

impl CommentId {
    pub fn nth(count: usize) -> Self {
        Self(next_id(count))
    }
}

fn next_id(count: usize) -> i64 {
    i64::try_from(count).map_or(i64::MAX, |n| n.saturating_add(1))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    User,
}

/// Presence shown next to a user's name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Away,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Only the exact strings `"up"` and `"down"` are recognised.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }
}
