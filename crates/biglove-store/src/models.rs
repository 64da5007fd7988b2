//! Domain model structs held by the in-memory store.
//!
//! Every struct derives `Serialize` and `Deserialize` with camelCase field
//! names, which is both the fixture file format and the HTTP wire format.

use std::collections::BTreeMap;

use biglove_shared::{CommentId, ForumId, PostId, Presence, Role, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Emoji → count. Keys appear on first use.
pub type Reactions = BTreeMap<String, u64>;

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub role: Role,
    pub status: Presence,
    #[serde(with = "crate::timestamp")]
    pub joined_at: DateTime<Utc>,
    pub stats: UserStats,
}

/// Profile counters as reported by the seed data. Never recomputed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_posts: u64,
    pub total_reactions: u64,
    pub forums_joined: u64,
    pub reputation: i64,
}

// ---------------------------------------------------------------------------
// Forum
// ---------------------------------------------------------------------------

/// A forum. `member_count` and `post_count` are display values from the seed
/// data and are not kept in step with the post collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Forum {
    pub id: ForumId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub member_count: u64,
    pub post_count: u64,
    pub is_private: bool,
    pub tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// A post. `author_id` and `forum_id` are not checked against the user and
/// forum collections, and are `null` when the client sent no usable number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_id: Option<UserId>,
    pub forum_id: Option<ForumId>,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    pub updated_at: DateTime<Utc>,
    pub upvotes: u64,
    pub downvotes: u64,
    pub reactions: Reactions,
    pub tags: Vec<String>,
    pub is_pinned: bool,
    pub metadata: PostMetadata,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    pub is_announcement: bool,
    pub is_system_post: bool,
}

/// Fields supplied by a client when creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub forum_id: Option<ForumId>,
    pub author_id: Option<UserId>,
    pub tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

/// A comment on a post. `parent_id` points at another comment for one level
/// of threading; it is expected, not checked, to share the same `post_id`.
/// `post_id` and `author_id` are `null` when the client sent no usable number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: Option<PostId>,
    pub author_id: Option<UserId>,
    pub content: String,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    pub upvotes: u64,
    pub downvotes: u64,
    pub reactions: Reactions,
    pub parent_id: Option<CommentId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: Option<PostId>,
    pub author_id: Option<UserId>,
    pub content: String,
    pub parent_id: Option<CommentId>,
}

// ---------------------------------------------------------------------------
// Joined views
// ---------------------------------------------------------------------------

/// A post with its author attached. `author` is omitted from the JSON when
/// the post has no `author_id` or no user has it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: Post,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
}

/// Vote counters of a post after a vote.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteTally {
    pub upvotes: u64,
    pub downvotes: u64,
}
