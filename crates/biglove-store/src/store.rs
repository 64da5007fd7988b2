//! The repository behind every API route.
//!
//! [`ForumStore`] is a plain owned value with `&self` reads and `&mut self`
//! mutations. Callers that share it across tasks wrap the whole store in a
//! single lock so each operation runs atomically.

use biglove_shared::{CommentId, ForumId, PostId, PostQuery, UserId, VoteDirection};
use tracing::debug;

use crate::error::{Entity, Result, StoreError};
use crate::fixture::Fixture;
use crate::models::{
    Comment, CommentWithAuthor, Forum, NewComment, NewPost, Post, PostMetadata, PostWithAuthor,
    Reactions, User, VoteTally,
};
use crate::timestamp;

/// Collection sizes, for startup logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub users: usize,
    pub forums: usize,
    pub posts: usize,
    pub comments: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ForumStore {
    users: Vec<User>,
    forums: Vec<Forum>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl ForumStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store whose collections are the fixture's, in fixture order.
    pub fn seeded(fixture: Fixture) -> Self {
        Self {
            users: fixture.users,
            forums: fixture.forums,
            posts: fixture.posts,
            comments: fixture.comments,
        }
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.users.len(),
            forums: self.forums.len(),
            posts: self.posts.len(),
            comments: self.comments.len(),
        }
    }

    // ------------------------------------------------------------------
    // Users and forums
    // ------------------------------------------------------------------

    pub fn list_users(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn get_user(&self, id: UserId) -> Result<User> {
        self.find_user(id)
            .cloned()
            .ok_or(StoreError::NotFound(Entity::User))
    }

    pub fn list_forums(&self) -> Vec<Forum> {
        self.forums.clone()
    }

    pub fn get_forum(&self, id: ForumId) -> Result<Forum> {
        self.forums
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(Entity::Forum))
    }

    // ------------------------------------------------------------------
    // Posts
    // ------------------------------------------------------------------

    /// Filter by forum, then window, then attach authors.
    pub fn list_posts(&self, query: &PostQuery) -> Vec<PostWithAuthor> {
        let matching: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| query.forum.matches(p.forum_id))
            .collect();

        matching[query.page.bounds(matching.len())]
            .iter()
            .map(|post| self.with_author(post))
            .collect()
    }

    pub fn get_post(&self, id: PostId) -> Result<PostWithAuthor> {
        let post = self.find_post(id)?;
        Ok(self.with_author(post))
    }

    /// Append a post. The id is the current post count plus one.
    pub fn create_post(&mut self, new: NewPost) -> PostWithAuthor {
        let now = timestamp::now();
        let post = Post {
            id: PostId::nth(self.posts.len()),
            title: new.title,
            content: new.content,
            author_id: new.author_id,
            forum_id: new.forum_id,
            created_at: now,
            updated_at: now,
            upvotes: 0,
            downvotes: 0,
            reactions: Reactions::new(),
            tags: new.tags,
            is_pinned: false,
            metadata: PostMetadata::default(),
        };
        debug!(id = %post.id, forum = ?post.forum_id, author = ?post.author_id, "post created");

        let view = self.with_author(&post);
        self.posts.push(post);
        view
    }

    /// Bump one vote counter. A `None` direction changes nothing but still
    /// reports the counters.
    pub fn record_vote(&mut self, id: PostId, direction: Option<VoteDirection>) -> Result<VoteTally> {
        let post = self.find_post_mut(id)?;
        match direction {
            Some(VoteDirection::Up) => post.upvotes += 1,
            Some(VoteDirection::Down) => post.downvotes += 1,
            None => {}
        }
        Ok(VoteTally {
            upvotes: post.upvotes,
            downvotes: post.downvotes,
        })
    }

    /// Count one more `emoji` reaction and return the post's full tally.
    pub fn add_reaction(&mut self, id: PostId, emoji: &str) -> Result<Reactions> {
        let post = self.find_post_mut(id)?;
        *post.reactions.entry(emoji.to_string()).or_insert(0) += 1;
        Ok(post.reactions.clone())
    }

    // ------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------

    /// Flat list in insertion order; threads are rebuilt from `parent_id`
    /// by the caller. Comments stored without a post id never match.
    pub fn list_comments_for_post(&self, post_id: PostId) -> Vec<CommentWithAuthor> {
        self.comments
            .iter()
            .filter(|c| c.post_id == Some(post_id))
            .map(|c| self.comment_with_author(c))
            .collect()
    }

    /// Append a comment. The post is not required to exist, or even to be named.
    pub fn create_comment(&mut self, new: NewComment) -> CommentWithAuthor {
        let comment = Comment {
            id: CommentId::nth(self.comments.len()),
            post_id: new.post_id,
            author_id: new.author_id,
            content: new.content,
            created_at: timestamp::now(),
            upvotes: 0,
            downvotes: 0,
            reactions: Reactions::new(),
            parent_id: new.parent_id,
        };
        debug!(id = %comment.id, post = ?comment.post_id, "comment created");

        let view = self.comment_with_author(&comment);
        self.comments.push(comment);
        view
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn find_post(&self, id: PostId) -> Result<&Post> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(Entity::Post))
    }

    fn find_post_mut(&mut self, id: PostId) -> Result<&mut Post> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(Entity::Post))
    }

    fn with_author(&self, post: &Post) -> PostWithAuthor {
        PostWithAuthor {
            post: post.clone(),
            author: post.author_id.and_then(|id| self.find_user(id)).cloned(),
        }
    }

    fn comment_with_author(&self, comment: &Comment) -> CommentWithAuthor {
        CommentWithAuthor {
            comment: comment.clone(),
            author: comment.author_id.and_then(|id| self.find_user(id)).cloned(),
        }
    }
}
