//! Content item ("post") entity and related types.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::UserId;

/// Identifier of a stored post. `0` never names a post.
pub type PostId = u64;

/// Publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Publish,
    Draft,
}

/// Content type of a stored item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    #[default]
    Post,
    Page,
}

/// Stored content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Post {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: PostId,
    /// Authoring user
    #[cfg_attr(feature = "openapi", schema(example = 2))]
    pub author: UserId,
    pub date: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[cfg_attr(feature = "openapi", schema(example = "Hello world!"))]
    pub title: String,
    pub content: String,
    #[cfg_attr(feature = "openapi", schema(example = "hello-world"))]
    pub slug: String,
    pub status: PostStatus,
    #[serde(rename = "type")]
    pub post_type: PostType,
}

impl Post {
    /// Materialize a new post under `id`, stamping both timestamps with `now`.
    pub fn from_new(id: PostId, new: NewPost, now: DateTime<Utc>) -> Self {
        let slug = slugify(&new.title, id);
        Self {
            id,
            author: new.author,
            date: now,
            modified: now,
            title: new.title,
            content: new.content,
            slug,
            status: new.status,
            post_type: new.post_type,
        }
    }

    /// Listing order: newest first, ties broken by descending id.
    pub fn listing_order(a: &Post, b: &Post) -> Ordering {
        b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id))
    }
}

/// Fields for a post that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub status: PostStatus,
    pub author: UserId,
    #[serde(default, rename = "type")]
    pub post_type: PostType,
}

impl NewPost {
    /// A published post of type `post`.
    pub fn published(title: impl Into<String>, content: impl Into<String>, author: UserId) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            status: PostStatus::Publish,
            author,
            post_type: PostType::Post,
        }
    }
}

/// Filter for content queries. Every present field must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostQuery {
    pub post_type: PostType,
    pub status: PostStatus,
    pub author: Option<UserId>,
}

impl PostQuery {
    /// Published posts of every author
    pub fn published() -> Self {
        Self {
            post_type: PostType::Post,
            status: PostStatus::Publish,
            author: None,
        }
    }

    /// Restrict the query to a single author
    pub fn by_author(mut self, author: UserId) -> Self {
        self.author = Some(author);
        self
    }

    pub fn matches(&self, post: &Post) -> bool {
        post.post_type == self.post_type
            && post.status == self.status
            && self.author.map_or(true, |author| post.author == author)
    }
}

/// Derive a URL slug from a title.
///
/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single `-`. Falls back to the id for titles with no
/// alphanumeric content.
pub fn slugify(title: &str, id: PostId) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        id.to_string()
    } else {
        slug
    }
}
