//! Content storage collaborator.
//!
//! Handlers only see the [`ContentStore`] trait; the in-memory
//! implementation backs the standalone server and the tests.

mod in_memory;

use async_trait::async_trait;

use common::AppResult;
use domain::{NewPost, Post, PostId, PostQuery};

#[cfg(test)]
use mockall::automock;

pub use in_memory::InMemoryContentStore;

/// Content store operations consumed by the route handlers.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All items matching `filter`, newest first. No limit is applied.
    async fn query(&self, filter: PostQuery) -> AppResult<Vec<Post>>;

    /// Item by id, `None` when absent.
    async fn get(&self, id: PostId) -> AppResult<Option<Post>>;

    /// Store a new item and return its id. Nothing is stored on failure.
    async fn create(&self, post: NewPost) -> AppResult<PostId>;
}
