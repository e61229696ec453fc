//! In-memory content store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::{DomainError, NewPost, Post, PostId, PostQuery, POST_NOT_CREATED_MESSAGE};

use super::ContentStore;

/// Content store backed by a map held in process memory.
pub struct InMemoryContentStore {
    posts: RwLock<BTreeMap<PostId, Post>>,
    /// Next id to hand out; `0` once the id space is exhausted.
    next_id: AtomicU64,
}

impl InMemoryContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Create a store holding `posts`. New ids continue after the highest seeded id.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(1, |max| max.checked_add(1).unwrap_or(0));
        let posts = posts.into_iter().map(|p| (p.id, p)).collect();
        Self {
            posts: RwLock::new(posts),
            next_id: AtomicU64::new(next_id),
        }
    }

    /// Number of stored items, regardless of status or type.
    pub fn len(&self) -> usize {
        self.posts.read().map(|posts| posts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> AppError {
    DomainError::internal("content store lock poisoned").into()
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn query(&self, filter: PostQuery) -> AppResult<Vec<Post>> {
        let posts = self.posts.read().map_err(poisoned)?;
        let mut matched: Vec<Post> = posts
            .values()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect();
        matched.sort_by(Post::listing_order);

        debug!(?filter, count = matched.len(), "Queried content items");
        Ok(matched)
    }

    async fn get(&self, id: PostId) -> AppResult<Option<Post>> {
        let posts = self.posts.read().map_err(poisoned)?;
        Ok(posts.get(&id).cloned())
    }

    async fn create(&self, post: NewPost) -> AppResult<PostId> {
        if post.author == 0 {
            warn!("Rejected content item without an author");
            return Err(DomainError::write_failed(POST_NOT_CREATED_MESSAGE).into());
        }

        let mut posts = self.posts.write().map_err(poisoned)?;
        let Ok(id) = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| {
                (id != 0).then(|| id.checked_add(1).unwrap_or(0))
            })
        else {
            warn!("Content store has no ids left");
            return Err(DomainError::write_failed(POST_NOT_CREATED_MESSAGE).into());
        };
        posts.insert(id, Post::from_new(id, post, Utc::now()));

        debug!(id, "Created content item");
        Ok(id)
    }
}
