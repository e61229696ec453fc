//! Initial accounts and posts for the in-memory collaborators.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use domain::{slugify, Account, Post, PostId, PostStatus, PostType, UserId};

/// Built-in demo data used when no seed file is configured
const DEMO_SEED: &str = include_str!("../seed/demo.json");

/// Seed loading errors.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid seed post {id}: {reason}")]
    InvalidPost { id: PostId, reason: &'static str },
}

/// Post entry in a seed document
#[derive(Debug, Clone, Deserialize)]
pub struct SeedPost {
    pub id: PostId,
    pub author: UserId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default, rename = "type")]
    pub post_type: PostType,
    /// Publication date; defaults to load time
    pub date: Option<DateTime<Utc>>,
}

impl SeedPost {
    fn into_post(self, loaded_at: DateTime<Utc>) -> Post {
        let date = self.date.unwrap_or(loaded_at);
        Post {
            id: self.id,
            author: self.author,
            date,
            modified: date,
            slug: slugify(&self.title, self.id),
            title: self.title,
            content: self.content,
            status: self.status,
            post_type: self.post_type,
        }
    }
}

/// Seed document: `{users: [...], posts: [...]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<Account>,
    #[serde(default)]
    pub posts: Vec<SeedPost>,
}

impl Seed {
    /// Built-in demo accounts and posts.
    pub fn demo() -> Result<Self, SeedError> {
        Ok(serde_json::from_str(DEMO_SEED)?)
    }

    /// Load a seed document from disk.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let raw = fs::read_to_string(path)?;
        let seed: Seed = serde_json::from_str(&raw)?;
        info!(
            path = %path.display(),
            users = seed.users.len(),
            posts = seed.posts.len(),
            "Loaded seed file"
        );
        Ok(seed)
    }

    /// Seed file when a path is given, otherwise the built-in demo data.
    pub fn load(path: Option<&Path>) -> Result<Self, SeedError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::demo(),
        }
    }

    /// Split into accounts and stored posts.
    ///
    /// Post ids must be unique and non-zero.
    pub fn into_parts(self) -> Result<(Vec<Account>, Vec<Post>), SeedError> {
        let mut seen = BTreeSet::new();
        for post in &self.posts {
            if post.id == 0 {
                return Err(SeedError::InvalidPost {
                    id: post.id,
                    reason: "id 0 never names a post",
                });
            }
            if !seen.insert(post.id) {
                return Err(SeedError::InvalidPost {
                    id: post.id,
                    reason: "duplicate id",
                });
            }
        }

        let loaded_at = Utc::now();
        let posts = self
            .posts
            .into_iter()
            .map(|p| p.into_post(loaded_at))
            .collect();
        Ok((self.users, posts))
    }
}
