//! Domain layer - Core entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! content items, user accounts and the capability model that gates routes.

pub mod constants;
pub mod error;
pub mod post;
pub mod user;

pub use constants::*;
pub use error::DomainError;
pub use post::{slugify, NewPost, Post, PostId, PostQuery, PostStatus, PostType};
pub use user::{Account, Capabilities, Capability, Identity, Role, UserId};
