//! Identity collaborator: who is calling and what they may do.

mod directory;
mod jwt;

use async_trait::async_trait;

use common::AppResult;
use domain::{Capabilities, UserId};

#[cfg(test)]
use mockall::automock;

pub use directory::UserDirectory;
pub use jwt::{Claims, JwtIdentityProvider, TokenResponse};

/// Identity provider operations consumed by the auth middleware and handlers.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the identity behind a bearer credential.
    async fn resolve(&self, token: &str) -> AppResult<UserId>;

    /// Display name of an identity; empty when the identity is unknown.
    async fn display_name(&self, id: UserId) -> AppResult<String>;

    /// Capabilities held by an identity; empty when the identity is unknown.
    async fn capabilities(&self, id: UserId) -> AppResult<Capabilities>;
}
