//! REST demo library
//!
//! This crate provides the HTTP resource layer under `/rest-demo/v1`, backed
//! by in-memory content and identity collaborators.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod identity;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::config::ServerConfig;
use crate::identity::{JwtIdentityProvider, UserDirectory};
use crate::routes::create_router;
use crate::seed::{Seed, SeedError};
use crate::state::AppState;
use crate::store::InMemoryContentStore;

/// Build the in-memory collaborators from the configured seed.
pub fn seed_collaborators(
    config: &ServerConfig,
) -> Result<(InMemoryContentStore, JwtIdentityProvider), SeedError> {
    let (accounts, posts) = Seed::load(config.seed_path.as_deref())?.into_parts()?;

    let directory = UserDirectory::new(accounts);
    let content = InMemoryContentStore::with_posts(posts);
    info!(
        accounts = directory.len(),
        posts = content.len(),
        "Seeded in-memory collaborators"
    );

    Ok((content, JwtIdentityProvider::new(directory, config.jwt.clone())))
}

/// Build the shared application state.
pub fn build_state(config: &ServerConfig) -> Result<AppState, SeedError> {
    let (content, identity) = seed_collaborators(config)?;
    Ok(AppState::new(Arc::new(content), Arc::new(identity)))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;
    info!(service = %config.service.service_name, "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
