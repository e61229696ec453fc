//! Application state for dependency injection.

use std::sync::Arc;

use crate::identity::IdentityProvider;
use crate::store::ContentStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Create new app state.
    pub fn new(content: Arc<dyn ContentStore>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { content, identity }
    }
}
