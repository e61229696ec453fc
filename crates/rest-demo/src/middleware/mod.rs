//! Middleware for caller resolution and route permissions.

mod auth;

pub use auth::{identify, require_permission, Caller, Permission};
