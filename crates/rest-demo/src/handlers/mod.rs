//! HTTP request handlers.

pub mod demo_handler;
pub mod post_handler;
pub mod user_handler;

pub use demo_handler::demo_routes;
pub use post_handler::post_routes;
pub use user_handler::user_routes;
