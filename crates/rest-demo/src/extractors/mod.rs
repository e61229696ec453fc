//! Request extractors.

mod body_params;
mod path_params;
mod route_pattern;

pub use body_params::BodyParams;
pub use path_params::PathParams;
pub use route_pattern::RoutePattern;
