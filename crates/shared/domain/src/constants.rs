//! Domain-level constants.
//!
//! These constants define the REST surface and the content rules shared by
//! every crate.

// =============================================================================
// REST Namespace
// =============================================================================

/// Prefix under which every demo route is mounted
pub const API_NAMESPACE: &str = "/rest-demo/v1";

// =============================================================================
// Route Patterns
// =============================================================================

/// Numeric path captures (`id`, `item_id`); ASCII digits only
pub const DIGITS_PATTERN: &str = r"^[0-9]+$";

/// Name path capture used by the greeting route
pub const SLUG_PATTERN: &str = r"^[a-zA-Z0-9-]+$";

// =============================================================================
// Messages
// =============================================================================

/// Greeting returned by the hello route
pub const HELLO_MESSAGE: &str = "Hello World";

/// Prefix of personalised greetings
pub const GREETING_PREFIX: &str = "Hello ";

/// Confirmation for the manage-options probe
pub const MANAGE_OPTIONS_MESSAGE: &str = "You can Manage Options";

/// Confirmation after a post has been stored
pub const POST_CREATED_MESSAGE: &str = "Post Created";

/// Error message for a missing post
pub const POST_NOT_FOUND_MESSAGE: &str = "Post Not Found";

/// Error message for a failed post insert
pub const POST_NOT_CREATED_MESSAGE: &str = "Post Not Created";

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";
