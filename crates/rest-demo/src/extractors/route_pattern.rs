//! Pattern constraints on path captures.
//!
//! The router matches any segment; captures that fail their pattern are
//! answered as if no route existed.

use once_cell::sync::Lazy;
use regex::Regex;

use common::{AppError, AppResult};
use domain::{DIGITS_PATTERN, SLUG_PATTERN};

static DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(DIGITS_PATTERN).expect("Invalid digits regex"));
static SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(SLUG_PATTERN).expect("Invalid slug regex"));

/// Pattern a path capture must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePattern {
    /// `[0-9]+`
    Digits,
    /// `[a-zA-Z0-9-]+`
    Slug,
}

impl RoutePattern {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            RoutePattern::Digits => DIGITS.is_match(value),
            RoutePattern::Slug => SLUG.is_match(value),
        }
    }

    /// Pass `value` through, or reject the request as unrouted.
    pub fn require<'a>(&self, value: &'a str) -> AppResult<&'a str> {
        if self.matches(value) {
            Ok(value)
        } else {
            tracing::debug!(pattern = ?self, value, "Path capture does not match route pattern");
            Err(AppError::NoRoute)
        }
    }
}
