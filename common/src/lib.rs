//! Common types and utilities for envpeek
//!
//! This library contains the shared error type and the lookup model used by
//! both the lookup core and the HTTP gateway.

pub mod error;
pub mod model;

/// Re-export important types
pub use error::{Error, Result};
pub use model::{normalize_key, LookupResult, DEFAULT_SECRET_KEY};

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;
