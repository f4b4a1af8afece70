//! Error types for envpeek
//!
//! A missing environment variable is never an error. The variants here cover
//! the collaborators around the lookup: bootstrap configuration and template
//! rendering.

use thiserror::Error;

/// envpeek error type
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid process configuration (listen address, log filter)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Template parsing or rendering failure
    #[error("Template error: {0}")]
    Template(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
