//! API handlers
//!
//! HTML pages for browsers plus a small JSON API. Each handler follows the
//! same pattern:
//! - Extract state and parameters using Axum extractors
//! - Call the config lookup service
//! - Render the result as a page or a standardized response

pub mod config;
pub mod health;
pub mod pages;
pub mod response;

// Re-export the response module for easy access
pub use response::ApiResponse;
