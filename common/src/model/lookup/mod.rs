//! Lookup model: the pair handed from the lookup core to the renderer

use serde::{Deserialize, Serialize};

#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Environment variable resolved by the root page.
///
/// Holds the API key of the email delivery provider.
pub const DEFAULT_SECRET_KEY: &str = "MAILGUN_SECRET_KEY";

/// Normalize a caller supplied key into an environment variable name.
///
/// Returns `None` for an absent or empty key, otherwise the uppercased key.
pub fn normalize_key(requested_key: Option<&str>) -> Option<String> {
    requested_key
        .filter(|key| !key.is_empty())
        .map(str::to_uppercase)
}

/// Outcome of a single configuration lookup
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct LookupResult {
    /// Normalized environment variable name, absent when none was requested
    pub key: Option<String>,
    /// Value found in the environment at lookup time
    pub value: Option<String>,
}

impl LookupResult {
    /// Create a new lookup result
    pub fn new(key: Option<String>, value: Option<String>) -> Self {
        Self { key, value }
    }

    /// Result for a request that named no key
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when both key and value are present and non-empty
    pub fn is_resolved(&self) -> bool {
        matches!(
            (&self.key, &self.value),
            (Some(key), Some(value)) if !key.is_empty() && !value.is_empty()
        )
    }

    /// Key as a string slice, empty when absent
    pub fn key_or_empty(&self) -> &str {
        self.key.as_deref().unwrap_or("")
    }

    /// Value as a string slice, empty when absent
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}
