//! Config lookup service implementation

use std::sync::Arc;

use common::model::{normalize_key, LookupResult, DEFAULT_SECRET_KEY};
use tracing::debug;

use crate::env::{EnvSource, ProcessEnv};
use crate::sink::{EventSink, TracingSink};

/// Resolves configuration keys against an environment mapping
///
/// Every call reads the mapping afresh; nothing is cached between requests.
#[derive(Debug, Clone)]
pub struct ConfigLookupService {
    /// Environment mapping to read from
    env: Arc<dyn EnvSource>,
    /// Sink notified on successful named lookups
    sink: Arc<dyn EventSink>,
}

impl ConfigLookupService {
    /// Create a service over the given environment and sink
    pub fn new(env: Arc<dyn EnvSource>, sink: Arc<dyn EventSink>) -> Self {
        Self { env, sink }
    }

    /// Service over the real process environment, logging through `tracing`
    pub fn from_process_env() -> Self {
        Self::new(Arc::new(ProcessEnv::new()), Arc::new(TracingSink))
    }

    /// Resolve the fixed default secret key
    pub fn fetch_default_secret(&self) -> LookupResult {
        let value = self.env.get(DEFAULT_SECRET_KEY);
        debug!(key = DEFAULT_SECRET_KEY, found = value.is_some(), "Default secret lookup");
        LookupResult::new(Some(DEFAULT_SECRET_KEY.to_string()), value)
    }

    /// Resolve a caller supplied key after uppercasing it
    ///
    /// An absent or empty key skips the lookup and yields an empty result.
    pub fn fetch_named(&self, requested_key: Option<&str>) -> LookupResult {
        let Some(key) = normalize_key(requested_key) else {
            return LookupResult::empty();
        };

        let value = self.env.get(&key);
        let result = LookupResult::new(Some(key), value);

        if result.is_resolved() {
            self.sink.resolved(result.key_or_empty(), result.value_or_empty());
        } else {
            debug!(key = result.key_or_empty(), "Config value not set");
        }

        result
    }
}

impl Default for ConfigLookupService {
    fn default() -> Self {
        Self::from_process_env()
    }
}
