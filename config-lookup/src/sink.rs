//! Observability sinks for resolved lookups

use std::fmt::Debug;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// Receives a record for every successful named lookup
pub trait EventSink: Send + Sync + Debug {
    /// Called once per lookup where both key and value are non-empty
    fn resolved(&self, key: &str, value: &str);
}

/// Forwards resolutions to `tracing` at INFO level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn resolved(&self, key: &str, value: &str) {
        info!(key, value, "Resolved config value");
    }
}

/// A single recorded resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEvent {
    /// Normalized key
    pub key: String,
    /// Value returned by the environment
    pub value: String,
    /// When the record was emitted
    pub recorded_at: DateTime<Utc>,
}

/// Keeps every resolution in memory so callers can inspect them
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ResolvedEvent>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first
    pub fn events(&self) -> Vec<ResolvedEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events().len()
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for RecordingSink {
    fn resolved(&self, key: &str, value: &str) {
        let event = ResolvedEvent {
            key: key.to_string(),
            value: value.to_string(),
            recorded_at: Utc::now(),
        };
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
