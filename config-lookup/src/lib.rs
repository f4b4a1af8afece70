//! Configuration lookup core
//!
//! Resolves configuration keys against an injected environment mapping and
//! reports successful resolutions to an injected event sink.

pub mod env;
pub mod sink;
mod service;

pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use sink::{EventSink, RecordingSink, ResolvedEvent, TracingSink};
pub use service::ConfigLookupService;
