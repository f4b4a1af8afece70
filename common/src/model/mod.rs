//! Domain models for envpeek

pub mod lookup;

pub use lookup::{normalize_key, LookupResult, DEFAULT_SECRET_KEY};
