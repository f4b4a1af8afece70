//! Environment mapping sources

use std::fmt::Debug;

use dashmap::DashMap;

/// Read-only key/value view of an environment
///
/// Keys are matched exactly as stored; normalization happens before the call.
pub trait EnvSource: Send + Sync + Debug {
    /// Current value for `key`, or `None` when unset
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Create a new process environment source
    pub fn new() -> Self {
        Self
    }
}

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Names the OS cannot store are never set
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// In-memory environment, used for tests and embedding
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: DashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Remove a variable
    pub fn remove(&self, key: &str) {
        self.vars.remove(key);
    }

    /// Builder-style variant of [`MapEnv::set`]
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let env = MapEnv::new();
        for (key, value) in iter {
            env.set(key, value);
        }
        env
    }
}

impl EnvSource for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).map(|value| value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_is_case_sensitive() {
        let env = MapEnv::new().with("PORT", "8080");
        assert_eq!(env.get("PORT"), Some("8080".to_string()));
        assert_eq!(env.get("port"), None);
    }

    #[test]
    fn test_map_env_set_and_remove() {
        let env: MapEnv = [("A", "1")].into_iter().collect();
        env.set("A", "2");
        assert_eq!(env.get("A"), Some("2".to_string()));
        env.remove("A");
        assert_eq!(env.get("A"), None);
    }

    #[test]
    fn test_process_env_rejects_unstorable_names() {
        let env = ProcessEnv::new();
        assert_eq!(env.get(""), None);
        assert_eq!(env.get("A=B"), None);
        assert_eq!(env.get("A\0B"), None);
    }

    #[test]
    fn test_process_env_reads_inherited_variable() {
        // PATH is set for any test runner we care about
        let expected = std::env::var_os("PATH").map(|v| v.to_string_lossy().into_owned());
        assert_eq!(ProcessEnv::new().get("PATH"), expected);
    }
}
