//! Local key/value persistence surface
//!
//! Ledger state is read and written as whole JSON documents under fixed
//! keys. The trait keeps the mechanism swappable: `SqliteDb` implements it
//! for durable state, `MemoryStore` for volatile state and tests.

use crate::error::Result;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Minimal key/value persistence contract
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// JSON helpers over any key/value store
pub trait StoreExt: KeyValueStore {
    /// Read a JSON document under `key`. A missing key, a read failure, or
    /// unparseable data all fall back to the default instead of surfacing.
    fn get_json_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding malformed value under '{}': {}", key, e);
                T::default()
            }),
            Ok(None) => T::default(),
            Err(e) => {
                warn!("Failed to read '{}': {}", key, e);
                T::default()
            }
        }
    }

    /// Serialize `value` as JSON and write it under `key`
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {}

/// Volatile store backed by a map; state dies with the process
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("k", "v1").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_json_roundtrip() {
        let store = MemoryStore::new();
        store
            .set_json("symbols", &vec!["AAPL".to_string(), "TSLA".to_string()])
            .unwrap();

        let symbols: Vec<String> = store.get_json_or_default("symbols");
        assert_eq!(symbols, vec!["AAPL", "TSLA"]);
    }

    #[test]
    fn test_missing_key_yields_default() {
        let store = MemoryStore::new();
        let symbols: Vec<String> = store.get_json_or_default("nothing_here");
        assert!(symbols.is_empty());
    }

    #[test]
    fn test_malformed_value_yields_default() {
        let store = MemoryStore::new();
        store.set("symbols", "{not json at all").unwrap();

        let symbols: Vec<String> = store.get_json_or_default("symbols");
        assert!(symbols.is_empty());
    }

    #[test]
    fn test_wrong_shape_yields_default() {
        let store = MemoryStore::new();
        store.set("symbols", "{\"a\": 1}").unwrap();

        let symbols: Vec<String> = store.get_json_or_default("symbols");
        assert!(symbols.is_empty());
    }
}
