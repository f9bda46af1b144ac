//! # nb-store-memory
//!
//! HashMap-backed implementation of `KvStore`. Nothing survives the
//! process; used by tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::Mutex;

use nb_core::traits::KvStore;

pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        // Poisoned lock counts as an unreadable backend: report absent.
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}
