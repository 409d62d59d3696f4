//! Order Persistence
//!
//! Key-value storage abstraction and the adapter that keeps the order
//! record in it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{TodoError, TodoResult};
use crate::order::OrderRecord;

/// String key-value store (browser `localStorage` or in-memory)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> TodoResult<()>;
}

/// In-memory store, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> TodoResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| TodoError::Storage("memory store poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and overwrites the order record under a single key
#[derive(Debug, Clone)]
pub struct OrderStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> OrderStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored record, or `None` when missing or unreadable
    pub fn load(&self) -> Option<OrderRecord> {
        let raw = self.store.get(&self.key)?;
        OrderRecord::decode(&raw)
    }

    pub fn save(&self, record: &OrderRecord) -> TodoResult<()> {
        let encoded = record.encode()?;
        self.store.set(&self.key, &encoded)?;
        log::debug!("saved order record ({} ids) under '{}'", record.len(), self.key);
        Ok(())
    }
}
