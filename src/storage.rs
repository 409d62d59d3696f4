//! Browser Storage
//!
//! `localStorage` backing for the persisted todo order.

use todo_order::{KeyValueStore, TodoError, TodoResult};

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> TodoResult<()> {
        let storage = local_storage()
            .ok_or_else(|| TodoError::Storage("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| TodoError::Storage(format!("{:?}", e)))
    }
}
