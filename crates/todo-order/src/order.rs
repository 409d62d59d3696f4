//! Order Record
//!
//! The persisted display order: a JSON array of todo ids.

use serde::{Deserialize, Serialize};

use crate::error::TodoResult;
use crate::models::{Item, ItemId};

/// User-chosen display order, always written in full
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderRecord(Vec<ItemId>);

impl OrderRecord {
    pub fn new(ids: Vec<ItemId>) -> Self {
        Self(ids)
    }

    /// Record matching the current display order of `items`
    pub fn from_items(items: &[Item]) -> Self {
        Self(items.iter().map(|item| item.id.clone()).collect())
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this record with every occurrence of `id` filtered out
    pub fn without(&self, id: &ItemId) -> Self {
        Self(self.0.iter().filter(|other| *other != id).cloned().collect())
    }

    /// Parse a stored record. Anything unreadable counts as no record.
    pub fn decode(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("ignoring malformed order record: {}", e);
                None
            }
        }
    }

    pub fn encode(&self) -> TodoResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
