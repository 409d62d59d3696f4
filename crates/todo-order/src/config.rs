//! Configuration
//!
//! Defaults plus build-time overrides for the backend location and the
//! storage key of the persisted order.

use std::cmp::Ordering;

use crate::models::{Item, ItemId};

pub const DEFAULT_API_BASE: &str = "http://localhost:3500";
pub const DEFAULT_ORDER_KEY: &str = "todo-order";
pub const DEFAULT_USER_ID: u32 = 1;

/// How fetched items are arranged before reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchOrder {
    /// Keep the backend's order
    AsReturned,
    /// Highest numeric id first; non-numeric ids lead in server order
    #[default]
    NewestFirst,
}

impl FetchOrder {
    pub fn apply(self, items: &mut [Item]) {
        if self == FetchOrder::NewestFirst {
            items.sort_by(|a, b| newest_first(&a.id, &b.id));
        }
    }
}

// Total preorder: non-numeric ids tie with each other, so the stable sort
// keeps their server order.
fn newest_first(a: &ItemId, b: &ItemId) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend root, no trailing slash
    pub api_base: String,
    /// Key holding the persisted order
    pub order_key: String,
    /// Owner attached to created todos
    pub user_id: u32,
    pub fetch_order: FetchOrder,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            order_key: DEFAULT_ORDER_KEY.to_string(),
            user_id: DEFAULT_USER_ID,
            fetch_order: FetchOrder::default(),
        }
    }
}

impl AppConfig {
    /// Override the backend root; blank values are ignored
    pub fn with_api_base(mut self, base: Option<&str>) -> Self {
        if let Some(base) = non_blank(base) {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        self
    }

    /// Override the storage key; blank values are ignored
    pub fn with_order_key(mut self, key: Option<&str>) -> Self {
        if let Some(key) = non_blank(key) {
            self.order_key = key.to_string();
        }
        self
    }

    pub fn with_fetch_order(mut self, fetch_order: FetchOrder) -> Self {
        self.fetch_order = fetch_order;
        self
    }

    pub fn todos_url(&self) -> String {
        format!("{}/todos", self.api_base)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
