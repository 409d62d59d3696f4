//! Todo Ordering Core
//!
//! Reconciles server todos with a client-persisted display order and
//! drives the fetch/mutate pipeline that feeds the reconciler.
//!
//! Layers:
//! - models / order: data carried between backend, storage and UI
//! - reconcile / reorder / reducer: pure functions, no I/O
//! - storage / api / service: collaborators and the effect runner

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod order;
pub mod reconcile;
pub mod reducer;
pub mod reorder;
pub mod service;
pub mod storage;

pub use api::{RestClient, TodoApi};
pub use config::{AppConfig, FetchOrder};
pub use error::{TodoError, TodoResult};
pub use models::{Item, ItemId, NewItem};
pub use order::OrderRecord;
pub use reconcile::{reconcile, Reconciled};
pub use reducer::{reduce, Effect, ListEvent, ListState, LoadStatus};
pub use reorder::{reorder, slot_destination};
pub use service::TodoService;
pub use storage::{KeyValueStore, MemoryStore, OrderStore};
