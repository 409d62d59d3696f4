//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use reactive_stores::Store;
use todo_order::ListState;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Reducer state: rows in display order, load status, last notice
    pub list: ListState,
    /// Backend requests sent and not yet answered
    pub in_flight: u32,
}

pub type AppStore = Store<AppState>;
