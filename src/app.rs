//! Todo Board App
//!
//! Root component: wires the sync service, the store and the list view.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_order::{AppConfig, RestClient, TodoService};

use crate::components::{NewTodoForm, StatusBar, TodoList};
use crate::context::AppContext;
use crate::storage::BrowserStore;
use crate::store::AppState;

/// Defaults with build-time overrides
fn load_config() -> AppConfig {
    AppConfig::default()
        .with_api_base(option_env!("TODO_API_BASE"))
        .with_order_key(option_env!("TODO_ORDER_KEY"))
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::info!("backend at {}, order key '{}'", config.api_base, config.order_key);

    let service = TodoService::new(RestClient::new(&config), BrowserStore, config);
    let ctx = AppContext::new(Store::new(AppState::default()), service);
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| ctx.reload());

    view! {
        <main class="todo-app">
            <h1>"Todo List"</h1>
            <NewTodoForm />
            <StatusBar />
            <TodoList />
        </main>
    }
}
