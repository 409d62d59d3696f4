//! Sync Service
//!
//! Turns user intents into backend calls, backend outcomes into reducer
//! events, and runs the effects the reducer declares.

use crate::api::TodoApi;
use crate::config::AppConfig;
use crate::models::{Item, ItemId, NewItem};
use crate::reducer::{reduce, Effect, ListEvent, ListState};
use crate::storage::{KeyValueStore, OrderStore};

#[derive(Debug, Clone)]
pub struct TodoService<A, S> {
    api: A,
    orders: OrderStore<S>,
    config: AppConfig,
}

impl<A: TodoApi, S: KeyValueStore> TodoService<A, S> {
    pub fn new(api: A, store: S, config: AppConfig) -> Self {
        let orders = OrderStore::new(store, config.order_key.clone());
        Self { api, orders, config }
    }

    pub fn orders(&self) -> &OrderStore<S> {
        &self.orders
    }

    /// Fetch a snapshot, paired with the order record stored right now
    pub async fn fetch(&self) -> ListEvent {
        match self.api.get_todos().await {
            Ok(mut items) => {
                self.config.fetch_order.apply(&mut items);
                ListEvent::Fetched {
                    items,
                    persisted: self.orders.load(),
                }
            }
            Err(e) => {
                log::error!("fetching todos failed: {}", e);
                ListEvent::FetchFailed(e.to_string())
            }
        }
    }

    pub async fn create(&self, name: &str) -> ListEvent {
        let todo = NewItem::new(self.config.user_id, name);
        match self.api.add_todo(&todo).await {
            Ok(created) => ListEvent::Created(created),
            Err(e) => mutation_failed("create", e),
        }
    }

    /// Send `item` back with `completed` flipped
    pub async fn toggle(&self, item: &Item) -> ListEvent {
        match self.api.update_todo(&item.toggled()).await {
            Ok(_) => ListEvent::Toggled(item.id.clone()),
            Err(e) => mutation_failed("update", e),
        }
    }

    pub async fn delete(&self, id: ItemId) -> ListEvent {
        match self.api.delete_todo(&id).await {
            Ok(()) => ListEvent::Deleted(id),
            Err(e) => mutation_failed("delete", e),
        }
    }

    /// Reduce `event` into `state` and persist any order writes.
    /// Returns the new state and whether a refetch was requested.
    pub fn apply(&self, state: ListState, event: ListEvent) -> (ListState, bool) {
        let (mut state, effects) = reduce(state, event);
        let mut refetch = false;

        for effect in effects {
            match effect {
                Effect::PersistOrder(record) => {
                    if let Err(e) = self.orders.save(&record) {
                        log::warn!("could not persist order: {}", e);
                        state.notice = Some(format!("Could not save order: {}", e));
                    }
                }
                Effect::Refetch => refetch = true,
            }
        }

        (state, refetch)
    }
}

fn mutation_failed(action: &str, e: crate::error::TodoError) -> ListEvent {
    log::error!("{} request failed: {}", action, e);
    ListEvent::MutationFailed(format!("Could not {} todo: {}", action, e))
}
