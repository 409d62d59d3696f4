//! Application Context
//!
//! Shared state and dispatch provided via Leptos Context API.
//! Rows hand an id to these methods; the current item is looked up here.

use std::future::Future;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;
use todo_order::{ItemId, ListEvent, RestClient, TodoService};

use crate::storage::BrowserStore;
use crate::store::{AppStateStoreFields, AppStore};

pub type Service = TodoService<RestClient, BrowserStore>;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    service: StoredValue<Service, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, service: Service) -> Self {
        Self {
            store,
            service: StoredValue::new_local(service),
        }
    }

    /// Reduce an event into the store. Returns whether a refetch is due.
    fn dispatch(&self, event: ListEvent) -> bool {
        let current = self.store.list().get_untracked();
        let (next, refetch) = self.service.with_value(|service| service.apply(current, event));
        self.store.list().set(next);
        refetch
    }

    fn settle(self, event: ListEvent) {
        if self.dispatch(event) {
            self.reload();
        }
    }

    /// Run a backend request, then feed its outcome to the reducer
    fn request<F>(self, request: F)
    where
        F: Future<Output = ListEvent> + 'static,
    {
        self.store.in_flight().update(|n| *n += 1);
        spawn_local(async move {
            let event = request.await;
            self.store.in_flight().update(|n| *n = n.saturating_sub(1));
            self.settle(event);
        });
    }

    /// Fetch todos and reconcile them with the stored order
    pub fn reload(self) {
        let service = self.service.get_value();
        self.request(async move { service.fetch().await });
    }

    pub fn create(self, name: String) {
        let service = self.service.get_value();
        self.request(async move { service.create(&name).await });
    }

    pub fn toggle(self, id: ItemId) {
        let Some(item) = self.store.list().with_untracked(|list| list.item(&id).cloned()) else {
            log::warn!("toggle for unknown todo {}", id);
            return;
        };
        let service = self.service.get_value();
        self.request(async move { service.toggle(&item).await });
    }

    pub fn delete(self, id: ItemId) {
        let service = self.service.get_value();
        self.request(async move { service.delete(id).await });
    }

    /// Move a row; `destination: None` is a cancelled drag
    pub fn reorder(self, source: usize, destination: Option<usize>) {
        self.settle(ListEvent::Reordered {
            source,
            destination,
        });
    }

    pub fn dismiss_notice(self) {
        self.store.list().update(|list| list.notice = None);
    }
}
