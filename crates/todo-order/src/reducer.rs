//! List Reducer
//!
//! `(state, event) -> (state, effects)`. Storage writes and refetches are
//! returned as effects for the caller to run.

use crate::models::{Item, ItemId};
use crate::order::OrderRecord;
use crate::reconcile::reconcile;
use crate::reorder::reorder;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Everything the list view renders from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    /// Display order
    pub items: Vec<Item>,
    /// Last known persisted order
    pub order: Option<OrderRecord>,
    pub status: LoadStatus,
    /// Last mutation failure, cleared by the next successful fetch
    pub notice: Option<String>,
}

impl ListState {
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }
}

/// Outcomes fed into the reducer. Mutation events mean the backend accepted it.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    Fetched {
        items: Vec<Item>,
        persisted: Option<OrderRecord>,
    },
    FetchFailed(String),
    Reordered {
        source: usize,
        destination: Option<usize>,
    },
    Created(Item),
    Toggled(ItemId),
    Deleted(ItemId),
    MutationFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Overwrite the stored order with this record
    PersistOrder(OrderRecord),
    Refetch,
}

pub fn reduce(mut state: ListState, event: ListEvent) -> (ListState, Vec<Effect>) {
    let mut effects = Vec::new();

    match event {
        ListEvent::Fetched { items, persisted } => {
            let reconciled = reconcile(items, persisted.as_ref());
            state.items = reconciled.items;
            state.order = match reconciled.bootstrap {
                Some(bootstrap) => {
                    effects.push(Effect::PersistOrder(bootstrap.clone()));
                    Some(bootstrap)
                }
                None => persisted,
            };
            state.status = LoadStatus::Ready;
            state.notice = None;
        }
        ListEvent::FetchFailed(message) => {
            state.status = LoadStatus::Failed(message);
        }
        ListEvent::Reordered {
            source,
            destination,
        } => {
            if destination.is_none() || source >= state.items.len() {
                return (state, effects);
            }
            state.items = reorder(state.items, source, destination);
            let record = OrderRecord::from_items(&state.items);
            state.order = Some(record.clone());
            effects.push(Effect::PersistOrder(record));
        }
        ListEvent::Created(item) => {
            if state.item(&item.id).is_none() {
                state.items.insert(0, item);
            }
            effects.push(Effect::Refetch);
        }
        ListEvent::Toggled(id) => {
            if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
                item.completed = !item.completed;
            }
            effects.push(Effect::Refetch);
        }
        ListEvent::Deleted(id) => {
            state.items.retain(|item| item.id != id);
            if let Some(order) = state.order.take() {
                let filtered = order.without(&id);
                effects.push(Effect::PersistOrder(filtered.clone()));
                state.order = Some(filtered);
            }
            effects.push(Effect::Refetch);
        }
        ListEvent::MutationFailed(message) => {
            state.notice = Some(message);
        }
    }

    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(ids: &[u64]) -> Vec<Item> {
        ids.iter().map(|id| Item::new(*id, format!("Todo {}", id))).collect()
    }

    fn record(ids: &[u64]) -> OrderRecord {
        OrderRecord::new(numbers(ids))
    }

    fn numbers(ids: &[u64]) -> Vec<ItemId> {
        ids.iter().map(|id| ItemId::number(*id)).collect()
    }

    fn ready(ids: &[u64]) -> ListState {
        ListState {
            items: items(ids),
            order: Some(record(ids)),
            status: LoadStatus::Ready,
            notice: None,
        }
    }

    #[test]
    fn test_first_fetch_bootstraps_order() {
        let (state, effects) = reduce(
            ListState::default(),
            ListEvent::Fetched {
                items: items(&[1, 2]),
                persisted: None,
            },
        );
        assert_eq!(state.ids(), numbers(&[1, 2]));
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.order, Some(record(&[1, 2])));
        assert_eq!(effects, vec![Effect::PersistOrder(record(&[1, 2]))]);
    }

    #[test]
    fn test_fetch_with_record_writes_nothing() {
        let (state, effects) = reduce(
            ListState::default(),
            ListEvent::Fetched {
                items: items(&[1, 2, 3]),
                persisted: Some(record(&[1, 2])),
            },
        );
        assert_eq!(state.ids(), numbers(&[3, 1, 2]));
        assert_eq!(state.order, Some(record(&[1, 2])));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_empty_fetch_writes_nothing() {
        let (state, effects) = reduce(
            ListState::default(),
            ListEvent::Fetched {
                items: Vec::new(),
                persisted: None,
            },
        );
        assert!(state.items.is_empty());
        assert_eq!(state.status, LoadStatus::Ready);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_fetch_clears_notice() {
        let mut state = ready(&[1]);
        state.notice = Some("boom".to_string());
        let (state, _) = reduce(
            state,
            ListEvent::Fetched {
                items: items(&[1]),
                persisted: Some(record(&[1])),
            },
        );
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_fetch_failed() {
        let (state, effects) = reduce(ready(&[1]), ListEvent::FetchFailed("offline".to_string()));
        assert_eq!(state.status, LoadStatus::Failed("offline".to_string()));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_reorder_persists_full_order() {
        let (state, effects) = reduce(
            ready(&[1, 2, 3]),
            ListEvent::Reordered {
                source: 2,
                destination: Some(0),
            },
        );
        assert_eq!(state.ids(), numbers(&[3, 1, 2]));
        assert_eq!(effects, vec![Effect::PersistOrder(record(&[3, 1, 2]))]);
    }

    #[test]
    fn test_cancelled_reorder_is_noop() {
        let before = ready(&[1, 2, 3]);
        let (state, effects) = reduce(
            before.clone(),
            ListEvent::Reordered {
                source: 0,
                destination: None,
            },
        );
        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_delete_filters_order() {
        let (state, effects) = reduce(ready(&[1, 2, 3]), ListEvent::Deleted(ItemId::number(2)));
        assert_eq!(state.ids(), numbers(&[1, 3]));
        assert_eq!(state.order, Some(record(&[1, 3])));
        assert_eq!(
            effects,
            vec![
                Effect::PersistOrder(record(&[1, 3])),
                Effect::Refetch
            ]
        );
    }

    #[test]
    fn test_delete_without_record() {
        let mut state = ready(&[1, 2]);
        state.order = None;
        let (state, effects) = reduce(state, ListEvent::Deleted(ItemId::number(1)));
        assert_eq!(state.ids(), numbers(&[2]));
        assert_eq!(state.order, None);
        assert_eq!(effects, vec![Effect::Refetch]);
    }

    #[test]
    fn test_created_shows_first_without_order_write() {
        let (state, effects) = reduce(ready(&[1, 2]), ListEvent::Created(Item::new(9u64, "new")));
        assert_eq!(state.ids(), numbers(&[9, 1, 2]));
        assert_eq!(state.order, Some(record(&[1, 2])));
        assert_eq!(effects, vec![Effect::Refetch]);
    }

    #[test]
    fn test_toggled_flips_locally() {
        let (state, effects) = reduce(ready(&[1, 2]), ListEvent::Toggled(ItemId::number(2)));
        assert!(state.item(&ItemId::number(2)).unwrap().completed);
        assert!(!state.item(&ItemId::number(1)).unwrap().completed);
        assert_eq!(state.ids(), numbers(&[1, 2]));
        assert_eq!(effects, vec![Effect::Refetch]);
    }

    #[test]
    fn test_mutation_failed_sets_notice() {
        let (state, effects) =
            reduce(ready(&[1]), ListEvent::MutationFailed("delete failed".to_string()));
        assert_eq!(state.notice.as_deref(), Some("delete failed"));
        assert_eq!(state.ids(), numbers(&[1]));
        assert!(effects.is_empty());
    }
}
