//! Order Reconciliation
//!
//! Merges a fresh server snapshot with the persisted display order.

use std::collections::{HashMap, HashSet};

use crate::models::{Item, ItemId};
use crate::order::OrderRecord;

/// Reconciled display list
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub items: Vec<Item>,
    /// Record the caller should persist when none existed yet
    pub bootstrap: Option<OrderRecord>,
}

/// Arrange `server_items` by `persisted`.
///
/// Items unknown to the record come first, in server order. Known items
/// follow in record order. Record ids without a server item are dropped.
/// Content is always taken from the server copy.
pub fn reconcile(server_items: Vec<Item>, persisted: Option<&OrderRecord>) -> Reconciled {
    if server_items.is_empty() {
        return Reconciled {
            items: Vec::new(),
            bootstrap: None,
        };
    }

    let order = match persisted {
        Some(order) if !order.is_empty() => order,
        _ => {
            let bootstrap = OrderRecord::from_items(&server_items);
            return Reconciled {
                items: server_items,
                bootstrap: Some(bootstrap),
            };
        }
    };

    let known: HashSet<&ItemId> = order.ids().iter().collect();
    let mut by_id: HashMap<ItemId, Item> = HashMap::with_capacity(known.len());
    let mut seen_new: HashSet<ItemId> = HashSet::new();
    let mut items = Vec::with_capacity(server_items.len());

    for item in server_items {
        if known.contains(&item.id) {
            // Latest server copy wins on duplicate ids
            by_id.insert(item.id.clone(), item);
        } else if seen_new.insert(item.id.clone()) {
            items.push(item);
        }
    }
    let new_count = items.len();

    // remove() so a repeated record id only places its item once
    for id in order.ids() {
        if let Some(item) = by_id.remove(id) {
            items.push(item);
        }
    }

    log::debug!(
        "reconciled {} items ({} new, {} stale ids dropped)",
        items.len(),
        new_count,
        known.len() - (items.len() - new_count)
    );

    Reconciled {
        items,
        bootstrap: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(ids: &[u64]) -> Vec<Item> {
        ids.iter().map(|id| Item::new(*id, format!("Todo {}", id))).collect()
    }

    fn record(ids: &[u64]) -> OrderRecord {
        OrderRecord::new(ids.iter().map(|id| ItemId::number(*id)).collect())
    }

    fn ids(items: &[Item]) -> Vec<ItemId> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    fn numbers(ids: &[u64]) -> Vec<ItemId> {
        ids.iter().map(|id| ItemId::number(*id)).collect()
    }

    #[test]
    fn test_bootstrap_when_absent() {
        let result = reconcile(items(&[1, 2]), None);
        assert_eq!(ids(&result.items), numbers(&[1, 2]));
        assert_eq!(result.bootstrap, Some(record(&[1, 2])));
    }

    #[test]
    fn test_bootstrap_when_empty() {
        let empty = OrderRecord::default();
        let result = reconcile(items(&[2, 1]), Some(&empty));
        assert_eq!(ids(&result.items), numbers(&[2, 1]));
        assert_eq!(result.bootstrap, Some(record(&[2, 1])));
    }

    #[test]
    fn test_empty_server_list() {
        let order = record(&[1, 2]);
        let result = reconcile(Vec::new(), Some(&order));
        assert!(result.items.is_empty());
        assert_eq!(result.bootstrap, None);

        let result = reconcile(Vec::new(), None);
        assert!(result.items.is_empty());
        assert_eq!(result.bootstrap, None);
    }

    #[test]
    fn test_known_items_follow_record() {
        let order = record(&[3, 1, 2]);
        let result = reconcile(items(&[1, 2, 3]), Some(&order));
        assert_eq!(ids(&result.items), numbers(&[3, 1, 2]));
        assert_eq!(result.bootstrap, None);
    }

    #[test]
    fn test_record_order_wins_over_any_server_order() {
        let order = record(&[3, 1, 2]);
        for server in [[2, 3, 1], [1, 2, 3], [3, 2, 1], [2, 1, 3]] {
            let result = reconcile(items(&server), Some(&order));
            assert_eq!(ids(&result.items), numbers(&[3, 1, 2]), "server={:?}", server);
        }
    }

    #[test]
    fn test_new_items_first() {
        let order = record(&[1, 2]);
        let result = reconcile(items(&[1, 2, 3]), Some(&order));
        assert_eq!(ids(&result.items), numbers(&[3, 1, 2]));
    }

    #[test]
    fn test_new_items_keep_server_order() {
        let order = record(&[2]);
        let result = reconcile(items(&[5, 2, 4, 6]), Some(&order));
        assert_eq!(ids(&result.items), numbers(&[5, 4, 6, 2]));
    }

    #[test]
    fn test_stale_ids_dropped() {
        let order = record(&[1, 2]);
        let result = reconcile(items(&[1]), Some(&order));
        assert_eq!(ids(&result.items), numbers(&[1]));
    }

    #[test]
    fn test_content_comes_from_server() {
        let order = record(&[1]);
        let mut server = items(&[1]);
        server[0].name = "Renamed".to_string();
        server[0].completed = true;
        let result = reconcile(server, Some(&order));
        assert_eq!(result.items[0].name, "Renamed");
        assert!(result.items[0].completed);
    }

    #[test]
    fn test_repeated_record_ids_place_once() {
        let order = record(&[2, 1, 2]);
        let result = reconcile(items(&[1, 2]), Some(&order));
        assert_eq!(ids(&result.items), numbers(&[2, 1]));
    }

    #[test]
    fn test_duplicate_server_ids() {
        // Known id 1 repeats: the later copy wins. New id 3 repeats: the first copy wins.
        let mut server = items(&[1, 2, 1, 3, 3]);
        server[2].name = "Todo 1 (latest)".to_string();
        server[4].name = "Todo 3 (repeat)".to_string();
        let order = record(&[2, 1]);

        let result = reconcile(server, Some(&order));
        assert_eq!(ids(&result.items), numbers(&[3, 2, 1]));
        assert_eq!(result.items[0].name, "Todo 3");
        assert_eq!(result.items[2].name, "Todo 1 (latest)");
    }

    #[test]
    fn test_string_ids() {
        let server = vec![Item::new("b", "B"), Item::new("c", "C"), Item::new("a", "A")];
        let order = OrderRecord::new(vec![ItemId::text("a"), ItemId::text("b"), ItemId::text("zz")]);
        let result = reconcile(server, Some(&order));
        assert_eq!(
            ids(&result.items),
            vec![ItemId::text("c"), ItemId::text("a"), ItemId::text("b")]
        );
    }

    #[test]
    fn test_no_loss_across_mixed_inputs() {
        let cases: Vec<(Vec<u64>, Option<Vec<u64>>)> = vec![
            (vec![1, 2, 3], None),
            (vec![1, 2, 3], Some(vec![])),
            (vec![2, 3, 1], Some(vec![3, 1, 2])),
            (vec![4, 1, 9], Some(vec![9, 7, 1, 1])),
            (vec![10, 20, 30, 40], Some(vec![40, 30])),
            (vec![30, 5, 10, 40], Some(vec![10, 40, 99])),
            (vec![8], Some(vec![1, 2, 3])),
        ];
        for (server, order) in cases {
            let order = order.map(|ids| record(&ids));
            let result = reconcile(items(&server), order.as_ref());
            let got: Vec<u64> = result.items.iter().filter_map(|i| i.id.as_number()).collect();
            let mut sorted = got.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), got.len(), "duplicated: server={:?} order={:?}", server, order);
            let mut want = server.clone();
            want.sort_unstable();
            assert_eq!(sorted, want, "server={:?} order={:?}", server, order);
        }
    }
}
