//! Property-based tests for the data structures.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;

use crate::catalog::query::parse_distance;
use crate::catalog::TrailDraft;
use crate::data_structures::{BinarySearchTree, HashTable, PageNavigator, TrailGraph};
use crate::tests::{distance_strategy, elevation_strategy, trail_name_strategy};

/// One browsing action.
#[derive(Debug, Clone)]
enum NavAction {
    Visit(u8),
    Back,
    Forward,
}

fn nav_action_strategy() -> impl Strategy<Value = NavAction> {
    prop_oneof![
        any::<u8>().prop_map(NavAction::Visit),
        Just(NavAction::Back),
        Just(NavAction::Forward),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The table agrees with a map model: the last insert for a key wins.
    #[test]
    fn prop_hash_table_last_write_wins(
        entries in prop::collection::vec((trail_name_strategy(), elevation_strategy()), 0..48)
    ) {
        let mut table = HashTable::with_capacity(64).unwrap();
        let mut model = HashMap::new();
        for (name, value) in entries {
            table.insert(name.clone(), value.clone()).unwrap();
            model.insert(name, value);
        }

        prop_assert_eq!(table.len(), model.len());
        prop_assert_eq!(table.keys().count(), model.len());
        for (name, value) in &model {
            prop_assert_eq!(table.search(name.as_str()), Some(value));
        }
    }

    /// Deleting keys leaves the rest reachable past the tombstones.
    #[test]
    fn prop_hash_table_delete_keeps_others(
        names in prop::collection::btree_set(trail_name_strategy(), 1..32),
        mask in prop::collection::vec(any::<bool>(), 32)
    ) {
        let mut table = HashTable::with_capacity(32).unwrap();
        for name in &names {
            table.insert(name.clone(), name.len()).unwrap();
        }

        let mut kept = BTreeSet::new();
        for (name, remove) in names.iter().zip(mask) {
            if remove {
                prop_assert_eq!(table.delete(name.as_str()), Some(name.len()));
            } else {
                kept.insert(name.clone());
            }
        }

        prop_assert_eq!(table.len(), kept.len());
        let keys: BTreeSet<String> = table.keys().cloned().collect();
        prop_assert_eq!(keys, kept);
    }

    /// Ascending order is non-decreasing and descending holds the same items.
    #[test]
    fn prop_tree_orders_agree(distances in prop::collection::vec(distance_strategy(), 0..64)) {
        let mut tree = BinarySearchTree::new();
        for (position, distance) in distances.iter().enumerate() {
            tree.insert(parse_distance(distance).unwrap(), position);
        }

        let ascending: Vec<f64> = tree.sort_ascending().into_iter().map(|(key, _)| *key).collect();
        let mut descending: Vec<f64> =
            tree.sort_descending().into_iter().map(|(key, _)| *key).collect();

        prop_assert_eq!(ascending.len(), distances.len());
        prop_assert!(ascending.windows(2).all(|pair| pair[0] <= pair[1]));

        descending.reverse();
        prop_assert_eq!(&ascending, &descending);

        prop_assert_eq!(tree.find_min(), ascending.first());
        prop_assert_eq!(tree.find_max(), ascending.last());
    }

    /// Equal keys come out in insertion order when ascending.
    #[test]
    fn prop_tree_ties_keep_insertion_order(keys in prop::collection::vec(0u8..4, 0..64)) {
        let tree: BinarySearchTree<u8, usize> =
            keys.iter().copied().zip(0..).collect();

        let ascending = tree.sort_ascending();
        for pair in ascending.windows(2) {
            if pair[0].0 == pair[1].0 {
                prop_assert!(pair[0].1 < pair[1].1);
            }
        }
    }

    /// Connections are always symmetric and never point at the trail itself.
    #[test]
    fn prop_graph_connections_symmetric(
        names in prop::collection::btree_set(trail_name_strategy(), 1..12),
        pairs in prop::collection::vec((0usize..16, 0usize..16), 0..40)
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mut graph = TrailGraph::new();
        for name in &names {
            graph.add_trail(name, TrailDraft::new()).unwrap();
        }
        for (a, b) in pairs {
            // Out-of-range indices stand for unknown trails
            let a = names.get(a).map(String::as_str).unwrap_or("Unknown Trail 1");
            let b = names.get(b).map(String::as_str).unwrap_or("Unknown Trail 2");
            graph.connect_trails(a, b);
        }

        prop_assert_eq!(graph.len(), names.len());
        for (name, node) in graph.get_trails() {
            prop_assert!(!node.is_connected_to(name));
            let unique: BTreeSet<&String> = node.connections().iter().collect();
            prop_assert_eq!(unique.len(), node.connections().len());
            for other in node.connections() {
                let other_node = graph.get_trail(other);
                prop_assert!(other_node.is_some());
                prop_assert!(other_node.map_or(false, |node| node.is_connected_to(name)));
            }
        }
    }

    /// The navigator behaves like a browser history model.
    #[test]
    fn prop_navigator_matches_history_model(
        actions in prop::collection::vec(nav_action_strategy(), 0..64)
    ) {
        let mut navigator = PageNavigator::new();
        let mut history: Vec<u8> = Vec::new();
        let mut position: Option<usize> = None;

        for action in actions {
            match action {
                NavAction::Visit(page) => {
                    navigator.visit_page(page);
                    let keep = position.map_or(0, |index| index + 1);
                    history.truncate(keep);
                    history.push(page);
                    position = Some(history.len() - 1);
                }
                NavAction::Back => {
                    let moved = navigator.go_back().copied();
                    match position {
                        Some(index) if index > 0 => {
                            position = Some(index - 1);
                            prop_assert_eq!(moved, Some(history[index - 1]));
                        }
                        _ => prop_assert_eq!(moved, None),
                    }
                }
                NavAction::Forward => {
                    let moved = navigator.go_forward().copied();
                    match position {
                        Some(index) if index + 1 < history.len() => {
                            position = Some(index + 1);
                            prop_assert_eq!(moved, Some(history[index + 1]));
                        }
                        _ => prop_assert_eq!(moved, None),
                    }
                }
            }

            prop_assert_eq!(navigator.current_page().copied(), position.map(|index| history[index]));
            prop_assert_eq!(navigator.can_go_back(), position.map_or(false, |index| index > 0));
            prop_assert_eq!(
                navigator.can_go_forward(),
                position.map_or(false, |index| index + 1 < history.len())
            );
        }
    }
}
