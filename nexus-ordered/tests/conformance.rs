//! Behaviour every backing must share.
//!
//! Each test body is written once against `OrderedContainer` and run for
//! both concrete backings and both `Container` variants.

use core::cmp::Ordering;
use core::ops::ControlFlow;

use nexus_ordered::{
    Apply, Backing, Container, Natural, OrderedContainer, Registry, Reversed, SortedArray,
    SortedList, Usage,
};

fn contents<C: OrderedContainer<Item = u32>>(c: &C) -> Vec<u32> {
    c.iter().copied().collect()
}

macro_rules! conformance {
    ($name:ident, $new:expr, $new_in:expr) => {
        mod $name {
            use super::*;

            fn empty() -> impl OrderedContainer<Item = u32> {
                $new
            }

            fn filled(values: &[u32]) -> impl OrderedContainer<Item = u32> {
                let mut c = empty();
                for &n in values {
                    c.insert(n);
                }
                c
            }

            // =================================================================
            // Insert / find / delete
            // =================================================================

            #[test]
            fn insert_find_delete_scenario() {
                let mut c = filled(&[5, 3, 4, 1, 2]);
                assert_eq!(contents(&c), vec![1, 2, 3, 4, 5]);

                let three = c.find(&3).unwrap();
                assert_eq!(c.get(three), Some(&3));
                assert_eq!(c.remove(three), Some(3));

                assert_eq!(contents(&c), vec![1, 2, 4, 5]);
                assert_eq!(c.len(), 4);
                assert!(c.find(&3).is_none());
            }

            #[test]
            fn empty_container() {
                let c = empty();
                assert!(c.is_empty());
                assert_eq!(c.len(), 0);
                assert!(c.find(&1).is_none());
                assert!(c.first().is_none());
                assert!(c.last().is_none());
                assert_eq!(c.iter().next(), None);
            }

            #[test]
            fn insert_returns_handle_to_value() {
                let mut c = filled(&[10, 30]);
                let handle = c.insert(20);
                assert_eq!(c.get(handle), Some(&20));
                assert_eq!(c.len(), 3);
            }

            #[test]
            fn duplicates_are_kept() {
                let mut c = filled(&[2, 1, 2, 2]);
                assert_eq!(contents(&c), vec![1, 2, 2, 2]);

                let handle = c.find(&2).unwrap();
                assert_eq!(c.remove(handle), Some(2));
                assert_eq!(contents(&c), vec![1, 2, 2]);
            }

            #[test]
            fn find_missing_between_and_beyond() {
                let c = filled(&[10, 20, 30]);
                assert!(c.find(&5).is_none());
                assert!(c.find(&15).is_none());
                assert!(c.find(&35).is_none());
                assert!(c.contains(&20));
                assert!(!c.contains(&25));
            }

            #[test]
            fn find_with_consistent_comparator() {
                let c = filled(&[10, 20, 30]);
                let handle = c
                    .find_with(&20u64, |probe: &u64, value: &u32| probe.cmp(&u64::from(*value)))
                    .unwrap();
                assert_eq!(c.get(handle), Some(&20));
            }

            #[test]
            fn remove_first_and_last() {
                let mut c = filled(&[3, 1, 2]);

                let low = c.find(&1).unwrap();
                assert_eq!(c.remove(low), Some(1));
                let high = c.find(&3).unwrap();
                assert_eq!(c.remove(high), Some(3));

                assert_eq!(contents(&c), vec![2]);
                assert_eq!(c.first(), Some(&2));
                assert_eq!(c.last(), Some(&2));
            }

            #[test]
            fn remove_first_by_probe() {
                let mut c = filled(&[4, 8]);
                assert_eq!(c.remove_first(&8), Some(8));
                assert_eq!(c.remove_first(&8), None);
                assert_eq!(contents(&c), vec![4]);
            }

            #[test]
            fn removed_handle_is_not_honoured_again() {
                let mut c = filled(&[1, 2, 3]);
                let two = c.find(&2).unwrap();
                assert_eq!(c.remove(two), Some(2));

                assert_eq!(c.get(two), None);
                assert_eq!(c.remove(two), None);
                assert_eq!(contents(&c), vec![1, 3]);
            }

            #[test]
            fn remove_until_empty() {
                let mut c = filled(&[3, 1, 2]);
                while let Some(&n) = c.first() {
                    let handle = c.find(&n).unwrap();
                    assert_eq!(c.remove(handle), Some(n));
                }
                assert!(c.is_empty());

                c.insert(9);
                assert_eq!(contents(&c), vec![9]);
            }

            #[test]
            fn clear_resets() {
                let mut c = filled(&[1, 2, 3]);
                let handle = c.find(&2).unwrap();

                c.clear();
                assert!(c.is_empty());
                assert_eq!(c.get(handle), None);
                assert_eq!(c.iter().count(), 0);

                c.insert(7);
                assert_eq!(contents(&c), vec![7]);
            }

            #[test]
            fn iter_is_double_ended() {
                let c = filled(&[2, 3, 1]);
                let backward: Vec<_> = c.iter().rev().copied().collect();
                assert_eq!(backward, vec![3, 2, 1]);
            }

            // =================================================================
            // Traversal
            // =================================================================

            #[test]
            fn apply_visits_in_order() {
                let c = filled(&[5, 3, 4, 1, 2]);
                let mut seen = Vec::new();
                c.apply(|n| seen.push(*n));
                assert_eq!(seen, vec![1, 2, 3, 4, 5]);
            }

            #[test]
            fn apply_if_stops_at_break() {
                let c = filled(&[5, 3, 4, 1, 2]);
                let mut seen = Vec::new();
                let hit = c.apply_if(|n| {
                    seen.push(*n);
                    if *n == 3 {
                        ControlFlow::Break(*n * 10)
                    } else {
                        ControlFlow::Continue(())
                    }
                });
                assert_eq!(hit, Some(30));
                assert_eq!(seen, vec![1, 2, 3]);
            }

            #[test]
            fn apply_if_without_break() {
                let c = filled(&[1, 2]);
                let hit: Option<()> = c.apply_if(|_| ControlFlow::Continue(()));
                assert_eq!(hit, None);
            }

            #[test]
            fn apply_with_threads_context() {
                let c = filled(&[1, 2, 3, 4]);
                let mut total = 0u32;
                c.apply_with(|n, total: &mut u32| *total += n, &mut total);
                assert_eq!(total, 10);
            }

            #[test]
            fn apply_if_with_accumulates_until_break() {
                let c = filled(&[1, 2, 3, 4]);
                let mut running = 0u32;
                let stopped_at = c.apply_if_with(
                    |n, running: &mut u32| {
                        *running += n;
                        if *running > 4 {
                            ControlFlow::Break(*n)
                        } else {
                            ControlFlow::Continue(())
                        }
                    },
                    &mut running,
                );
                assert_eq!(stopped_at, Some(3));
                assert_eq!(running, 6);
            }

            #[test]
            fn traverse_with_explicit_mode() {
                let c = filled(&[4, 2]);
                let mut seen = Vec::new();
                let mut push = |n: &u32| seen.push(*n);
                let result = c.traverse::<(), ()>(Apply::Each(&mut push));
                assert_eq!(result, None);
                assert_eq!(seen, vec![2, 4]);
            }

            #[test]
            fn traversal_on_empty_never_calls() {
                let c = empty();
                let mut calls = 0;
                c.apply(|_| calls += 1);
                let hit: Option<u32> = c.apply_if(|n| ControlFlow::Break(*n));
                assert_eq!(calls, 0);
                assert_eq!(hit, None);
            }

            // =================================================================
            // Usage
            // =================================================================

            #[test]
            fn usage_tracks_lifecycle() {
                let registry = Registry::new();
                {
                    let mut c = $new_in(&registry);
                    let base = registry.usage();
                    assert_eq!(base.containers, 1);
                    assert_eq!(base.items_in_use, 0);
                    assert_eq!(base.items_allocated, c.allocated());

                    for n in [5, 3, 4, 1, 2] {
                        c.insert(n);
                    }
                    let usage = registry.usage();
                    assert_eq!(usage.items_in_use, 5);
                    assert_eq!(usage.items_allocated, c.allocated());
                    assert!(usage.items_allocated >= usage.items_in_use);

                    let handle = c.find(&3).unwrap();
                    c.remove(handle);
                    assert_eq!(registry.usage().items_in_use, 4);

                    c.clear();
                    assert_eq!(registry.usage().items_in_use, 0);
                    assert_eq!(registry.usage().items_allocated, c.allocated());
                    assert!(c.registry().shares(&registry));
                }
                assert_eq!(registry.usage(), Usage::default());
            }
        }
    };
}

conformance!(
    sorted_array,
    SortedArray::<u32>::default(),
    |registry: &Registry| SortedArray::<u32>::new_in(Natural, registry)
);

conformance!(
    sorted_list,
    SortedList::<u32>::default(),
    |registry: &Registry| SortedList::<u32>::new_in(Natural, registry)
);

conformance!(
    container_array,
    Container::<u32>::new(Backing::Array, Natural),
    |registry: &Registry| Container::<u32>::new_in(Backing::Array, Natural, registry)
);

conformance!(
    container_list,
    Container::<u32>::new(Backing::List, Natural),
    |registry: &Registry| Container::<u32>::new_in(Backing::List, Natural, registry)
);

// =============================================================================
// Comparator-driven ordering
// =============================================================================

#[test]
fn reversed_comparator_orders_descending() {
    let mut array = SortedArray::new(Reversed(Natural));
    let mut list = SortedList::new(Reversed(Natural));
    for n in [2u32, 9, 4] {
        array.insert(n);
        list.insert(n);
    }

    assert_eq!(contents(&array), vec![9, 4, 2]);
    assert_eq!(contents(&list), vec![9, 4, 2]);
    assert!(array.find(&4).is_some());
    assert!(list.find(&4).is_some());
}

#[test]
fn closure_comparator_with_ties() {
    let by_tens = |a: &u32, b: &u32| (a / 10).cmp(&(b / 10));
    let mut array = SortedArray::new(by_tens);
    let mut list = SortedList::new(by_tens);
    for n in [21u32, 5, 13, 27] {
        array.insert(n);
        list.insert(n);
    }

    // Only the tens digit is ordered
    for c in [contents(&array), contents(&list)] {
        let tens: Vec<_> = c.iter().map(|n| n / 10).collect();
        assert_eq!(tens, vec![0, 1, 2, 2]);
    }

    // Any member of the equal run satisfies find
    let handle = array.find(&20).unwrap();
    assert_eq!(array.get(handle).map(|n| n / 10), Some(2));
    let handle = list.find(&29).unwrap();
    assert_eq!(list.get(handle).map(|n| n / 10), Some(2));
}

#[test]
fn find_with_on_list_stops_early() {
    let list: SortedList<u32> = [10, 20, 30, 40].into_iter().collect();
    let mut visited = 0;
    let found = list.find_with(&25u32, |probe: &u32, value: &u32| {
        visited += 1;
        probe.cmp(value)
    });
    assert!(found.is_none());
    assert_eq!(visited, 3);
}

#[test]
fn inconsistent_find_with_is_harmless() {
    let array: SortedArray<u32> = [1, 2, 3, 4, 5].into_iter().collect();
    let list: SortedList<u32> = [1, 2, 3, 4, 5].into_iter().collect();

    // Descending order against an ascending container
    let backwards = |probe: &u32, value: &u32| value.cmp(probe);
    let _ = array.find_with(&4, backwards);
    let _ = list.find_with(&4, backwards);

    let always_less = |_: &u32, _: &u32| Ordering::Less;
    assert!(array.find_with(&4, always_less).is_none());
    assert!(list.find_with(&4, always_less).is_none());
}
