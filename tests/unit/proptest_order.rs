//! Property-based tests for ordering, drop geometry and reordering
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use crate::common::{at_minutes, ids};
use streamorder::core::models::{OrderMapping, Rect, Stream, StreamId, insertion_index};
use streamorder::core::services::{SortDirection, SortMode, reconcile_mapping, reorder, sort_streams};

fn streams_strategy() -> impl Strategy<Value = Vec<Stream>> {
    prop::collection::vec((0u64..40, prop::option::of(0i64..500)), 0..25).prop_map(|raw| {
        raw.into_iter()
            .map(|(id, minutes)| {
                let stream = Stream::new(id, format!("q{id}"));
                match minutes {
                    Some(m) => stream.with_last_updated(at_minutes(m)),
                    None => stream,
                }
            })
            .collect()
    })
}

fn mapping_strategy() -> impl Strategy<Value = OrderMapping> {
    prop::collection::btree_map(0u64..40, -5i64..30, 0..20)
        .prop_map(|raw| raw.into_iter().map(|(id, pos)| (StreamId(id), pos)).collect())
}

fn mode_strategy() -> impl Strategy<Value = SortMode> {
    prop_oneof![Just(SortMode::Manual), Just(SortMode::LastUpdated)]
}

fn direction_strategy() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
}

/// Contiguous rows starting at `top`
fn rows(top: f64, heights: &[f64]) -> Vec<Rect> {
    heights
        .iter()
        .scan(top, |next, height| {
            let rect = Rect::new(*next, *height);
            *next += height;
            Some(rect)
        })
        .collect()
}

proptest! {
    /// Sorting yields every distinct input id exactly once
    #[test]
    fn sort_is_permutation_of_distinct_ids(
        streams in streams_strategy(),
        mapping in mapping_strategy(),
        mode in mode_strategy(),
        direction in direction_strategy()
    ) {
        let sorted = sort_streams(&streams, &mapping, mode, direction);
        let expected: BTreeSet<StreamId> = streams.iter().map(|s| s.id).collect();
        let actual: Vec<StreamId> = sorted.iter().map(|s| s.id).collect();
        prop_assert_eq!(actual.len(), expected.len());
        prop_assert_eq!(actual.into_iter().collect::<BTreeSet<_>>(), expected);
    }

    /// Input order never affects the result
    #[test]
    fn sort_is_deterministic(
        streams in streams_strategy(),
        mapping in mapping_strategy(),
        mode in mode_strategy(),
        direction in direction_strategy()
    ) {
        let mut distinct: Vec<Stream> = Vec::new();
        for stream in streams {
            if !distinct.iter().any(|s| s.id == stream.id) {
                distinct.push(stream);
            }
        }
        let mut reversed = distinct.clone();
        reversed.reverse();
        prop_assert_eq!(
            sort_streams(&distinct, &mapping, mode, direction),
            sort_streams(&reversed, &mapping, mode, direction)
        );
    }

    /// Positioned streams always precede unpositioned ones in manual mode
    #[test]
    fn manual_positions_come_first(
        streams in streams_strategy(),
        mapping in mapping_strategy()
    ) {
        let sorted = sort_streams(&streams, &mapping, SortMode::Manual, SortDirection::Descending);
        let first_unpositioned = sorted.iter().position(|s| !mapping.contains(s.id));
        if let Some(boundary) = first_unpositioned {
            prop_assert!(sorted[boundary..].iter().all(|s| !mapping.contains(s.id)));
        }
    }

    /// A reconciled mapping only names live ids
    #[test]
    fn reconciled_mapping_is_live(
        mapping in mapping_strategy(),
        live in prop::collection::hash_set(0u64..40, 0..40)
    ) {
        let live: HashSet<StreamId> = live.into_iter().map(StreamId).collect();
        let result = reconcile_mapping(mapping, &live, &HashSet::new());
        prop_assert!(result.mapping.ids().all(|id| live.contains(&id)));
    }

    /// Insertion index always lies in [0, N]
    #[test]
    fn insertion_index_in_bounds(
        top in -200.0f64..200.0,
        heights in prop::collection::vec(0.0f64..80.0, 0..12),
        pointer_y in -500.0f64..1500.0
    ) {
        let rects = rows(top, &heights);
        prop_assert!(insertion_index(pointer_y, &rects) <= rects.len());
    }

    /// Reorder keeps the same ids and places the source where asked
    #[test]
    fn reorder_is_permutation(
        len in 1usize..15,
        from in 0usize..15,
        index in 0usize..16
    ) {
        prop_assume!(from < len && index <= len);
        let raw: Vec<u64> = (0..len as u64).collect();
        let current = ids(&raw);
        let source = current[from];
        let next = reorder(&current, source, index).unwrap();

        let mut sorted = next.clone();
        sorted.sort();
        prop_assert_eq!(&sorted, &current);

        let landed = next.iter().position(|id| *id == source).unwrap();
        let expected = if from < index { index - 1 } else { index };
        prop_assert_eq!(landed, expected);
    }
}
