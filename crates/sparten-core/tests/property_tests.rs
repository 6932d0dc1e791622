//! Property-based tests for the coordinate algebra
//!
//! These tests use proptest to check the ordering, permutation and
//! enumeration laws that the sparse engine relies on.

use std::cmp::Ordering;

use proptest::prelude::*;
use sparten_core::Index;

// ============================================================================
// Test Utilities
// ============================================================================

fn index_strategy(order: usize) -> impl Strategy<Value = Index> {
    prop::collection::vec(0usize..8, order).prop_map(Index::from)
}

/// Two coordinates of the same random order
fn index_pair_strategy() -> impl Strategy<Value = (Index, Index)> {
    (1usize..=5).prop_flat_map(|order| (index_strategy(order), index_strategy(order)))
}

/// A coordinate together with a random permutation of its axes
fn permuted_index_strategy() -> impl Strategy<Value = (Index, Vec<usize>)> {
    (1usize..=5).prop_flat_map(|order| {
        (
            index_strategy(order),
            Just((0..order).collect::<Vec<_>>()).prop_shuffle(),
        )
    })
}

// ============================================================================
// Ordering Properties
// ============================================================================

proptest! {
    /// Property: comparison reports equality exactly for equal coordinates
    #[test]
    fn prop_cmp_consistent_with_eq((a, b) in index_pair_strategy()) {
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    /// Property: the highest differing axis decides the comparison
    #[test]
    fn prop_highest_axis_decides((a, b) in index_pair_strategy()) {
        let axis = a.highest_order_difference(&b).unwrap();
        if axis == 0 {
            prop_assert_eq!(&a, &b);
        } else {
            let expected = a.as_slice()[axis - 1].cmp(&b.as_slice()[axis - 1]);
            prop_assert_eq!(a.cmp(&b), expected);
        }
    }

    /// Property: distances are symmetric and zero only for equal coordinates
    #[test]
    fn prop_distances_symmetric((a, b) in index_pair_strategy()) {
        prop_assert_eq!(a.orthogonal_distance(&b).unwrap(), b.orthogonal_distance(&a).unwrap());
        prop_assert_eq!(a.orthogonal_distance(&b).unwrap() == 0, a == b);
        let euclidean = a.euclidean_distance(&b).unwrap();
        prop_assert!(euclidean <= a.orthogonal_distance(&b).unwrap() as f64 + 1e-9);
    }
}

// ============================================================================
// Axis Algebra Properties
// ============================================================================

proptest! {
    /// Property: transposing twice is the identity
    #[test]
    fn prop_transpose_involution(index in (0usize..=6).prop_flat_map(index_strategy)) {
        prop_assert_eq!(index.transpose().transpose(), index);
    }

    /// Property: reordering by a permutation and then by its inverse is the identity
    #[test]
    fn prop_reorder_inverse((index, permutation) in permuted_index_strategy()) {
        let mut inverse = vec![0; permutation.len()];
        for (position, &axis) in permutation.iter().enumerate() {
            inverse[axis] = position;
        }
        let reordered = index.reorder(&permutation).unwrap();
        prop_assert_eq!(reordered.reorder(&inverse).unwrap(), index);
    }

    /// Property: constraining away the appended axes undoes combine
    #[test]
    fn prop_combine_then_constrain((a, b) in index_pair_strategy()) {
        let combined = a.combine(&b);
        prop_assert_eq!(combined.order(), a.order() + b.order());
        let appended: Vec<usize> = (a.order()..combined.order()).collect();
        prop_assert_eq!(combined.constrain(&appended).unwrap(), a);
    }
}

// ============================================================================
// Enumeration Properties
// ============================================================================

proptest! {
    /// Property: the bounding box enumerates every cell once, in ascending order
    #[test]
    fn prop_indices_cardinality_and_order(
        max in (1usize..=4).prop_flat_map(|order| {
            prop::collection::vec(0usize..4, order).prop_map(Index::from)
        })
    ) {
        let cells = Index::indices(&max);
        let expected: usize = max.as_slice().iter().map(|&c| c + 1).product();
        prop_assert_eq!(cells.len(), expected);
        prop_assert!(cells.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(cells.iter().all(|cell| cell.is_within(&Index::new(vec![0; max.order()]), &max)));
        prop_assert_eq!(cells.last(), Some(&max));
    }
}
