//! Property-based tests for the sparse engine
//!
//! These tests use proptest to check storage, slicing and reduction laws
//! on randomly populated tensors.

use std::collections::BTreeMap;

use proptest::prelude::*;
use sparten_core::Index;
use sparten_sparse::Tensor;

// ============================================================================
// Test Utilities
// ============================================================================

type Entries = Vec<(Vec<usize>, i64)>;

/// Random `(coordinate, value)` pairs sharing one order
fn entries_strategy(order: usize, extent: usize, max_nnz: usize) -> impl Strategy<Value = Entries> {
    prop::collection::vec(
        (prop::collection::vec(0..extent, order), -1000i64..1000),
        0..=max_nnz,
    )
}

fn tensor_strategy() -> impl Strategy<Value = Tensor<i64>> {
    (1usize..=4).prop_flat_map(|order| {
        entries_strategy(order, 5, 20).prop_map(|entries| {
            Tensor::from_entries(entries.into_iter().map(|(c, v)| (Index::from(c), v)))
                .expect("entries share one order")
        })
    })
}

// ============================================================================
// Storage Properties
// ============================================================================

proptest! {
    /// Property: set then get returns the value; unset coordinates stay empty
    #[test]
    fn prop_set_then_get(entries in entries_strategy(3, 6, 30)) {
        let mut tensor = Tensor::empty();
        let mut expected = BTreeMap::new();
        for (coords, value) in &entries {
            tensor.set(Index::from(coords.clone()), *value).unwrap();
            expected.insert(coords.clone(), *value);
        }
        for (coords, value) in &expected {
            prop_assert_eq!(tensor.get(&Index::from(coords.clone())), Some(value));
        }
        for cell in tensor.indices() {
            if !expected.contains_key(cell.as_slice()) {
                prop_assert_eq!(tensor.get(&cell), None);
            }
        }
    }

    /// Property: dimensions are the per-axis maximum coordinate plus one
    #[test]
    fn prop_dimensions_bound_entries(tensor in tensor_strategy()) {
        let dims = tensor.dimensions();
        for index in tensor.keys() {
            for (axis, &c) in index.as_slice().iter().enumerate() {
                prop_assert!(c < dims[axis]);
            }
        }
        for axis in 0..dims.len() {
            prop_assert!(tensor.keys().any(|index| index.as_slice()[axis] + 1 == dims[axis]));
        }
    }

    /// Property: backfill populates the whole bounding box without touching entries
    #[test]
    fn prop_backfill_keeps_entries(tensor in tensor_strategy()) {
        let mut filled = tensor.clone();
        filled.backfill(i64::MIN);
        prop_assert_eq!(filled.len(), tensor.indices().len());
        for (index, value) in &tensor {
            prop_assert_eq!(filled.get(index), Some(value));
        }
    }
}

// ============================================================================
// Structural Properties
// ============================================================================

proptest! {
    /// Property: constraining every axis yields the matching entry or nothing
    #[test]
    fn prop_full_slice_is_scalar(
        tensor in tensor_strategy(),
        point in prop::collection::vec(0usize..5, 4),
    ) {
        prop_assume!(!tensor.is_empty());
        let coords = &point[..tensor.order()];
        let constraints: BTreeMap<usize, usize> = coords.iter().copied().enumerate().collect();
        let cell = tensor.slice(&constraints).unwrap();
        match tensor.get(&Index::from(coords)) {
            Some(value) => {
                prop_assert_eq!(cell.order(), 0);
                prop_assert_eq!(cell.len(), 1);
                prop_assert_eq!(cell.get(&Index::scalar()), Some(value));
            }
            None => prop_assert!(cell.is_empty()),
        }
    }

    /// Property: slicing the stacking axis recovers each stacked tensor
    #[test]
    fn prop_combine_slice_inverse(
        layers in prop::collection::vec(entries_strategy(2, 4, 8), 1..5)
    ) {
        let tensors: Vec<Tensor<i64>> = layers
            .into_iter()
            .map(|entries| {
                Tensor::from_entries(entries.into_iter().map(|(c, v)| (Index::from(c), v)))
                    .unwrap()
            })
            .collect();
        let stacked = Tensor::combine(&tensors).unwrap();
        // All layers empty: nothing to slice, and axis 2 does not exist
        prop_assume!(!stacked.is_empty());
        for (k, tensor) in tensors.iter().enumerate() {
            prop_assert_eq!(&stacked.slice_axis(2, k).unwrap(), tensor);
        }
    }

    /// Property: transposing a tensor twice is the identity
    #[test]
    fn prop_transpose_involution(tensor in tensor_strategy()) {
        prop_assert_eq!(tensor.transpose().transpose(), tensor);
    }

    /// Property: summing along an axis preserves the grand total
    #[test]
    fn prop_reduce_preserves_sum(tensor in tensor_strategy(), axis in 0usize..4) {
        prop_assume!(!tensor.is_empty() && axis < tensor.order());
        let total: i64 = tensor.values().sum();
        let reduced = tensor.reduce(0, |a, b| a + b, axis).unwrap();
        prop_assert_eq!(reduced.order(), tensor.order() - 1);
        prop_assert_eq!(reduced.values().sum::<i64>(), total);
    }
}
