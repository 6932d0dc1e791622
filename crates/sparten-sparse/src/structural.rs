//! # Structural operations
//!
//! Operations that move entries between coordinates without changing their
//! values:
//!
//! - **Axis permutation**: [`Tensor::transpose`] (full reversal) and
//!   [`Tensor::reorder`] (arbitrary bijection)
//! - **Slicing**: [`Tensor::slice`] fixes and drops axes
//! - **Sub-boxes**: [`Tensor::extract`] keeps an inclusive window and
//!   re-bases it at the origin
//! - **Extrusion**: [`Tensor::extrude`] broadcasts along a new trailing axis
//! - **Stacking**: [`Tensor::combine`] stacks tensors along a new trailing
//!   axis, the approximate inverse of slicing the last axis
//!
//! Every operation returns an independently owned tensor. Operations on
//! an empty tensor return an empty tensor.
//!
//! ## Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use sparten_core::index;
//! use sparten_sparse::Tensor;
//!
//! let a = Tensor::from_vec(vec![1, 2]);
//! let b = Tensor::from_vec(vec![3, 4]);
//!
//! let stacked = Tensor::combine(&[a.clone(), b]).unwrap();
//! assert_eq!(stacked.dimensions().as_slice(), &[2, 2]);
//!
//! let first = stacked.slice(&BTreeMap::from([(1, 0)])).unwrap();
//! assert_eq!(first, a);
//! ```

use std::collections::BTreeMap;

use sparten_core::{
    trace_op, Axis, Index, InvalidArgumentError, TensorError, TensorResult,
};

use crate::Tensor;

impl<T: Clone> Tensor<T> {
    /// Reverse the axis order of every key.
    pub fn transpose(&self) -> Tensor<T> {
        trace_op!(op = "transpose", order = self.order(), entries = self.len());
        Tensor::from_map(
            self.entries
                .iter()
                .map(|(index, value)| (index.transpose(), value.clone()))
                .collect(),
        )
    }

    /// Permute the axes of every key: axis `i` of the result is axis
    /// `permutation[i]` of `self`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `permutation` is not a bijection over
    /// `0..order`.
    pub fn reorder(&self, permutation: &[Axis]) -> TensorResult<Tensor<T>> {
        Index::check_permutation(permutation, self.order())?;
        trace_op!(op = "reorder", order = self.order(), entries = self.len());
        let mut entries = BTreeMap::new();
        for (index, value) in &self.entries {
            entries.insert(index.reorder(permutation)?, value.clone());
        }
        Ok(Tensor::from_map(entries))
    }

    /// Keep the entries matching every `axis -> value` constraint and drop
    /// the constrained axes.
    ///
    /// The result has order `self.order() - constraints.len()`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if a constrained axis is beyond the order.
    pub fn slice(&self, constraints: &BTreeMap<Axis, usize>) -> TensorResult<Tensor<T>> {
        let axes: Vec<Axis> = constraints.keys().copied().collect();
        if let Some(&axis) = axes.last() {
            self.check_axis(axis)?;
        }
        trace_op!(op = "slice", order = self.order(), constraints = axes.len());
        let mut entries = BTreeMap::new();
        for (index, value) in &self.entries {
            if index.has_coordinates(constraints) {
                entries.insert(index.constrain(&axes)?, value.clone());
            }
        }
        Ok(Tensor::from_map(entries))
    }

    /// Slice a single axis at `value`
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `axis` is beyond the order.
    pub fn slice_axis(&self, axis: Axis, value: usize) -> TensorResult<Tensor<T>> {
        self.slice(&BTreeMap::from([(axis, value)]))
    }

    /// Keep the entries inside the inclusive box `[min, max]` and shift them
    /// so that `min` becomes the origin.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `min`, `max` and the tensor differ in order, or
    /// if `min` exceeds `max` on any axis.
    pub fn extract(&self, min: &Index, max: &Index) -> TensorResult<Tensor<T>> {
        if min.order() != max.order() {
            return Err(TensorError::order_mismatch(min.order(), max.order()));
        }
        self.check_order(min)?;
        if min
            .as_slice()
            .iter()
            .zip(max.as_slice())
            .any(|(lo, hi)| lo > hi)
        {
            return Err(InvalidArgumentError::InvalidBounds {
                min: min.as_slice().to_vec(),
                max: max.as_slice().to_vec(),
            }
            .into());
        }
        trace_op!(op = "extract", order = self.order(), entries = self.len());
        Ok(Tensor::from_map(
            self.entries
                .iter()
                .filter(|(index, _)| index.is_within(min, max))
                .filter_map(|(index, value)| {
                    index
                        .checked_sub(min)
                        .map(|rebased| (rebased, value.clone()))
                })
                .collect(),
        ))
    }

    /// Broadcast every entry into `size` copies along a new trailing axis
    /// indexed `0..size`.
    pub fn extrude(&self, size: usize) -> Tensor<T> {
        trace_op!(op = "extrude", order = self.order(), size);
        let mut entries = BTreeMap::new();
        for (index, value) in &self.entries {
            for layer in 0..size {
                entries.insert(index.extrude(layer), value.clone());
            }
        }
        Tensor::from_map(entries)
    }

    /// Stack equal-order tensors along a new trailing axis: tensor `i`
    /// becomes slice `i` of the result.
    ///
    /// Empty tensors contribute an empty slice.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the non-empty tensors differ in order.
    pub fn combine(tensors: &[Tensor<T>]) -> TensorResult<Tensor<T>> {
        let mut populated = tensors.iter().filter(|t| !t.is_empty());
        if let Some(first) = populated.next() {
            let order = first.order();
            if let Some(other) = populated.find(|t| t.order() != order) {
                return Err(TensorError::order_mismatch(order, other.order()));
            }
        }
        trace_op!(op = "combine", tensors = tensors.len());
        let mut entries = BTreeMap::new();
        for (layer, tensor) in tensors.iter().enumerate() {
            for (index, value) in &tensor.entries {
                entries.insert(index.extrude(layer), value.clone());
            }
        }
        Ok(Tensor::from_map(entries))
    }
}
