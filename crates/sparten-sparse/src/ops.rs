//! Element-wise operations on sparse tensors
//!
//! All operations return a new tensor and leave the receiver untouched.
//! Only stored entries are visited; holes stay holes.
//!
//! # Sparse operands
//!
//! - [`Tensor::mask`] produces an entry for every entry of the receiver.
//!   A coordinate missing from the mask counts as `false`.
//! - [`Tensor::piecewise`] produces an entry only where *both* operands
//!   hold a value. A hole in either operand is a hole in the result.
//!
//! # Examples
//!
//! ```
//! use sparten_core::index;
//! use sparten_sparse::Tensor;
//!
//! let a = Tensor::from_vec(vec![1, 2, 3]);
//! let b = Tensor::from_vec(vec![10, 20, 30]);
//!
//! let doubled = a.compute(|v| v * 2);
//! assert_eq!(doubled.get(&index![2]), Some(&6));
//!
//! let sums = a.piecewise(|x, y| x + y, &b).unwrap();
//! assert_eq!(sums.get(&index![1]), Some(&22));
//! ```

use std::collections::BTreeMap;

use sparten_core::{trace_op, Index, TensorError, TensorResult};

use crate::Tensor;

impl<T> Tensor<T> {
    fn check_same_shape<U>(&self, other: &Tensor<U>) -> TensorResult<()> {
        if self.order() != other.order() {
            return Err(TensorError::order_mismatch(self.order(), other.order()));
        }
        let (ours, theirs) = (self.dimensions(), other.dimensions());
        if ours != theirs {
            return Err(TensorError::shape_mismatch(&ours, &theirs));
        }
        Ok(())
    }

    /// Map every stored value through `f`
    pub fn compute<U>(&self, mut f: impl FnMut(&T) -> U) -> Tensor<U> {
        Tensor::from_map(
            self.entries
                .iter()
                .map(|(index, value)| (index.clone(), f(value)))
                .collect(),
        )
    }

    /// Map every stored `(index, value)` pair to a new value
    pub fn compute_with_indices<U>(&self, mut f: impl FnMut(&Index, &T) -> U) -> Tensor<U> {
        Tensor::from_map(
            self.entries
                .iter()
                .map(|(index, value)| (index.clone(), f(index, value)))
                .collect(),
        )
    }

    /// Map every stored `(index, value)` pair to a new pair, re-indexing
    /// the tensor.
    ///
    /// Sources are visited in coordinate order; when several map to the
    /// same destination the last one wins.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the produced indices do not share one order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparten_core::index;
    /// use sparten_sparse::Tensor;
    ///
    /// let v = Tensor::from_vec(vec!['a', 'b', 'c']);
    /// // Reverse the vector
    /// let reversed = v
    ///     .compute_and_update_indices(|idx, &c| (idx.compute(|i| 2 - i), c))
    ///     .unwrap();
    /// assert_eq!(reversed.get(&index![0]), Some(&'c'));
    /// ```
    pub fn compute_and_update_indices<U>(
        &self,
        mut f: impl FnMut(&Index, &T) -> (Index, U),
    ) -> TensorResult<Tensor<U>> {
        Tensor::from_entries(
            self.entries
                .iter()
                .map(|(index, value)| f(index, value))
                .collect::<Vec<_>>(),
        )
    }

    /// Keep each value where `mask` is `true`, substitute `masked_value`
    /// elsewhere.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `mask` differs in order or bounding box.
    pub fn mask(&self, mask: &Tensor<bool>, masked_value: T) -> TensorResult<Tensor<T>>
    where
        T: Clone,
    {
        self.check_same_shape(mask)?;
        trace_op!(op = "mask", order = self.order(), entries = self.len());
        Ok(Tensor::from_map(
            self.entries
                .iter()
                .map(|(index, value)| {
                    let kept = mask.get(index).copied().unwrap_or(false);
                    let value = if kept {
                        value.clone()
                    } else {
                        masked_value.clone()
                    };
                    (index.clone(), value)
                })
                .collect(),
        ))
    }

    /// Combine two equally shaped tensors coordinate by coordinate.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the operands differ in order or bounding box.
    pub fn piecewise<U, V>(
        &self,
        mut f: impl FnMut(&T, &U) -> V,
        other: &Tensor<U>,
    ) -> TensorResult<Tensor<V>> {
        self.check_same_shape(other)?;
        trace_op!(op = "piecewise", order = self.order(), entries = self.len());
        let entries: BTreeMap<Index, V> = self
            .entries
            .iter()
            .filter_map(|(index, value)| {
                other
                    .get(index)
                    .map(|theirs| (index.clone(), f(value, theirs)))
            })
            .collect();
        Ok(Tensor::from_map(entries))
    }
}
