//! Reduction operations for sparse tensors
//!
//! A reduction along `axis` groups the stored entries by their coordinate
//! with `axis` removed and folds each group into a single value. The result
//! has one axis fewer; reducing a vector yields a scalar.
//!
//! Within a group, values are folded in ascending order of the removed
//! coordinate, so non-commutative accumulators behave predictably.
//!
//! # Complexity
//!
//! O(nnz log nnz) where nnz is the number of stored entries.
//!
//! # Examples
//!
//! ```
//! use sparten_core::{index, Index};
//! use sparten_sparse::Tensor;
//!
//! let m = Tensor::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
//!
//! // Sum each row (fold over the column axis)
//! let row_sums = m.reduce(0, |acc, v| acc + v, 0).unwrap();
//! assert_eq!(row_sums, Tensor::from_vec(vec![6, 15]));
//!
//! // A vector reduces to a scalar
//! let product = Tensor::from_vec(vec![1, 2, 3]).reduce(1, |acc, v| acc * v, 0).unwrap();
//! assert_eq!(product.get(&Index::scalar()), Some(&6));
//! ```

use std::collections::BTreeMap;

use sparten_core::{trace_op, Axis, Index, TensorResult};

use crate::Tensor;

/// Stored values grouped by their index without the reduced axis, each
/// paired with its coordinate on that axis.
type Groups<'a, T> = BTreeMap<Index, Vec<(usize, &'a T)>>;

impl<T> Tensor<T> {
    fn group_along(&self, axis: Axis) -> TensorResult<Groups<'_, T>> {
        self.check_axis(axis)?;
        let mut groups: Groups<'_, T> = BTreeMap::new();
        // Coordinate order visits each group's members by ascending `axis`
        for (index, value) in &self.entries {
            let coordinate = index.get(axis)?;
            groups
                .entry(index.without(axis)?)
                .or_default()
                .push((coordinate, value));
        }
        Ok(groups)
    }

    /// Fold each group along `axis` with `accumulator`, starting from
    /// `identity`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `axis` is not below the order. An empty tensor has
    /// order 0, so every axis is out of bounds for it.
    pub fn reduce(
        &self,
        identity: T,
        mut accumulator: impl FnMut(T, &T) -> T,
        axis: Axis,
    ) -> TensorResult<Tensor<T>>
    where
        T: Clone,
    {
        trace_op!(op = "reduce", order = self.order(), axis, entries = self.len());
        let groups = self.group_along(axis)?;
        Ok(Tensor::from_map(
            groups
                .into_iter()
                .map(|(index, members)| {
                    let folded = members
                        .into_iter()
                        .fold(identity.clone(), |acc, (_, value)| accumulator(acc, value));
                    (index, folded)
                })
                .collect(),
        ))
    }

    /// Fold each group along `axis` into a `U`, merging partial results
    /// with `combiner`.
    ///
    /// Every run of consecutive populated coordinates along `axis` is
    /// folded separately from `identity`; the partial results are then
    /// merged left to right with `combiner`. The combiner must be
    /// associative and `identity` must be its neutral element, otherwise
    /// the result depends on where the holes are.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `axis` is not below the order. An empty tensor has
    /// order 0, so every axis is out of bounds for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparten_core::Index;
    /// use sparten_sparse::Tensor;
    ///
    /// let words = Tensor::from_vec(vec!["ab", "c", "def"]);
    /// let lengths = words
    ///     .reduce_with(0usize, |acc, w| acc + w.len(), |a, b| a + b, 0)
    ///     .unwrap();
    /// assert_eq!(lengths.get(&Index::scalar()), Some(&6));
    /// ```
    pub fn reduce_with<U: Clone>(
        &self,
        identity: U,
        mut accumulator: impl FnMut(U, &T) -> U,
        mut combiner: impl FnMut(U, U) -> U,
        axis: Axis,
    ) -> TensorResult<Tensor<U>> {
        trace_op!(op = "reduce_with", order = self.order(), axis, entries = self.len());
        let groups = self.group_along(axis)?;
        let mut entries = BTreeMap::new();
        for (index, members) in groups {
            let mut partials: Vec<U> = Vec::new();
            let mut current: Option<U> = None;
            let mut previous: Option<usize> = None;
            for (coordinate, value) in members {
                if previous.is_some_and(|p| p + 1 != coordinate) {
                    partials.extend(current.take());
                }
                let acc = current.take().unwrap_or_else(|| identity.clone());
                current = Some(accumulator(acc, value));
                previous = Some(coordinate);
            }
            partials.extend(current);
            let merged = partials
                .into_iter()
                .reduce(&mut combiner)
                .unwrap_or_else(|| identity.clone());
            entries.insert(index, merged);
        }
        Ok(Tensor::from_map(entries))
    }
}
