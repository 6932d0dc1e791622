//! Sparse N-dimensional tensor storage
//!
//! A [`Tensor<T>`] maps [`Index`] coordinates to elements. Only populated
//! cells are stored; the shape is derived from the populated keys rather
//! than allocated up front.
//!
//! # Invariants
//!
//! - Once non-empty, every stored key has the same order, which is the
//!   order of the tensor. An empty tensor reports order 0 and accepts a
//!   first key of any order.
//! - The size of axis `d` is the bounding box: the largest coordinate on
//!   `d` among stored keys, plus one. It grows and shrinks with the entries.
//! - A bounding-box coordinate with no stored value is a *sparse hole*. It
//!   is skipped by [`Tensor::iter`] but enumerated by [`Tensor::indices`].
//!
//! Entries are kept in coordinate order (highest axis most significant),
//! so every traversal is deterministic.
//!
//! # Examples
//!
//! ```
//! use sparten_core::index;
//! use sparten_sparse::Tensor;
//!
//! let mut tensor = Tensor::empty();
//! tensor.set(index![0, 0], 1.5).unwrap();
//! tensor.set(index![3, 1], 2.5).unwrap();
//!
//! assert_eq!(tensor.order(), 2);
//! assert_eq!(tensor.dimensions().as_slice(), &[4, 2]);
//! assert_eq!(tensor.get(&index![3, 1]), Some(&2.5));
//! assert_eq!(tensor.get(&index![1, 1]), None); // sparse hole
//!
//! // Keys of a different order are rejected
//! assert!(tensor.set(index![1], 0.0).is_err());
//! ```

use std::any::Any;
use std::collections::btree_map::{self, BTreeMap};

use sparten_core::{Axis, Index, InvalidArgumentError, Order, Shape, TensorError, TensorResult};

/// Sparse tensor of arbitrary elements addressed by [`Index`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<(Index, T)>",
        into = "Vec<(Index, T)>",
        bound(
            serialize = "T: Clone + serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct Tensor<T> {
    pub(crate) entries: BTreeMap<Index, T>,
}

impl<T> Default for Tensor<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Tensor<T> {
    /// Create a tensor with no entries
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub(crate) fn from_map(entries: BTreeMap<Index, T>) -> Self {
        Self { entries }
    }

    /// Create a tensor from `(index, value)` pairs.
    ///
    /// Later pairs overwrite earlier ones at the same index.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the indices do not all share one order, or if a
    /// coordinate exceeds [`MAX_COORDINATE`](sparten_core::MAX_COORDINATE).
    pub fn from_entries(entries: impl IntoIterator<Item = (Index, T)>) -> TensorResult<Self> {
        let entries: Vec<(Index, T)> = entries.into_iter().collect();
        for (index, _) in &entries {
            index.check_bounded()?;
        }
        if let Some((first, _)) = entries.first() {
            let order = first.order();
            if let Some((bad, _)) = entries.iter().find(|(index, _)| index.order() != order) {
                return Err(TensorError::order_mismatch(order, bad.order()));
            }
        }
        Ok(Self {
            entries: entries.into_iter().collect(),
        })
    }

    /// Number of axes, or 0 for an empty tensor
    pub fn order(&self) -> Order {
        self.entries.keys().next().map_or(0, Index::order)
    }

    /// Number of stored entries (holes excluded)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a value is stored at `index`
    pub fn contains(&self, index: &Index) -> bool {
        self.entries.contains_key(index)
    }

    /// Value stored at `index`, or `None` for a hole or foreign index
    pub fn get(&self, index: &Index) -> Option<&T> {
        self.entries.get(index)
    }

    /// Mutable access to the value stored at `index`
    pub fn get_mut(&mut self, index: &Index) -> Option<&mut T> {
        self.entries.get_mut(index)
    }

    pub(crate) fn check_order(&self, index: &Index) -> TensorResult<()> {
        if !self.is_empty() && index.order() != self.order() {
            return Err(TensorError::order_mismatch(self.order(), index.order()));
        }
        Ok(())
    }

    pub(crate) fn check_axis(&self, axis: Axis) -> TensorResult<()> {
        if axis >= self.order() {
            return Err(TensorError::axis_out_of_bounds(axis, self.order()));
        }
        Ok(())
    }

    /// Store `value` at `index`, returning the value it replaced.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the tensor is non-empty and `index` has a
    /// different order, or if a coordinate exceeds
    /// [`MAX_COORDINATE`](sparten_core::MAX_COORDINATE). The tensor is left
    /// unchanged.
    pub fn set(&mut self, index: impl Into<Index>, value: T) -> TensorResult<Option<T>> {
        let index = index.into();
        index.check_bounded()?;
        self.check_order(&index)?;
        Ok(self.entries.insert(index, value))
    }

    /// Remove and return the value stored at `index`
    pub fn remove(&mut self, index: &Index) -> Option<T> {
        self.entries.remove(index)
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Element-wise maximum of all stored keys, or `None` when empty
    pub fn max_coordinate(&self) -> Option<Index> {
        Index::bounding_max(self.entries.keys())
    }

    /// Bounding-box size of every axis
    pub fn dimensions(&self) -> Shape {
        // Stored coordinates never exceed MAX_COORDINATE, so `c + 1` fits
        self.max_coordinate()
            .map(|max| max.as_slice().iter().map(|&c| c + 1).collect())
            .unwrap_or_default()
    }

    /// Bounding-box size of `axis`
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `axis >= self.order()`.
    pub fn size(&self, axis: Axis) -> TensorResult<usize> {
        self.check_axis(axis)?;
        Ok(self
            .entries
            .keys()
            .filter_map(|index| index.as_slice().get(axis))
            .max()
            .map_or(0, |&max| max + 1))
    }

    /// Every coordinate of the bounding box, holes included, axis 0
    /// varying fastest.
    ///
    /// Like [`Index::indices`], an order-0 tensor enumerates no coordinates.
    pub fn indices(&self) -> Vec<Index> {
        self.max_coordinate()
            .map(|max| Index::indices(&max))
            .unwrap_or_default()
    }

    /// Stored entries in coordinate order
    pub fn iter(&self) -> btree_map::Iter<'_, Index, T> {
        self.entries.iter()
    }

    /// Stored indices in coordinate order
    pub fn keys(&self) -> btree_map::Keys<'_, Index, T> {
        self.entries.keys()
    }

    /// Stored values in coordinate order
    pub fn values(&self) -> btree_map::Values<'_, Index, T> {
        self.entries.values()
    }

    /// Consume the tensor into its entries in coordinate order
    pub fn into_entries(self) -> Vec<(Index, T)> {
        self.entries.into_iter().collect()
    }

    /// Store `value` at every bounding-box coordinate that holds none.
    ///
    /// Existing entries are untouched.
    pub fn backfill(&mut self, value: T)
    where
        T: Clone,
    {
        for index in self.indices() {
            self.entries.entry(index).or_insert_with(|| value.clone());
        }
    }
}

impl Tensor<Box<dyn Any>> {
    /// Downcast every element to `U`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` naming the first coordinate whose element is not a
    /// `U`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::any::Any;
    /// use sparten_core::index;
    /// use sparten_sparse::Tensor;
    ///
    /// let mut dynamic: Tensor<Box<dyn Any>> = Tensor::empty();
    /// dynamic.set(index![0], Box::new(1_i32)).unwrap();
    /// dynamic.set(index![1], Box::new(2_i32)).unwrap();
    ///
    /// let typed: Tensor<i32> = dynamic.expect().unwrap();
    /// assert_eq!(typed.get(&index![1]), Some(&2));
    /// ```
    pub fn expect<U: Any>(self) -> TensorResult<Tensor<U>> {
        let type_mismatch = |index: &Index| {
            TensorError::from(InvalidArgumentError::TypeMismatch {
                index: index.as_slice().to_vec(),
                expected: std::any::type_name::<U>(),
            })
        };
        if let Some((index, _)) = self.entries.iter().find(|(_, value)| !(***value).is::<U>()) {
            return Err(type_mismatch(index));
        }
        let mut entries = BTreeMap::new();
        for (index, value) in self.entries {
            match value.downcast::<U>() {
                Ok(value) => {
                    entries.insert(index, *value);
                }
                Err(_) => return Err(type_mismatch(&index)),
            }
        }
        Ok(Tensor { entries })
    }
}

impl<T> TryFrom<Vec<(Index, T)>> for Tensor<T> {
    type Error = TensorError;

    fn try_from(entries: Vec<(Index, T)>) -> TensorResult<Self> {
        Self::from_entries(entries)
    }
}

impl<T> From<Tensor<T>> for Vec<(Index, T)> {
    fn from(tensor: Tensor<T>) -> Self {
        tensor.into_entries()
    }
}

impl<T> IntoIterator for Tensor<T> {
    type Item = (Index, T);
    type IntoIter = btree_map::IntoIter<Index, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Tensor<T> {
    type Item = (&'a Index, &'a T);
    type IntoIter = btree_map::Iter<'a, Index, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparten_core::{index, MAX_COORDINATE};

    #[test]
    fn test_empty_tensor() {
        let tensor = Tensor::<i32>::empty();
        assert_eq!(tensor.order(), 0);
        assert!(tensor.is_empty());
        assert!(tensor.dimensions().is_empty());
        assert!(tensor.indices().is_empty());
        assert!(tensor.size(0).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_set_get_remove() {
        let mut tensor = Tensor::empty();
        assert_eq!(tensor.set(index![1, 2], "a").unwrap(), None);
        assert_eq!(tensor.set(index![1, 2], "b").unwrap(), Some("a"));
        assert_eq!(tensor.get(&index![1, 2]), Some(&"b"));
        assert_eq!(tensor.get(&index![0, 0]), None);
        assert_eq!(tensor.remove(&index![1, 2]), Some("b"));
        assert!(tensor.is_empty());
    }

    #[test]
    fn test_set_rejects_other_order_atomically() {
        let mut tensor = Tensor::empty();
        tensor.set(index![0, 0], 1).unwrap();
        let err = tensor.set(index![0, 0, 0], 2).unwrap_err();
        assert_eq!(err, TensorError::order_mismatch(2, 3));
        assert_eq!(tensor.len(), 1);
        assert_eq!(tensor.order(), 2);
    }

    #[test]
    fn test_order_resets_when_emptied() {
        let mut tensor = Tensor::empty();
        tensor.set(index![4], 1).unwrap();
        tensor.remove(&index![4]);
        assert!(tensor.set(index![1, 1, 1], 2).is_ok());
        assert_eq!(tensor.order(), 3);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_round_trip() {
        // Indices serialize as plain coordinate arrays
        let json = serde_json::to_string(&index![1, 2]).unwrap();
        assert_eq!(json, "[1,2]");
        let index: Index = serde_json::from_str(&json).unwrap();
        assert_eq!(index, index![1, 2]);

        let mut tensor = Tensor::empty();
        tensor.set(index![0, 1], 10).unwrap();
        tensor.set(index![2, 0], 20).unwrap();
        let json = serde_json::to_string(&tensor).unwrap();
        assert_eq!(json, "[[[2,0],20],[[0,1],10]]");
        let restored: Tensor<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, tensor);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_rejects_mixed_orders() {
        let err = serde_json::from_str::<Tensor<i32>>("[[[0],1],[[0,1],2]]").unwrap_err();
        let expected = TensorError::order_mismatch(1, 2).to_string();
        assert!(err.to_string().contains(&expected), "{err}");

        let unbounded = format!("[[[{}],1]]", usize::MAX);
        assert!(serde_json::from_str::<Tensor<i32>>(&unbounded).is_err());
    }

    #[test]
    fn test_set_rejects_unbounded_coordinate() {
        let mut tensor = Tensor::empty();
        tensor.set(index![MAX_COORDINATE], 1).unwrap();
        assert_eq!(tensor.dimensions().as_slice(), &[usize::MAX]);

        let err = tensor.set(index![usize::MAX], 2).unwrap_err();
        assert_eq!(err, TensorError::coordinate_overflow(0, usize::MAX));
        assert_eq!(tensor.len(), 1);
        assert_eq!(tensor.size(0).unwrap(), usize::MAX);
    }

    #[test]
    fn test_from_entries_rejects_unbounded_coordinate() {
        let err = Tensor::from_entries(vec![(index![0, 0], 1), (index![usize::MAX, 2], 2)])
            .unwrap_err();
        assert_eq!(err, TensorError::coordinate_overflow(0, usize::MAX));
    }

    #[test]
    fn test_bounding_box_tracks_entries() {
        let mut tensor = Tensor::empty();
        tensor.set(index![0, 3], 1).unwrap();
        tensor.set(index![5, 0], 2).unwrap();
        assert_eq!(tensor.dimensions().as_slice(), &[6, 4]);
        assert_eq!(tensor.size(0).unwrap(), 6);
        assert_eq!(tensor.size(1).unwrap(), 4);

        tensor.remove(&index![5, 0]);
        assert_eq!(tensor.dimensions().as_slice(), &[1, 4]);
    }

    #[test]
    fn test_indices_include_holes() {
        let mut tensor = Tensor::empty();
        tensor.set(index![1, 1], 'x').unwrap();
        let all = tensor.indices();
        assert_eq!(all.len(), 4);
        assert_eq!(tensor.iter().count(), 1);
    }

    #[test]
    fn test_backfill_keeps_existing() {
        let mut tensor = Tensor::empty();
        tensor.set(index![2, 1], 9).unwrap();
        tensor.backfill(0);
        assert_eq!(tensor.len(), 6);
        assert_eq!(tensor.get(&index![2, 1]), Some(&9));
        assert_eq!(tensor.get(&index![0, 0]), Some(&0));
    }

    #[test]
    fn test_from_entries_rejects_mixed_orders() {
        let err = Tensor::from_entries(vec![(index![0], 1), (index![0, 1], 2)]).unwrap_err();
        assert!(err.is_invalid_argument());

        let tensor = Tensor::from_entries(vec![(index![0], 1), (index![0], 2)]).unwrap();
        assert_eq!(tensor.get(&index![0]), Some(&2));
    }

    #[test]
    fn test_iteration_in_coordinate_order() {
        let tensor =
            Tensor::from_entries(vec![(index![0, 1], 'c'), (index![1, 0], 'b'), (index![0, 0], 'a')])
                .unwrap();
        let values: String = tensor.values().collect();
        assert_eq!(values, "abc");
    }

    #[test]
    fn test_expect_type_mismatch() {
        let mut dynamic: Tensor<Box<dyn Any>> = Tensor::empty();
        dynamic.set(index![0], Box::new(1_u8)).unwrap();
        dynamic.set(index![1], Box::new("two")).unwrap();
        let err = dynamic.expect::<u8>().unwrap_err();
        assert!(matches!(
            err,
            TensorError::InvalidArgument(InvalidArgumentError::TypeMismatch { ref index, .. })
                if index == &vec![1]
        ));
    }
}
