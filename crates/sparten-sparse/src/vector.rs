//! Order-1 view over a sparse tensor
//!
//! [`Vector`] adds stack and queue style operations on top of the engine.
//! They address entries by position and respect holes:
//!
//! - [`Vector::push`] appends after the highest populated position
//! - [`Vector::pop`] removes the highest populated position
//! - [`Vector::shift`] removes the lowest populated position **without
//!   renumbering** the rest, leaving a hole where it was
//! - [`Vector::unshift`] inserts at position 0 and moves every existing
//!   entry up by one
//!
//! # Examples
//!
//! ```
//! use sparten_sparse::Vector;
//!
//! let mut v = Vector::from(vec![1, 2, 3]);
//! v.push(4)?;
//! assert_eq!(v.pop(), Some(4));
//!
//! assert_eq!(v.shift(), Some(1));
//! assert_eq!(v.get(0), None); // hole, not renumbered
//! assert_eq!(v.get(1), Some(&2));
//!
//! v.unshift(0)?;
//! assert_eq!(v.to_string(), "0   2 3");
//! # Ok::<(), sparten_core::TensorError>(())
//! ```

use std::collections::BTreeMap;
use std::ops::Deref;

use sparten_core::{Index, TensorError, TensorResult, MAX_COORDINATE};

use crate::Tensor;

/// A tensor of order 1.
///
/// Dereferences to the underlying [`Tensor`] for read-only engine access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector<T> {
    tensor: Tensor<T>,
}

fn position(index: &Index) -> usize {
    index.as_slice()[0]
}

impl<T> Vector<T> {
    /// A vector with no entries
    pub fn empty() -> Self {
        Self {
            tensor: Tensor::empty(),
        }
    }

    /// Bounding-box length: highest populated position plus one
    pub fn length(&self) -> usize {
        self.tensor.keys().next_back().map_or(0, |index| position(index) + 1)
    }

    /// Value at `position`, if populated
    pub fn get(&self, position: usize) -> Option<&T> {
        self.tensor.get(&Index::new([position]))
    }

    /// Store `value` at `position`, returning the value it replaced.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `position` exceeds [`MAX_COORDINATE`].
    pub fn set(&mut self, position: usize, value: T) -> TensorResult<Option<T>> {
        self.tensor.set(Index::new([position]), value)
    }

    /// Remove and return the value at `position`
    pub fn remove(&mut self, position: usize) -> Option<T> {
        self.tensor.remove(&Index::new([position]))
    }

    /// Append `value` after the highest populated position.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the highest populated position is already
    /// [`MAX_COORDINATE`].
    pub fn push(&mut self, value: T) -> TensorResult<()> {
        let next = self.length();
        self.set(next, value)?;
        Ok(())
    }

    /// Remove and return the entry at the highest populated position
    pub fn pop(&mut self) -> Option<T> {
        self.tensor.entries.pop_last().map(|(_, value)| value)
    }

    /// Remove and return the entry at the lowest populated position.
    ///
    /// Remaining entries keep their positions.
    // TODO: add a compacting variant that renumbers like an array shift.
    pub fn shift(&mut self) -> Option<T> {
        self.tensor.entries.pop_first().map(|(_, value)| value)
    }

    /// Insert `value` at position 0, moving every entry up by one.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the highest populated position is already
    /// [`MAX_COORDINATE`]. The vector is left unchanged.
    pub fn unshift(&mut self, value: T) -> TensorResult<()> {
        if let Some(last) = self.tensor.keys().next_back().map(position) {
            if last >= MAX_COORDINATE {
                return Err(TensorError::coordinate_overflow(0, last.saturating_add(1)));
            }
        }
        let entries = std::mem::take(&mut self.tensor.entries);
        let mut shifted: BTreeMap<Index, T> = entries
            .into_iter()
            .map(|(index, value)| (Index::new([position(&index) + 1]), value))
            .collect();
        shifted.insert(Index::new([0]), value);
        self.tensor.entries = shifted;
        Ok(())
    }

    /// Unwrap into the underlying tensor
    pub fn into_tensor(self) -> Tensor<T> {
        self.tensor
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for Vector<T> {
    type Target = Tensor<T>;

    fn deref(&self) -> &Tensor<T> {
        &self.tensor
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            tensor: Tensor::from_vec(values),
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> TryFrom<Tensor<T>> for Vector<T> {
    type Error = TensorError;

    fn try_from(tensor: Tensor<T>) -> TensorResult<Self> {
        tensor.to_vector()
    }
}

impl<T> From<Vector<T>> for Tensor<T> {
    fn from(vector: Vector<T>) -> Self {
        vector.tensor
    }
}

impl<T> Tensor<T> {
    /// View this tensor as a [`Vector`].
    ///
    /// # Errors
    ///
    /// `IllegalState` if the tensor is non-empty and not of order 1. An
    /// empty tensor reports order 0 but has no entries to contradict the
    /// view, so it converts to an empty vector.
    pub fn to_vector(self) -> TensorResult<Vector<T>> {
        if !self.is_empty() && self.order() != 1 {
            return Err(TensorError::wrong_order("vector", 1, self.order()));
        }
        Ok(Vector { tensor: self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut v = Vector::empty();
        v.push('a').unwrap();
        v.push('b').unwrap();
        assert_eq!(v.length(), 2);
        assert_eq!(v.pop(), Some('b'));
        assert_eq!(v.pop(), Some('a'));
        assert_eq!(v.pop(), None);
    }

    #[test]
    fn test_push_after_highest_position() {
        let mut v = Vector::empty();
        assert_eq!(v.set(5, 1).unwrap(), None);
        v.push(2).unwrap();
        assert_eq!(v.get(6), Some(&2));
        assert_eq!(v.length(), 7);
    }

    #[test]
    fn test_shift_leaves_holes() {
        let mut v = Vector::from(vec![1, 2, 3, 10, 20, 30]);
        v.remove(0);
        v.remove(2);
        v.remove(3);
        assert_eq!(v.shift(), Some(2));
        for position in 0..4 {
            assert_eq!(v.get(position), None);
        }
        assert_eq!(v.get(4), Some(&20));
        assert_eq!(v.get(5), Some(&30));
        assert_eq!(v.length(), 6);
    }

    #[test]
    fn test_unshift_moves_entries_up() {
        let mut v = Vector::from(vec![1, 2]);
        v.remove(0);
        v.unshift(0).unwrap();
        assert_eq!(v.get(0), Some(&0));
        assert_eq!(v.get(1), None);
        assert_eq!(v.get(2), Some(&2));
    }

    #[test]
    fn test_growth_stops_at_max_coordinate() {
        let mut v = Vector::empty();
        v.set(MAX_COORDINATE, 'z').unwrap();
        assert_eq!(v.length(), usize::MAX);

        let err = v.push('y').unwrap_err();
        assert_eq!(err, TensorError::coordinate_overflow(0, usize::MAX));
        let err = v.unshift('a').unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(v.set(usize::MAX, 'x').unwrap_err().is_invalid_argument());

        assert_eq!(v.len(), 1);
        assert_eq!(v.get(MAX_COORDINATE), Some(&'z'));
        assert_eq!(v.get(0), None);
    }

    #[test]
    fn test_to_vector() {
        assert!(Tensor::from_vec(vec![1]).to_vector().is_ok());
        assert!(Tensor::<i32>::empty().to_vector().is_ok());
        let err = Tensor::from_rows(vec![vec![1]]).to_vector().unwrap_err();
        assert_eq!(err, TensorError::wrong_order("vector", 1, 2));
    }

    #[test]
    fn test_collect() {
        let v: Vector<_> = (1..=3).collect();
        assert_eq!(v.to_string(), "1 2 3");
    }
}
