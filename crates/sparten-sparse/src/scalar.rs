//! Order-0 view over a sparse tensor

use std::ops::Deref;

use sparten_core::{Index, TensorError, TensorResult};

use crate::Tensor;

/// A tensor of order 0: at most one value, stored at [`Index::scalar`].
///
/// Dereferences to the underlying [`Tensor`] for read-only engine access.
///
/// # Examples
///
/// ```
/// use sparten_sparse::{Scalar, Tensor};
///
/// let mut s = Scalar::of(3);
/// assert_eq!(s.get(), Some(&3));
/// assert_eq!(s.set(4), Some(3));
///
/// let t: Tensor<i32> = s.into_tensor();
/// assert_eq!(t.order(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar<T> {
    tensor: Tensor<T>,
}

impl<T> Scalar<T> {
    /// A scalar with no value
    pub fn empty() -> Self {
        Self {
            tensor: Tensor::empty(),
        }
    }

    /// A scalar holding `value`
    pub fn of(value: T) -> Self {
        let mut scalar = Self::empty();
        scalar.set(value);
        scalar
    }

    /// The value, if any
    pub fn get(&self) -> Option<&T> {
        self.tensor.get(&Index::scalar())
    }

    /// Store `value`, returning the previous one
    pub fn set(&mut self, value: T) -> Option<T> {
        self.tensor.entries.insert(Index::scalar(), value)
    }

    /// Remove and return the value
    pub fn take(&mut self) -> Option<T> {
        self.tensor.remove(&Index::scalar())
    }

    /// Unwrap into the underlying tensor
    pub fn into_tensor(self) -> Tensor<T> {
        self.tensor
    }
}

impl<T> Default for Scalar<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for Scalar<T> {
    type Target = Tensor<T>;

    fn deref(&self) -> &Tensor<T> {
        &self.tensor
    }
}

impl<T> TryFrom<Tensor<T>> for Scalar<T> {
    type Error = TensorError;

    fn try_from(tensor: Tensor<T>) -> TensorResult<Self> {
        tensor.to_scalar()
    }
}

impl<T> From<Scalar<T>> for Tensor<T> {
    fn from(scalar: Scalar<T>) -> Self {
        scalar.tensor
    }
}

impl<T> Tensor<T> {
    /// View this tensor as a [`Scalar`].
    ///
    /// # Errors
    ///
    /// `IllegalState` if the tensor is non-empty and not of order 0. An
    /// empty tensor converts to an empty scalar.
    pub fn to_scalar(self) -> TensorResult<Scalar<T>> {
        if !self.is_empty() && self.order() != 0 {
            return Err(TensorError::wrong_order("scalar", 0, self.order()));
        }
        Ok(Scalar { tensor: self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_take() {
        let mut s = Scalar::empty();
        assert_eq!(s.get(), None);
        assert_eq!(s.set("a"), None);
        assert_eq!(s.set("b"), Some("a"));
        assert_eq!(s.take(), Some("b"));
        assert!(s.is_empty());
    }

    #[test]
    fn test_to_scalar() {
        let t = Tensor::fill(1.5, &[]);
        let s = t.to_scalar().unwrap();
        assert_eq!(s.get(), Some(&1.5));

        let err = Tensor::from_vec(vec![1]).to_scalar().unwrap_err();
        assert!(err.is_illegal_state());
    }

    #[test]
    fn test_display_through_deref() {
        assert_eq!(Scalar::of(7).to_string(), "7");
    }
}
