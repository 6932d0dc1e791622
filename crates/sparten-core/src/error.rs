//! Unified error types for coordinate and tensor operations
//!
//! Every fallible operation in sparten reports one of three kinds of
//! caller-contract violation:
//!
//! - **`InvalidArgument`**: a value handed to the operation is malformed
//!   (negative coordinate, order mismatch, bad permutation, ...)
//! - **`IllegalState`**: the tensor is not in a state that permits the
//!   request (e.g. viewing an order-3 tensor as a matrix)
//! - **`OutOfBounds`**: an axis lies beyond the order of the tensor
//!
//! None of these are retried internally. Operations validate before they
//! mutate, so a returned error always leaves the receiver unchanged.
//!
//! # Examples
//!
//! ```
//! use sparten_core::error::{TensorError, TensorResult};
//!
//! fn checked_axis(axis: usize, order: usize) -> TensorResult<usize> {
//!     if axis >= order {
//!         return Err(TensorError::axis_out_of_bounds(axis, order));
//!     }
//!     Ok(axis)
//! }
//!
//! assert!(checked_axis(1, 2).is_ok());
//! assert!(matches!(checked_axis(2, 2), Err(TensorError::OutOfBounds(_))));
//! ```

use thiserror::Error;

/// Top-level error type for all sparten operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// A supplied argument violates the operation's contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgumentError),

    /// The tensor cannot satisfy the request in its current state
    #[error("Illegal state: {0}")]
    IllegalState(#[from] IllegalStateError),

    /// An axis lies outside the tensor
    #[error("Out of bounds: {0}")]
    OutOfBounds(#[from] OutOfBoundsError),
}

/// Malformed arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    #[error("Coordinate on axis {axis} is negative: {value}")]
    NegativeCoordinate { axis: usize, value: i64 },

    #[error("Coordinate on axis {axis} is too large to bound: {value}")]
    CoordinateOverflow { axis: usize, value: usize },

    #[error("Order mismatch: expected {expected}, got {got}")]
    OrderMismatch { expected: usize, got: usize },

    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("Invalid permutation {permutation:?} for order {order}")]
    InvalidPermutation {
        permutation: Vec<usize>,
        order: usize,
    },

    #[error("Invalid bounds: minimum {min:?} exceeds maximum {max:?}")]
    InvalidBounds { min: Vec<usize>, max: Vec<usize> },

    #[error("Ragged nesting: leaf found at depth {depth}, expected depth {expected}")]
    RaggedNesting { depth: usize, expected: usize },

    #[error("Element at {index:?} is not of type {expected}")]
    TypeMismatch {
        index: Vec<usize>,
        expected: &'static str,
    },
}

/// Requests the tensor's current state cannot satisfy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalStateError {
    #[error("Cannot view an order-{got} tensor as a {view} (order {expected})")]
    WrongOrder {
        view: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Axes outside the tensor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutOfBoundsError {
    #[error("Axis {axis} is out of bounds for order {order}")]
    Axis { axis: usize, order: usize },
}

/// Result type alias for tensor operations
pub type TensorResult<T> = Result<T, TensorError>;

// Convenience constructors for common error patterns
impl TensorError {
    /// Create an axis out of bounds error
    pub fn axis_out_of_bounds(axis: usize, order: usize) -> Self {
        TensorError::OutOfBounds(OutOfBoundsError::Axis { axis, order })
    }

    /// Create a coordinate overflow error
    pub fn coordinate_overflow(axis: usize, value: usize) -> Self {
        TensorError::InvalidArgument(InvalidArgumentError::CoordinateOverflow { axis, value })
    }

    /// Create an order mismatch error
    pub fn order_mismatch(expected: usize, got: usize) -> Self {
        TensorError::InvalidArgument(InvalidArgumentError::OrderMismatch { expected, got })
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        TensorError::InvalidArgument(InvalidArgumentError::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        })
    }

    /// Create an invalid permutation error
    pub fn invalid_permutation(permutation: &[usize], order: usize) -> Self {
        TensorError::InvalidArgument(InvalidArgumentError::InvalidPermutation {
            permutation: permutation.to_vec(),
            order,
        })
    }

    /// Create a wrong view order error
    pub fn wrong_order(view: &'static str, expected: usize, got: usize) -> Self {
        TensorError::IllegalState(IllegalStateError::WrongOrder {
            view,
            expected,
            got,
        })
    }

    /// Whether this is an `InvalidArgument` error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TensorError::InvalidArgument(_))
    }

    /// Whether this is an `IllegalState` error
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, TensorError::IllegalState(_))
    }

    /// Whether this is an `OutOfBounds` error
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, TensorError::OutOfBounds(_))
    }
}
