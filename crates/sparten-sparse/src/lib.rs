//! # sparten-sparse
//!
//! Sparse N-dimensional tensors addressed by coordinate.
//!
//! This crate provides:
//! - [`Tensor`], a coordinate-to-element map with a derived bounding box
//! - Constructors from boxes, generators and nested sequences
//! - Element-wise transforms, masking and piecewise combination
//! - Structural operations (transpose, reorder, slice, extract, extrude, combine)
//! - Reductions along an axis
//! - Canonical text rendering
//! - Order-typed views: [`Scalar`], [`Vector`], [`Matrix`]
//!
//! ## Quick Start
//!
//! ```
//! use sparten_core::index;
//! use sparten_sparse::{Matrix, Tensor};
//!
//! let mut tensor = Tensor::empty();
//! tensor.set(index![0, 0], 1).unwrap();
//! tensor.set(index![2, 1], 5).unwrap();
//! assert_eq!(tensor.to_string_or("."), "1 . . | . . 5");
//!
//! let matrix: Matrix<i32> = tensor.to_matrix().unwrap();
//! assert_eq!(matrix.width(), 3);
//! assert_eq!(matrix.height(), 2);
//! ```

#![deny(warnings)]

pub mod constructors;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod reductions;
pub mod scalar;
pub mod structural;
pub mod tensor;
pub mod vector;

pub use constructors::Nested;
pub use format::FormatOptions;
pub use matrix::Matrix;
pub use scalar::Scalar;
pub use tensor::Tensor;
pub use vector::Vector;
