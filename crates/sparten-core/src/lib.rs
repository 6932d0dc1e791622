//! # sparten-core
//!
//! Coordinate algebra, error taxonomy and logging support for sparten.
//!
//! This crate provides the building blocks the sparse engine is made of:
//!
//! - **Coordinates** ([`Index`]) with comparison, combination and axis algebra
//! - **Bounding-box enumeration** ([`Index::indices`])
//! - **Errors** ([`TensorError`]) shared by every sparten crate
//! - **Structured logging** ([`tracing_support`]) behind the `tracing` feature
//!
//! ## Quick Start
//!
//! ```
//! use sparten_core::{index, Index};
//!
//! let idx = index![2, 0, 1];
//! assert_eq!(idx.order(), 3);
//! assert_eq!(idx.get(0).unwrap(), 2);
//!
//! // Every coordinate of a 2 x 2 box, axis 0 varying fastest
//! let cells = Index::indices(&index![1, 1]);
//! assert_eq!(cells.len(), 4);
//! assert_eq!(cells[1], index![1, 0]);
//! ```
//!
//! ## Features
//!
//! - `serde`: serialize [`Index`] as a plain coordinate sequence
//! - `tracing`: emit debug events and enable [`tracing_support::init_tracing`]

#![deny(warnings)]

pub mod error;
pub mod index;
pub mod tracing_support;

pub use error::{
    IllegalStateError, InvalidArgumentError, OutOfBoundsError, TensorError, TensorResult,
};
pub use index::{Axis, Index, Order, Shape, MAX_COORDINATE};

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "tracing")]
    pub use tracing;
}
