//! # sparten
//!
//! Generic sparse N-dimensional tensors addressed by integer coordinates,
//! with scalar, vector and matrix views.
//!
//! This is the **meta crate** that re-exports the sparten components.
//!
//! ## Quick Start
//!
//! ```
//! use sparten::prelude::*;
//!
//! let m = Tensor::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
//! assert_eq!(m.transpose().to_string(), "1 3 5 | 2 4 6");
//!
//! let column_sums: Vector<i32> = m.reduce(0, |a, b| a + b, 1)?.to_vector()?;
//! assert_eq!(column_sums.to_string(), "9 12");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Coordinates ([`core`])
//!
//! [`Index`](core::Index) coordinates, the error taxonomy and logging
//! support.
//!
//! ```
//! use sparten::core::{index, Index};
//!
//! let a = index![3, 0];
//! let b = index![1, 2];
//! assert!(a < b); // highest axis is most significant
//! assert_eq!(a.combine(&b), index![3, 0, 1, 2]);
//! assert_eq!(Index::indices(&index![2, 1]).len(), 6);
//! ```
//!
//! ### Sparse Tensors ([`sparse`])
//!
//! The engine and its order-typed views.
//!
//! ```
//! use sparten::sparse::Vector;
//!
//! let mut v = Vector::from(vec![1, 2, 3]);
//! v.unshift(0)?;
//! assert_eq!(v.to_string(), "0 1 2 3");
//! # Ok::<(), sparten::core::TensorError>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: serialize tensors as `(index, value)` sequences
//! - `tracing`: emit debug events for engine operations and enable
//!   [`core::tracing_support::init_tracing`]

pub use sparten_core as core;
pub use sparten_sparse as sparse;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use sparten::prelude::*;
    //!
    //! let tensor = Tensor::fill(0.0, &[2, 3]);
    //! assert_eq!(tensor.dimensions().as_slice(), &[2, 3]);
    //! ```

    // Coordinates and errors
    pub use crate::core::{index, Axis, Index, Order, Shape, TensorError, TensorResult};

    // Engine
    pub use crate::sparse::{FormatOptions, Nested, Tensor};

    // Views
    pub use crate::sparse::{Matrix, Scalar, Vector};
}
