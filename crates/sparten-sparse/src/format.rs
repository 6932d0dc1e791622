//! Textual rendering of sparse tensors
//!
//! The canonical form lists every bounding-box cell in coordinate order.
//! Cells along axis 0 are separated by a single space; crossing into the
//! next position of a higher axis inserts axis markers, one for an axis-1
//! boundary, two for an axis-2 boundary, and so on. Holes render as a
//! placeholder.
//!
//! ```
//! use sparten_core::index;
//! use sparten_sparse::Tensor;
//!
//! let m = Tensor::from_rows(vec![vec![1, 2], vec![3, 4]]);
//! assert_eq!(m.to_string(), "1 2 | 3 4");
//!
//! let mut cube = Tensor::empty();
//! cube.set(index![1, 1, 1], 100).unwrap();
//! assert_eq!(cube.to_string_or("."), ". . | . . || . . | . 100");
//! ```
//!
//! An order-0 tensor renders its single value directly.

use std::fmt::{self, Write as _};

use sparten_core::Index;

use crate::Tensor;

/// Rendering options for [`Tensor::to_string_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Placeholder for sparse holes
    pub hole: String,
    /// Marker repeated once per crossed axis boundary
    pub axis_marker: char,
    /// Separator between neighbouring cells and markers
    pub cell_separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            hole: " ".to_string(),
            axis_marker: '|',
            cell_separator: " ".to_string(),
        }
    }
}

impl FormatOptions {
    /// Default options with a custom hole placeholder
    pub fn with_hole(hole: impl Into<String>) -> Self {
        Self {
            hole: hole.into(),
            ..Self::default()
        }
    }
}

impl<T: fmt::Display> Tensor<T> {
    /// Render the tensor in canonical form with custom options.
    pub fn to_string_with(&self, options: &FormatOptions) -> String {
        let mut out = String::new();
        if self.order() == 0 {
            if let Some(value) = self.get(&Index::scalar()) {
                let _ = write!(out, "{}", value);
            }
            return out;
        }

        let mut previous: Option<Index> = None;
        for index in self.indices() {
            if let Some(previous) = &previous {
                let depth = previous.highest_order_difference(&index).unwrap_or(0);
                out.push_str(&options.cell_separator);
                if depth > 1 {
                    out.extend(std::iter::repeat(options.axis_marker).take(depth - 1));
                    out.push_str(&options.cell_separator);
                }
            }
            match self.get(&index) {
                Some(value) => {
                    let _ = write!(out, "{}", value);
                }
                None => out.push_str(&options.hole),
            }
            previous = Some(index);
        }
        out
    }

    /// Render the tensor in canonical form with `hole` for missing cells.
    pub fn to_string_or(&self, hole: &str) -> String {
        self.to_string_with(&FormatOptions::with_hole(hole))
    }
}

impl<T: fmt::Display> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&FormatOptions::default()))
    }
}
