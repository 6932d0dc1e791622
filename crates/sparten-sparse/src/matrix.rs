//! Order-2 view over a sparse tensor
//!
//! Axis 0 is the column (`x`) and axis 1 the row (`y`), so
//! [`Matrix::width`] is the size of axis 0 and [`Matrix::height`] the size
//! of axis 1.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::ops::Deref;

use sparten_core::{trace_op, Axis, Index, TensorError, TensorResult, MAX_COORDINATE};

use crate::{Tensor, Vector};

/// A tensor of order 2.
///
/// Dereferences to the underlying [`Tensor`] for read-only engine access.
///
/// # Examples
///
/// ```
/// use sparten_sparse::{Matrix, Vector};
///
/// let mut m = Matrix::from_rows(vec![vec![1, 2], vec![5, 6]]);
/// m.insert_row(1, Vector::from(vec![3, 4]))?;
///
/// assert_eq!(m.height(), 3);
/// assert_eq!(m.row(1).unwrap(), Vector::from(vec![3, 4]));
/// assert_eq!(m.column(0).unwrap(), Vector::from(vec![1, 3, 5]));
/// assert_eq!(m.to_formatted_string(), "1 2\n3 4\n5 6");
/// # Ok::<(), sparten_core::TensorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    tensor: Tensor<T>,
}

impl<T> Matrix<T> {
    /// A matrix with no entries
    pub fn empty() -> Self {
        Self {
            tensor: Tensor::empty(),
        }
    }

    /// A matrix with `rows[y][x]` at `(x, y)`
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self {
            tensor: Tensor::from_rows(rows),
        }
    }

    /// Bounding-box size of axis 0 (number of columns)
    pub fn width(&self) -> usize {
        self.extent(0)
    }

    /// Bounding-box size of axis 1 (number of rows)
    pub fn height(&self) -> usize {
        self.extent(1)
    }

    fn extent(&self, axis: Axis) -> usize {
        self.tensor
            .keys()
            .map(|index| index.as_slice()[axis] + 1)
            .max()
            .unwrap_or(0)
    }

    /// Value at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.tensor.get(&Index::new([x, y]))
    }

    /// Store `value` at column `x`, row `y`, returning the value it replaced.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `x` or `y` exceeds [`MAX_COORDINATE`].
    pub fn set(&mut self, x: usize, y: usize, value: T) -> TensorResult<Option<T>> {
        self.tensor.set(Index::new([x, y]), value)
    }

    /// Remove and return the value at column `x`, row `y`
    pub fn remove(&mut self, x: usize, y: usize) -> Option<T> {
        self.tensor.remove(&Index::new([x, y]))
    }

    /// Fail unless a line can be inserted at `at` on `axis`: `at` itself
    /// must be bounded and no entry it displaces may sit at
    /// [`MAX_COORDINATE`].
    fn check_gap(&self, axis: Axis, at: usize) -> TensorResult<()> {
        if at > MAX_COORDINATE {
            return Err(TensorError::coordinate_overflow(axis, at));
        }
        let last = self.extent(axis);
        if last > at && last > MAX_COORDINATE {
            return Err(TensorError::coordinate_overflow(axis, last));
        }
        Ok(())
    }

    /// Move every entry whose coordinate on `axis` is at least `from` up
    /// by one along `axis`. Callers run [`Self::check_gap`] first.
    fn open_gap(&mut self, axis: Axis, from: usize) {
        let entries = std::mem::take(&mut self.tensor.entries);
        self.tensor.entries = entries
            .into_iter()
            .map(|(index, value)| {
                let mut coords = [index.as_slice()[0], index.as_slice()[1]];
                if coords[axis] >= from {
                    coords[axis] += 1;
                }
                (Index::new(coords), value)
            })
            .collect();
    }

    /// Insert `row` at row `y`, moving rows `y..` down by one.
    ///
    /// Holes in `row` stay holes in the new row.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `y` exceeds [`MAX_COORDINATE`] or a displaced
    /// row would move past it. The matrix is left unchanged.
    pub fn insert_row(&mut self, y: usize, row: Vector<T>) -> TensorResult<()> {
        trace_op!(op = "insert_row", y, entries = row.len());
        self.check_gap(1, y)?;
        self.open_gap(1, y);
        for (index, value) in row.into_tensor() {
            self.tensor.entries.insert(Index::new([index.as_slice()[0], y]), value);
        }
        Ok(())
    }

    /// Insert `column` at column `x`, moving columns `x..` right by one.
    ///
    /// Holes in `column` stay holes in the new column.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `x` exceeds [`MAX_COORDINATE`] or a displaced
    /// column would move past it. The matrix is left unchanged.
    pub fn insert_column(&mut self, x: usize, column: Vector<T>) -> TensorResult<()> {
        trace_op!(op = "insert_column", x, entries = column.len());
        self.check_gap(0, x)?;
        self.open_gap(0, x);
        for (index, value) in column.into_tensor() {
            self.tensor.entries.insert(Index::new([x, index.as_slice()[0]]), value);
        }
        Ok(())
    }

    /// Unwrap into the underlying tensor
    pub fn into_tensor(self) -> Tensor<T> {
        self.tensor
    }
}

impl<T: Clone> Matrix<T> {
    /// The entries with coordinate `index` on `axis`, positioned along the
    /// other axis.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `axis > 1`.
    pub fn get_vector(&self, axis: Axis, index: usize) -> TensorResult<Vector<T>> {
        if axis > 1 {
            return Err(TensorError::axis_out_of_bounds(axis, 2));
        }
        if self.tensor.is_empty() {
            return Ok(Vector::empty());
        }
        self.tensor.slice_axis(axis, index)?.to_vector()
    }

    /// Row `y`, indexed by column
    pub fn row(&self, y: usize) -> TensorResult<Vector<T>> {
        self.get_vector(1, y)
    }

    /// Column `x`, indexed by row
    pub fn column(&self, x: usize) -> TensorResult<Vector<T>> {
        self.get_vector(0, x)
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            tensor: self.tensor.transpose(),
        }
    }
}

impl<T: Display> Matrix<T> {
    /// Render as a dense grid, one line per row.
    ///
    /// Cells are right-aligned to the widest value of their column and
    /// separated by a space; holes render blank.
    pub fn to_formatted_string(&self) -> String {
        let cells: BTreeMap<&Index, String> = self
            .tensor
            .iter()
            .map(|(index, value)| (index, value.to_string()))
            .collect();
        let mut widths = vec![0; self.width()];
        for (index, text) in &cells {
            let x = index.as_slice()[0];
            widths[x] = widths[x].max(text.chars().count());
        }

        let mut lines = Vec::with_capacity(self.height());
        for y in 0..self.height() {
            let line: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(x, &width)| {
                    let text = cells
                        .get(&Index::new([x, y]))
                        .map_or("", String::as_str);
                    format!("{:>width$}", text, width = width)
                })
                .collect();
            lines.push(line.join(" "));
        }
        lines.join("\n")
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for Matrix<T> {
    type Target = Tensor<T>;

    fn deref(&self) -> &Tensor<T> {
        &self.tensor
    }
}

impl<T> TryFrom<Tensor<T>> for Matrix<T> {
    type Error = TensorError;

    fn try_from(tensor: Tensor<T>) -> TensorResult<Self> {
        tensor.to_matrix()
    }
}

impl<T> From<Matrix<T>> for Tensor<T> {
    fn from(matrix: Matrix<T>) -> Self {
        matrix.tensor
    }
}

impl<T> Tensor<T> {
    /// View this tensor as a [`Matrix`].
    ///
    /// # Errors
    ///
    /// `IllegalState` if the tensor is non-empty and not of order 2. An
    /// empty tensor reports order 0 but has no entries to contradict the
    /// view, so it converts to an empty matrix.
    pub fn to_matrix(self) -> TensorResult<Matrix<T>> {
        if !self.is_empty() && self.order() != 2 {
            return Err(TensorError::wrong_order("matrix", 2, self.order()));
        }
        Ok(Matrix { tensor: self })
    }
}
