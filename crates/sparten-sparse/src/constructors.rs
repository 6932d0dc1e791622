//! Tensor constructors
//!
//! Convenient ways to build tensors besides inserting entries one at a time:
//!
//! - [`Tensor::fill`] / [`Tensor::generate`]: every cell of a box
//! - [`Tensor::of`]: a (possibly ragged) nested sequence
//! - [`Tensor::from_vec`] / [`Tensor::from_rows`]: order-1 and order-2 shorthands
//!
//! # Examples
//!
//! ```
//! use sparten_core::index;
//! use sparten_sparse::{Nested, Tensor};
//!
//! let ones = Tensor::fill(1, &[2, 3]);
//! assert_eq!(ones.len(), 6);
//!
//! let sums = Tensor::generate(|idx| idx.as_slice().iter().sum::<usize>(), &[3, 3]);
//! assert_eq!(sums.get(&index![2, 1]), Some(&3));
//!
//! // Outer level is the highest axis; rows here have different lengths
//! let ragged = Tensor::of(Nested::matrix(vec![vec![1, 2, 3], vec![4]])).unwrap();
//! assert_eq!(ragged.dimensions().as_slice(), &[3, 2]);
//! assert_eq!(ragged.get(&index![0, 1]), Some(&4));
//! assert_eq!(ragged.get(&index![1, 1]), None);
//! ```

use std::collections::BTreeMap;

use sparten_core::{Index, InvalidArgumentError, TensorResult};

use crate::Tensor;

/// A nested sequence of elements.
///
/// Each level of nesting becomes one axis: the outermost sequence indexes
/// the highest axis and leaves sit on axis 0. Sequences may have different
/// lengths (shorter ones leave holes), but every leaf must sit at the same
/// depth.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    /// A single element
    Leaf(T),
    /// A sequence of nested elements
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// A single element
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    /// A flat sequence of elements
    pub fn vector(values: Vec<T>) -> Self {
        Nested::Seq(values.into_iter().map(Nested::Leaf).collect())
    }

    /// A sequence of rows
    pub fn matrix(rows: Vec<Vec<T>>) -> Self {
        Nested::Seq(rows.into_iter().map(Nested::vector).collect())
    }

    fn flatten_into(
        self,
        path: &mut Vec<usize>,
        depth: &mut Option<usize>,
        out: &mut BTreeMap<Index, T>,
    ) -> TensorResult<()> {
        match self {
            Nested::Leaf(value) => {
                let expected = *depth.get_or_insert(path.len());
                if path.len() != expected {
                    return Err(InvalidArgumentError::RaggedNesting {
                        depth: path.len(),
                        expected,
                    }
                    .into());
                }
                out.insert(Index::new(path.iter().rev().copied()), value);
            }
            Nested::Seq(items) => {
                for (position, item) in items.into_iter().enumerate() {
                    path.push(position);
                    item.flatten_into(path, depth, out)?;
                    path.pop();
                }
            }
        }
        Ok(())
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::Seq(items)
    }
}

impl<T> Tensor<T> {
    /// A tensor holding `value` at every coordinate of the box `dims`.
    ///
    /// No dimensions yields the single order-0 cell; any zero-sized
    /// dimension yields an empty tensor.
    pub fn fill(value: T, dims: &[usize]) -> Self
    where
        T: Clone,
    {
        Self::generate(|_| value.clone(), dims)
    }

    /// A tensor holding `generator(index)` at every coordinate of the box
    /// `dims`, visited axis 0 fastest.
    pub fn generate(mut generator: impl FnMut(&Index) -> T, dims: &[usize]) -> Self {
        if dims.is_empty() {
            let index = Index::scalar();
            let value = generator(&index);
            return Self::from_map(BTreeMap::from([(index, value)]));
        }
        if dims.contains(&0) {
            return Self::empty();
        }
        let max = Index::new(dims.iter().map(|&d| d - 1));
        let entries = Index::indices(&max)
            .into_iter()
            .map(|index| {
                let value = generator(&index);
                (index, value)
            })
            .collect();
        Self::from_map(entries)
    }

    /// A tensor built from a nested sequence.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if leaves sit at different depths.
    pub fn of(nested: Nested<T>) -> TensorResult<Self> {
        let mut entries = BTreeMap::new();
        nested.flatten_into(&mut Vec::new(), &mut None, &mut entries)?;
        Ok(Self::from_map(entries))
    }

    /// An order-1 tensor with `values[i]` at `(i)`
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_map(
            values
                .into_iter()
                .enumerate()
                .map(|(i, value)| (Index::new([i]), value))
                .collect(),
        )
    }

    /// An order-2 tensor with `rows[y][x]` at `(x, y)`: axis 0 is the
    /// column and axis 1 the row.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let mut entries = BTreeMap::new();
        for (y, row) in rows.into_iter().enumerate() {
            for (x, value) in row.into_iter().enumerate() {
                entries.insert(Index::new([x, y]), value);
            }
        }
        Self::from_map(entries)
    }
}

impl<T> From<Vec<T>> for Tensor<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparten_core::{index, TensorError};

    #[test]
    fn test_fill() {
        let tensor = Tensor::fill('a', &[2, 2, 2]);
        assert_eq!(tensor.len(), 8);
        assert_eq!(tensor.order(), 3);
        assert!(tensor.values().all(|&c| c == 'a'));
    }

    #[test]
    fn test_fill_edge_dimensions() {
        let scalar = Tensor::fill(7, &[]);
        assert_eq!(scalar.len(), 1);
        assert_eq!(scalar.get(&Index::scalar()), Some(&7));

        assert!(Tensor::fill(7, &[3, 0]).is_empty());
    }

    #[test]
    fn test_generate_visits_axis_zero_fastest() {
        let mut counter = 0;
        let tensor = Tensor::generate(
            |_| {
                counter += 1;
                counter
            },
            &[2, 2],
        );
        assert_eq!(tensor.get(&index![1, 0]), Some(&2));
        assert_eq!(tensor.get(&index![0, 1]), Some(&3));
    }

    #[test]
    fn test_of_nested() {
        let nested = Nested::Seq(vec![
            Nested::matrix(vec![vec![1, 2], vec![3, 4]]),
            Nested::matrix(vec![vec![5, 6], vec![7, 8]]),
        ]);
        let tensor = Tensor::of(nested).unwrap();
        assert_eq!(tensor.order(), 3);
        assert_eq!(tensor.get(&index![1, 0, 0]), Some(&2));
        assert_eq!(tensor.get(&index![0, 1, 0]), Some(&3));
        assert_eq!(tensor.get(&index![1, 1, 1]), Some(&8));
    }

    #[test]
    fn test_of_leaf_is_scalar() {
        let tensor = Tensor::of(Nested::leaf("x")).unwrap();
        assert_eq!(tensor.order(), 0);
        assert_eq!(tensor.get(&Index::scalar()), Some(&"x"));
    }

    #[test]
    fn test_of_rejects_mixed_depths() {
        let nested = Nested::Seq(vec![Nested::leaf(1), Nested::vector(vec![2])]);
        let err = Tensor::of(nested).unwrap_err();
        assert_eq!(
            err,
            TensorError::InvalidArgument(InvalidArgumentError::RaggedNesting {
                depth: 2,
                expected: 1
            })
        );
    }

    #[test]
    fn test_from_rows_axis_layout() {
        let tensor = Tensor::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        assert_eq!(tensor.dimensions().as_slice(), &[2, 3]);
        assert_eq!(tensor.get(&index![1, 0]), Some(&2));
        assert_eq!(tensor.get(&index![0, 2]), Some(&5));
    }

    #[test]
    fn test_from_vec() {
        let tensor: Tensor<_> = vec![10, 20].into();
        assert_eq!(tensor.order(), 1);
        assert_eq!(tensor.get(&index![1]), Some(&20));
    }
}
