//! Coordinate algebra
//!
//! An [`Index`] is an immutable, ordered tuple of non-negative integers that
//! addresses one cell of a sparse tensor. The number of coordinates is the
//! index's *order*.
//!
//! # Ordering
//!
//! Indices of equal order compare lexicographically from the **last**
//! coordinate to the first: the highest axis is the most significant. This
//! is the order in which [`Index::indices`] enumerates a bounding box (axis 0
//! varies fastest) and the order in which tensors iterate their entries.
//! Indices of different order compare by order first, so `Index` can be
//! used as a `BTreeMap` key.
//!
//! # Examples
//!
//! ```
//! use sparten_core::{index, Index};
//!
//! let a = index![1, 0, 2];
//! let b = index![0, 1, 2];
//!
//! // Axis 1 is more significant than axis 0
//! assert!(a < b);
//! assert_eq!(a.highest_order_difference(&b).unwrap(), 2);
//!
//! // Axis algebra
//! assert_eq!(a.transpose(), index![2, 0, 1]);
//! assert_eq!(a.combine(&index![7]), index![1, 0, 2, 7]);
//! assert_eq!(a.constrain(&[1]).unwrap(), index![1, 2]);
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use smallvec::SmallVec;

use crate::error::{InvalidArgumentError, TensorError, TensorResult};

/// Type alias for an axis number (zero-indexed).
pub type Axis = usize;

/// Type alias for a tensor order (number of axes).
pub type Order = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Holds the bounding-box size of every axis.
pub type Shape = SmallVec<[usize; 6]>;

/// Largest coordinate a tensor stores: the bounding box of axis `d` is the
/// largest coordinate plus one, which must fit in a `usize`.
pub const MAX_COORDINATE: usize = usize::MAX - 1;

/// Builds an [`Index`] from a list of coordinates.
///
/// ```
/// use sparten_core::index;
///
/// assert_eq!(index![].order(), 0);
/// assert_eq!(index![3, 4].as_slice(), &[3, 4]);
/// ```
#[macro_export]
macro_rules! index {
    () => {
        $crate::Index::scalar()
    };
    ($($coord:expr),+ $(,)?) => {
        $crate::Index::from_coords(&[$($coord),+])
    };
}

/// An immutable coordinate tuple.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Index {
    coords: SmallVec<[usize; 6]>,
}

impl Index {
    /// Create an index from its coordinates, axis 0 first.
    pub fn new(coords: impl IntoIterator<Item = usize>) -> Self {
        Self {
            coords: coords.into_iter().collect(),
        }
    }

    /// Create an index from a coordinate slice, axis 0 first.
    pub fn from_coords(coords: &[usize]) -> Self {
        Self {
            coords: SmallVec::from_slice(coords),
        }
    }

    /// The order-0 index addressing the single cell of a scalar.
    pub fn scalar() -> Self {
        Self::default()
    }

    /// Create an index from signed values, rejecting negative coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparten_core::Index;
    ///
    /// assert!(Index::try_from_signed(&[0, 3]).is_ok());
    /// assert!(Index::try_from_signed(&[0, -1]).is_err());
    /// ```
    pub fn try_from_signed(values: &[i64]) -> TensorResult<Self> {
        let mut coords = SmallVec::with_capacity(values.len());
        for (axis, &value) in values.iter().enumerate() {
            let coord = usize::try_from(value)
                .map_err(|_| InvalidArgumentError::NegativeCoordinate { axis, value })?;
            coords.push(coord);
        }
        Ok(Self { coords })
    }

    /// Check that every coordinate is at most [`MAX_COORDINATE`].
    ///
    /// # Errors
    ///
    /// `InvalidArgument` naming the first axis whose coordinate is too large.
    pub fn check_bounded(&self) -> TensorResult<()> {
        match self.coords.iter().position(|&c| c > MAX_COORDINATE) {
            Some(axis) => Err(TensorError::coordinate_overflow(axis, self.coords[axis])),
            None => Ok(()),
        }
    }

    /// Number of coordinates
    pub fn order(&self) -> Order {
        self.coords.len()
    }

    /// Coordinates as a slice, axis 0 first
    pub fn as_slice(&self) -> &[usize] {
        &self.coords
    }

    /// Coordinate on `axis`
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `axis >= self.order()`.
    pub fn get(&self, axis: Axis) -> TensorResult<usize> {
        self.coords
            .get(axis)
            .copied()
            .ok_or_else(|| TensorError::axis_out_of_bounds(axis, self.order()))
    }

    /// Whether the coordinate on `axis` equals `value`.
    ///
    /// An axis beyond the order never matches.
    pub fn has_coordinate(&self, axis: Axis, value: usize) -> bool {
        self.coords.get(axis) == Some(&value)
    }

    /// Whether every `axis -> value` constraint holds.
    pub fn has_coordinates(&self, constraints: &BTreeMap<Axis, usize>) -> bool {
        constraints
            .iter()
            .all(|(&axis, &value)| self.has_coordinate(axis, value))
    }

    /// Concatenate `other` after `self`.
    pub fn combine(&self, other: &Index) -> Index {
        let mut coords = self.coords.clone();
        coords.extend_from_slice(&other.coords);
        Index { coords }
    }

    /// Drop the named axes, keeping the remaining coordinates in order.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if any axis is beyond the order.
    pub fn constrain(&self, axes: &[Axis]) -> TensorResult<Index> {
        if let Some(&axis) = axes.iter().find(|&&axis| axis >= self.order()) {
            return Err(TensorError::axis_out_of_bounds(axis, self.order()));
        }
        Ok(self.without_axes(|axis| axes.contains(&axis)))
    }

    fn without_axes(&self, mut dropped: impl FnMut(Axis) -> bool) -> Index {
        Index {
            coords: self
                .coords
                .iter()
                .enumerate()
                .filter(|&(axis, _)| !dropped(axis))
                .map(|(_, &coord)| coord)
                .collect(),
        }
    }

    /// Remove a single axis.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `axis >= self.order()`.
    pub fn without(&self, axis: Axis) -> TensorResult<Index> {
        self.constrain(&[axis])
    }

    /// Check that `permutation` is a bijection over `0..order`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the length differs from `order` or any axis is
    /// repeated or out of range.
    pub fn check_permutation(permutation: &[Axis], order: Order) -> TensorResult<()> {
        if permutation.len() != order {
            return Err(TensorError::invalid_permutation(permutation, order));
        }
        let mut seen = vec![false; order];
        for &axis in permutation {
            match seen.get_mut(axis) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(TensorError::invalid_permutation(permutation, order)),
            }
        }
        Ok(())
    }

    /// Permute axes: axis `i` of the result is axis `permutation[i]` of `self`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `permutation` is not a bijection over `0..order`.
    pub fn reorder(&self, permutation: &[Axis]) -> TensorResult<Index> {
        Self::check_permutation(permutation, self.order())?;
        Ok(self.reorder_unchecked(permutation))
    }

    fn reorder_unchecked(&self, permutation: &[Axis]) -> Index {
        Index {
            coords: permutation.iter().map(|&axis| self.coords[axis]).collect(),
        }
    }

    /// Reverse the axis order.
    pub fn transpose(&self) -> Index {
        Index {
            coords: self.coords.iter().rev().copied().collect(),
        }
    }

    /// Apply `f` to every coordinate.
    pub fn compute(&self, mut f: impl FnMut(usize) -> usize) -> Index {
        Index {
            coords: self.coords.iter().map(|&coord| f(coord)).collect(),
        }
    }

    /// Replace the coordinate on `axis`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `axis >= self.order()`.
    pub fn with_coordinate(&self, axis: Axis, value: usize) -> TensorResult<Index> {
        let order = self.order();
        let mut coords = self.coords.clone();
        let slot = coords
            .get_mut(axis)
            .ok_or_else(|| TensorError::axis_out_of_bounds(axis, order))?;
        *slot = value;
        Ok(Index { coords })
    }

    /// Append one trailing coordinate.
    pub fn extrude(&self, coordinate: usize) -> Index {
        let mut coords = self.coords.clone();
        coords.push(coordinate);
        Index { coords }
    }

    fn check_same_order(&self, other: &Index) -> TensorResult<()> {
        if self.order() != other.order() {
            return Err(TensorError::order_mismatch(self.order(), other.order()));
        }
        Ok(())
    }

    /// Straight-line distance between two indices of equal order.
    pub fn euclidean_distance(&self, other: &Index) -> TensorResult<f64> {
        self.check_same_order(other)?;
        let sum: f64 = self
            .coords
            .iter()
            .zip(&other.coords)
            .map(|(&a, &b)| {
                let d = a.abs_diff(b) as f64;
                d * d
            })
            .sum();
        Ok(sum.sqrt())
    }

    /// Manhattan distance between two indices of equal order.
    pub fn orthogonal_distance(&self, other: &Index) -> TensorResult<usize> {
        self.check_same_order(other)?;
        Ok(self
            .coords
            .iter()
            .zip(&other.coords)
            .map(|(&a, &b)| a.abs_diff(b))
            .sum())
    }

    /// 1-indexed highest axis at which two equal-order indices differ.
    ///
    /// Scans from the most significant axis down; returns 0 for identical
    /// indices.
    pub fn highest_order_difference(&self, other: &Index) -> TensorResult<usize> {
        self.check_same_order(other)?;
        Ok(self
            .coords
            .iter()
            .zip(&other.coords)
            .rposition(|(a, b)| a != b)
            .map_or(0, |axis| axis + 1))
    }

    /// Whether `min <= self <= max` on every axis.
    ///
    /// Indices of a different order are never within.
    pub fn is_within(&self, min: &Index, max: &Index) -> bool {
        self.order() == min.order()
            && self.order() == max.order()
            && self
                .coords
                .iter()
                .zip(&min.coords)
                .zip(&max.coords)
                .all(|((&c, &lo), &hi)| lo <= c && c <= hi)
    }

    /// Subtract `origin` coordinate-wise, or `None` if any coordinate would
    /// go negative or the orders differ.
    pub fn checked_sub(&self, origin: &Index) -> Option<Index> {
        if self.order() != origin.order() {
            return None;
        }
        let coords = self
            .coords
            .iter()
            .zip(&origin.coords)
            .map(|(&c, &o)| c.checked_sub(o))
            .collect::<Option<SmallVec<_>>>()?;
        Some(Index { coords })
    }

    /// Element-wise maximum over a set of equal-order indices.
    ///
    /// Returns `None` for an empty set.
    pub fn bounding_max<'a>(mut indices: impl Iterator<Item = &'a Index>) -> Option<Index> {
        let mut max = indices.next()?.clone();
        for index in indices {
            for (m, &c) in max.coords.iter_mut().zip(&index.coords) {
                *m = (*m).max(c);
            }
        }
        Some(max)
    }

    /// Every index `c` with `0 <= c[d] <= max[d]` on all axes, axis 0
    /// varying fastest.
    ///
    /// Built by cross-joining the per-axis ranges with [`Index::combine`].
    /// An order-0 `max` yields an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparten_core::{index, Index};
    ///
    /// let all = Index::indices(&index![1, 1]);
    /// assert_eq!(all, vec![index![0, 0], index![1, 0], index![0, 1], index![1, 1]]);
    /// assert!(Index::indices(&index![]).is_empty());
    /// ```
    pub fn indices(max: &Index) -> Vec<Index> {
        let mut bounds = max.coords.iter();
        let Some(&first) = bounds.next() else {
            return Vec::new();
        };
        let mut result: Vec<Index> = (0..=first).map(|c| Index::new([c])).collect();
        for &bound in bounds {
            let mut next =
                Vec::with_capacity(result.len().saturating_mul(bound.saturating_add(1)));
            for c in 0..=bound {
                let tail = Index::new([c]);
                next.extend(result.iter().map(|prefix| prefix.combine(&tail)));
            }
            result = next;
        }
        result
    }
}

impl Ord for Index {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order().cmp(&other.order()).then_with(|| {
            self.coords
                .iter()
                .rev()
                .cmp(other.coords.iter().rev())
        })
    }
}

impl PartialOrd for Index {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (axis, coord) in self.coords.iter().enumerate() {
            if axis > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", coord)?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index{}", self)
    }
}

impl From<Vec<usize>> for Index {
    fn from(coords: Vec<usize>) -> Self {
        Index::new(coords)
    }
}

impl From<&[usize]> for Index {
    fn from(coords: &[usize]) -> Self {
        Index::from_coords(coords)
    }
}

impl<const N: usize> From<[usize; N]> for Index {
    fn from(coords: [usize; N]) -> Self {
        Index::new(coords)
    }
}

impl From<Index> for Vec<usize> {
    fn from(index: Index) -> Self {
        index.coords.into_vec()
    }
}
