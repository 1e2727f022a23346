//! Lattice array codec.
//!
//! A lattice describes a large regularly (or piecewise) spaced array without
//! storing its elements:
//!
//! ```text
//! value(k_0, .., k_n) = origin + Σ_d offset_d(k_d)
//! offset_d(k) = k * step_d                     (regular axis)
//! offset_d(k) = Σ_{j<k} deltas_d[j]            (irregular axis)
//! ```
//!
//! Axes are listed slowest first, so [`LatticeArray::materialize`] yields
//! values in C (row-major) order.
//!
//! Irregular floating-point axes compute their prefix sums once, at
//! construction, with Neumaier compensated summation. Each prefix is within one
//! rounding step of the exact sum of the stored deltas regardless of its
//! position along the axis. Regular axes use a single multiplication.

use crate::error::{Error, Result};
use crate::point::Point3d;
use num_traits::{Float, NumCast};
use std::fmt;

/// Numeric element type of a lattice.
pub trait LatticeScalar: Copy + PartialEq + fmt::Debug {
    /// Additive identity.
    fn zero() -> Self;

    /// Offset of element `k` along a regular axis, `None` on overflow.
    fn step_offset(step: Self, k: usize) -> Option<Self>;

    /// Sum of two values, `None` on overflow.
    fn checked_sum(self, rhs: Self) -> Option<Self>;

    /// Prefix sums `[0, d0, d0 + d1, ..]`.
    ///
    /// Integer implementations stop at the first overflowing prefix, so the
    /// result may be shorter than `deltas.len() + 1`.
    fn prefix_sums(deltas: &[Self]) -> Vec<Self>;
}

macro_rules! impl_integer_scalar {
    ($($t:ty),*) => {$(
        impl LatticeScalar for $t {
            fn zero() -> Self {
                0
            }

            fn step_offset(step: Self, k: usize) -> Option<Self> {
                let k = <$t as NumCast>::from(k)?;
                step.checked_mul(k)
            }

            fn checked_sum(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }

            fn prefix_sums(deltas: &[Self]) -> Vec<Self> {
                let mut sums = Vec::with_capacity(deltas.len() + 1);
                let mut acc: $t = 0;
                sums.push(acc);
                for &delta in deltas {
                    match acc.checked_add(delta) {
                        Some(next) => acc = next,
                        None => break,
                    }
                    sums.push(acc);
                }
                sums
            }
        }
    )*};
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {$(
        impl LatticeScalar for $t {
            fn zero() -> Self {
                0.0
            }

            fn step_offset(step: Self, k: usize) -> Option<Self> {
                let k = <$t as NumCast>::from(k)?;
                Some(step * k)
            }

            fn checked_sum(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            fn prefix_sums(deltas: &[Self]) -> Vec<Self> {
                compensated_prefix_sums(deltas)
            }
        }
    )*};
}

impl_integer_scalar!(i32, i64);
impl_float_scalar!(f32, f64);

/// Neumaier running sums; element `k` is the compensated sum of `deltas[..k]`.
fn compensated_prefix_sums<F: Float>(deltas: &[F]) -> Vec<F> {
    let mut sums = Vec::with_capacity(deltas.len() + 1);
    let mut sum = F::zero();
    let mut compensation = F::zero();
    sums.push(sum);
    for &delta in deltas {
        let t = sum + delta;
        compensation = if sum.abs() >= delta.abs() {
            compensation + ((sum - t) + delta)
        } else {
            compensation + ((delta - t) + sum)
        };
        sum = t;
        sums.push(sum + compensation);
    }
    sums
}

/// Spacing between consecutive elements along one axis.
#[derive(Debug, Clone, PartialEq)]
pub enum Spacing<T> {
    /// Constant step between every pair of neighbours.
    Regular(T),
    /// One delta per interval; the axis has `deltas.len() + 1` elements.
    Irregular(Vec<T>),
}

/// One lattice dimension: element count plus spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeAxis<T> {
    count: usize,
    spacing: Spacing<T>,
    prefix: Vec<T>,
}

impl<T: LatticeScalar> LatticeAxis<T> {
    /// Creates an axis of `count` elements separated by `step`.
    #[must_use]
    pub fn regular(count: usize, step: T) -> Self {
        Self {
            count,
            spacing: Spacing::Regular(step),
            prefix: Vec::new(),
        }
    }

    /// Creates an axis from per-interval deltas.
    #[must_use]
    pub fn irregular(deltas: Vec<T>) -> Self {
        let prefix = T::prefix_sums(&deltas);
        Self {
            count: deltas.len() + 1,
            spacing: Spacing::Irregular(deltas),
            prefix,
        }
    }

    /// Returns the number of elements along the axis.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the spacing description.
    #[must_use]
    pub fn spacing(&self) -> &Spacing<T> {
        &self.spacing
    }

    /// Returns true for a constant-step axis.
    #[must_use]
    pub fn is_regular(&self) -> bool {
        matches!(self.spacing, Spacing::Regular(_))
    }

    /// Returns the regular step, if any.
    #[must_use]
    pub fn step(&self) -> Option<T> {
        match self.spacing {
            Spacing::Regular(step) => Some(step),
            Spacing::Irregular(_) => None,
        }
    }

    /// Offset of element `index` from the start of the axis.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] past the end of the axis, or
    /// [`Error::ArithmeticOverflow`] if the offset is not representable.
    pub fn offset(&self, dimension: usize, index: usize) -> Result<T> {
        if index >= self.count {
            return Err(Error::IndexOutOfRange {
                dimension,
                index,
                count: self.count,
            });
        }
        match &self.spacing {
            Spacing::Regular(step) => T::step_offset(*step, index),
            Spacing::Irregular(_) => self.prefix.get(index).copied(),
        }
        .ok_or(Error::ArithmeticOverflow { dimension })
    }
}

/// Implicit N-dimensional array: origin plus one [`LatticeAxis`] per dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeArray<T> {
    origin: T,
    axes: Vec<LatticeAxis<T>>,
}

/// Integer lattice (wire type `IntegerLatticeArray`).
pub type IntegerLatticeArray = LatticeArray<i64>;

/// Floating-point lattice (wire type `DoubleLatticeArray`).
pub type DoubleLatticeArray = LatticeArray<f64>;

impl<T: LatticeScalar> LatticeArray<T> {
    /// Builds a lattice from an origin and its axes, slowest first.
    #[must_use]
    pub fn encode(origin: T, axes: Vec<LatticeAxis<T>>) -> Self {
        Self { origin, axes }
    }

    /// Builds a regular lattice from `(count, step)` pairs, slowest first.
    ///
    /// # Example
    /// ```
    /// use resqml_core::IntegerLatticeArray;
    ///
    /// // 3 x 4 grid starting at 100, rows 10 apart, columns 1 apart
    /// let lattice = IntegerLatticeArray::regular(100, &[(3, 10), (4, 1)]);
    /// assert_eq!(lattice.value_at(&[2, 3]).unwrap(), 123);
    /// ```
    #[must_use]
    pub fn regular(origin: T, axes: &[(usize, T)]) -> Self {
        Self::encode(
            origin,
            axes.iter()
                .map(|&(count, step)| LatticeAxis::regular(count, step))
                .collect(),
        )
    }

    /// Returns the lattice origin (value at the all-zero index).
    #[must_use]
    pub fn origin(&self) -> T {
        self.origin
    }

    /// Returns the axes, slowest first.
    #[must_use]
    pub fn axes(&self) -> &[LatticeAxis<T>] {
        &self.axes
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.axes.len()
    }

    /// Returns the element count per dimension.
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(LatticeAxis::count).collect()
    }

    /// Returns the total element count, or `None` if it overflows `usize`.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        checked_product(self.axes.iter().map(LatticeAxis::count))
    }

    /// Returns true if any dimension is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.iter().any(|axis| axis.count() == 0)
    }

    /// Returns true if every axis is regular.
    #[must_use]
    pub fn is_regular(&self) -> bool {
        self.axes.iter().all(LatticeAxis::is_regular)
    }

    /// Materializes the element at `index`.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] for a wrong-arity index,
    /// [`Error::IndexOutOfRange`] naming the first offending dimension, or
    /// [`Error::ArithmeticOverflow`] for integer lattices that leave `T`'s range.
    pub fn value_at(&self, index: &[usize]) -> Result<T> {
        check_index(self.axes.iter().map(LatticeAxis::count), index)?;
        let mut value = self.origin;
        for (dimension, (axis, &k)) in self.axes.iter().zip(index).enumerate() {
            let offset = axis.offset(dimension, k)?;
            value = value
                .checked_sum(offset)
                .ok_or(Error::ArithmeticOverflow { dimension })?;
        }
        Ok(value)
    }

    /// Converts an index tuple to its position in [`LatticeArray::materialize`] order.
    ///
    /// # Errors
    /// Same index checks as [`LatticeArray::value_at`].
    pub fn flat_index(&self, index: &[usize]) -> Result<usize> {
        check_index(self.axes.iter().map(LatticeAxis::count), index)?;
        self.axes
            .iter()
            .zip(index)
            .try_fold(0usize, |flat, (axis, &k)| {
                flat.checked_mul(axis.count())?.checked_add(k)
            })
            .ok_or(Error::CountOverflow)
    }

    /// Materializes every element in C order.
    ///
    /// # Errors
    /// Returns [`Error::ArithmeticOverflow`] if any element overflows,
    /// [`Error::CountOverflow`] or [`Error::AllocationFailed`] if the lattice
    /// is too large to hold in memory.
    pub fn materialize(&self) -> Result<Vec<T>> {
        materialize_with(&self.shape(), |index| self.value_at(index))
    }
}

/// Lattice of points: origin plus a direction vector and scalar axis per dimension.
///
/// This is the resolved form of a `Point3dLatticeArray`; see
/// [`Point3dLatticeArray::lattice`](crate::arrays::Point3dLatticeArray::lattice).
#[derive(Debug, Clone, PartialEq)]
pub struct PointLattice {
    origin: Point3d,
    axes: Vec<(Point3d, LatticeAxis<f64>)>,
}

impl PointLattice {
    /// Builds a point lattice from `(direction, axis)` pairs, slowest first.
    #[must_use]
    pub fn encode(origin: Point3d, axes: Vec<(Point3d, LatticeAxis<f64>)>) -> Self {
        Self { origin, axes }
    }

    /// Returns the lattice origin.
    #[must_use]
    pub fn origin(&self) -> Point3d {
        self.origin
    }

    /// Returns the `(direction, axis)` pairs.
    #[must_use]
    pub fn axes(&self) -> &[(Point3d, LatticeAxis<f64>)] {
        &self.axes
    }

    /// Returns the element count per dimension.
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(|(_, axis)| axis.count()).collect()
    }

    /// Returns the total point count, or `None` if it overflows `usize`.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        checked_product(self.axes.iter().map(|(_, axis)| axis.count()))
    }

    /// Returns true if any dimension is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.iter().any(|(_, axis)| axis.count() == 0)
    }

    /// Materializes the point at `index`.
    ///
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] or [`Error::IndexOutOfRange`].
    pub fn value_at(&self, index: &[usize]) -> Result<Point3d> {
        check_index(self.axes.iter().map(|(_, axis)| axis.count()), index)?;
        let mut point = self.origin;
        for (dimension, ((direction, axis), &k)) in self.axes.iter().zip(index).enumerate() {
            point = point + *direction * axis.offset(dimension, k)?;
        }
        Ok(point)
    }

    /// Materializes every point in C order.
    ///
    /// # Errors
    /// Propagates errors from [`PointLattice::value_at`].
    pub fn materialize(&self) -> Result<Vec<Point3d>> {
        materialize_with(&self.shape(), |index| self.value_at(index))
    }
}

/// Checks arity and per-dimension bounds, reporting the first failing dimension.
fn check_index(counts: impl ExactSizeIterator<Item = usize>, index: &[usize]) -> Result<()> {
    if counts.len() != index.len() {
        return Err(Error::DimensionMismatch {
            expected: counts.len(),
            actual: index.len(),
        });
    }
    for (dimension, (count, &k)) in counts.zip(index).enumerate() {
        if k >= count {
            return Err(Error::IndexOutOfRange {
                dimension,
                index: k,
                count,
            });
        }
    }
    Ok(())
}

/// Product of element counts, `None` on overflow.
pub(crate) fn checked_product(counts: impl IntoIterator<Item = usize>) -> Option<usize> {
    counts.into_iter().try_fold(1usize, usize::checked_mul)
}

/// Reserves room for `count` values without aborting on huge requests.
pub(crate) fn reserve<V>(count: usize) -> Result<Vec<V>> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(count)
        .map_err(|_| Error::AllocationFailed { elements: count })?;
    Ok(values)
}

/// Visits every index of `shape` in C order and collects `f`'s results.
fn materialize_with<V>(shape: &[usize], mut f: impl FnMut(&[usize]) -> Result<V>) -> Result<Vec<V>> {
    let total = checked_product(shape.iter().copied()).ok_or(Error::CountOverflow)?;
    let mut values = reserve(total)?;
    if total == 0 {
        return Ok(values);
    }

    let mut index = vec![0; shape.len()];
    loop {
        values.push(f(&index)?);

        let mut dimension = shape.len();
        loop {
            if dimension == 0 {
                return Ok(values);
            }
            dimension -= 1;
            index[dimension] += 1;
            if index[dimension] < shape[dimension] {
                break;
            }
            index[dimension] = 0;
        }
    }
}
