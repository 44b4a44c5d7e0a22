pub mod intersect_2d;
pub mod polygon_2d;

use std::fmt;

/// 2D vector type used by the low-level routines.
pub type Vector2<T> = nalgebra::Vector2<T>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Scalar type usable as a coordinate.
///
/// Implemented for every real field `nalgebra` knows about, in practice `f32` and `f64`.
pub trait Coord: nalgebra::RealField + Copy + fmt::Display {}

impl<T: nalgebra::RealField + Copy + fmt::Display> Coord for T {}

/// Tolerance used by the parallelism and on-boundary tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Base epsilon, scaled by the magnitude of the quantities being compared.
    pub epsilon: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { epsilon: TOLERANCE }
    }
}

impl Tolerance {
    /// Creates a tolerance with the given base epsilon.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Returns the base epsilon converted to `T`.
    #[must_use]
    pub fn epsilon<T: Coord>(&self) -> T {
        nalgebra::convert(self.epsilon)
    }

    /// Returns `epsilon * |scale|`.
    ///
    /// The threshold is purely relative, so it shrinks with tiny geometry and
    /// is zero for a zero scale.
    #[must_use]
    pub fn scaled<T: Coord>(&self, scale: T) -> T {
        self.epsilon::<T>() * scale.abs()
    }
}

/// 2D cross product: `a.x * b.y - a.y * b.x`.
#[inline]
#[must_use]
pub fn cross_2d<T: Coord>(a: &Vector2<T>, b: &Vector2<T>) -> T {
    a.x * b.y - a.y * b.x
}

/// Maps negative zero to positive zero, leaving every other value untouched.
#[inline]
#[must_use]
pub fn canonical_zero<T: Coord>(value: T) -> T {
    if value == T::zero() {
        T::zero()
    } else {
        value
    }
}
