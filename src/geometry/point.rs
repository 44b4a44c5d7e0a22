use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

use nalgebra::SVector;

use super::format::write_tuple;
use super::Vector;
use crate::error::{check_index, require_dimension, DimensionError, Result};
use crate::math::Coord;

/// A fixed-dimension position with `D` coordinates of scalar type `T`.
///
/// `Point - Point` is a [`Vector`]; `Point +/- Vector` is a translated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Coord, const D: usize> {
    coords: SVector<T, D>,
}

impl<T: Coord, const D: usize> Point<T, D> {
    fn from_inner(coords: SVector<T, D>) -> Self {
        const { assert!(D >= 1, "dimension must be at least 1") };
        Self { coords }
    }

    /// Creates a point from exactly `D` coordinates.
    #[must_use]
    pub fn new(coords: [T; D]) -> Self {
        Self::from_inner(SVector::from(coords))
    }

    /// The point with every coordinate zero.
    #[must_use]
    pub fn origin() -> Self {
        Self::from_inner(SVector::zeros())
    }

    /// Creates a point from a slice whose length must equal `D`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::InitializerLength` if `coords.len() != D`.
    pub fn from_slice(coords: &[T]) -> Result<Self> {
        if coords.len() != D {
            return Err(DimensionError::InitializerLength {
                expected: D,
                found: coords.len(),
            }
            .into());
        }
        Ok(Self::from_inner(SVector::from_column_slice(coords)))
    }

    /// Returns coordinate `index`.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::IndexOutOfRange` if `index >= D`.
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, D)?;
        Ok(self.coords[index])
    }

    /// Overwrites coordinate `index`.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::IndexOutOfRange` if `index >= D`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, D)?;
        self.coords[index] = value;
        Ok(())
    }

    /// Iterates over the coordinates in order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.coords.iter().copied()
    }

    /// Position vector from the origin to this point.
    #[must_use]
    pub fn coords(&self) -> Vector<T, D> {
        Vector::from(self.coords)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> T {
        (self.coords - other.coords).norm()
    }

    /// First coordinate.
    #[must_use]
    pub fn dx(&self) -> T {
        self.coords[0]
    }

    /// Second coordinate.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::Unsupported` if `D < 2`.
    pub fn dy(&self) -> Result<T> {
        require_dimension("dy", "dimension >= 2", D, 2)?;
        Ok(self.coords[1])
    }

    /// Overwrites the first coordinate.
    pub fn set_dx(&mut self, x: T) {
        self.coords[0] = x;
    }

    /// Overwrites the second coordinate.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::Unsupported` if `D < 2`.
    pub fn set_dy(&mut self, y: T) -> Result<()> {
        require_dimension("set_dy", "dimension >= 2", D, 2)?;
        self.coords[1] = y;
        Ok(())
    }

    /// Translates the first two coordinates in place by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::Unsupported` if `D < 2`. The point is left untouched.
    pub fn move_by(&mut self, dx: T, dy: T) -> Result<()> {
        require_dimension("move_by", "dimension >= 2", D, 2)?;
        self.coords[0] += dx;
        self.coords[1] += dy;
        Ok(())
    }
}

impl<T: Coord> Point<T, 2> {
    pub(crate) fn xy(&self) -> nalgebra::Vector2<T> {
        self.coords
    }

    pub(crate) fn from_xy(coords: nalgebra::Vector2<T>) -> Self {
        Self::from_inner(coords)
    }
}

impl<T: Coord, const D: usize> Default for Point<T, D> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<T: Coord, const D: usize> From<[T; D]> for Point<T, D> {
    fn from(coords: [T; D]) -> Self {
        Self::new(coords)
    }
}

impl<T: Coord, const D: usize> TryFrom<&[T]> for Point<T, D> {
    type Error = crate::error::GeoprimError;

    fn try_from(coords: &[T]) -> Result<Self> {
        Self::from_slice(coords)
    }
}

impl<T: Coord, const D: usize> TryFrom<Vec<T>> for Point<T, D> {
    type Error = crate::error::GeoprimError;

    fn try_from(coords: Vec<T>) -> Result<Self> {
        Self::from_slice(&coords)
    }
}

impl<T: Coord, const D: usize> Index<usize> for Point<T, D> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.coords[index]
    }
}

impl<T: Coord, const D: usize> IndexMut<usize> for Point<T, D> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.coords[index]
    }
}

impl<T: Coord, const D: usize> Add<Vector<T, D>> for Point<T, D> {
    type Output = Self;

    fn add(self, v: Vector<T, D>) -> Self {
        Self::from_inner(self.coords + v.as_nalgebra())
    }
}

impl<T: Coord, const D: usize> Add<Point<T, D>> for Vector<T, D> {
    type Output = Point<T, D>;

    fn add(self, p: Point<T, D>) -> Point<T, D> {
        p + self
    }
}

impl<T: Coord, const D: usize> AddAssign<Vector<T, D>> for Point<T, D> {
    fn add_assign(&mut self, v: Vector<T, D>) {
        self.coords += v.as_nalgebra();
    }
}

impl<T: Coord, const D: usize> Sub<Vector<T, D>> for Point<T, D> {
    type Output = Self;

    fn sub(self, v: Vector<T, D>) -> Self {
        Self::from_inner(self.coords - v.as_nalgebra())
    }
}

impl<T: Coord, const D: usize> SubAssign<Vector<T, D>> for Point<T, D> {
    fn sub_assign(&mut self, v: Vector<T, D>) {
        self.coords -= v.as_nalgebra();
    }
}

impl<T: Coord, const D: usize> Sub for Point<T, D> {
    type Output = Vector<T, D>;

    fn sub(self, other: Self) -> Vector<T, D> {
        Vector::from(self.coords - other.coords)
    }
}

impl<T: Coord, const D: usize> fmt::Display for Point<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, self.iter())
    }
}
