use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::SVector;

use super::format::write_tuple;
use crate::error::{check_index, require_dimension, DimensionError, GeometryError, Result};
use crate::math::{cross_2d, Coord, Tolerance};

/// A fixed-dimension displacement with `D` components of scalar type `T`.
///
/// Equality is exact component-wise comparison, not tolerance based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T: Coord, const D: usize> {
    components: SVector<T, D>,
}

impl<T: Coord, const D: usize> Vector<T, D> {
    fn from_inner(components: SVector<T, D>) -> Self {
        const { assert!(D >= 1, "dimension must be at least 1") };
        Self { components }
    }

    /// Creates a vector from exactly `D` components.
    #[must_use]
    pub fn new(components: [T; D]) -> Self {
        Self::from_inner(SVector::from(components))
    }

    /// Creates the zero vector.
    #[must_use]
    pub fn zeros() -> Self {
        Self::from_inner(SVector::zeros())
    }

    /// Creates a vector from a slice whose length must equal `D`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::InitializerLength` if `components.len() != D`.
    pub fn from_slice(components: &[T]) -> Result<Self> {
        if components.len() != D {
            return Err(DimensionError::InitializerLength {
                expected: D,
                found: components.len(),
            }
            .into());
        }
        Ok(Self::from_inner(SVector::from_column_slice(components)))
    }

    /// Returns the number of components, `D`.
    #[must_use]
    pub fn dimension(&self) -> usize {
        D
    }

    /// Returns component `index`.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::IndexOutOfRange` if `index >= D`.
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, D)?;
        Ok(self.components[index])
    }

    /// Overwrites component `index`.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::IndexOutOfRange` if `index >= D`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, D)?;
        self.components[index] = value;
        Ok(())
    }

    /// Iterates over the components in order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.components.iter().copied()
    }

    /// Returns the underlying `nalgebra` vector.
    #[must_use]
    pub fn as_nalgebra(&self) -> &SVector<T, D> {
        &self.components
    }

    /// Dot product of `a` and `b`.
    #[must_use]
    pub fn dot_product(a: &Self, b: &Self) -> T {
        a.components.dot(&b.components)
    }

    /// Dot product with `other`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        Self::dot_product(self, other)
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(&self) -> T {
        self.components.norm()
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn squared_magnitude(&self) -> T {
        self.components.norm_squared()
    }

    /// Returns `true` if every component is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.iter().all(|c| c == T::zero())
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the magnitude is below tolerance.
    pub fn normalized(&self) -> Result<Self> {
        let len = self.magnitude();
        if len < Tolerance::default().epsilon() {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::from_inner(self.components / len))
    }

    /// First component.
    #[must_use]
    pub fn dx(&self) -> T {
        self.components[0]
    }

    /// Second component.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::Unsupported` if `D < 2`.
    pub fn dy(&self) -> Result<T> {
        require_dimension("dy", "dimension >= 2", D, 2)?;
        Ok(self.components[1])
    }

    /// Overwrites the first component.
    pub fn set_dx(&mut self, x: T) {
        self.components[0] = x;
    }

    /// Overwrites the second component.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::Unsupported` if `D < 2`.
    pub fn set_dy(&mut self, y: T) -> Result<()> {
        require_dimension("set_dy", "dimension >= 2", D, 2)?;
        self.components[1] = y;
        Ok(())
    }
}

impl<T: Coord> Vector<T, 2> {
    /// 2D cross product, `self.x * other.y - self.y * other.x`.
    #[must_use]
    pub fn cross_2d(&self, other: &Self) -> T {
        cross_2d(&self.components, &other.components)
    }

    /// Offsets the vector by `distance` along `angle` (radians), then subtracts `(w, h)`.
    ///
    /// Returns `(x + cos(angle) * distance - w, y + sin(angle) * distance - h)`.
    #[must_use]
    pub fn moved(&self, w: T, h: T, angle: T, distance: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new([
            self.components.x + cos * distance - w,
            self.components.y + sin * distance - h,
        ])
    }
}

impl<T: Coord> Vector<T, 3> {
    /// 3D cross product `a x b`.
    #[must_use]
    pub fn cross_product(a: &Self, b: &Self) -> Self {
        let (a, b) = (&a.components, &b.components);
        Self::new([
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        ])
    }
}

impl<T: Coord, const D: usize> Default for Vector<T, D> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Coord, const D: usize> From<[T; D]> for Vector<T, D> {
    fn from(components: [T; D]) -> Self {
        Self::new(components)
    }
}

impl<T: Coord, const D: usize> From<SVector<T, D>> for Vector<T, D> {
    fn from(components: SVector<T, D>) -> Self {
        Self::from_inner(components)
    }
}

impl<T: Coord, const D: usize> From<Vector<T, D>> for SVector<T, D> {
    fn from(v: Vector<T, D>) -> Self {
        v.components
    }
}

impl<T: Coord, const D: usize> TryFrom<&[T]> for Vector<T, D> {
    type Error = crate::error::GeoprimError;

    fn try_from(components: &[T]) -> Result<Self> {
        Self::from_slice(components)
    }
}

impl<T: Coord, const D: usize> TryFrom<Vec<T>> for Vector<T, D> {
    type Error = crate::error::GeoprimError;

    fn try_from(components: Vec<T>) -> Result<Self> {
        Self::from_slice(&components)
    }
}

impl<T: Coord, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<T: Coord, const D: usize> IndexMut<usize> for Vector<T, D> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}

impl<T: Coord, const D: usize> Add for Vector<T, D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_inner(self.components + rhs.components)
    }
}

impl<T: Coord, const D: usize> AddAssign for Vector<T, D> {
    fn add_assign(&mut self, rhs: Self) {
        self.components += rhs.components;
    }
}

impl<T: Coord, const D: usize> Sub for Vector<T, D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_inner(self.components - rhs.components)
    }
}

impl<T: Coord, const D: usize> SubAssign for Vector<T, D> {
    fn sub_assign(&mut self, rhs: Self) {
        self.components -= rhs.components;
    }
}

impl<T: Coord, const D: usize> Neg for Vector<T, D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_inner(-self.components)
    }
}

impl<T: Coord, const D: usize> Mul<T> for Vector<T, D> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::from_inner(self.components * scalar)
    }
}

impl<T: Coord, const D: usize> MulAssign<T> for Vector<T, D> {
    fn mul_assign(&mut self, scalar: T) {
        self.components *= scalar;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<const D: usize> Mul<Vector<$t, D>> for $t {
            type Output = Vector<$t, D>;

            fn mul(self, v: Vector<$t, D>) -> Vector<$t, D> {
                v * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64);

impl<T: Coord, const D: usize> fmt::Display for Vector<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, self.iter())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::math::TOLERANCE;

    fn v2(x: f64, y: f64) -> Vector<f64, 2> {
        Vector::new([x, y])
    }

    #[test]
    fn from_slice_checks_length() {
        let v = Vector::<f64, 3>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v, Vector::new([1.0, 2.0, 3.0]));
        assert_eq!(v.dimension(), 3);

        let err = Vector::<f64, 2>::from_slice(&[1.0]).unwrap_err();
        assert!(err.is_dimension_mismatch());
        assert!(Vector::<f32, 2>::try_from(vec![1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn checked_access() {
        let mut v = v2(3.0, 4.0);
        assert_relative_eq!(v.get(1).unwrap(), 4.0);
        assert!(v.get(2).unwrap_err().is_index_out_of_range());
        v.set(0, 7.0).unwrap();
        assert_relative_eq!(v[0], 7.0);
        assert!(v.set(5, 1.0).is_err());
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let v = v2(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn add_then_sub_round_trips() {
        let a = v2(3.0, 4.0);
        let b = v2(1.0, 2.0);
        assert_eq!(a + b - b, a);
        assert_eq!(a + b, v2(4.0, 6.0));
        assert_eq!(a - b, v2(2.0, 2.0));
    }

    #[test]
    fn compound_assignment() {
        let mut v = v2(3.0, 4.0);
        v += v2(1.0, 2.0);
        assert_eq!(v, v2(4.0, 6.0));
        v -= v2(1.0, 2.0);
        assert_eq!(v, v2(3.0, 4.0));
        v *= 2.0;
        assert_eq!(v, v2(6.0, 8.0));
        assert_eq!(-v, v2(-6.0, -8.0));
    }

    #[test]
    fn scalar_multiplication_is_symmetric() {
        let v = v2(1.5, -2.0);
        assert_eq!(2.0 * v, v * 2.0);
        let w = Vector::<f32, 3>::new([1.0, 2.0, 3.0]);
        assert_eq!(3.0_f32 * w, w * 3.0);
    }

    #[test]
    fn dot_commutes() {
        let a = v2(3.0, 4.0);
        let b = v2(1.0, 2.0);
        assert_relative_eq!(a.dot(&b), 11.0);
        assert_relative_eq!(Vector::dot_product(&a, &b), Vector::dot_product(&b, &a));
    }

    #[test]
    fn magnitude_is_zero_only_for_zero_vector() {
        let a = v2(3.0, 4.0);
        assert_relative_eq!(a.magnitude(), 5.0);
        assert_relative_eq!(a.squared_magnitude(), 25.0);
        assert!(a.magnitude() > 0.0);
        let z = Vector::<f64, 2>::zeros();
        assert!(z.is_zero());
        assert_abs_diff_eq!(z.magnitude(), 0.0);
    }

    #[test]
    fn cross_2d_antisymmetric() {
        let a = v2(3.0, 4.0);
        let b = v2(1.0, 2.0);
        assert_relative_eq!(a.cross_2d(&b), 2.0);
        assert_relative_eq!(a.cross_2d(&b), -b.cross_2d(&a));
    }

    #[test]
    fn cross_product_3d() {
        let a = Vector::new([1.0, 2.0, 3.0]);
        let b = Vector::new([4.0, 5.0, 6.0]);
        assert_eq!(Vector::cross_product(&a, &b), Vector::new([-3.0, 6.0, -3.0]));
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = v2(3.0, 4.0).normalized().unwrap();
        assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(n.dx(), 0.6);
    }

    #[test]
    fn normalizing_zero_fails() {
        let err = Vector::<f64, 3>::zeros().normalized().unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn dimension_restricted_accessors() {
        let mut v1 = Vector::<f64, 1>::new([5.0]);
        assert_relative_eq!(v1.dx(), 5.0);
        assert!(v1.dy().unwrap_err().is_dimension_mismatch());
        assert!(v1.set_dy(1.0).is_err());

        let mut v = v2(3.0, 4.0);
        v.set_dx(10.0);
        v.set_dy(20.0).unwrap();
        assert_eq!(v, v2(10.0, 20.0));
    }

    #[test]
    fn moved_offsets_along_angle() {
        let v = v2(3.0, 4.0).moved(0.0, 0.0, 0.0, 5.0);
        assert_abs_diff_eq!(v.dx(), 8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(v.dy().unwrap(), 4.0, epsilon = 1e-9);

        let v = v2(1.0, 1.0).moved(0.0, 0.0, std::f64::consts::FRAC_PI_2, 3.0);
        assert_abs_diff_eq!(v.dx(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(v.dy().unwrap(), 4.0, epsilon = 1e-9);

        let v = v2(0.0, 0.0).moved(1.0, 1.0, std::f64::consts::FRAC_PI_4, 8.0_f64.sqrt());
        assert_abs_diff_eq!(v.dx(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(v.dy().unwrap(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn display_canonicalizes_negative_zero() {
        assert_eq!(v2(-0.0, 2.5).to_string(), "(0, 2.5)");
        assert_eq!(Vector::new([1.0, -2.0, 3.0]).to_string(), "(1, -2, 3)");
        assert_eq!(format!("{:.1}", v2(1.0, 2.0)), "(1.0, 2.0)");
    }

    #[test]
    fn equality_is_exact() {
        assert_ne!(v2(1.0, 2.0), v2(1.0, 2.0 + 1e-12));
    }
}
