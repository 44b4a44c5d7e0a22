use std::fmt;

use tracing::trace;

use super::{LineSegment, Point, Polygon, Vector};
use crate::error::Result;
use crate::math::intersect_2d::{ray_ray_intersect_2d, ray_segment_intersect_2d};
use crate::math::{Coord, Tolerance};

/// A half-line starting at `origin` and extending along `direction`.
///
/// The parametric form is: `P(t) = origin + t * direction`, `t >= 0`.
/// `direction` is not required to be normalized, so `t` is measured in
/// multiples of its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T: Coord, const D: usize> {
    pub origin: Point<T, D>,
    pub direction: Vector<T, D>,
}

impl<T: Coord, const D: usize> Ray<T, D> {
    /// Creates a new ray from an origin and direction.
    #[must_use]
    pub fn new(origin: Point<T, D>, direction: Vector<T, D>) -> Self {
        Self { origin, direction }
    }

    /// Evaluates the ray at parameter `t`.
    #[must_use]
    pub fn at(&self, t: T) -> Point<T, D> {
        self.origin + self.direction * t
    }

    /// Returns the unit direction vector.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the direction is zero-length.
    pub fn norm_dir(&self) -> Result<Vector<T, D>> {
        self.direction.normalized()
    }

    /// Magnitude of the direction vector.
    #[must_use]
    pub fn length(&self) -> T {
        self.direction.magnitude()
    }
}

impl<T: Coord> Ray<T, 2> {
    /// Intersection with another ray.
    ///
    /// Returns the parameter `t` on `self`; use [`Ray::at`] for the point.
    /// Parallel rays and crossings behind either origin report `None`.
    #[must_use]
    pub fn intersect_ray(&self, other: &Self) -> Option<T> {
        self.intersect_ray_with_tolerance(other, Tolerance::default())
    }

    /// Same as [`Ray::intersect_ray`] with a caller-supplied parallelism tolerance.
    #[must_use]
    pub fn intersect_ray_with_tolerance(&self, other: &Self, tol: Tolerance) -> Option<T> {
        ray_ray_intersect_2d(
            &self.origin.xy(),
            self.direction.as_nalgebra(),
            &other.origin.xy(),
            other.direction.as_nalgebra(),
            tol,
        )
        .map(|(t, _)| t)
    }

    /// Intersection with a bounded segment.
    ///
    /// Returns the ray parameter `t >= 0` when the crossing lies on the segment.
    #[must_use]
    pub fn intersect_segment(&self, seg: &LineSegment<T, 2>) -> Option<T> {
        self.intersect_segment_with_tolerance(seg, Tolerance::default())
    }

    /// Same as [`Ray::intersect_segment`] with a caller-supplied parallelism tolerance.
    #[must_use]
    pub fn intersect_segment_with_tolerance(
        &self,
        seg: &LineSegment<T, 2>,
        tol: Tolerance,
    ) -> Option<T> {
        ray_segment_intersect_2d(
            &self.origin.xy(),
            self.direction.as_nalgebra(),
            &seg.a.xy(),
            &seg.b.xy(),
            tol,
        )
        .map(|(t, _)| t)
    }

    /// Nearest intersection with the boundary of `poly`.
    ///
    /// Returns the smallest `t` over all edges, or `None` if no edge is hit.
    /// Edges parallel to the ray are skipped.
    #[must_use]
    pub fn intersect_polygon(&self, poly: &Polygon<T>) -> Option<T> {
        poly.edges()
            .enumerate()
            .filter_map(|(i, edge)| {
                let t = self.intersect_segment(&edge)?;
                trace!(edge = i, t = %t, "ray hits polygon edge");
                Some(t)
            })
            .reduce(|best, t| if t < best { t } else { best })
    }
}

impl<T: Coord, const D: usize> fmt::Display for Ray<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray[origin: {}, dir: {}]", self.origin, self.direction)
    }
}
