use std::fmt;

use super::{Point, Vector};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::{Coord, Tolerance};

/// A line segment from `a` to `b`.
///
/// The segment is parametrized as `a + t * (b - a)` with `t` in `[0, 1]`.
/// It may be degenerate (`a == b`); intersection queries then report no hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<T: Coord, const D: usize> {
    /// Start point.
    pub a: Point<T, D>,
    /// End point.
    pub b: Point<T, D>,
}

impl<T: Coord, const D: usize> LineSegment<T, D> {
    /// Creates a new segment from `a` to `b`.
    #[must_use]
    pub fn new(a: Point<T, D>, b: Point<T, D>) -> Self {
        Self { a, b }
    }

    /// Returns `b - a`.
    #[must_use]
    pub fn direction(&self) -> Vector<T, D> {
        self.b - self.a
    }

    /// Returns the distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> T {
        self.a.distance(&self.b)
    }

    /// Returns `true` if both endpoints coincide exactly.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Returns the point halfway between the endpoints.
    #[must_use]
    pub fn midpoint(&self) -> Point<T, D> {
        self.point_at(nalgebra::convert(0.5))
    }

    /// Evaluates `a + t * (b - a)`. `t` is not clamped.
    #[must_use]
    pub fn point_at(&self, t: T) -> Point<T, D> {
        self.a + self.direction() * t
    }

    /// Returns the segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }
}

impl<T: Coord> LineSegment<T, 2> {
    /// Bounded intersection with `other`.
    ///
    /// Returns the crossing point when both segment parameters lie in `[0, 1]`
    /// (touching at an endpoint counts). Parallel and collinear segments,
    /// including overlapping ones, report `None`.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Point<T, 2>> {
        self.intersect_with_tolerance(other, Tolerance::default())
    }

    /// Same as [`LineSegment::intersect`] with a caller-supplied parallelism tolerance.
    #[must_use]
    pub fn intersect_with_tolerance(&self, other: &Self, tol: Tolerance) -> Option<Point<T, 2>> {
        segment_segment_intersect_2d(&self.a.xy(), &self.b.xy(), &other.a.xy(), &other.b.xy(), tol)
            .map(|(pt, _, _)| Point::from_xy(pt))
    }
}

impl<T: Coord, const D: usize> fmt::Display for LineSegment<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineSegment[{}, {}]", self.a, self.b)
    }
}
