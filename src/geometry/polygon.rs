use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::{debug, trace};

use super::{LineSegment, Point, Vector};
use crate::error::{check_index, GeometryError, Result};
use crate::math::polygon_2d::{
    is_convex_2d, left_normal, point_in_polygon_2d, right_normal, signed_area_2d,
};
use crate::math::{Coord, Tolerance, Vector2};

/// A simple closed polygon in the plane.
///
/// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`; closure is implicit.
/// Vertex order sets the winding, which in turn sets the sign of [`Polygon::area`]
/// and the direction of [`Polygon::normal`]. The polygon is assumed to be
/// non-self-intersecting; that is not checked.
///
/// Nothing is cached: every query recomputes from the current vertices, so
/// editing a vertex through [`Polygon::vertex_mut`] or indexing is always safe.
/// Fewer than 3 vertices are accepted but give degenerate answers (zero area,
/// not convex, nothing inside).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T: Coord> {
    vertices: Vec<Point<T, 2>>,
}

impl<T: Coord> Polygon<T> {
    /// Creates a polygon from its vertices in winding order.
    #[must_use]
    pub fn new(vertices: Vec<Point<T, 2>>) -> Self {
        Self { vertices }
    }

    /// Number of vertices (and edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertices in winding order.
    #[must_use]
    pub fn vertices(&self) -> &[Point<T, 2>] {
        &self.vertices
    }

    /// Returns vertex `index`.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::IndexOutOfRange` if `index >= len()`.
    pub fn vertex(&self, index: usize) -> Result<&Point<T, 2>> {
        check_index(index, self.len())?;
        Ok(&self.vertices[index])
    }

    /// Returns a mutable reference to vertex `index`.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::IndexOutOfRange` if `index >= len()`.
    pub fn vertex_mut(&mut self, index: usize) -> Result<&mut Point<T, 2>> {
        check_index(index, self.len())?;
        Ok(&mut self.vertices[index])
    }

    /// Appends a vertex at the end of the loop.
    pub fn push(&mut self, vertex: Point<T, 2>) {
        self.vertices.push(vertex);
    }

    /// Returns edge `index`, from vertex `index` to vertex `(index + 1) % n`.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::IndexOutOfRange` if `index >= len()`.
    pub fn edge(&self, index: usize) -> Result<LineSegment<T, 2>> {
        let n = self.len();
        check_index(index, n)?;
        Ok(LineSegment::new(self.vertices[index], self.vertices[(index + 1) % n]))
    }

    /// Iterates over the edges in index order.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment<T, 2>> + '_ {
        let n = self.len();
        (0..n).map(move |i| LineSegment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    fn coords(&self) -> Vec<Vector2<T>> {
        self.vertices.iter().map(Point::xy).collect()
    }

    fn is_degenerate(&self, query: &'static str) -> bool {
        let degenerate = self.len() < 3;
        if degenerate {
            debug!(query, vertices = self.len(), "degenerate polygon");
        }
        degenerate
    }

    /// Signed area by the shoelace formula.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise; take
    /// the absolute value for the unsigned area.
    #[must_use]
    pub fn area(&self) -> T {
        if self.is_degenerate("area") {
            return T::zero();
        }
        signed_area_2d(&self.coords())
    }

    /// Returns `true` if the vertices wind counter-clockwise (non-negative area).
    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.area() >= T::zero()
    }

    /// Sum of the edge lengths.
    #[must_use]
    pub fn perimeter(&self) -> T {
        self.edges().fold(T::zero(), |acc, e| acc + e.length())
    }

    /// Convexity test.
    ///
    /// Checks the turn direction at every vertex. Collinear vertices (turns within
    /// tolerance) are ignored; any pair of opposite turns makes the polygon
    /// non-convex. Fewer than 3 vertices, or every vertex on one line, is not convex.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        self.is_convex_with_tolerance(Tolerance::default())
    }

    /// Same as [`Polygon::is_convex`] with a caller-supplied collinearity tolerance.
    #[must_use]
    pub fn is_convex_with_tolerance(&self, tol: Tolerance) -> bool {
        if self.is_degenerate("is_convex") {
            return false;
        }
        is_convex_2d(&self.coords(), tol)
    }

    /// Point-in-polygon test.
    ///
    /// Points on the boundary (within tolerance of an edge, vertices included)
    /// count as inside. Other points are classified by the even-odd rule.
    #[must_use]
    pub fn is_inside(&self, point: &Point<T, 2>) -> bool {
        self.is_inside_with_tolerance(point, Tolerance::default())
    }

    /// Same as [`Polygon::is_inside`] with a caller-supplied boundary tolerance.
    ///
    /// The boundary band around each edge is `epsilon` times that edge's length.
    #[must_use]
    pub fn is_inside_with_tolerance(&self, point: &Point<T, 2>, tol: Tolerance) -> bool {
        if self.is_degenerate("is_inside") {
            return false;
        }
        point_in_polygon_2d(&point.xy(), &self.coords(), tol)
    }

    /// Outward unit normal of edge `edge_index`.
    ///
    /// The right-hand perpendicular of the edge direction for counter-clockwise
    /// polygons, the left-hand one for clockwise polygons.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::IndexOutOfRange` if `edge_index >= len()`, or
    /// `GeometryError::Degenerate` if the edge has zero length.
    pub fn normal(&self, edge_index: usize) -> Result<Vector<T, 2>> {
        let edge = self.edge(edge_index)?;
        let dir = edge.direction().normalized().map_err(|_| {
            GeometryError::Degenerate(format!("edge {edge_index} has zero length"))
        })?;
        let n = if self.is_counter_clockwise() {
            right_normal(dir.as_nalgebra())
        } else {
            left_normal(dir.as_nalgebra())
        };
        Ok(Vector::from(n))
    }

    /// First intersection of `seg` with the boundary, visiting edges in index order.
    ///
    /// Only one hit is reported even when the segment crosses several edges.
    #[must_use]
    pub fn intersect_segment(&self, seg: &LineSegment<T, 2>) -> Option<Point<T, 2>> {
        self.edges().enumerate().find_map(|(i, edge)| {
            let hit = edge.intersect(seg)?;
            trace!(edge = i, %hit, "segment hits polygon edge");
            Some(hit)
        })
    }

    /// Returns `true` if `seg` crosses or touches any edge.
    #[must_use]
    pub fn intersects_segment(&self, seg: &LineSegment<T, 2>) -> bool {
        self.intersect_segment(seg).is_some()
    }

    /// Returns `true` if the two polygons overlap.
    ///
    /// Either some pair of edges intersects, or a vertex of one polygon lies
    /// inside the other. The second check catches full containment, where no
    /// edges cross at all.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.edges().any(|edge| other.intersects_segment(&edge)) {
            return true;
        }
        let contained = other.vertices.iter().any(|p| self.is_inside(p))
            || self.vertices.iter().any(|p| other.is_inside(p));
        if contained {
            debug!("polygons overlap by containment");
        }
        contained
    }

    /// Returns the polygon with its winding reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.vertices.iter().rev().copied().collect())
    }
}

impl<T: Coord> Default for Polygon<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Coord> From<Vec<Point<T, 2>>> for Polygon<T> {
    fn from(vertices: Vec<Point<T, 2>>) -> Self {
        Self::new(vertices)
    }
}

impl<T: Coord> FromIterator<Point<T, 2>> for Polygon<T> {
    fn from_iter<I: IntoIterator<Item = Point<T, 2>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Coord> Index<usize> for Polygon<T> {
    type Output = Point<T, 2>;

    fn index(&self, index: usize) -> &Point<T, 2> {
        &self.vertices[index]
    }
}

impl<T: Coord> IndexMut<usize> for Polygon<T> {
    fn index_mut(&mut self, index: usize) -> &mut Point<T, 2> {
        &mut self.vertices[index]
    }
}

impl<T: Coord> fmt::Display for Polygon<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Polygon[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(v, f)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point<f64, 2> {
        Point::new([x, y])
    }

    fn poly(pts: &[(f64, f64)]) -> Polygon<f64> {
        pts.iter().map(|&(x, y)| p(x, y)).collect()
    }

    fn triangle() -> Polygon<f64> {
        poly(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)])
    }

    fn square(x0: f64, y0: f64, side: f64) -> Polygon<f64> {
        poly(&[(x0, y0), (x0 + side, y0), (x0 + side, y0 + side), (x0, y0 + side)])
    }

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> LineSegment<f64, 2> {
        LineSegment::new(p(ax, ay), p(bx, by))
    }

    // ── area ──

    #[test]
    fn triangle_area() {
        assert_relative_eq!(triangle().area(), 6.0);
        assert_relative_eq!(triangle().reversed().area(), -6.0);
        assert!(triangle().is_counter_clockwise());
        assert!(!triangle().reversed().is_counter_clockwise());
    }

    #[test]
    fn degenerate_area_is_zero() {
        assert_abs_diff_eq!(poly(&[(0.0, 0.0), (1.0, 1.0)]).area(), 0.0);
        assert_abs_diff_eq!(Polygon::<f64>::default().area(), 0.0);
    }

    #[test]
    fn perimeter() {
        assert_relative_eq!(square(0.0, 0.0, 2.0).perimeter(), 8.0);
    }

    // ── is_convex ──

    #[test]
    fn triangle_is_convex() {
        assert!(triangle().is_convex());
        assert!(triangle().reversed().is_convex());
    }

    #[test]
    fn micro_scale_triangle() {
        let s = 1e-6;
        let tri = poly(&[(0.0, 0.0), (4.0 * s, 0.0), (2.0 * s, 3.0 * s)]);
        assert_relative_eq!(tri.area(), 6.0 * s * s, max_relative = 1e-9);
        assert!(tri.is_convex());
        assert!(tri.is_inside(&p(2.0 * s, s)));
        assert!(!tri.is_inside(&p(2.0 * s, 4.0 * s)));
    }

    #[test]
    fn loose_tolerance_flattens_shallow_turn() {
        let shallow = poly(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.01),
            (3.0, 0.0),
            (3.0, 1.0),
            (0.0, 1.0),
        ]);
        assert!(!shallow.is_convex());
        assert!(shallow.is_convex_with_tolerance(Tolerance::new(0.1)));
    }

    #[test]
    fn concave_polygon() {
        let l_shape = poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)]);
        assert!(!l_shape.is_convex());
    }

    #[test]
    fn collinear_vertex_keeps_convexity() {
        let pentagon = poly(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        assert!(pentagon.is_convex());
    }

    #[test]
    fn too_few_or_collinear_vertices_are_not_convex() {
        assert!(!poly(&[(0.0, 0.0), (1.0, 0.0)]).is_convex());
        assert!(!poly(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).is_convex());
    }

    // ── is_inside ──

    #[test]
    fn triangle_containment() {
        let tri = triangle();
        assert!(tri.is_inside(&p(2.0, 1.0)));
        assert!(!tri.is_inside(&p(2.0, 4.0)));
        assert!(!tri.is_inside(&p(-1.0, 0.5)));
    }

    #[test]
    fn boundary_counts_as_inside() {
        let tri = triangle();
        assert!(tri.is_inside(&p(2.0, 0.0)));
        assert!(tri.is_inside(&p(4.0, 0.0)));
        assert!(tri.is_inside(&p(1.0, 1.5)));
        assert!(tri.reversed().is_inside(&p(2.0, 0.0)));
    }

    #[test]
    fn wide_boundary_band() {
        let sq = square(0.0, 0.0, 1.0);
        let near = p(0.5, -0.05);
        assert!(!sq.is_inside(&near));
        assert!(sq.is_inside_with_tolerance(&near, Tolerance::new(0.1)));
    }

    #[test]
    fn concave_notch_is_outside() {
        let l_shape = poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)]);
        assert!(l_shape.is_inside(&p(0.5, 1.5)));
        assert!(!l_shape.is_inside(&p(1.5, 1.5)));
    }

    // ── normal ──

    #[test]
    fn triangle_first_normal_points_down() {
        let n = triangle().normal(0).unwrap();
        assert_abs_diff_eq!(n.dx(), 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(n.dy().unwrap(), -1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn normals_point_outward_for_both_windings() {
        for polygon in [triangle(), triangle().reversed(), square(1.0, 1.0, 2.0).reversed()] {
            for i in 0..polygon.len() {
                let n = polygon.normal(i).unwrap();
                assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = TOLERANCE);
                let probe = polygon.edge(i).unwrap().midpoint() + n * 0.01;
                assert!(!polygon.is_inside(&probe), "normal {i} of {polygon} points inward");
            }
        }
    }

    #[test]
    fn normal_index_out_of_range() {
        assert!(triangle().normal(3).unwrap_err().is_index_out_of_range());
    }

    #[test]
    fn normal_of_zero_length_edge_fails() {
        let dup = poly(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert!(dup.normal(0).unwrap_err().is_degenerate());
    }

    // ── intersect_segment ──

    #[test]
    fn segment_reports_first_edge_hit() {
        let hit = triangle().intersect_segment(&seg(-1.0, 1.0, 5.0, 1.0)).unwrap();
        assert_relative_eq!(hit.dx(), 10.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(hit.dy().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn segment_inside_without_crossing_misses() {
        let tri = triangle();
        assert!(!tri.intersects_segment(&seg(1.5, 0.5, 2.5, 0.5)));
        assert!(!tri.intersects_segment(&seg(5.0, 0.0, 6.0, 5.0)));
    }

    // ── intersects ──

    #[test]
    fn crossing_polygons_intersect() {
        let quad = poly(&[(1.0, 1.0), (3.0, 1.0), (3.0, 2.0), (1.0, 2.0)]);
        assert!(triangle().intersects(&quad));
        assert!(quad.intersects(&triangle()));
    }

    #[test]
    fn containment_without_crossing_intersects() {
        let outer = square(0.0, 0.0, 10.0);
        let inner = square(2.0, 2.0, 1.0);
        assert!(!outer.edges().any(|e| inner.intersects_segment(&e)));
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn disjoint_polygons_do_not_intersect() {
        assert!(!square(0.0, 0.0, 1.0).intersects(&square(5.0, 5.0, 1.0)));
        assert!(!triangle().intersects(&Polygon::default()));
    }

    // ── misc ──

    #[test]
    fn queries_are_idempotent() {
        let tri = triangle();
        let q = p(2.0, 1.0);
        assert_eq!(tri.area().to_bits(), tri.area().to_bits());
        assert_eq!(tri.is_convex(), tri.is_convex());
        assert_eq!(tri.is_inside(&q), tri.is_inside(&q));
        assert_eq!(tri.normal(1).unwrap(), tri.normal(1).unwrap());
    }

    #[test]
    fn mutation_is_reflected_by_queries() {
        let mut tri = triangle();
        *tri.vertex_mut(2).unwrap() = p(2.0, 6.0);
        assert_relative_eq!(tri.area(), 12.0);
        tri[2] = p(2.0, 3.0);
        assert_relative_eq!(tri.area(), 6.0);
        assert!(tri.vertex_mut(3).is_err());
        assert!(tri.vertex(7).unwrap_err().is_index_out_of_range());
        assert!(tri.edge(3).is_err());
    }

    #[test]
    fn push_extends_the_loop() {
        let mut tri = poly(&[(0.0, 0.0), (4.0, 0.0)]);
        assert!(!tri.is_convex());
        tri.push(p(2.0, 3.0));
        assert_eq!(tri.len(), 3);
        assert_eq!(tri, triangle());
    }

    #[test]
    fn display() {
        assert_eq!(triangle().to_string(), "Polygon[(0, 0), (4, 0), (2, 3)]");
        assert_eq!(Polygon::<f32>::default().to_string(), "Polygon[]");
    }
}
