use super::{cross_2d, Coord, Tolerance, Vector2};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d<T: Coord>(points: &[Vector2<T>]) -> T {
    let n = points.len();
    if n < 3 {
        return T::zero();
    }
    let mut sum = T::zero();
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * nalgebra::convert::<f64, T>(0.5)
}

/// Cross product of the edges `a -> b` and `b -> c`.
///
/// Positive for a left (counter-clockwise) turn at `b`.
#[inline]
#[must_use]
pub fn turn_2d<T: Coord>(a: &Vector2<T>, b: &Vector2<T>, c: &Vector2<T>) -> T {
    cross_2d(&(b - a), &(c - b))
}

/// Convexity test over every consecutive edge pair of a closed loop.
///
/// Turns whose cross product is within tolerance are collinear and ignored.
/// Returns `false` for fewer than 3 points and for loops without any real turn.
#[must_use]
pub fn is_convex_2d<T: Coord>(points: &[Vector2<T>], tol: Tolerance) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut positive = false;
    let mut negative = false;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let c = &points[(i + 2) % n];
        let cross = turn_2d(a, b, c);
        let eps = tol.scaled((b - a).norm() * (c - b).norm());
        if cross > eps {
            positive = true;
        } else if cross < -eps {
            negative = true;
        }
        if positive && negative {
            return false;
        }
    }
    positive || negative
}

/// Returns the minimum distance from `p` to the segment `a -> b`.
#[must_use]
pub fn point_to_segment_dist<T: Coord>(p: &Vector2<T>, a: &Vector2<T>, b: &Vector2<T>) -> T {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq == T::zero() {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(T::zero(), T::one());
    (p - (a + d * t)).norm()
}

/// Returns `true` if `p` lies within tolerance of any edge of the closed loop.
///
/// The tolerance for each edge is relative to that edge's length.
#[must_use]
pub fn point_on_boundary_2d<T: Coord>(p: &Vector2<T>, points: &[Vector2<T>], tol: Tolerance) -> bool {
    let n = points.len();
    (0..n).any(|i| {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        point_to_segment_dist(p, a, b) <= tol.scaled((b - a).norm())
    })
}

/// Even-odd crossing test with a ray cast toward `+x`.
///
/// Edge endpoints use the half-open rule (`y0 <= py < y1` or `y1 <= py < y0`)
/// so a vertex shared by two edges is counted once. Points exactly on the
/// boundary get an arbitrary but deterministic answer; see [`point_in_polygon_2d`].
#[must_use]
pub fn crossing_number_2d<T: Coord>(p: &Vector2<T>, points: &[Vector2<T>]) -> bool {
    let n = points.len();
    let mut inside = false;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Point-in-polygon test. Returns `true` if the point is inside or on the boundary.
#[must_use]
pub fn point_in_polygon_2d<T: Coord>(p: &Vector2<T>, points: &[Vector2<T>], tol: Tolerance) -> bool {
    if points.len() < 3 {
        return false;
    }
    point_on_boundary_2d(p, points, tol) || crossing_number_2d(p, points)
}

/// Returns the left-pointing perpendicular, `(-y, x)`.
#[inline]
#[must_use]
pub fn left_normal<T: Coord>(dir: &Vector2<T>) -> Vector2<T> {
    Vector2::new(-dir.y, dir.x)
}

/// Returns the right-pointing perpendicular, `(y, -x)`.
#[inline]
#[must_use]
pub fn right_normal<T: Coord>(dir: &Vector2<T>) -> Vector2<T> {
    Vector2::new(dir.y, -dir.x)
}
