use super::{cross_2d, Coord, Tolerance, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + s * d2`, returns `(t, s)` if not parallel.
/// The lines count as parallel when `|d1 x d2| <= epsilon * |d1| * |d2|`, which
/// also covers a zero-length direction.
#[must_use]
pub fn line_line_intersect_2d<T: Coord>(
    p1: &Vector2<T>,
    d1: &Vector2<T>,
    p2: &Vector2<T>,
    d2: &Vector2<T>,
    tol: Tolerance,
) -> Option<(T, T)> {
    let denom = cross_2d(d1, d2);
    if denom.abs() <= tol.scaled(d1.norm() * d2.norm()) {
        return None;
    }
    let d = p2 - p1;
    let t = cross_2d(&d, d2) / denom;
    let s = cross_2d(&d, d1) / denom;
    Some((t, s))
}

/// Closed unit interval test, `0 <= t <= 1`.
#[inline]
#[must_use]
pub fn in_unit_interval<T: Coord>(t: T) -> bool {
    t >= T::zero() && t <= T::one()
}

/// Forward half-line test, `t >= 0`.
#[inline]
#[must_use]
pub fn is_forward<T: Coord>(t: T) -> bool {
    t >= T::zero()
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, s)` where `t` and `s` are in `[0, 1]`.
/// Touching at an endpoint counts as a hit; collinear overlap never does.
#[must_use]
pub fn segment_segment_intersect_2d<T: Coord>(
    a0: &Vector2<T>,
    a1: &Vector2<T>,
    b0: &Vector2<T>,
    b1: &Vector2<T>,
    tol: Tolerance,
) -> Option<(Vector2<T>, T, T)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, s) = line_line_intersect_2d(a0, &da, b0, &db, tol)?;
    if in_unit_interval(t) && in_unit_interval(s) {
        Some((point_at(a0, &da, t), t, s))
    } else {
        None
    }
}

/// Ray-ray intersection in 2D. Returns `(t, s)` with both parameters non-negative.
#[must_use]
pub fn ray_ray_intersect_2d<T: Coord>(
    o1: &Vector2<T>,
    d1: &Vector2<T>,
    o2: &Vector2<T>,
    d2: &Vector2<T>,
    tol: Tolerance,
) -> Option<(T, T)> {
    let (t, s) = line_line_intersect_2d(o1, d1, o2, d2, tol)?;
    (is_forward(t) && is_forward(s)).then_some((t, s))
}

/// Ray-segment intersection in 2D.
///
/// Returns `(t, s)` where `t >= 0` is the ray parameter and `s` in `[0, 1]` the segment one.
#[must_use]
pub fn ray_segment_intersect_2d<T: Coord>(
    origin: &Vector2<T>,
    dir: &Vector2<T>,
    b0: &Vector2<T>,
    b1: &Vector2<T>,
    tol: Tolerance,
) -> Option<(T, T)> {
    let db = b1 - b0;
    let (t, s) = line_line_intersect_2d(origin, dir, b0, &db, tol)?;
    (is_forward(t) && in_unit_interval(s)).then_some((t, s))
}

/// Linear interpolation: `origin + dir * t`.
#[inline]
#[must_use]
pub fn point_at<T: Coord>(origin: &Vector2<T>, dir: &Vector2<T>, t: T) -> Vector2<T> {
    origin + dir * t
}
