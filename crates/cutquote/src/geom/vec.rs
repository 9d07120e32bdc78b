//! Point algebra on `Vector2<f64>`.
//!
//! Free functions rather than a wrapper type: everything downstream (curves,
//! hull, calipers) works on plain nalgebra vectors. All angles are radians;
//! signed angles are in (-pi, pi]. The only guarded input is the zero
//! vector, which `unit_or_zero` maps to zero instead of NaN.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// Scalar 2D cross product `a.x*b.y - a.y*b.x`.
///
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Euclidean distance.
#[inline]
pub fn dist(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Unit vector, or the zero vector when `v` has zero norm.
#[inline]
pub fn unit_or_zero(v: Vector2<f64>) -> Vector2<f64> {
    let n = v.norm();
    if n != 0.0 {
        v / n
    } else {
        Vector2::zeros()
    }
}

/// Signed angle of `v` from the positive x-axis, in (-pi, pi].
#[inline]
pub fn angle_of(v: Vector2<f64>) -> f64 {
    v.y.atan2(v.x)
}

/// Signed angle from `a` to `b`, in (-pi, pi].
///
/// Computed from the cross and dot products of the unit vectors.
#[inline]
pub fn angle_between(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ua = unit_or_zero(a);
    let ub = unit_or_zero(b);
    cross(ua, ub).atan2(ua.dot(&ub))
}

/// Point at `theta` radians and distance `r` from the origin.
#[inline]
pub fn from_polar(theta: f64, r: f64) -> Vector2<f64> {
    Vector2::new(theta.cos() * r, theta.sin() * r)
}

/// Point at `theta` radians and distance `r` from `center`.
#[inline]
pub fn from_polar_about(center: Vector2<f64>, theta: f64, r: f64) -> Vector2<f64> {
    center + from_polar(theta, r)
}

/// Rotate `v` by `theta` radians about the origin.
///
/// Reconstructed via polar form: `from_polar(angle_of(v) + theta, |v|)`.
#[inline]
pub fn rotate(v: Vector2<f64>, theta: f64) -> Vector2<f64> {
    from_polar(angle_of(v) + theta, v.norm())
}

/// Total order for sorting: lexicographic by x, then y.
#[inline]
pub fn lex_cmp(a: Vector2<f64>, b: Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}
