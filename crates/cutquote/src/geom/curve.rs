//! Segment and arc curve primitives.
//!
//! Points are owned by an external arena (a `&[Vector2<f64>]` slice, e.g.
//! `Profile`) and curves hold indices into it, so several curves can share a
//! vertex without ownership cycles. A curve whose endpoint ids do not
//! resolve in the arena is malformed: lengths degrade to `0.0` and
//! discretization to an empty sequence rather than reading out of bounds.

use nalgebra::Vector2;

use super::vec::{angle_between, angle_of, dist, from_polar_about};

/// Index into an external point arena.
pub type PointId = usize;

/// Straight edge between two arena points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub ends: [PointId; 2],
}

/// Circular arc between two arena points, with an explicit center.
///
/// Invariant (assumed, not enforced): both endpoints are equidistant from
/// `center`; that distance is the radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub ends: [PointId; 2],
    pub center: Vector2<f64>,
    /// Does the arc run clockwise from the first endpoint?
    pub clockwise: bool,
}

/// Closed curve variant; dispatch is pattern-matched and exhaustive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    Segment(Segment),
    Arc(Arc),
}

#[inline]
fn resolve_ends(
    ends: [PointId; 2],
    pts: &[Vector2<f64>],
) -> Option<(Vector2<f64>, Vector2<f64>)> {
    Some((*pts.get(ends[0])?, *pts.get(ends[1])?))
}

impl Segment {
    /// Both endpoint ids resolve in the arena.
    #[inline]
    pub fn is_bound(&self, pts: &[Vector2<f64>]) -> bool {
        resolve_ends(self.ends, pts).is_some()
    }

    /// Euclidean distance between the endpoints; 0 when malformed.
    pub fn length(&self, pts: &[Vector2<f64>]) -> f64 {
        match resolve_ends(self.ends, pts) {
            Some((a, b)) => dist(a, b),
            None => 0.0,
        }
    }
}

impl Arc {
    /// Both endpoint ids resolve in the arena.
    #[inline]
    pub fn is_bound(&self, pts: &[Vector2<f64>]) -> bool {
        resolve_ends(self.ends, pts).is_some()
    }

    /// Distance from the first endpoint to the center; 0 when malformed.
    pub fn radius(&self, pts: &[Vector2<f64>]) -> f64 {
        match pts.get(self.ends[0]) {
            Some(p0) => dist(*p0, self.center),
            None => 0.0,
        }
    }

    /// Signed sweep angle of the arc, nominally in [-2pi, 2pi].
    ///
    /// The raw angle between (p0 - center) and (p1 - center) lands in
    /// (-pi, pi]; negative values are normalized with `pi + (pi - t)`, and
    /// a clockwise arc sweeps the complement, `-(2pi - t)`. The negative
    /// branch is deliberately `pi + (pi - t)` and not `2pi + t`; the two are
    /// not interchangeable, and downstream callers depend on this exact
    /// form.
    pub fn sweep(&self, pts: &[Vector2<f64>]) -> f64 {
        use std::f64::consts::PI;
        let Some((p0, p1)) = resolve_ends(self.ends, pts) else {
            return 0.0;
        };
        let t = angle_between(p0 - self.center, p1 - self.center);
        let t = if t >= 0.0 { t } else { PI + (PI - t) };
        if self.clockwise {
            -(2.0 * PI - t)
        } else {
            t
        }
    }

    /// Arc length: radius times absolute sweep; 0 when malformed.
    pub fn length(&self, pts: &[Vector2<f64>]) -> f64 {
        self.radius(pts) * self.sweep(pts).abs()
    }

    /// Discretize into `resolution` points along the sweep.
    ///
    /// Emits points at fractional progress `i / resolution` for
    /// `i in [0, resolution)`: the first point coincides with the first
    /// endpoint (given the radius invariant), and the far endpoint at
    /// progress 1 is never emitted. Empty when malformed.
    pub fn discretize(&self, pts: &[Vector2<f64>], resolution: usize) -> Vec<Vector2<f64>> {
        let Some((p0, _)) = resolve_ends(self.ends, pts) else {
            return Vec::new();
        };
        let sweep = self.sweep(pts);
        let start = angle_of(p0 - self.center);
        let r = self.radius(pts);
        (0..resolution)
            .map(|i| {
                let u = i as f64 / resolution as f64;
                from_polar_about(self.center, start + sweep * u, r)
            })
            .collect()
    }
}

impl Curve {
    /// Both endpoint ids resolve in the arena.
    #[inline]
    pub fn is_bound(&self, pts: &[Vector2<f64>]) -> bool {
        match self {
            Curve::Segment(s) => s.is_bound(pts),
            Curve::Arc(a) => a.is_bound(pts),
        }
    }

    /// Curve length in the arena's linear units; 0 when malformed.
    pub fn length(&self, pts: &[Vector2<f64>]) -> f64 {
        match self {
            Curve::Segment(s) => s.length(pts),
            Curve::Arc(a) => a.length(pts),
        }
    }
}
