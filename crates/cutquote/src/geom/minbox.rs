//! Minimum-area oriented bounding box via rotating calipers.

use nalgebra::Vector2;

use super::vec::{cross, rotate, unit_or_zero};

/// Minimum bounding box of a convex hull.
///
/// `dirs` holds the two caliper directions that produced `width` and
/// `height`; `anchors` holds the four hull indices the calipers were
/// resting on (x-min, x-max, y-min, y-max pairing) when the minimum was
/// recorded. Corner reconstruction from this state is the caller's business.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinBox {
    pub width: f64,
    pub height: f64,
    pub dirs: [Vector2<f64>; 2],
    pub anchors: [usize; 4],
}

impl Default for MinBox {
    /// The zero box: the "no meaningful box" sentinel for degenerate input.
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            dirs: [Vector2::zeros(); 2],
            anchors: [0; 4],
        }
    }
}

impl MinBox {
    /// Enclosed area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Minimum-area oriented bounding box of a convex CCW hull loop.
///
/// Four supporting lines start as the axis-aligned outward normals (down,
/// up, right, left) anchored at the x-min, x-max, y-min, y-max extremes;
/// each step rotates all four forward by the smallest angle that brings one
/// flush with its anchor's outgoing edge, advances the anchors that became
/// flush, and records the width/height pair on strict area improvement. A
/// minimal box always aligns with a hull edge, so the sweep sees the best
/// configuration before the stop anchor comes around. O(h) in the hull size.
///
/// A hull of fewer than 3 points returns `MinBox::default()`: a contract,
/// not a failure.
pub fn minimum_box(hull: &[Vector2<f64>]) -> MinBox {
    let n = hull.len();
    if n < 3 {
        return MinBox::default();
    }

    let mut dirs = [
        Vector2::new(0.0, -1.0),
        Vector2::new(0.0, 1.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(-1.0, 0.0),
    ];
    let mut anchors = [0usize; 4];
    for (i, p) in hull.iter().enumerate() {
        if p.x < hull[anchors[0]].x {
            anchors[0] = i;
        }
        if p.x > hull[anchors[1]].x {
            anchors[1] = i;
        }
        if p.y < hull[anchors[2]].y {
            anchors[2] = i;
        }
        if p.y > hull[anchors[3]].y {
            anchors[3] = i;
        }
    }
    // The sweep is done once the left caliper's anchor reaches the vertex
    // after the x-min caliper's starting anchor.
    let stop = (anchors[0] + 1) % n;

    // The axis-aligned starting configuration is the first candidate.
    let mut best = MinBox {
        width: span(hull, dirs[0], anchors[1], anchors[0]),
        height: span(hull, dirs[2], anchors[3], anchors[2]),
        dirs: [dirs[0], dirs[2]],
        anchors,
    };
    let mut best_area = best.area();

    // Every iteration advances at least one anchor and each anchor wraps
    // around the hull at most once before the stop test fires, so 4n
    // iterations bound the sweep even under numeric noise.
    for _ in 0..4 * n {
        // Smallest rotation bringing any caliper flush with the edge
        // leaving its anchor.
        let mut theta = [0.0f64; 4];
        let mut min_theta = f64::INFINITY;
        for i in 0..4 {
            let next = (anchors[i] + 1) % n;
            let edge = unit_or_zero(hull[next] - hull[anchors[i]]);
            theta[i] = flush_rotation(dirs[i], edge);
            if theta[i] < min_theta {
                min_theta = theta[i];
            }
        }

        for i in 0..4 {
            dirs[i] = rotate(dirs[i], min_theta);
            if theta[i] == min_theta {
                anchors[i] = (anchors[i] + 1) % n;
            }
        }

        let width = span(hull, dirs[0], anchors[1], anchors[0]);
        let height = span(hull, dirs[2], anchors[3], anchors[2]);
        let area = width * height;
        if area < best_area {
            best_area = area;
            best = MinBox {
                width,
                height,
                dirs: [dirs[0], dirs[2]],
                anchors,
            };
        }

        if anchors[3] == stop {
            break;
        }
    }
    best
}

/// Non-negative CCW rotation bringing `dir` flush with the unit `edge`.
///
/// The cross product alone folds past a quarter turn (a triangle can put an
/// anchor's outgoing edge at an obtuse angle to its caliper), so the dot
/// product selects the correct half-plane and any remaining negative result
/// wraps forward by a full turn. The cross product is clamped before `asin`:
/// floating error can push the product of two unit vectors just outside
/// [-1, 1].
#[inline]
fn flush_rotation(dir: Vector2<f64>, edge: Vector2<f64>) -> f64 {
    use std::f64::consts::PI;
    let t = cross(dir, edge).clamp(-1.0, 1.0).asin();
    let t = if dir.dot(&edge) < 0.0 { PI - t } else { t };
    if t < 0.0 {
        t + 2.0 * PI
    } else {
        t
    }
}

/// Extent of the anchor pair measured across the caliper direction.
#[inline]
fn span(hull: &[Vector2<f64>], dir: Vector2<f64>, hi: usize, lo: usize) -> f64 {
    cross(dir, hull[hi] - hull[lo]).abs()
}
