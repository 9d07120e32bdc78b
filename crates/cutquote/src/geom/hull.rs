//! Convex hull via Andrew's monotone chain.

use nalgebra::Vector2;

use super::vec::{cross, lex_cmp};

/// Convex hull of an unordered point cloud (monotone chain).
///
/// Returns an ordered, closed CCW loop of points; the first point is not
/// repeated at the end, and consecutive points make strictly left turns
/// (the `<= 0` pop test silently drops exactly-collinear middle points,
/// which is intentional). Duplicates in the input are tolerated.
///
/// O(n log n), dominated by the sort. The caller must supply at least one
/// point; degenerate inputs (fewer than 3 distinct, non-collinear points)
/// yield a loop of fewer than 3 points, which the bounding-box stage maps
/// to a zero box.
pub fn convex_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| lex_cmp(*a, *b));

    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && turns_right(&lower, p) {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && turns_right(&upper, p) {
            upper.pop();
        }
        upper.push(p);
    }

    // Each chain's last point duplicates the other chain's first.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Would appending `p` make the chain turn right (or go straight)?
#[inline]
fn turns_right(chain: &[Vector2<f64>], p: Vector2<f64>) -> bool {
    let a = chain[chain.len() - 2];
    let b = chain[chain.len() - 1];
    cross(b - a, p - a) <= 0.0
}
