//! Cut profile: point arena plus the curves that reference it.
//!
//! The profile owns the vertices; curves hold `PointId` indices into the
//! arena, so shared vertices are shared by index rather than by pointer.
//! Points are immutable for the duration of a computation and every
//! operation returns freshly constructed values.

use nalgebra::Vector2;

use crate::geom::curve::{Curve, PointId};
use crate::geom::hull::convex_hull;
use crate::geom::minbox::{minimum_box, MinBox};

/// A 2D cut profile: vertices and the segments/arcs connecting them.
#[derive(Clone, Debug, Default)]
pub struct Profile {
    points: Vec<Vector2<f64>>,
    curves: Vec<Curve>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex to the arena, returning its id.
    pub fn push_point(&mut self, p: Vector2<f64>) -> PointId {
        self.points.push(p);
        self.points.len() - 1
    }

    pub fn push_curve(&mut self, curve: Curve) {
        self.curves.push(curve);
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    #[inline]
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Flattened point cloud: raw vertices plus every arc's discretization.
    ///
    /// Segments contribute no interior points; their endpoints are already
    /// in the arena.
    pub fn point_cloud(&self, resolution: usize) -> Vec<Vector2<f64>> {
        let mut cloud = self.points.clone();
        for curve in &self.curves {
            if let Curve::Arc(arc) = curve {
                cloud.extend(arc.discretize(&self.points, resolution));
            }
        }
        cloud
    }

    /// Total length of all curves; malformed curves contribute 0.
    pub fn cut_length(&self) -> f64 {
        self.curves.iter().map(|c| c.length(&self.points)).sum()
    }

    /// Minimum-area oriented bounding box of the discretized profile.
    ///
    /// The full pipeline: point cloud → convex hull → rotating calipers.
    /// Degenerate profiles yield the zero box.
    pub fn bounding_box(&self, resolution: usize) -> MinBox {
        minimum_box(&convex_hull(&self.point_cloud(resolution)))
    }
}
