//! Geometry core for quoting 2D cut profiles.
//!
//! A profile is a set of vertices connected by line segments and circular
//! arcs. The pipeline runs curve descriptors → discretized point cloud →
//! convex hull (monotone chain) → minimum-area bounding box (rotating
//! calipers); `estimate` turns lengths and box area into machine time and
//! dollars.
//!
//! All computations are pure, synchronous functions of their inputs:
//! independent profiles can be evaluated in parallel by the caller, but a
//! single hull or calipers run is sequentially data-dependent throughout.

pub mod estimate;
pub mod geom;
pub mod profile;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::estimate::{arc_velocity, area, cost, seconds, MachineCfg};
    pub use crate::geom::curve::{Arc, Curve, PointId, Segment};
    pub use crate::geom::hull::convex_hull;
    pub use crate::geom::minbox::{minimum_box, MinBox};
    pub use crate::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::profile::Profile;
    pub use nalgebra::Vector2 as Vec2;
}
