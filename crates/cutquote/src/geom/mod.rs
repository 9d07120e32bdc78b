//! 2D geometry for cut profiles.
//!
//! Purpose
//! - Point algebra on `nalgebra::Vector2<f64>` (`vec`), segment/arc curve
//!   primitives over an external point arena (`curve`), monotone-chain
//!   convex hulls (`hull`), and rotating-calipers minimum boxes (`minbox`).
//! - Keep the API minimal and numerically explicit: precondition violations
//!   degrade to defined sentinel values (zero lengths, zero boxes) instead
//!   of panicking mid-computation.
//!
//! Scope
//! - Hull and bounding box of a point cloud only; no intersections, no
//!   boolean ops, no 3D.

pub mod curve;
pub mod hull;
pub mod minbox;
pub mod rand;
pub mod vec;

pub use curve::{Arc, Curve, PointId, Segment};
pub use hull::convex_hull;
pub use minbox::{minimum_box, MinBox};

#[cfg(test)]
mod tests;
