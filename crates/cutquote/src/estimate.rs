//! Machine time and cost estimation for a profile.
//!
//! The geometry core stays free of domain constants: everything the
//! estimator needs (cutter velocity, rates, material padding) lives in an
//! explicit `MachineCfg` supplied by the caller.

use crate::geom::curve::Curve;
use crate::profile::Profile;

/// Machine and material parameters, in inches / seconds / dollars.
#[derive(Clone, Copy, Debug)]
pub struct MachineCfg {
    /// Maximum cutter velocity in inches per second.
    pub max_velocity: f64,
    pub cost_per_second: f64,
    pub cost_per_area: f64,
    /// Padding added to the bounding box width and height.
    pub padding: f64,
}

impl Default for MachineCfg {
    fn default() -> Self {
        Self {
            max_velocity: 0.5,
            cost_per_second: 0.07,
            cost_per_area: 0.75,
            padding: 0.1,
        }
    }
}

/// Cutter velocity through an arc: the tighter the radius, the slower the
/// cut, weighted by `exp(-1/radius)`.
#[inline]
pub fn arc_velocity(cfg: &MachineCfg, radius: f64) -> f64 {
    cfg.max_velocity * (-(1.0 / radius)).exp()
}

/// Seconds to machine the profile.
///
/// Straight cuts run at full velocity; arcs at the radius-weighted
/// velocity. A malformed curve (unresolved endpoint) zeroes the whole
/// estimate, matching the curve model's defined fallback.
pub fn seconds(profile: &Profile, cfg: &MachineCfg) -> f64 {
    let pts = profile.points();
    let mut secs = 0.0;
    for curve in profile.curves() {
        if !curve.is_bound(pts) {
            return 0.0;
        }
        match curve {
            Curve::Segment(s) => secs += s.length(pts) / cfg.max_velocity,
            Curve::Arc(a) => {
                // A zero-radius arc has zero length and zero velocity; skip
                // it instead of folding 0/0 into the sum.
                let radius = a.radius(pts);
                if radius > 0.0 {
                    secs += a.length(pts) / arc_velocity(cfg, radius);
                }
            }
        }
    }
    secs
}

/// Padded stock area for the profile, in square inches.
pub fn area(profile: &Profile, cfg: &MachineCfg, resolution: usize) -> f64 {
    let b = profile.bounding_box(resolution);
    (b.width + cfg.padding) * (b.height + cfg.padding)
}

/// Estimated cost in dollars: machine time plus material.
pub fn cost(profile: &Profile, cfg: &MachineCfg, resolution: usize) -> f64 {
    seconds(profile, cfg) * cfg.cost_per_second + area(profile, cfg, resolution) * cfg.cost_per_area
}
