use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::Vector2;
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};

use super::curve::{Arc, Curve, Segment};
use super::hull::convex_hull;
use super::minbox::{minimum_box, MinBox};
use super::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use super::vec::{angle_between, angle_of, cross, dist, from_polar_about, rotate, unit_or_zero};

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

// ---------------------------------------------------------------- point algebra

#[test]
fn unit_of_zero_vector_is_zero() {
    let u = unit_or_zero(v(0.0, 0.0));
    assert_eq!(u, v(0.0, 0.0));
    assert!(u.x.is_finite() && u.y.is_finite());
}

#[test]
fn rotate_quarter_turn() {
    let r = rotate(v(2.0, 0.0), FRAC_PI_2);
    assert!(dist(r, v(0.0, 2.0)) < 1e-12);
    // Rotation preserves the norm.
    let w = rotate(v(3.0, -4.0), 1.234);
    assert!((w.norm() - 5.0).abs() < 1e-12);
}

#[test]
fn signed_angles() {
    assert!((angle_of(v(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
    assert!((angle_of(v(-1.0, 0.0)) - PI).abs() < 1e-12);
    assert!((angle_between(v(1.0, 0.0), v(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
    assert!((angle_between(v(0.0, 1.0), v(1.0, 0.0)) + FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn polar_construction_about_center() {
    let p = from_polar_about(v(1.0, 1.0), FRAC_PI_2, 2.0);
    assert!(dist(p, v(1.0, 3.0)) < 1e-12);
}

// --------------------------------------------------------------------- curves

fn quarter_arc() -> (Vec<Vector2<f64>>, Arc) {
    let pts = vec![v(1.0, 0.0), v(0.0, 1.0)];
    let arc = Arc {
        ends: [0, 1],
        center: v(0.0, 0.0),
        clockwise: false,
    };
    (pts, arc)
}

#[test]
fn quarter_arc_sweep_and_length() {
    let (pts, arc) = quarter_arc();
    assert!((arc.radius(&pts) - 1.0).abs() < 1e-12);
    assert!((arc.sweep(&pts) - FRAC_PI_2).abs() < 1e-12);
    assert!((arc.length(&pts) - 1.5708).abs() < 1e-4);
}

#[test]
fn quarter_arc_discretization_is_half_open() {
    let (pts, arc) = quarter_arc();
    let samples = arc.discretize(&pts, 4);
    assert_eq!(samples.len(), 4);
    assert!(dist(samples[0], v(1.0, 0.0)) < 1e-12);
    // Strictly increasing angle, true endpoint never emitted.
    for pair in samples.windows(2) {
        assert!(angle_of(pair[1]) > angle_of(pair[0]));
    }
    for s in &samples {
        assert!(dist(*s, v(0.0, 1.0)) > 1e-6);
    }
}

#[test]
fn clockwise_arc_sweeps_the_complement() {
    let (pts, mut arc) = quarter_arc();
    arc.clockwise = true;
    // Clockwise from (1,0) to (0,1) takes the long way round.
    assert!((arc.sweep(&pts) + 3.0 * FRAC_PI_2).abs() < 1e-12);
    assert!((arc.length(&pts) - 3.0 * FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn negative_raw_angle_uses_the_pinned_normalization() {
    // Raw angle from (1,0) to (0,-1) is -pi/2; the negative branch maps it
    // through pi + (pi - t) = 2pi - t, not 2pi + t.
    let pts = vec![v(1.0, 0.0), v(0.0, -1.0)];
    let ccw = Arc {
        ends: [0, 1],
        center: v(0.0, 0.0),
        clockwise: false,
    };
    assert!((ccw.sweep(&pts) - 5.0 * FRAC_PI_2).abs() < 1e-12);
    let cw = Arc { clockwise: true, ..ccw };
    assert!((cw.sweep(&pts) - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn segment_length_and_dispatch() {
    let pts = vec![v(0.0, 0.0), v(3.0, 4.0)];
    let seg = Curve::Segment(Segment { ends: [0, 1] });
    assert!((seg.length(&pts) - 5.0).abs() < 1e-12);
}

#[test]
fn malformed_curves_degrade_to_zero() {
    let pts = vec![v(0.0, 0.0)];
    let seg = Segment { ends: [0, 7] };
    assert!(!seg.is_bound(&pts));
    assert_eq!(seg.length(&pts), 0.0);
    let arc = Arc {
        ends: [0, 7],
        center: v(0.0, 0.0),
        clockwise: false,
    };
    assert_eq!(arc.length(&pts), 0.0);
    assert!(arc.discretize(&pts, 8).is_empty());
}

// ----------------------------------------------------------------- convex hull

#[test]
fn square_hull_keeps_all_corners() {
    let pts = vec![
        v(0.0, 0.0),
        v(10.0, 0.0),
        v(10.0, 10.0),
        v(0.0, 10.0),
        v(5.0, 5.0), // interior
    ];
    let hull = convex_hull(&pts);
    assert_eq!(hull.len(), 4);
    for corner in &pts[..4] {
        assert!(hull.contains(corner));
    }
    assert!(!hull.contains(&v(5.0, 5.0)));
}

#[test]
fn hull_drops_collinear_middles() {
    let pts = vec![v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0)];
    let hull = convex_hull(&pts);
    assert_eq!(hull, vec![v(0.0, 0.0), v(2.0, 0.0)]);
}

#[test]
fn hull_is_invariant_under_shuffle() {
    let mut rng = StdRng::seed_from_u64(7);
    for index in 0..20 {
        let base = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed: 3, index });
        let reference = convex_hull(&base);
        let mut shuffled = base.clone();
        shuffled.shuffle(&mut rng);
        assert_eq!(convex_hull(&shuffled), reference);
    }
}

#[test]
fn hull_is_idempotent() {
    let pts = vec![
        v(0.0, 0.0),
        v(4.0, 1.0),
        v(5.0, 5.0),
        v(1.0, 4.0),
        v(2.0, 2.0),
        v(3.0, 1.0),
    ];
    let h1 = convex_hull(&pts);
    let h2 = convex_hull(&h1);
    assert_eq!(h1, h2);
}

/// All of `pts` on or inside the CCW loop, within slack.
fn hull_covers(hull: &[Vector2<f64>], pts: &[Vector2<f64>], eps: f64) -> bool {
    let n = hull.len();
    pts.iter().all(|p| {
        (0..n).all(|i| {
            let a = hull[i];
            let b = hull[(i + 1) % n];
            cross(b - a, *p - a) >= -eps
        })
    })
}

// ------------------------------------------------------------ minimum bounding box

#[test]
fn square_box_is_ten_by_ten() {
    let pts = vec![v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)];
    let hull = convex_hull(&pts);
    assert_eq!(hull.len(), 4);
    let b = minimum_box(&hull);
    assert!((b.width - 10.0).abs() < 1e-9);
    assert!((b.height - 10.0).abs() < 1e-9);
    assert!((b.area() - 100.0).abs() < 1e-9);
}

#[test]
fn degenerate_hull_yields_zero_box() {
    let hull = convex_hull(&[v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0)]);
    assert!(hull.len() < 3);
    assert_eq!(minimum_box(&hull), MinBox::default());
    assert_eq!(minimum_box(&[]), MinBox::default());
}

#[test]
fn tilted_rectangle_recovers_true_dimensions() {
    // A 4x2 rectangle rotated by 30 degrees; the minimal box must undo the tilt.
    let theta = PI / 6.0;
    let corners = [v(0.0, 0.0), v(4.0, 0.0), v(4.0, 2.0), v(0.0, 2.0)];
    let pts: Vec<_> = corners.iter().map(|p| rotate(*p, theta)).collect();
    let b = minimum_box(&convex_hull(&pts));
    let (lo, hi) = if b.width < b.height {
        (b.width, b.height)
    } else {
        (b.height, b.width)
    };
    assert!((lo - 2.0).abs() < 1e-9);
    assert!((hi - 4.0).abs() < 1e-9);
}

/// Smallest area over boxes aligned with each hull edge (brute force).
fn best_edge_aligned_area(hull: &[Vector2<f64>]) -> f64 {
    let n = hull.len();
    let mut best = f64::INFINITY;
    for i in 0..n {
        let d = unit_or_zero(hull[(i + 1) % n] - hull[i]);
        let m = v(-d.y, d.x);
        let (mut lo_d, mut hi_d) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut lo_m, mut hi_m) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in hull {
            let a = d.dot(p);
            let b = m.dot(p);
            lo_d = lo_d.min(a);
            hi_d = hi_d.max(a);
            lo_m = lo_m.min(b);
            hi_m = hi_m.max(b);
        }
        best = best.min((hi_d - lo_d) * (hi_m - lo_m));
    }
    best
}

#[test]
fn calipers_match_edge_aligned_brute_force() {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 24 },
        ..RadialCfg::default()
    };
    for index in 0..50 {
        let hull = draw_polygon_radial(cfg, ReplayToken { seed: 11, index });
        let b = minimum_box(&hull);
        let brute = best_edge_aligned_area(&hull);
        // No edge-aligned box beats the calipers result.
        assert!(
            brute >= b.area() - 1e-6,
            "index {index}: brute {brute} < calipers {}",
            b.area()
        );
        // And the calipers result is itself achieved by some edge alignment.
        assert!(
            b.area() <= brute + 1e-6,
            "index {index}: calipers {} > brute {brute}",
            b.area()
        );
    }
}

#[test]
fn obtuse_flush_angle_triangle_terminates() {
    // On a triangle an anchor's outgoing edge can sit at an obtuse angle to
    // its caliper; the flush rotation must still come out non-negative or
    // the sweep walks backwards and never reaches its stop anchor. This
    // triangle exercises that configuration.
    let hull = convex_hull(&[
        v(-0.898, -0.103),
        v(-0.032, -0.768),
        v(0.816, 0.246),
    ]);
    assert_eq!(hull.len(), 3);
    let b = minimum_box(&hull);
    assert!(b.width > 0.0 && b.height > 0.0);
    let brute = best_edge_aligned_area(&hull);
    assert!((b.area() - brute).abs() < 1e-6);
}

#[test]
fn sampled_triangles_match_edge_aligned_brute_force() {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(3),
        ..RadialCfg::default()
    };
    for index in 0..120 {
        let hull = draw_polygon_radial(cfg, ReplayToken { seed: 99, index });
        if hull.len() < 3 {
            continue;
        }
        let b = minimum_box(&hull);
        let brute = best_edge_aligned_area(&hull);
        assert!(
            (b.area() - brute).abs() < 1e-6,
            "index {index}: calipers {} vs brute {brute}",
            b.area()
        );
    }
}

#[test]
fn box_anchors_index_into_the_hull() {
    let hull = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed: 5, index: 0 });
    let b = minimum_box(&hull);
    for idx in b.anchors {
        assert!(idx < hull.len());
    }
    // The recorded caliper directions are unit length.
    assert!((b.dirs[0].norm() - 1.0).abs() < 1e-9);
    assert!((b.dirs[1].norm() - 1.0).abs() < 1e-9);
}

// ------------------------------------------------------------------ properties

proptest! {
    #[test]
    fn hull_points_come_from_the_input(
        raw in prop::collection::vec((-50.0..50.0f64, -50.0..50.0f64), 1..40)
    ) {
        let pts: Vec<_> = raw.iter().map(|&(x, y)| v(x, y)).collect();
        let hull = convex_hull(&pts);
        for h in &hull {
            prop_assert!(pts.contains(h));
        }
    }

    #[test]
    fn hull_covers_every_input_point(
        raw in prop::collection::vec((-50.0..50.0f64, -50.0..50.0f64), 3..40)
    ) {
        let pts: Vec<_> = raw.iter().map(|&(x, y)| v(x, y)).collect();
        let hull = convex_hull(&pts);
        if hull.len() >= 3 {
            prop_assert!(hull_covers(&hull, &pts, 1e-9));
        }
    }

    #[test]
    fn hull_idempotent_on_arbitrary_input(
        raw in prop::collection::vec((-50.0..50.0f64, -50.0..50.0f64), 1..40)
    ) {
        let pts: Vec<_> = raw.iter().map(|&(x, y)| v(x, y)).collect();
        let h1 = convex_hull(&pts);
        prop_assert_eq!(convex_hull(&h1), h1);
    }

    #[test]
    fn box_no_larger_than_axis_aligned(
        raw in prop::collection::vec((-50.0..50.0f64, -50.0..50.0f64), 3..40)
    ) {
        let pts: Vec<_> = raw.iter().map(|&(x, y)| v(x, y)).collect();
        let hull = convex_hull(&pts);
        if hull.len() >= 3 {
            let b = minimum_box(&hull);
            // The oriented minimum is never larger than the axis-aligned box.
            let (mut lo_x, mut hi_x) = (f64::INFINITY, f64::NEG_INFINITY);
            let (mut lo_y, mut hi_y) = (f64::INFINITY, f64::NEG_INFINITY);
            for p in &hull {
                lo_x = lo_x.min(p.x);
                hi_x = hi_x.max(p.x);
                lo_y = lo_y.min(p.y);
                hi_y = hi_y.max(p.y);
            }
            prop_assert!(b.area() <= (hi_x - lo_x) * (hi_y - lo_y) + 1e-6);
            prop_assert!(b.width >= 0.0 && b.height >= 0.0);
        }
    }
}
