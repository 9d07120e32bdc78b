//! Quote a couple of hand-built profiles for quick visual sanity.
//!
//! Usage:
//!   cargo run -p cutquote --example profile_quote

use cutquote::prelude::*;

fn main() {
    let rect = rectangle(2.0, 1.0);
    report("2x1 rectangle", &rect);

    let rounded = rounded_tab(2.0, 1.0);
    report("2x1 tab with a rounded end", &rounded);
}

fn report(name: &str, profile: &Profile) {
    let cfg = MachineCfg::default();
    let res = 100;
    let b = profile.bounding_box(res);
    println!(
        "{name}: cut length {:.3} in, box {:.3} x {:.3} in, {:.1} s, ${:.2}",
        profile.cut_length(),
        b.width,
        b.height,
        seconds(profile, &cfg),
        cost(profile, &cfg, res),
    );
}

fn rectangle(w: f64, h: f64) -> Profile {
    let mut p = Profile::new();
    let ids = [
        p.push_point(Vec2::new(0.0, 0.0)),
        p.push_point(Vec2::new(w, 0.0)),
        p.push_point(Vec2::new(w, h)),
        p.push_point(Vec2::new(0.0, h)),
    ];
    for k in 0..4 {
        p.push_curve(Curve::Segment(Segment {
            ends: [ids[k], ids[(k + 1) % 4]],
        }));
    }
    p
}

/// Rectangle whose right edge is replaced by a semicircular bulge.
fn rounded_tab(w: f64, h: f64) -> Profile {
    let mut p = Profile::new();
    let a = p.push_point(Vec2::new(0.0, 0.0));
    let b = p.push_point(Vec2::new(w, 0.0));
    let c = p.push_point(Vec2::new(w, h));
    let d = p.push_point(Vec2::new(0.0, h));
    p.push_curve(Curve::Segment(Segment { ends: [a, b] }));
    p.push_curve(Curve::Arc(Arc {
        ends: [b, c],
        center: Vec2::new(w, h / 2.0),
        clockwise: false,
    }));
    p.push_curve(Curve::Segment(Segment { ends: [c, d] }));
    p.push_curve(Curve::Segment(Segment { ends: [d, a] }));
    p
}
