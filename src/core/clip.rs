//! Great-circle resampling and hemisphere clipping in view space.
//!
//! Rings arrive as view-space unit vectors (+x towards the viewer). Edges are
//! great-circle arcs. They are densified first so the straight chords used
//! while clipping stay close to the sphere. Sutherland–Hodgman then clips
//! against the plane `x = horizon`. Each exit → entry pair is joined by an
//! arc along the horizon circle instead of a chord.

use crate::constants::RESAMPLE_MAX_STEP_DEG;
use glam::DVec3;

/// Spherical interpolation between unit vectors `a` and `b`.
pub fn slerp(a: DVec3, b: DVec3, t: f64) -> DVec3 {
    let cos = a.dot(b).clamp(-1.0, 1.0);
    let theta = cos.acos();
    let sin = theta.sin();
    if sin.abs() < 1e-12 {
        return a.lerp(b, t).normalize_or_zero();
    }
    (a * ((1.0 - t) * theta).sin() + b * (t * theta).sin()) / sin
}

/// Insert intermediate points so no edge spans more than `max_step` radians.
/// The ring is treated as cyclic, and a duplicated closing point is dropped.
pub fn resample(ring: &[DVec3], max_step: f64) -> Vec<DVec3> {
    let mut pts = ring;
    if pts.len() > 1 && pts[0].abs_diff_eq(pts[pts.len() - 1], 1e-12) {
        pts = &pts[..pts.len() - 1];
    }
    let mut out = Vec::with_capacity(pts.len());
    for (i, &a) in pts.iter().enumerate() {
        let b = pts[(i + 1) % pts.len()];
        out.push(a);
        let angle = a.angle_between(b);
        if angle.is_finite() && angle > max_step {
            let steps = (angle / max_step).ceil() as usize;
            for s in 1..steps {
                out.push(slerp(a, b, s as f64 / steps as f64));
            }
        }
    }
    out
}

/// Clip a cyclic view-space ring to the hemisphere `x > horizon`.
pub fn clip_to_hemisphere(ring: &[DVec3], horizon: f64) -> Vec<DVec3> {
    let max_step = RESAMPLE_MAX_STEP_DEG.to_radians();
    let pts = resample(ring, max_step);
    if pts.len() < 3 {
        return Vec::new();
    }
    if pts.iter().all(|p| p.x > horizon) {
        return pts;
    }

    // (point, lies on the horizon cut)
    let mut cut: Vec<(DVec3, bool)> = Vec::with_capacity(pts.len());
    for (i, &a) in pts.iter().enumerate() {
        let b = pts[(i + 1) % pts.len()];
        let (a_in, b_in) = (a.x > horizon, b.x > horizon);
        match (a_in, b_in) {
            (true, true) => cut.push((b, false)),
            (true, false) => cut.push((crossing(a, b, horizon), true)),
            (false, true) => {
                cut.push((crossing(a, b, horizon), true));
                cut.push((b, false));
            }
            (false, false) => {}
        }
    }
    if cut.len() < 3 {
        return Vec::new();
    }

    // Consecutive cut points are always exit → entry; follow the horizon.
    let n = cut.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let (p, on_cut) = cut[i];
        out.push(p);
        let (q, next_on_cut) = cut[(i + 1) % n];
        if on_cut && next_on_cut {
            let angle = p.angle_between(q);
            if angle.is_finite() && angle > max_step && angle < std::f64::consts::PI - 1e-9 {
                let steps = (angle / max_step).ceil() as usize;
                for s in 1..steps {
                    out.push(slerp(p, q, s as f64 / steps as f64));
                }
            }
        }
    }
    out
}

fn crossing(a: DVec3, b: DVec3, horizon: f64) -> DVec3 {
    let t = (a.x - horizon) / (a.x - b.x);
    a.lerp(b, t).normalize_or_zero()
}
