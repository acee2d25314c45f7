//! Ready-made spline constructions, mostly useful as worked examples of the
//! tangent storage convention.

use crate::spline::HermiteSpline;
use crate::{DVec3, Point3};

/// Four equally spaced collinear points on `y = 1`.
///
/// Tangents are set to the per-segment delta, so the interpolant is exactly
/// the straight segment from `(-3, 1, 0)` to `(3, 1, 0)`.
pub fn straight_line() -> HermiteSpline {
    let y = 1.0;
    let p0 = DVec3::new(-3.0, y, 0.0);
    let p1 = DVec3::new(-1.0, y, 0.0);
    let p2 = DVec3::new(1.0, y, 0.0);
    let p3 = DVec3::new(3.0, y, 0.0);
    let v = p1 - p0;

    let mut spline = HermiteSpline::new();
    spline.add_point(p0, v);
    spline.add_point(p1, v);
    spline.add_point(p2, v);
    spline.add_point(p3, v);
    spline
}

/// Closed loop of `arcs` Hermite segments approximating a circle in the
/// xz-plane around `center`.
///
/// The last control point repeats the first, so the spline has `arcs + 1`
/// points and `arcs` segments. The correct local tangent magnitude for one
/// circular arc of angle `dtheta` is `4 * tan(dtheta / 4) * radius`; because
/// stored tangents are in whole-curve units, it is multiplied by the segment
/// count before storing.
pub fn circle(center: Point3, radius: f64, arcs: usize) -> HermiteSpline {
    debug_assert!(arcs >= 2, "a closed circle needs at least 2 arcs");
    debug_assert!(radius > 0.0, "radius must be positive");

    let dtheta = std::f64::consts::TAU / arcs as f64;
    let m_local = 4.0 * (dtheta / 4.0).tan() * radius;
    let store_scale = arcs as f64;

    let mut spline = HermiteSpline::new();
    // arcs + 1 points: the extra one closes the loop.
    for k in 0..=arcs {
        let theta = (k % arcs) as f64 * dtheta;
        let position = center + radius * DVec3::new(theta.cos(), 0.0, theta.sin());
        let tangent =
            m_local * store_scale * DVec3::new(-theta.sin(), 0.0, theta.cos());
        spline.add_point(position, tangent);
    }
    spline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Curve;
    use approx::assert_relative_eq;
    use hermite_core::Tolerance;
    use std::f64::consts::TAU;

    #[test]
    fn test_straight_line_is_straight() {
        let spline = straight_line();
        assert_eq!(spline.num_points(), 4);
        for k in 0..=30 {
            let t = k as f64 / 30.0;
            let p = spline.evaluate(t);
            assert!((p.y - 1.0).abs() < 1e-10, "y at t={t}: {}", p.y);
            assert!(p.z.abs() < 1e-10);
            assert!((-3.0..=3.0).contains(&p.x));
        }
        let len = spline.arc_length(60).unwrap();
        assert!((len - 6.0).abs() < 1e-6, "got {len}");
    }

    #[test]
    fn test_circle_is_closed() {
        let spline = circle(DVec3::new(0.0, 1.0, 0.0), 3.0, 16);
        assert_eq!(spline.num_points(), 17);
        assert!(spline.is_closed());
    }

    #[test]
    fn test_circle_stays_on_circle() {
        let center = DVec3::new(0.0, 1.0, 0.0);
        let radius = 3.0;
        let spline = circle(center, radius, 32);
        let tol = Tolerance::new(1e-3);
        for k in 0..=200 {
            let t = k as f64 / 200.0;
            let p = spline.evaluate(t);
            let r = (p - center).length();
            assert!(
                tol.linear_eq(r, radius),
                "radius at t={t}: {r} (expected {radius})"
            );
            assert!((p.y - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_circle_circumference() {
        let spline = circle(DVec3::ZERO, 2.0, 64);
        let len = spline.arc_length(60).unwrap();
        assert_relative_eq!(len, TAU * 2.0, max_relative = 1e-4);
    }
}
