// Integration tests: command scripts, codec round-trips, and the engine
// working together.

use approx::assert_relative_eq;
use hermite_codec::{export_to_string, load_from_string, run_script};
use hermite_curve::{presets, DVec3, HermiteSpline};

#[test]
fn integration_script_then_evaluate() {
    let mut spline = HermiteSpline::new();
    run_script(
        &mut spline,
        "# unit segment with matching tangents\n\
         add point 0 0 0 1 0 0\n\
         add point 1 0 0 1 0 0",
    )
    .unwrap();

    let mid = spline.evaluate(0.5);
    assert_relative_eq!(mid.x, 0.5, max_relative = 1e-12);
    assert_relative_eq!(mid.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(mid.z, 0.0, epsilon = 1e-12);
}

#[test]
fn integration_export_load_round_trip() {
    let spline = presets::circle(DVec3::new(0.0, 1.0, 0.0), 3.0, 12);
    let text = export_to_string(&spline);

    let mut restored = HermiteSpline::new();
    load_from_string(&mut restored, &text).unwrap();

    assert_eq!(restored.num_points(), spline.num_points());
    for (a, b) in restored
        .control_points()
        .iter()
        .zip(spline.control_points())
    {
        assert_eq!(a.position, b.position);
        assert_eq!(a.tangent, b.tangent);
    }

    // Identical curves evaluate identically.
    for k in 0..=20 {
        let t = k as f64 / 20.0;
        assert_eq!(restored.evaluate(t), spline.evaluate(t));
    }
}

#[test]
fn integration_load_replaces_previous_curve() {
    let mut spline = presets::straight_line();
    load_from_string(&mut spline, "2\n0 0 0 1 0 0\n1 0 0 1 0 0").unwrap();
    assert_eq!(spline.num_points(), 2);
    assert_eq!(spline.point(0), Some(DVec3::ZERO));
}

#[test]
fn integration_truncated_load_fails_and_keeps_state() {
    let mut spline = presets::straight_line();
    let before = spline.clone();
    assert!(load_from_string(&mut spline, "2\n0 0 0 1 0 0").is_err());
    assert_eq!(spline, before);
}

#[test]
fn integration_arc_length_report_on_loaded_curve() {
    let mut spline = HermiteSpline::new();
    load_from_string(&mut spline, "2\n0 0 0 3 0 0\n3 0 0 3 0 0").unwrap();

    let report = run_script(&mut spline, "get_arc_length 60 3").unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[1], "Arc length: 3.000000");
    assert_eq!(lines[4], "0.000000\t0.000000");
    assert_eq!(lines[6], "3.000000\t1.000000");
}

#[test]
fn integration_circle_script_length() {
    // Build a circle through the command layer and check its circumference.
    let circle = presets::circle(DVec3::ZERO, 2.0, 32);
    let mut script = String::new();
    for cp in circle.control_points() {
        let (p, m) = (cp.position, cp.tangent);
        script.push_str(&format!(
            "add point {} {} {} {} {} {}\n",
            p.x, p.y, p.z, m.x, m.y, m.z
        ));
    }

    let mut spline = HermiteSpline::new();
    run_script(&mut spline, &script).unwrap();
    assert_eq!(spline.num_points(), 33);

    let len = spline.arc_length(60).unwrap();
    let expected = std::f64::consts::TAU * 2.0;
    assert_relative_eq!(len, expected, max_relative = 1e-3);
}
