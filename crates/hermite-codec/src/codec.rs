//! Line-oriented control-point codec.
//!
//! Format: the first non-blank line is a non-negative integer point count;
//! each following non-blank line carries six whitespace-separated decimal
//! numbers, `px py pz tx ty tz`. No header, no comments, no versioning.

use hermite_core::{Result, SplineError};
use hermite_curve::{ControlPoint, DVec3, HermiteSpline};

/// Parse one data line into a control point. `line_no` is 1-based.
fn parse_control_point(line_no: usize, line: &str) -> Result<ControlPoint> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 6 {
        return Err(SplineError::format(
            line_no,
            format!("expected 6 numbers, got {}", tokens.len()),
        ));
    }

    let mut values = [0.0_f64; 6];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        let v: f64 = token.parse().map_err(|_| {
            SplineError::format(line_no, format!("'{token}' is not a number"))
        })?;
        if !v.is_finite() {
            return Err(SplineError::format(
                line_no,
                format!("'{token}' is not finite"),
            ));
        }
        *slot = v;
    }

    Ok(ControlPoint::new(
        DVec3::new(values[0], values[1], values[2]),
        DVec3::new(values[3], values[4], values[5]),
    ))
}

/// Parse the full text into control points without touching any spline.
fn parse_points(text: &str) -> Result<Vec<ControlPoint>> {
    // Keep original line numbers for error reporting; blank lines don't count.
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (count_line_no, count_line) = lines
        .next()
        .ok_or_else(|| SplineError::format(1, "empty input"))?;
    let expected: usize = count_line.parse().map_err(|_| {
        SplineError::format(
            count_line_no,
            format!("first line must be a non-negative integer point count, got '{count_line}'"),
        )
    })?;

    let mut points = Vec::with_capacity(expected);
    let mut last_line_no = count_line_no;
    for (line_no, line) in lines {
        if points.len() == expected {
            return Err(SplineError::format(
                line_no,
                format!("expected {expected} data lines, found extra data"),
            ));
        }
        points.push(parse_control_point(line_no, line)?);
        last_line_no = line_no;
    }

    if points.len() != expected {
        return Err(SplineError::format(
            last_line_no,
            format!("expected {expected} data lines, got {}", points.len()),
        ));
    }

    Ok(points)
}

/// Replace `spline`'s contents with the curve described by `text`.
///
/// Parse-then-commit: the whole text is validated first, so on error the
/// spline keeps its previous contents untouched.
pub fn load_from_string(spline: &mut HermiteSpline, text: &str) -> Result<()> {
    let points = parse_points(text)?;
    *spline = HermiteSpline::from_control_points(points);
    Ok(())
}

/// Serialize `spline` to the line-oriented text format.
///
/// Numbers use `f64`'s shortest round-trippable display form, so a
/// load of the output reproduces the curve exactly.
pub fn export_to_string(spline: &HermiteSpline) -> String {
    let mut out = spline.num_points().to_string();
    for cp in spline.control_points() {
        let p = cp.position;
        let m = cp.tangent;
        out.push('\n');
        out.push_str(&format!(
            "{} {} {} {} {} {}",
            p.x, p.y, p.z, m.x, m.y, m.z
        ));
    }
    out
}
