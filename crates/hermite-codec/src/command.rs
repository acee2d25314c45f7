//! Command-script interpreter.
//!
//! A script is a sequence of lines; blank lines and lines starting with `#`
//! are skipped. Commands:
//!
//! ```text
//! add point x y z tx ty tz
//! set point i x y z
//! set tangent i tx ty tz
//! get_arc_length [samples_per_segment] [rows]
//! ```
//!
//! Commands apply in order, stopping at the first failure; commands already
//! applied stay applied. `get_arc_length` ends the script and reports the
//! lookup table instead of the usual summary.

use hermite_core::{Result, SplineError};
use hermite_curve::{DVec3, HermiteSpline, Point3, Vector3};

/// Sampling density used by `get_arc_length` when none is given.
pub const DEFAULT_LENGTH_SAMPLES: u32 = hermite_curve::spline::LENGTH_SAMPLES_PER_SEGMENT;

/// Report rows used by `get_arc_length` when none is given.
pub const DEFAULT_REPORT_ROWS: usize = 25;

/// One parsed script command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    AddPoint {
        position: Point3,
        tangent: Vector3,
    },
    SetPoint {
        index: usize,
        position: Point3,
    },
    SetTangent {
        index: usize,
        tangent: Vector3,
    },
    GetArcLength {
        samples_per_segment: u32,
        rows: usize,
    },
}

fn parse_f64(line_no: usize, token: &str) -> Result<f64> {
    let v: f64 = token
        .parse()
        .map_err(|_| SplineError::format(line_no, format!("'{token}' is not a number")))?;
    if !v.is_finite() {
        return Err(SplineError::format(
            line_no,
            format!("'{token}' is not finite"),
        ));
    }
    Ok(v)
}

fn parse_index(line_no: usize, token: &str) -> Result<usize> {
    token.parse().map_err(|_| {
        SplineError::format(line_no, format!("'{token}' is not a valid index"))
    })
}

fn parse_vec3(line_no: usize, tokens: &[&str]) -> Result<DVec3> {
    Ok(DVec3::new(
        parse_f64(line_no, tokens[0])?,
        parse_f64(line_no, tokens[1])?,
        parse_f64(line_no, tokens[2])?,
    ))
}

/// Parse a single non-blank, non-comment line. `line_no` is 1-based.
fn parse_command(line_no: usize, line: &str) -> Result<Command> {
    let w: Vec<&str> = line.split_whitespace().collect();

    match (w[0], w.get(1).copied()) {
        ("add", Some("point")) if w.len() == 8 => Ok(Command::AddPoint {
            position: parse_vec3(line_no, &w[2..5])?,
            tangent: parse_vec3(line_no, &w[5..8])?,
        }),
        ("set", Some("point")) if w.len() == 6 => Ok(Command::SetPoint {
            index: parse_index(line_no, w[2])?,
            position: parse_vec3(line_no, &w[3..6])?,
        }),
        ("set", Some("tangent")) if w.len() == 6 => Ok(Command::SetTangent {
            index: parse_index(line_no, w[2])?,
            tangent: parse_vec3(line_no, &w[3..6])?,
        }),
        ("get_arc_length", _) if w.len() <= 3 => {
            let samples_per_segment = match w.get(1) {
                Some(tok) => {
                    let sps: u32 = tok.parse().map_err(|_| {
                        SplineError::format(
                            line_no,
                            format!("'{tok}' is not a valid sample count"),
                        )
                    })?;
                    if sps < 2 {
                        return Err(SplineError::InvalidArgument(format!(
                            "samples_per_segment must be >= 2, got {sps}"
                        )));
                    }
                    sps
                }
                None => DEFAULT_LENGTH_SAMPLES,
            };
            let rows = match w.get(2) {
                Some(tok) => {
                    let rows: usize = tok.parse().map_err(|_| {
                        SplineError::format(
                            line_no,
                            format!("'{tok}' is not a valid row count"),
                        )
                    })?;
                    if rows < 2 {
                        return Err(SplineError::InvalidArgument(format!(
                            "rows must be >= 2, got {rows}"
                        )));
                    }
                    rows
                }
                None => DEFAULT_REPORT_ROWS,
            };
            Ok(Command::GetArcLength {
                samples_per_segment,
                rows,
            })
        }
        _ => Err(SplineError::format(
            line_no,
            format!("unknown or malformed command: '{line}'"),
        )),
    }
}

fn script_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}

/// Parse a whole script without applying anything.
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    script_lines(text)
        .map(|(line_no, line)| parse_command(line_no, line))
        .collect()
}

fn arc_length_report(spline: &HermiteSpline, samples_per_segment: u32, rows: usize) -> Result<String> {
    let table = spline.arc_length_table(samples_per_segment)?;
    let picked = table.rows(rows)?;

    let mut out = String::from("Arc length parameterization (piecewise linear approx)\n");
    out.push_str(&format!("Arc length: {:.6}\n", table.total));
    out.push_str("Lookup table (s -> t):\ns\t\tt");
    for entry in &picked {
        out.push_str(&format!("\n{:.6}\t{:.6}", entry.s, entry.t));
    }
    Ok(out)
}

/// Run a command script against `spline`.
///
/// Commands apply one at a time; the first parse or apply failure stops the
/// run with that error, leaving earlier commands applied. Returns the
/// arc-length report if the script reaches `get_arc_length`, otherwise a
/// one-line summary.
pub fn run_script(spline: &mut HermiteSpline, text: &str) -> Result<String> {
    let mut applied = 0usize;
    for (line_no, line) in script_lines(text) {
        match parse_command(line_no, line)? {
            Command::AddPoint { position, tangent } => {
                spline.add_point(position, tangent);
            }
            Command::SetPoint { index, position } => {
                spline.set_point(index, position)?;
            }
            Command::SetTangent { index, tangent } => {
                spline.set_tangent(index, tangent)?;
            }
            Command::GetArcLength {
                samples_per_segment,
                rows,
            } => {
                return arc_length_report(spline, samples_per_segment, rows);
            }
        }
        applied += 1;
    }
    Ok(format!(
        "Applied {applied} command(s). Control points: {}",
        spline.num_points()
    ))
}
