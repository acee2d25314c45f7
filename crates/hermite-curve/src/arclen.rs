//! Arc-length estimation and the arc-length ↔ parameter lookup table.
//!
//! Length is approximated piecewise-linearly: the curve is sampled uniformly
//! in parameter space and chord lengths between consecutive samples are
//! summed. Finer sampling converges to the true length from below.

use hermite_core::{Result, SplineError};
use serde::{Deserialize, Serialize};

use crate::spline::HermiteSpline;

/// One row of the lookup table: accumulated length `s` at uniform parameter `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcLengthEntry {
    pub s: f64,
    pub t: f64,
}

/// Monotone mapping from accumulated arc length to the global parameter.
///
/// `entries[0]` is always `{s: 0, t: 0}`; the last entry is `{s: total, t: 1}`
/// for any curve with at least one segment. `s` is non-decreasing because
/// chord lengths are non-negative; `t` is evenly spaced because samples are
/// uniform in parameter space. Recomputed on demand, never cached on the
/// spline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcLengthTable {
    pub total: f64,
    pub entries: Vec<ArcLengthEntry>,
}

impl ArcLengthTable {
    /// Invert the table: the parameter at which the curve has covered
    /// arc length `s`, by linear interpolation between bracketing rows.
    ///
    /// `s` outside `[0, total]` clamps to the corresponding endpoint.
    pub fn parameter_at_length(&self, s: f64) -> f64 {
        let entries = &self.entries;
        if s <= 0.0 || entries.len() < 2 {
            return 0.0;
        }
        if s >= self.total {
            return entries[entries.len() - 1].t;
        }

        // First row with accumulated length >= s; rows are sorted by s.
        let hi = entries.partition_point(|e| e.s < s);
        let (a, b) = (entries[hi - 1], entries[hi]);
        let span = b.s - a.s;
        if span <= 0.0 {
            // Zero-length chord (coincident samples): either row's t works.
            return a.t;
        }
        let frac = (s - a.s) / span;
        a.t + frac * (b.t - a.t)
    }

    /// A bounded, evenly-index-spaced excerpt of the table for reporting.
    ///
    /// Row `r` of `rows` is taken at index `round(r * (N-1) / (rows-1))`.
    pub fn rows(&self, rows: usize) -> Result<Vec<ArcLengthEntry>> {
        if rows < 2 {
            return Err(SplineError::InvalidArgument(format!(
                "rows must be >= 2, got {rows}"
            )));
        }
        let n = self.entries.len();
        let picked = (0..rows)
            .map(|r| {
                let idx = (r as f64 * (n - 1) as f64 / (rows - 1) as f64).round() as usize;
                self.entries[idx]
            })
            .collect();
        Ok(picked)
    }
}

fn check_length_density(samples_per_segment: u32) -> Result<()> {
    if samples_per_segment < 2 {
        return Err(SplineError::InvalidArgument(format!(
            "samples_per_segment must be >= 2 for length estimation, got {samples_per_segment}"
        )));
    }
    Ok(())
}

/// Piecewise-linear estimate of the spline's total length.
///
/// Returns `0.0` for degenerate curves (fewer than two control points).
pub fn arc_length(spline: &HermiteSpline, samples_per_segment: u32) -> Result<f64> {
    check_length_density(samples_per_segment)?;
    let points = spline.sample(samples_per_segment)?;
    if points.len() < 2 {
        return Ok(0.0);
    }
    let mut length = 0.0;
    for pair in points.windows(2) {
        length += (pair[1] - pair[0]).length();
    }
    Ok(length)
}

/// Build the cumulative arc-length table over a uniform sampling.
///
/// Degenerate curves yield `total = 0` and the single entry `{s: 0, t: 0}`.
pub fn arc_length_table(
    spline: &HermiteSpline,
    samples_per_segment: u32,
) -> Result<ArcLengthTable> {
    check_length_density(samples_per_segment)?;
    let points = spline.sample(samples_per_segment)?;
    if points.len() < 2 {
        return Ok(ArcLengthTable {
            total: 0.0,
            entries: vec![ArcLengthEntry { s: 0.0, t: 0.0 }],
        });
    }

    let n = points.len();
    let mut entries = Vec::with_capacity(n);
    entries.push(ArcLengthEntry { s: 0.0, t: 0.0 });

    let mut total = 0.0;
    for i in 1..n {
        total += (points[i] - points[i - 1]).length();
        entries.push(ArcLengthEntry {
            s: total,
            t: i as f64 / (n - 1) as f64,
        });
    }

    Ok(ArcLengthTable { total, entries })
}
