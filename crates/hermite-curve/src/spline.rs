//! Piecewise-cubic Hermite spline with caller-supplied tangents.

use hermite_core::{Result, SplineError};
use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::{Point3, Vector3};

/// Sampling density used when tessellating a spline for display.
pub const DRAW_SAMPLES_PER_SEGMENT: u32 = 30;

/// Sampling density used for arc-length estimation.
pub const LENGTH_SAMPLES_PER_SEGMENT: u32 = 60;

/// A position the curve passes through, with the curve's derivative there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub position: Point3,
    pub tangent: Vector3,
}

impl ControlPoint {
    pub fn new(position: Point3, tangent: Vector3) -> Self {
        Self { position, tangent }
    }
}

/// A piecewise-cubic Hermite interpolant through an ordered list of control
/// points, parameterized over `[0, 1]`.
///
/// Each consecutive pair of control points spans one cubic segment; the curve
/// passes through every position and honors the caller-supplied tangent at
/// each one (tangents are never auto-derived).
///
/// # Tangent storage convention
///
/// Stored tangents are derivatives with respect to the *global* parameter
/// `t`, not the per-segment local parameter. Evaluation divides each tangent
/// by the segment count before applying the Hermite basis. Callers that
/// compute a per-segment tangent magnitude (e.g. when closing a loop) must
/// pre-multiply it by the segment count before storing, or the curve's shape
/// will change whenever points are added. See [`crate::presets::circle`] for
/// a worked example.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HermiteSpline {
    control_points: Vec<ControlPoint>,
}

impl HermiteSpline {
    /// Create an empty spline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spline from an already-validated list of control points.
    pub fn from_control_points(control_points: Vec<ControlPoint>) -> Self {
        Self { control_points }
    }

    /// Number of control points.
    pub fn num_points(&self) -> usize {
        self.control_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    /// Number of cubic segments, `max(n - 1, 0)`.
    pub fn num_segments(&self) -> usize {
        self.control_points.len().saturating_sub(1)
    }

    /// Remove all control points. Idempotent.
    pub fn clear(&mut self) {
        self.control_points.clear();
    }

    /// Append a control point at the end of the curve.
    pub fn add_point(&mut self, position: Point3, tangent: Vector3) {
        self.control_points.push(ControlPoint::new(position, tangent));
    }

    /// Replace the position at `index`, keeping its tangent.
    pub fn set_point(&mut self, index: usize, position: Point3) -> Result<()> {
        let len = self.control_points.len();
        let cp = self
            .control_points
            .get_mut(index)
            .ok_or(SplineError::IndexOutOfRange { index, len })?;
        cp.position = position;
        Ok(())
    }

    /// Replace the tangent at `index`, keeping its position.
    pub fn set_tangent(&mut self, index: usize, tangent: Vector3) -> Result<()> {
        let len = self.control_points.len();
        let cp = self
            .control_points
            .get_mut(index)
            .ok_or(SplineError::IndexOutOfRange { index, len })?;
        cp.tangent = tangent;
        Ok(())
    }

    pub fn point(&self, index: usize) -> Option<Point3> {
        self.control_points.get(index).map(|cp| cp.position)
    }

    pub fn tangent(&self, index: usize) -> Option<Vector3> {
        self.control_points.get(index).map(|cp| cp.tangent)
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    /// Map a clamped global `t` onto (segment index, local u, segment count).
    ///
    /// `t = 1` maps to `u = 1` on the last segment, never past it.
    fn segment_at(&self, t: f64) -> (usize, f64, f64) {
        let segments = self.num_segments();
        let t = t.clamp(0.0, 1.0);
        let scaled = t * segments as f64;
        let i = (scaled.floor() as usize).min(segments - 1);
        let u = scaled - i as f64;
        (i, u, segments as f64)
    }

    /// Evaluate the curve at global parameter `t`.
    ///
    /// Out-of-range `t` is clamped to `[0, 1]`; the curve never extrapolates.
    /// Degenerate curves still answer: an empty spline returns the zero
    /// vector and a single point is returned for every `t`.
    pub fn evaluate(&self, t: f64) -> Point3 {
        let n = self.control_points.len();
        if n == 0 {
            return Point3::ZERO;
        }
        if n == 1 {
            return self.control_points[0].position;
        }

        let (i, u, segments) = self.segment_at(t);

        let p0 = self.control_points[i].position;
        let p1 = self.control_points[i + 1].position;
        // Stored tangents are in global-t units; convert to local-u units.
        let m0 = self.control_points[i].tangent / segments;
        let m1 = self.control_points[i + 1].tangent / segments;

        let u2 = u * u;
        let u3 = u2 * u;
        let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
        let h10 = u3 - 2.0 * u2 + u;
        let h01 = -2.0 * u3 + 3.0 * u2;
        let h11 = u3 - u2;

        p0 * h00 + m0 * h10 + p1 * h01 + m1 * h11
    }

    /// Derivative with respect to the global parameter `t`.
    ///
    /// Degenerate curves (fewer than two points) have no direction of travel
    /// and return the zero vector.
    pub fn derivative(&self, t: f64) -> Vector3 {
        if self.control_points.len() < 2 {
            return Vector3::ZERO;
        }

        let (i, u, segments) = self.segment_at(t);

        let p0 = self.control_points[i].position;
        let p1 = self.control_points[i + 1].position;
        let m0 = self.control_points[i].tangent / segments;
        let m1 = self.control_points[i + 1].tangent / segments;

        let u2 = u * u;
        let d00 = 6.0 * u2 - 6.0 * u;
        let d10 = 3.0 * u2 - 4.0 * u + 1.0;
        let d01 = -6.0 * u2 + 6.0 * u;
        let d11 = 3.0 * u2 - 2.0 * u;

        // d/du rescaled to d/dt, since u covers one segment per 1/segments of t.
        (p0 * d00 + m0 * d10 + p1 * d01 + m1 * d11) * segments
    }

    /// Tessellate the whole curve into uniformly-parameterized points.
    ///
    /// Returns exactly `segments * samples_per_segment + 1` points for a
    /// curve with at least two control points, and an empty vector otherwise.
    /// Sample `k` sits at `t = k / (total - 1)`, so the first and last samples
    /// are the first and last control points.
    pub fn sample(&self, samples_per_segment: u32) -> Result<Vec<Point3>> {
        if samples_per_segment < 1 {
            return Err(SplineError::InvalidArgument(format!(
                "samples_per_segment must be >= 1, got {samples_per_segment}"
            )));
        }
        if self.control_points.len() < 2 {
            return Ok(Vec::new());
        }

        let total = self.num_segments() * samples_per_segment as usize + 1;
        let mut points = Vec::with_capacity(total);
        for k in 0..total {
            let t = k as f64 / (total - 1) as f64;
            points.push(self.evaluate(t));
        }
        Ok(points)
    }

    /// Piecewise-linear estimate of the curve's length.
    ///
    /// See [`crate::arclen::arc_length`].
    pub fn arc_length(&self, samples_per_segment: u32) -> Result<f64> {
        crate::arclen::arc_length(self, samples_per_segment)
    }

    /// Build the cumulative arc-length lookup table.
    ///
    /// See [`crate::arclen::arc_length_table`].
    pub fn arc_length_table(&self, samples_per_segment: u32) -> Result<crate::ArcLengthTable> {
        crate::arclen::arc_length_table(self, samples_per_segment)
    }
}

impl Curve for HermiteSpline {
    fn point_at(&self, t: f64) -> Point3 {
        self.evaluate(t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.derivative(t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        match (self.control_points.first(), self.control_points.last()) {
            (Some(a), Some(b)) if self.control_points.len() > 1 => a.position == b.position,
            _ => false,
        }
    }
}
