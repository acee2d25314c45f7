//! Piecewise-cubic Hermite spline: control store, evaluation, sampling, arc length.

pub mod arclen;
pub mod curve;
pub mod presets;
pub mod spline;

pub use glam::DVec3;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;

pub use arclen::{ArcLengthEntry, ArcLengthTable};
pub use curve::Curve;
pub use spline::{ControlPoint, HermiteSpline};
