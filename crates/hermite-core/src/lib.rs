pub mod error;
pub mod tolerance;

pub use error::{Result, SplineError};
pub use tolerance::Tolerance;
