//! Text formats for the Hermite spline engine.
//!
//! Two surfaces: a line-oriented control-point codec ([`codec`]) and a small
//! command-script interpreter ([`command`]) that drives a spline from plain
//! text. Both consume and produce strings only; any actual I/O is the
//! caller's business.

pub mod codec;
pub mod command;

pub use codec::{export_to_string, load_from_string};
pub use command::{parse_script, run_script, Command};
