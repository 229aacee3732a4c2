//! Feedback control primitives for thermopid.
//!
//! The controller is split the same way the plant is:
//! - [`PidGains`] is immutable configuration with a pure `update` step
//! - [`PidState`] carries the integral accumulator and previous error
//! - [`PidController`] owns both and mutates its state once per `compute`
//!
//! Output is saturated to `[OUTPUT_MIN, OUTPUT_MAX]`, i.e. heater power as a
//! fraction of maximum. The integral is accumulated unconditionally, so
//! sustained saturation winds it up.

pub mod controller;
pub mod error;

pub use controller::{OUTPUT_MAX, OUTPUT_MIN, PidController, PidGains, PidState, PidTerms};
pub use error::{ControlError, ControlResult};
