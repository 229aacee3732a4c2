//! PID controller with a saturating output stage.
//!
//! Each update runs, in order:
//! 1. `error = setpoint - measurement`
//! 2. `integral += error * dt` (Euler, no anti-windup)
//! 3. `derivative = (error - previous_error) / dt`, or `0.0` when `dt <= 0`
//! 4. `raw = kp * error + ki * integral + kd * derivative`
//! 5. `previous_error = error`
//! 6. `output = clamp(raw, OUTPUT_MIN, OUTPUT_MAX)`
//!
//! The derivative must see the previous call's error, so the state is only
//! written back after step 3.

use crate::error::{ControlError, ControlResult};
use serde::{Deserialize, Serialize};
use tp_core::{Real, within};

/// Lower bound of the controller output (heater off).
pub const OUTPUT_MIN: Real = 0.0;
/// Upper bound of the controller output (full heater power).
pub const OUTPUT_MAX: Real = 1.0;

/// Proportional gain of the reference heater loop.
pub const REFERENCE_KP: Real = 0.8;
/// Integral gain of the reference heater loop.
pub const REFERENCE_KI: Real = 0.05;
/// Derivative gain of the reference heater loop.
pub const REFERENCE_KD: Real = 0.02;

/// PID gains. Fixed for the lifetime of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidGains {
    /// Proportional gain.
    pub kp: Real,
    /// Integral gain (per second of accumulated error).
    pub ki: Real,
    /// Derivative gain.
    pub kd: Real,
}

impl PidGains {
    /// Create a gain set.
    ///
    /// Gains may take any sign, but must be finite.
    pub fn new(kp: Real, ki: Real, kd: Real) -> ControlResult<Self> {
        if !kp.is_finite() {
            return Err(ControlError::InvalidArg {
                what: "kp must be finite",
            });
        }
        if !ki.is_finite() {
            return Err(ControlError::InvalidArg {
                what: "ki must be finite",
            });
        }
        if !kd.is_finite() {
            return Err(ControlError::InvalidArg {
                what: "kd must be finite",
            });
        }
        Ok(Self { kp, ki, kd })
    }

    /// Gains of the reference temperature loop (0.8, 0.05, 0.02).
    pub fn reference() -> Self {
        Self {
            kp: REFERENCE_KP,
            ki: REFERENCE_KI,
            kd: REFERENCE_KD,
        }
    }

    /// Pure controller step.
    ///
    /// # Arguments
    ///
    /// * `state` - Controller state before this call
    /// * `setpoint` - Desired value
    /// * `measurement` - Measured process value
    /// * `dt` - Time since the previous call (seconds)
    ///
    /// # Returns
    ///
    /// Updated state and the breakdown of every term.
    ///
    /// `dt <= 0` disables the derivative term. A negative `dt` still flips the
    /// sign of the integral increment; it is accepted without complaint.
    ///
    /// The output stays in `[OUTPUT_MIN, OUTPUT_MAX]` whenever `raw` is a number,
    /// including infinite `raw`. A NaN `raw` passes through the clamp as NaN;
    /// that happens with NaN inputs and also with finite inputs whose terms
    /// overflow to opposite infinities.
    pub fn update(
        &self,
        state: &PidState,
        setpoint: Real,
        measurement: Real,
        dt: Real,
    ) -> (PidState, PidTerms) {
        let error = setpoint - measurement;

        let integral = state.integral + error * dt;

        let derivative = if dt > 0.0 {
            (error - state.previous_error) / dt
        } else {
            0.0
        };

        let proportional = self.kp * error;
        let integral_term = self.ki * integral;
        let derivative_term = self.kd * derivative;
        let raw = proportional + integral_term + derivative_term;

        let new_state = PidState {
            integral,
            previous_error: error,
        };

        let terms = PidTerms {
            error,
            proportional,
            integral: integral_term,
            derivative: derivative_term,
            raw,
            output: raw.clamp(OUTPUT_MIN, OUTPUT_MAX),
        };

        (new_state, terms)
    }
}

impl Default for PidGains {
    fn default() -> Self {
        Self::reference()
    }
}

/// Controller memory carried between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PidState {
    /// Accumulated error times time.
    pub integral: Real,
    /// Error seen on the previous call.
    pub previous_error: Real,
}

/// Intermediate values of one controller update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidTerms {
    /// `setpoint - measurement`
    pub error: Real,
    /// `kp * error`
    pub proportional: Real,
    /// `ki * integral`, using the integral after this call's accumulation.
    pub integral: Real,
    /// `kd * derivative`; exactly `0.0` when `dt <= 0`.
    pub derivative: Real,
    /// Sum of the three terms before saturation.
    pub raw: Real,
    /// `raw` clamped to `[OUTPUT_MIN, OUTPUT_MAX]`.
    pub output: Real,
}

impl PidTerms {
    /// True when the output stage discarded part of the raw command.
    pub fn is_saturated(&self) -> bool {
        !within(self.raw, OUTPUT_MIN, OUTPUT_MAX)
    }
}

/// Stateful PID controller.
///
/// # Example
///
/// ```
/// use tp_controls::{PidController, PidGains};
///
/// let mut pid = PidController::new(PidGains::reference());
/// let u = pid.compute(25_000.0, 20.0, 0.1);
/// assert_eq!(u, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PidController {
    gains: PidGains,
    state: PidState,
}

impl PidController {
    /// Create a controller with zeroed state.
    pub fn new(gains: PidGains) -> Self {
        Self {
            gains,
            state: PidState::default(),
        }
    }

    pub fn gains(&self) -> &PidGains {
        &self.gains
    }

    pub fn state(&self) -> &PidState {
        &self.state
    }

    /// Compute the saturated control output and advance the controller state.
    pub fn compute(&mut self, setpoint: Real, measurement: Real, dt: Real) -> Real {
        self.compute_terms(setpoint, measurement, dt).output
    }

    /// Same as [`compute`](Self::compute), returning every intermediate term.
    pub fn compute_terms(&mut self, setpoint: Real, measurement: Real, dt: Real) -> PidTerms {
        let (state, terms) = self.gains.update(&self.state, setpoint, measurement, dt);
        self.state = state;
        terms
    }

    /// Zero the integral and previous error. Gains are kept.
    pub fn reset(&mut self) {
        self.state = PidState::default();
    }
}
