//! Lumped thermal plant driven by a heater.
//!
//! Dynamics: `dT/dt = -cooling_coefficient * (T - ambient) + heating_gain * u`,
//! advanced with one forward Euler step per call.
//!
//! This is a linearized toy model: temperature is unbounded and the heater
//! command `u` is not clamped here. Saturation is the controller's job.

use serde::{Deserialize, Serialize};
use tp_core::Real;

/// Newtonian cooling coefficient of the reference plant (1/s).
pub const REFERENCE_COOLING_COEFFICIENT: Real = 0.1;
/// Temperature rise rate at full heater power (degrees/s).
pub const REFERENCE_HEATING_GAIN: Real = 1.0;
/// Reference ambient temperature.
pub const REFERENCE_AMBIENT: Real = 20.0;

/// Thermal state of the plant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlantState {
    /// Current temperature.
    pub temperature: Real,
    /// Surrounding temperature the plant cools toward. Constant over a run.
    pub ambient: Real,
}

impl PlantState {
    /// Plant sitting at ambient temperature.
    pub fn at_ambient(ambient: Real) -> Self {
        Self {
            temperature: ambient,
            ambient,
        }
    }
}

impl Default for PlantState {
    fn default() -> Self {
        Self::at_ambient(REFERENCE_AMBIENT)
    }
}

/// First-order thermal plant parameters.
///
/// # Example
///
/// ```
/// use tp_sim::{PlantState, ThermalPlant};
///
/// let plant = ThermalPlant::default();
/// let state = plant.step(&PlantState::at_ambient(20.0), 1.0, 0.1);
/// assert!((state.temperature - 20.1).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThermalPlant {
    /// Heat loss rate toward ambient (1/s).
    pub cooling_coefficient: Real,
    /// Heating rate per unit of control input.
    pub heating_gain: Real,
}

impl ThermalPlant {
    pub fn new(cooling_coefficient: Real, heating_gain: Real) -> Self {
        Self {
            cooling_coefficient,
            heating_gain,
        }
    }

    /// Temperature rate of change for the given state and heater command.
    pub fn rate(&self, state: &PlantState, control_input: Real) -> Real {
        let cooling = -self.cooling_coefficient * (state.temperature - state.ambient);
        let heating = self.heating_gain * control_input;
        cooling + heating
    }

    /// Advance the plant by one step.
    ///
    /// `control_input` is expected in `[0, 1]` and `dt` to be positive; neither
    /// is checked. A non-positive `dt` yields a frozen or reversed update.
    pub fn step(&self, state: &PlantState, control_input: Real, dt: Real) -> PlantState {
        PlantState {
            temperature: state.temperature + self.rate(state, control_input) * dt,
            ambient: state.ambient,
        }
    }
}

impl Default for ThermalPlant {
    fn default() -> Self {
        Self::new(REFERENCE_COOLING_COEFFICIENT, REFERENCE_HEATING_GAIN)
    }
}
