//! Run configuration.
//!
//! Every run parameter lives here; `SimConfig::default()` reproduces the
//! reference heater scenario exactly.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tp_controls::PidGains;
use tp_core::Real;

use crate::thermal::{PlantState, REFERENCE_AMBIENT, ThermalPlant};

/// Reference step size (seconds).
pub const REFERENCE_DT: Real = 0.1;
/// Reference step count.
pub const REFERENCE_STEPS: usize = 1000;
/// Reference setpoint. Far above anything the plant can reach in a run.
pub const REFERENCE_SETPOINT: Real = 25_000.0;
/// Reference starting temperature.
pub const REFERENCE_INITIAL_TEMPERATURE: Real = 20.0;
/// Reference result file name.
pub const REFERENCE_OUTPUT: &str = "data.csv";

/// Parameters of one closed-loop run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Fixed step size (seconds). Not validated.
    pub dt: Real,
    /// Number of steps to run.
    pub steps: usize,
    /// Constant setpoint for the whole run.
    pub setpoint: Real,
    /// Ambient temperature.
    pub ambient: Real,
    /// Plant temperature at step 0.
    pub initial_temperature: Real,
    /// Controller gains.
    pub gains: PidGains,
    /// Plant parameters.
    pub plant: ThermalPlant,
    /// Target of the result sink.
    pub output: PathBuf,
}

impl SimConfig {
    /// Initial plant state described by this configuration.
    pub fn initial_state(&self) -> PlantState {
        PlantState {
            temperature: self.initial_temperature,
            ambient: self.ambient,
        }
    }

    /// Simulated time covered by the run.
    pub fn duration(&self) -> Real {
        self.steps as Real * self.dt
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: REFERENCE_DT,
            steps: REFERENCE_STEPS,
            setpoint: REFERENCE_SETPOINT,
            ambient: REFERENCE_AMBIENT,
            initial_temperature: REFERENCE_INITIAL_TEMPERATURE,
            gains: PidGains::reference(),
            plant: ThermalPlant::default(),
            output: PathBuf::from(REFERENCE_OUTPUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_scenario() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.dt, 0.1);
        assert_eq!(cfg.steps, 1000);
        assert_eq!(cfg.setpoint, 25_000.0);
        assert_eq!(cfg.ambient, 20.0);
        assert_eq!(cfg.initial_temperature, 20.0);
        assert_eq!(cfg.gains, PidGains::new(0.8, 0.05, 0.02).unwrap());
        assert_eq!(cfg.plant, ThermalPlant::new(0.1, 1.0));
        assert_eq!(cfg.output, PathBuf::from("data.csv"));
    }

    #[test]
    fn initial_state_uses_ambient_and_start_temperature() {
        let cfg = SimConfig {
            ambient: 15.0,
            initial_temperature: 40.0,
            ..SimConfig::default()
        };
        let state = cfg.initial_state();
        assert_eq!(state.temperature, 40.0);
        assert_eq!(state.ambient, 15.0);
    }

    #[test]
    fn json_round_trip_keeps_every_parameter() {
        let cfg = SimConfig {
            dt: 0.05,
            steps: 250,
            setpoint: 42.5,
            ambient: 18.0,
            initial_temperature: 30.0,
            gains: PidGains::new(1.2, 0.3, -0.01).unwrap(),
            plant: ThermalPlant::new(0.2, 2.5),
            output: PathBuf::from("runs/heater.csv"),
        };
        let text = serde_json::to_string(&cfg).unwrap();
        let back: SimConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn json_field_names() {
        let value = serde_json::to_value(SimConfig::default()).unwrap();
        assert_eq!(value["steps"], 1000);
        assert_eq!(value["gains"]["kp"], 0.8);
        assert_eq!(value["plant"]["cooling_coefficient"], 0.1);
        assert_eq!(value["output"], "data.csv");
    }

    #[test]
    fn duration() {
        let cfg = SimConfig {
            dt: 0.5,
            steps: 10,
            ..SimConfig::default()
        };
        assert_eq!(cfg.duration(), 5.0);
    }
}
