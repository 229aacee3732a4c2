//! Fixed-step closed-loop driver.
//!
//! Each step reads the plant temperature, asks the controller for a heater
//! command, advances the plant with it, and hands one record to the sink.
//! The control output of step `k` is computed from the state *before* step
//! `k`'s plant update; the recorded temperature is the state *after* it.

use tp_controls::{PidController, PidGains};
use tp_core::{Real, ensure_finite};
use tracing::{info, trace};

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::record::{AppendOutcome, RecordSink, SimRecord};
use crate::thermal::{PlantState, ThermalPlant};

/// Plant, controller and loop parameters for one run.
#[derive(Clone, Debug)]
pub struct Simulation {
    dt: Real,
    steps: usize,
    setpoint: Real,
    plant: ThermalPlant,
    initial_state: PlantState,
    state: PlantState,
    controller: PidController,
}

impl Simulation {
    /// Build a simulation from a configuration.
    ///
    /// Gains, setpoint and temperatures must be finite. `dt` is taken as-is.
    pub fn new(config: &SimConfig) -> SimResult<Self> {
        let gains = PidGains::new(config.gains.kp, config.gains.ki, config.gains.kd)?;
        let setpoint = ensure_finite(config.setpoint, "setpoint")?;
        ensure_finite(config.ambient, "ambient")?;
        ensure_finite(config.initial_temperature, "initial_temperature")?;

        Ok(Self::from_parts(
            config.plant,
            config.initial_state(),
            PidController::new(gains),
            setpoint,
            config.dt,
            config.steps,
        ))
    }

    /// Assemble a simulation from already-built pieces.
    pub fn from_parts(
        plant: ThermalPlant,
        initial_state: PlantState,
        controller: PidController,
        setpoint: Real,
        dt: Real,
        steps: usize,
    ) -> Self {
        Self {
            dt,
            steps,
            setpoint,
            plant,
            initial_state,
            state: initial_state,
            controller,
        }
    }

    pub fn plant_state(&self) -> &PlantState {
        &self.state
    }

    pub fn controller(&self) -> &PidController {
        &self.controller
    }

    /// Advance one step and return its record.
    pub fn step(&mut self, step_index: usize) -> SimRecord {
        let measurement = self.state.temperature;
        let control_output = self.controller.compute(self.setpoint, measurement, self.dt);
        self.state = self.plant.step(&self.state, control_output, self.dt);

        SimRecord {
            step_index,
            temperature: self.state.temperature,
            setpoint: self.setpoint,
            control_output,
        }
    }

    /// Restore the initial plant state and clear the controller memory.
    pub fn reset(&mut self) {
        self.state = self.initial_state;
        self.controller.reset();
    }
}

/// Summary of a completed run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunReport {
    /// Loop iterations executed.
    pub steps: usize,
    /// Records accepted by the sink.
    pub written: usize,
    /// Records the sink dropped.
    pub dropped: usize,
    /// Plant temperature at the end of the run.
    pub final_temperature: Real,
    /// Last heater command, if any step ran.
    pub final_control: Option<Real>,
}

/// Run every configured step, handing each record to `sink` in step order.
///
/// A record the sink drops does not stop the loop. Running again continues
/// from the current state; call [`Simulation::reset`] to start over.
pub fn run_sim<S: RecordSink + ?Sized>(sim: &mut Simulation, sink: &mut S) -> RunReport {
    info!(
        steps = sim.steps,
        dt = sim.dt,
        setpoint = sim.setpoint,
        initial_temperature = sim.state.temperature,
        "starting closed-loop run"
    );

    let mut written = 0;
    let mut dropped = 0;
    let mut final_control = None;

    for step_index in 0..sim.steps {
        let record = sim.step(step_index);
        trace!(
            step = record.step_index,
            temperature = record.temperature,
            control = record.control_output,
            "step"
        );

        match sink.append(&record) {
            AppendOutcome::Written => written += 1,
            AppendOutcome::Dropped => dropped += 1,
        }
        final_control = Some(record.control_output);
    }

    let report = RunReport {
        steps: sim.steps,
        written,
        dropped,
        final_temperature: sim.state.temperature,
        final_control,
    };
    info!(
        written = report.written,
        dropped = report.dropped,
        final_temperature = report.final_temperature,
        "run finished"
    );
    report
}
