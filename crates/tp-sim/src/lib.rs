//! Closed-loop simulation framework for thermopid.
//!
//! Provides:
//! - First-order thermal plant with a heater input
//! - Run configuration with the reference scenario as default
//! - Record sink abstraction (fatal setup vs. per-record drop)
//! - Fixed-step driver coupling controller and plant

pub mod config;
pub mod error;
pub mod record;
pub mod sim;
pub mod thermal;

pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use record::{AppendOutcome, MemorySink, RecordSink, SimRecord};
pub use sim::{RunReport, Simulation, run_sim};
pub use thermal::{PlantState, ThermalPlant};
