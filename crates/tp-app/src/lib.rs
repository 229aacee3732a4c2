//! Application service layer for thermopid.
//!
//! Front ends (currently only the CLI) go through these services instead of
//! wiring the simulation crates themselves.

pub mod error;
pub mod run_service;

pub use error::{AppError, AppResult};
pub use run_service::{RunOutcome, load_summary, run};
