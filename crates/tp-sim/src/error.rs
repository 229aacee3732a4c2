//! Error types for simulation setup.

use thiserror::Error;

/// Errors encountered while building a simulation. The step loop itself cannot fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Controller error: {message}")]
    Controller { message: String },

    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<tp_controls::ControlError> for SimError {
    fn from(e: tp_controls::ControlError) -> Self {
        SimError::Controller {
            message: e.to_string(),
        }
    }
}

impl From<tp_core::TpError> for SimError {
    fn from(e: tp_core::TpError) -> Self {
        SimError::Config {
            message: e.to_string(),
        }
    }
}
