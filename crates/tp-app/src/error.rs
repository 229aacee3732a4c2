//! Error types for the tp-app service layer.

/// Application error type wrapping the backend crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Simulation setup failed: {0}")]
    Simulation(String),

    #[error("{0}")]
    Results(String),
}

/// Result type for tp-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<tp_sim::SimError> for AppError {
    fn from(err: tp_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<tp_results::ResultsError> for AppError {
    fn from(err: tp_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
