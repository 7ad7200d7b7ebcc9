use std::io;
use thiserror::Error;

/// Errors raised by the ROI estimator.
///
/// Both variants are local validation failures: the caller is expected to
/// re-prompt the user rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// Land size is not strictly positive, water cost is negative, or a value is not finite.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The crop identifier does not resolve to a known crop profile.
    #[error("Unknown crop: {0}")]
    UnknownCrop(String),
}

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents a rejected ROI estimate request.
    #[error("Estimate error: {0}")]
    Estimate(#[from] EstimateError),

    /// Represents a failure reading or writing persisted user preferences.
    #[error("Preferences error: {0}")]
    Preferences(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Estimate(e) => AppError::Estimate(e.clone()),
            AppError::Preferences(s) => AppError::Preferences(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<validator::ValidationErrors> for EstimateError {
    fn from(err: validator::ValidationErrors) -> Self {
        EstimateError::InvalidInput(err.to_string())
    }
}
