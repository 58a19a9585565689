//! Custom error types for StepWizard
//!
//! The wizard core never fails; these errors come from the layers around it
//! (configuration, message files, the journal, and the terminal host).

use thiserror::Error;

/// The main error type for StepWizard operations
#[derive(Error, Debug)]
pub enum WizardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Invalid input from outside the wizard (empty message list, bad step)
    #[error("Validation error: {0}")]
    Validation(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl WizardError {
    /// Create a validation error for a step outside `1..=total`
    pub fn step_out_of_range(step: usize, total: usize) -> Self {
        Self::Validation(format!(
            "Step {} is out of range (expected 1 to {})",
            step, total
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for WizardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WizardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for WizardError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for StepWizard operations
pub type WizardResult<T> = Result<T, WizardError>;
