//! Error types for the onboarding flow.

use crate::onboarding::model::AnswerField;
use crate::onboarding::state::StepId;

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Why a step's required answer does not qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// Nothing was recorded for the field.
    Missing,
    /// A value was recorded but is empty after trimming whitespace.
    Blank,
}

impl std::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "is missing"),
            Self::Blank => write!(f, "is blank"),
        }
    }
}

/// Raised by `advance()` when the current step's answer does not qualify.
///
/// Always recoverable: the user corrects the input and tries again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Step {step} cannot advance: {field} {reason}")]
pub struct ValidationError {
    pub step: StepId,
    pub field: AnswerField,
    pub reason: ValidationReason,
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_step_and_field() {
        let err = ValidationError {
            step: StepId::Name,
            field: AnswerField::DogName,
            reason: ValidationReason::Blank,
        };
        assert_eq!(err.to_string(), "Step name cannot advance: dog_name is blank");
    }

    #[test]
    fn top_level_wraps_sources() {
        let err: Error = ConfigError::invalid("tick_interval", "must be non-zero").into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid configuration value for tick_interval: must be non-zero"
        );
    }
}
