use crate::capacity::CapacityViolation;
use crate::validation::FieldErrors;

/// Errors raised by domain checks before anything touches the network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// One or more form fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// The candidate asset does not fit in the room's remaining floor area.
    #[error(transparent)]
    Capacity(#[from] CapacityViolation),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
