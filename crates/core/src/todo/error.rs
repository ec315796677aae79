use thiserror::Error;

/// Errors that can occur when validating todo input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    #[error("Todo name cannot be empty")]
    EmptyName,
    #[error("Todo due date cannot be empty")]
    EmptyDueDate,
}
