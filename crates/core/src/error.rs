//! Validation errors raised before any state change.

/// Result alias for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reasons a user-supplied record or parameter is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{0} is required")]
    EmptyField(&'static str),

    /// Organ name is blank after trimming.
    #[error("organ name cannot be empty")]
    EmptyOrganName,

    /// An organ with that exact name already exists.
    #[error("an organ named '{0}' already exists")]
    DuplicateOrgan(String),

    /// A duration that must be strictly positive is not.
    #[error("{field} must be positive (got {value})")]
    NonPositive {
        /// Field name
        field: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Text could not be read as a number.
    #[error("{field} is not a valid number: '{input}'")]
    InvalidNumber {
        /// Field name
        field: &'static str,
        /// Raw input
        input: String,
    },

    /// Text could not be read as an ISO calendar date.
    #[error("invalid failure date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
