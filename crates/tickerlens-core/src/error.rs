use thiserror::Error;

/// Validation errors exposed by `tickerlens-core` domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,

    #[error("date must be an ISO calendar date (YYYY-MM-DD): '{value}'")]
    InvalidDate { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be positive")]
    NonPositiveValue { field: &'static str },
}
