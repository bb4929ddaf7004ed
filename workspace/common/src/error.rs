use thiserror::Error;

/// Problems with what the user typed into the form. Detected before any
/// request is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// The series did not contain exactly the expected number of values
    #[error("Expected {expected} values, found {found}")]
    WrongLength { expected: usize, found: usize },

    /// A segment could not be read as a finite number
    #[error("Invalid number {token:?} at position {position}")]
    InvalidNumber { position: usize, token: String },

    /// The model selector held a value the service does not offer
    #[error("Unknown model: {0}")]
    UnknownModel(String),
}

/// Failures while talking to the prediction service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The request never produced a response body
    #[error("Request failed: {0}")]
    Transport(String),

    /// A body arrived but did not match the response schema
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Type alias for Result with FormError
pub type Result<T> = std::result::Result<T, FormError>;
