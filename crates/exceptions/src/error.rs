// crates/exceptions/src/error.rs
use thiserror::Error;

/// Errors raised when a named argument violates a precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Invalid argument '{parameter}': {message}")]
    InvalidArgument { parameter: String, message: String },

    #[error("Argument '{parameter}' is out of range: {message}")]
    OutOfRange {
        parameter: String,
        value: String,
        message: String,
    },
}

pub type ArgumentResult<T> = std::result::Result<T, ArgumentError>;

impl ArgumentError {
    pub fn invalid(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument { parameter: parameter.into(), message: message.into() }
    }

    pub fn out_of_range(
        parameter: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::OutOfRange { parameter: parameter.into(), value: value.into(), message: message.into() }
    }

    /// Name of the argument that failed the check.
    #[must_use]
    pub fn parameter(&self) -> &str {
        match self {
            Self::InvalidArgument { parameter, .. } | Self::OutOfRange { parameter, .. } => parameter,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message, .. } | Self::OutOfRange { message, .. } => message,
        }
    }

    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
