// src/core/error.rs

use thiserror::Error;

/// Errors raised by every fallible operation in the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumsError {
    #[error("invalid type: {message}")]
    InvalidType { message: String },

    #[error("denominator cannot be zero")]
    ZeroDenominator,

    #[error("division by zero")]
    DivisionByZero,

    #[error("must be fraction or number, got {input:?}")]
    NotAFraction { input: String },

    #[error("invalid value: {message}")]
    InvalidValue { message: String },

    #[error("could not parse expression: {message}")]
    Parse { message: String },
}

impl NumsError {
    pub fn invalid_type(message: impl Into<String>) -> Self {
        NumsError::InvalidType { message: message.into() }
    }

    pub fn invalid_value(message: impl Into<String>) -> Self {
        NumsError::InvalidValue { message: message.into() }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        NumsError::Parse { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, NumsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            NumsError::invalid_type("must be an integer or a float").to_string(),
            "invalid type: must be an integer or a float"
        );
        assert_eq!(NumsError::ZeroDenominator.to_string(), "denominator cannot be zero");
        assert_eq!(
            NumsError::NotAFraction { input: "abc".to_string() }.to_string(),
            "must be fraction or number, got \"abc\""
        );
    }
}
