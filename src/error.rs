use thiserror::Error;

/// Message shown to the user when a time-zone conversion fails.
pub const CONVERSION_ERROR_MESSAGE: &str = "Conversion error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Rejected before any computation: non-finite, negative or missing input.
    #[error("{0}")]
    InvalidInput(String),
    /// The time-zone path failed (unknown zone, impossible calendar date).
    #[error("Conversion failure: {0}")]
    ConversionFailure(String),
}

impl ConvertError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ConvertError::InvalidInput(msg.into())
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        ConvertError::ConversionFailure(msg.into())
    }

    /// Text a caller should display. Failures are not classified any further.
    pub fn user_message(&self) -> &str {
        match self {
            ConvertError::InvalidInput(msg) => msg,
            ConvertError::ConversionFailure(_) => CONVERSION_ERROR_MESSAGE,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let err = ConvertError::invalid("Enter valid weight");
        assert_eq!(err.user_message(), "Enter valid weight");
        assert_eq!(err.to_string(), "Enter valid weight");

        let err = ConvertError::failure("unknown zone 'Mars/Olympus'");
        assert_eq!(err.user_message(), "Conversion error");
        assert!(err.to_string().contains("Mars/Olympus"));
    }
}
