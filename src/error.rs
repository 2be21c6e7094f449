//! Error types for dialectics.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, DialecticsError>;

#[derive(Error, Debug)]
pub enum DialecticsError {
    /// Blank subject text or an unusable numeric argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown context: {0}. Supported: general, ai_ethics, educational, corporate, healthcare, government, personal")]
    UnknownContext(String),

    #[error("Unknown complexity level: {0}. Supported: low, medium, high")]
    UnknownLevel(String),

    /// Parameter validation failed
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DialecticsError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Reject empty or whitespace-only subject text.
pub fn require_text(label: &str, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(DialecticsError::invalid_input(format!(
            "{} must not be empty",
            label
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("thesis", "AI in schools").is_ok());
        assert!(matches!(
            require_text("thesis", "   \t\n"),
            Err(DialecticsError::InvalidInput(_))
        ));
        assert!(require_text("thesis", "").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = DialecticsError::UnknownContext("retail".to_string());
        assert!(err.to_string().starts_with("Unknown context: retail"));

        let err = DialecticsError::invalid_input("thesis must not be empty");
        assert_eq!(err.to_string(), "Invalid input: thesis must not be empty");
    }
}
