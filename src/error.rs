//! Error types for Spanlight
//!
//! Highlighting itself never fails: every string input produces markup.
//! These errors cover construction-time work only, such as compiling custom
//! rules, registering aliases and loading configuration.

use thiserror::Error;

/// Main error type for Spanlight operations
#[derive(Error, Debug)]
pub enum SpanlightError {
    /// A rule pattern failed to compile
    #[error("Invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Language identifier has no registered rule set
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Configuration values failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be written back to TOML
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type alias for Spanlight operations
pub type Result<T> = std::result::Result<T, SpanlightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpanlightError::UnknownLanguage("cobol".to_string());
        assert_eq!(err.to_string(), "Unknown language: cobol");
    }

    #[test]
    fn test_error_conversion() {
        let regex_err = regex::Regex::new("(unclosed");
        assert!(regex_err.is_err());

        let err: SpanlightError = regex_err.unwrap_err().into();
        assert!(matches!(err, SpanlightError::InvalidPattern(_)));
    }
}
