use thiserror::Error;

/// Top-level error type for the dashboard backend.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for WellbeingError` so that `?` works across crate
/// boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WellbeingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Session limit reached: {limit} active sessions")]
    SessionLimit { limit: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for WellbeingError {
    fn from(err: toml::de::Error) -> Self {
        WellbeingError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for WellbeingError {
    fn from(err: serde_json::Error) -> Self {
        WellbeingError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for dashboard operations.
pub type Result<T> = std::result::Result<T, WellbeingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WellbeingError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_session_limit_display() {
        let err = WellbeingError::SessionLimit { limit: 4 };
        assert_eq!(err.to_string(), "Session limit reached: 4 active sessions");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WellbeingError = io_err.into();
        assert!(matches!(err, WellbeingError::Io(_)));
        assert!(err.to_string().starts_with("I/O error:"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("invalid = [[[");
        let err: WellbeingError = parsed.unwrap_err().into();
        assert!(matches!(err, WellbeingError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str("{ nope }");
        let err: WellbeingError = parsed.unwrap_err().into();
        assert!(matches!(err, WellbeingError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let value = io_result?;
            Ok(format!("got {}", value))
        }

        assert_eq!(inner().unwrap(), "got 42");
    }
}
