use thiserror::Error;

/// mctl error types
#[derive(Error, Debug)]
pub enum CtlError {
    /// A name/ID and `--all` were both given
    #[error("-a cannot be used when [application-name|application-id] is specified")]
    ConflictingSelectors,

    /// Neither a name/ID nor `--all` was given
    #[error("[application-name|application-id] not specified, use -a to view all applications")]
    NoSelectorProvided,

    /// Network or HTTP-layer failure
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// Non-200 status while fetching by ID
    #[error("Response Status Code {status_code}, possible invalid ID")]
    InvalidId { status_code: u16 },

    /// Non-200 status for a name search or a full listing
    #[error("Response Status Code {status_code} from {url}")]
    UnexpectedStatus { url: String, status_code: u16 },

    /// Response body was not the expected JSON
    #[error("failed to unmarshal response body: {0}")]
    DecodeFailure(String),

    /// No application satisfied the lookup
    #[error("Application not found: {0}")]
    NotFound(String),

    /// Output format outside of json/yaml
    #[error("output-format choice invalid ({0}), use [json|yaml]")]
    InvalidOutputFormat(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Auth token could not be read
    #[error("Auth error: {0}")]
    AuthError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CtlError {
    fn from(err: serde_json::Error) -> Self {
        CtlError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for CtlError {
    fn from(err: serde_yaml::Error) -> Self {
        CtlError::SerializationError(err.to_string())
    }
}

/// Result type alias for mctl operations
pub type Result<T> = std::result::Result<T, CtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_selectors_display() {
        let msg = CtlError::ConflictingSelectors.to_string();
        assert!(msg.contains("-a cannot be used"));
    }

    #[test]
    fn test_no_selector_display() {
        let msg = CtlError::NoSelectorProvided.to_string();
        assert!(msg.contains("use -a to view all applications"));
    }

    #[test]
    fn test_invalid_id_display() {
        let error = CtlError::InvalidId { status_code: 404 };
        assert_eq!(
            error.to_string(),
            "Response Status Code 404, possible invalid ID"
        );
    }

    #[test]
    fn test_unexpected_status_display() {
        let error = CtlError::UnexpectedStatus {
            url: "http://localhost:9081/api/experimental/application".to_string(),
            status_code: 500,
        };
        assert_eq!(
            error.to_string(),
            "Response Status Code 500 from http://localhost:9081/api/experimental/application"
        );
    }

    #[test]
    fn test_not_found_display() {
        let error = CtlError::NotFound("no application named \"web\"".to_string());
        assert_eq!(
            error.to_string(),
            "Application not found: no application named \"web\""
        );
    }

    #[test]
    fn test_invalid_output_format_display() {
        let error = CtlError::InvalidOutputFormat("xml".to_string());
        assert_eq!(
            error.to_string(),
            "output-format choice invalid (xml), use [json|yaml]"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CtlError = io_error.into();
        assert!(matches!(err, CtlError::IoError(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let result: std::result::Result<serde_json::Value, _> = serde_json::from_str("{ invalid");
        let err: CtlError = result.unwrap_err().into();
        assert!(matches!(err, CtlError::SerializationError(_)));
    }

    #[test]
    fn test_serde_yaml_error_conversion() {
        let result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: content:");
        let err: CtlError = result.unwrap_err().into();
        assert!(matches!(err, CtlError::SerializationError(_)));
    }
}
