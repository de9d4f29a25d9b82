use thiserror::Error;

/// Fallback message used when the analysis service fails without saying why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Unknown error during analysis";

/// Failure of a single call to the analysis service.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Text shown to the user in the failure notification.
    pub fn user_message(&self) -> String {
        format!("Failed to analyze: {}", self)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AnalysisError::Remote { status, .. } => Some(*status),
            AnalysisError::Network(e) => e.status().map(|s| s.as_u16()),
            AnalysisError::Decode(_) => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AnalyzerError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AnalyzerError::IoError(e) => format!("Could not read or write a file: {}", e),
            AnalyzerError::ConfigError { message } => format!("Configuration problem: {}", message),
            AnalyzerError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            AnalyzerError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AnalyzerError::IoError(_) => "Check that the path exists and is readable",
            AnalyzerError::ConfigError { .. }
            | AnalyzerError::ConfigValidationError { .. }
            | AnalyzerError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line arguments and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_user_message() {
        let err = AnalysisError::Remote {
            status: 400,
            message: "bad topic".to_string(),
        };
        assert_eq!(err.user_message(), "Failed to analyze: bad topic");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_config_error_suggestion() {
        let err = AnalyzerError::InvalidConfigValueError {
            field: "service.endpoint".to_string(),
            value: "invalid-url".to_string(),
            reason: "Invalid URL format".to_string(),
        };
        assert!(err.user_friendly_message().contains("service.endpoint"));
        assert!(err.recovery_suggestion().contains("configuration"));
    }
}
