use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for DomainError {
    fn from(err: config::ConfigError) -> Self {
        Self::configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::validation("Email can't be blank").to_string(),
            "Validation error: Email can't be blank"
        );
        assert_eq!(
            DomainError::configuration("missing port").to_string(),
            "Configuration error: missing port"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err: DomainError = config::ConfigError::Message("bad value".to_string()).into();
        assert!(matches!(err, DomainError::Configuration { .. }));
    }
}
