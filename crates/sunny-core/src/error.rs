//! Centralized error types for Sunny.
//!
//! Every error carries a `user_message()` suitable for display in the page,
//! while the `Display` impl keeps the full context for logs.

use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Load failed: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0:#}")]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for AppError {
    /// Recover a typed error from behind any context layers.
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<ConfigError>() {
            Ok(e) => return AppError::Config(e),
            Err(err) => err,
        };
        match err.downcast::<LoadError>() {
            Ok(e) => AppError::Load(e),
            Err(err) => AppError::Other(err),
        }
    }
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Load(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Failure to obtain the location list from a source.
///
/// The built-in mock source never produces one of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Location source unavailable")]
    SourceUnavailable,
}

impl LoadError {
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::Network(_) => "Unable to reach the forecast service. Check your connection.",
            LoadError::Parse(_) => "Received an unexpected forecast. Please try again.",
            LoadError::SourceUnavailable => "Forecasts are unavailable right now. Please try again later.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_non_empty() {
        let errors = vec![
            AppError::from(LoadError::SourceUnavailable),
            AppError::from(LoadError::Network("reset".into())),
            AppError::from(LoadError::Parse("bad json".into())),
            AppError::from(ConfigError::Invalid("x".into())),
            AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk")),
            AppError::from(anyhow::anyhow!("boom")),
        ];

        for err in errors {
            assert!(!err.user_message().is_empty(), "empty message for {err:?}");
        }
    }

    #[test]
    fn test_app_error_conversion() {
        let app_err: AppError = LoadError::SourceUnavailable.into();
        assert!(matches!(app_err, AppError::Load(LoadError::SourceUnavailable)));
    }

    #[test]
    fn test_user_message_propagation() {
        let app_err = AppError::Config(ConfigError::ParseError("config.toml".into()));
        assert_eq!(
            app_err.user_message(),
            "Configuration file is malformed. Check your settings."
        );
    }

    #[test]
    fn test_anyhow_recovers_typed_errors() {
        let wrapped = anyhow::Error::new(ConfigError::ParseError("config.toml: bad".into()))
            .context("Failed to load config");
        assert!(matches!(
            AppError::from(wrapped),
            AppError::Config(ConfigError::ParseError(_))
        ));

        let load = anyhow::Error::new(LoadError::SourceUnavailable);
        assert!(matches!(
            AppError::from(load),
            AppError::Load(LoadError::SourceUnavailable)
        ));

        let other = AppError::from(anyhow::anyhow!("boom").context("while starting"));
        assert!(matches!(other, AppError::Other(_)));
        assert_eq!(other.to_string(), "while starting: boom");
    }

    #[test]
    fn test_display_keeps_context() {
        let err = AppError::from(LoadError::Network("connection reset".into()));
        assert!(err.to_string().contains("connection reset"));
    }
}
