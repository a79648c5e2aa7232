pub mod app;
pub mod config;
pub mod error;

pub use app::App;
pub use config::{
    Config, LoaderConfig, LoggingConfig, SourceKind, UiConfig, ValidationResult, MAX_SKELETON_CARDS,
};
pub use error::{AppError, ConfigError, LoadError};

use anyhow::Result;

/// Initialize tracing for the application.
///
/// `RUST_LOG` wins over `default_filter` when set. Calling this twice is harmless.
pub fn init(default_filter: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }

    tracing::info!("Sunny core initialized");
    Ok(())
}
