use anyhow::Result;
use std::sync::Arc;

use crate::{Config, ConfigError};

/// Application state and lifecycle manager
pub struct App {
    config: Arc<Config>,
}

impl App {
    /// Create an application from the user's configuration file
    pub fn new() -> Result<Self> {
        Ok(Self::with_config(Config::load()?))
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Install logging, then validate the configuration.
    ///
    /// Validation runs after tracing is up so warnings reach the log.
    pub fn initialize(&mut self) -> Result<()> {
        crate::init(&self.config.logging.filter)?;

        let validation = self.config.validate();
        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }
        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        tracing::info!(
            "Application initialized (source: {:?}, delay: {}ms)",
            self.config.loader.source,
            self.config.loader.delay_ms
        );
        Ok(())
    }

    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }
}
