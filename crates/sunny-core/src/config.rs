use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Environment variable overriding `loader.delay_ms`.
pub const DELAY_ENV_VAR: &str = "SUNNY_LOAD_DELAY_MS";

/// Upper bound on `ui.skeleton_cards`.
pub const MAX_SKELETON_CARDS: usize = 48;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Location loader settings
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Presentation settings
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where locations come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Hard-coded catalog served after an artificial delay
    #[default]
    Mock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Simulated fetch latency, also used by refresh
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    #[serde(default)]
    pub source: SourceKind,
}

fn default_delay_ms() -> u64 {
    1500
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            source: SourceKind::default(),
        }
    }
}

impl LoaderConfig {
    pub fn delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Number of placeholder cards shown while loading
    #[serde(default = "default_skeleton_cards")]
    pub skeleton_cards: usize,

    /// Show the caption under each location card
    #[serde(default = "default_show_footer")]
    pub show_footer: bool,
}

fn default_skeleton_cards() -> usize {
    6
}

fn default_show_footer() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            skeleton_cards: default_skeleton_cards(),
            show_footer: default_show_footer(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            loader: LoaderConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sunny")
}

impl Config {
    /// Load configuration from the user config directory, creating a default
    /// file if it doesn't exist. Environment overrides are applied afterwards.
    pub fn load() -> Result<Self> {
        let delay = std::env::var(DELAY_ENV_VAR).ok();
        Self::load_with_override(&Self::config_path(), delay.as_deref())
    }

    /// Load from `path`, then apply a delay override if one is given.
    ///
    /// The override only affects the returned value; the file keeps what it had.
    pub fn load_with_override(path: &Path, delay_override: Option<&str>) -> Result<Self> {
        let mut config = Self::load_from(path)?;
        if let Some(value) = delay_override {
            config.apply_delay_override(value);
        }
        Ok(config)
    }

    /// Load configuration from an explicit path, writing defaults there if missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let mut config = Self::default();
            if let Some(parent) = path.parent() {
                config.config_dir = parent.to_path_buf();
            }
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

        Ok(config)
    }

    /// Apply a `SUNNY_LOAD_DELAY_MS` style override. Unparseable values are ignored.
    pub fn apply_delay_override(&mut self, value: &str) {
        match value.trim().parse::<u64>() {
            Ok(ms) => {
                tracing::debug!("Load delay overridden to {}ms", ms);
                self.loader.delay_ms = ms;
            }
            Err(e) => {
                tracing::warn!("Ignoring {}={:?}: {}", DELAY_ENV_VAR, value, e);
            }
        }
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.loader.delay_ms == 0 {
            result.add_warning("loader.delay_ms", "Load delay is 0; loading state will flash");
        } else if self.loader.delay_ms > 60_000 {
            result.add_warning("loader.delay_ms", "Load delay is more than a minute");
        }

        if self.ui.skeleton_cards == 0 {
            result.add_error("ui.skeleton_cards", "At least one skeleton card is required");
        } else if self.ui.skeleton_cards > MAX_SKELETON_CARDS {
            result.add_error(
                "ui.skeleton_cards",
                format!("At most {} skeleton cards are allowed", MAX_SKELETON_CARDS),
            );
        }

        if self.logging.filter.trim().is_empty() {
            result.add_error("logging.filter", "Log filter must not be empty");
        }

        result
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Path to the configuration file
    pub fn config_path() -> PathBuf {
        default_config_dir().join("config.toml")
    }
}
