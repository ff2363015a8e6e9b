//! Configuration System
//!
//! Layered configuration for the engine and its command-line front end:
//! built-in defaults, the user's global file, workspace files, then
//! `CANVAS_CONTROLS__*` environment variables. Validation collects every
//! problem instead of stopping at the first.

use crate::error::ControlError;
use crate::logging::LoggingConfig;
use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

mod merge;
mod sources;

pub use sources::global_file::global_config_path;

/// Prefix for environment overrides, e.g. `CANVAS_CONTROLS__ENGINE__MAX_MENU_DEPTH`
pub const ENV_PREFIX: &str = "CANVAS_CONTROLS";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub engine: EngineSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

/// Engine behaviour knobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Check the definition table against the registry before first use
    #[serde(default = "default_true")]
    pub validate_on_load: bool,

    /// Deepest menu row nesting `validate` accepts (top level is depth 1)
    #[serde(default = "default_max_menu_depth")]
    pub max_menu_depth: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_menu_depth() -> usize {
    3
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            validate_on_load: default_true(),
            max_menu_depth: default_max_menu_depth(),
        }
    }
}

/// How command output is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Dim disabled rows in text output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_true(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Logging(String),
    Engine(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
            ValidationError::Engine(msg) => write!(f, "Engine: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ControlsConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let logging = &self.logging;
        if !matches!(
            logging.level.as_str(),
            "trace" | "debug" | "info" | "warn" | "error" | "off"
        ) {
            errors.push(ValidationError::Logging(format!(
                "Unknown level '{}'",
                logging.level
            )));
        }
        if logging.format != "text" && logging.format != "json" {
            errors.push(ValidationError::Logging(format!(
                "Unknown format '{}'",
                logging.format
            )));
        }
        if !matches!(logging.output.as_str(), "stdout" | "stderr" | "file") {
            errors.push(ValidationError::Logging(format!(
                "Unknown output '{}'",
                logging.output
            )));
        }
        if logging.output == "file" && logging.file.as_os_str().is_empty() {
            errors.push(ValidationError::Logging(
                "Log file path cannot be empty".to_string(),
            ));
        }

        if self.engine.max_menu_depth == 0 {
            errors.push(ValidationError::Engine(
                "max_menu_depth must be at least 1".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding every problem into one error
    pub fn ensure_valid(&self) -> Result<(), ControlError> {
        self.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ControlError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })
    }
}

/// Loads [`ControlsConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for `workspace_root`
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `config/config.toml`, workspace `config/{CANVAS_CONTROLS_ENV}.toml`,
    /// environment.
    pub fn load(workspace_root: &Path) -> Result<ControlsConfig, ControlError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = builder.add_source(environment());

        let config: ControlsConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load a single explicit file on top of the defaults
    pub fn load_from_file(path: &Path) -> Result<ControlsConfig, ControlError> {
        if !path.exists() {
            return Err(ControlError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let config: ControlsConfig = merge::merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true))
            .build()?
            .try_deserialize()?;
        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Defaults only
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> ControlsConfig {
        ControlsConfig::default()
    }

    /// Where the global file would be read from, if a home is known
    pub fn global_config_path() -> Option<PathBuf> {
        global_config_path()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Parse a config document held in memory (used for TOML given inline)
pub fn from_toml_str(contents: &str) -> Result<ControlsConfig, ControlError> {
    let config: ControlsConfig = merge::merge_policy::builder_with_defaults()?
        .add_source(File::from_str(contents, config::FileFormat::Toml))
        .build()?
        .try_deserialize()?;
    Ok(config)
}
