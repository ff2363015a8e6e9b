//! Merge rules: defaults and override order.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with the built-in defaults as its lowest layer.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("engine.validate_on_load", true)?
        .set_default("engine.max_menu_depth", 3_i64)?
        .set_default("output.format", "text")?
        .set_default("output.color", true)
}
