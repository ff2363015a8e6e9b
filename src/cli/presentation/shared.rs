//! Shared presentation helpers.

use crate::error::ControlError;
use owo_colors::OwoColorize;
use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T) -> Result<String, ControlError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ControlError::ConfigError(format!("Failed to render JSON output: {}", e)))
}

pub fn heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// Dim `text` when it describes something disabled
pub fn dim_if(text: String, disabled: bool, color: bool) -> String {
    if disabled && color {
        format!("{}", text.dimmed())
    } else if disabled {
        format!("{} (disabled)", text)
    } else {
        text
    }
}
