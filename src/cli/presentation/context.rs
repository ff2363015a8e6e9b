//! Control context presentation.

use super::shared::to_json;
use crate::config::OutputFormat;
use crate::context::ControlContext;
use crate::error::ControlError;

pub fn format_context(ctx: &ControlContext, format: OutputFormat) -> Result<String, ControlError> {
    match format {
        OutputFormat::Json => to_json(ctx),
        OutputFormat::Text => {
            let value = serde_json::to_value(ctx).map_err(|e| {
                ControlError::ConfigError(format!("Failed to render context: {}", e))
            })?;
            let Some(fields) = value.as_object() else {
                return Ok(value.to_string());
            };
            let width = fields.keys().map(String::len).max().unwrap_or(0);
            let lines: Vec<String> = fields
                .iter()
                .map(|(name, value)| {
                    let value = match value {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    format!("{:<width$}  {}", name, value, width = width)
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
