//! Activation report presentation.

use super::shared::to_json;
use crate::config::OutputFormat;
use crate::error::ControlError;
use crate::runtime::HostRequest;
use serde::Serialize;

/// What an activation did to the menu and the host
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationReport {
    pub control: String,
    pub path: Vec<String>,
    /// One entry per `close_menu` call: the `launching_dialog` flag
    pub menu_closes: Vec<bool>,
    pub host_requests: Vec<HostRequest>,
}

pub fn format_activation(
    report: &ActivationReport,
    format: OutputFormat,
) -> Result<String, ControlError> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => {
            let mut target = report.control.clone();
            for step in &report.path {
                target.push_str(" > ");
                target.push_str(step);
            }
            let mut lines = vec![format!("Activated {}", target)];
            for launching_dialog in &report.menu_closes {
                lines.push(if *launching_dialog {
                    "  menu closed (dialog launching)".to_string()
                } else {
                    "  menu closed".to_string()
                });
            }
            for request in &report.host_requests {
                lines.push(format!("  host: {:?}", request));
            }
            Ok(lines.join("\n"))
        }
    }
}
