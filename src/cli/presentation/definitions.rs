//! Element definition and validation presentation.

use super::shared::to_json;
use crate::config::OutputFormat;
use crate::context::ElementType;
use crate::definitions::{ElementDefinition, ToolbarEntry};
use crate::error::ControlError;
use crate::rules::RuleEntry;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DefinitionView {
    element_type: ElementType,
    toolbar: Vec<&'static str>,
    menu_sections: Vec<&'static str>,
    tool_panel_sections: Vec<&'static str>,
    rules: Vec<RuleView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RuleView {
    control: &'static str,
    excluded: bool,
}

const SPACER: &str = "|";

impl From<&ElementDefinition> for DefinitionView {
    fn from(definition: &ElementDefinition) -> Self {
        Self {
            element_type: definition.element_type,
            toolbar: definition
                .toolbar
                .iter()
                .map(|entry| match entry {
                    ToolbarEntry::Control(id) => *id,
                    ToolbarEntry::Spacer => SPACER,
                })
                .collect(),
            menu_sections: definition.menu_sections.clone(),
            tool_panel_sections: definition.tool_panel_sections.clone(),
            rules: definition
                .rules
                .ids()
                .map(|id| RuleView {
                    control: id,
                    excluded: matches!(definition.rules.get(id), Some(RuleEntry::Exclude)),
                })
                .collect(),
        }
    }
}

pub fn format_definitions(
    definitions: &[&ElementDefinition],
    format: OutputFormat,
) -> Result<String, ControlError> {
    let views: Vec<DefinitionView> = definitions.iter().map(|d| DefinitionView::from(*d)).collect();
    match format {
        OutputFormat::Json => to_json(&views),
        OutputFormat::Text => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Type", "Toolbar", "Menu", "Tool panel", "Rules"]);
            for view in &views {
                let rules: Vec<String> = view
                    .rules
                    .iter()
                    .map(|r| {
                        if r.excluded {
                            format!("!{}", r.control)
                        } else {
                            r.control.to_string()
                        }
                    })
                    .collect();
                table.add_row(vec![
                    view.element_type.to_string(),
                    view.toolbar.join(" "),
                    view.menu_sections.join("\n"),
                    view.tool_panel_sections.join("\n"),
                    rules.join("\n"),
                ]);
            }
            Ok(table.to_string())
        }
    }
}

pub fn format_validation(
    errors: &[String],
    definitions: usize,
    controls: usize,
    format: OutputFormat,
) -> Result<String, ControlError> {
    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "valid": errors.is_empty(),
            "definitions": definitions,
            "controls": controls,
            "errors": errors,
        })),
        OutputFormat::Text if errors.is_empty() => Ok(format!(
            "Validation passed:\n  Definitions: {}\n  Controls: {}\n  All checks passed",
            definitions, controls
        )),
        OutputFormat::Text => {
            let mut s = format!(
                "Validation failed:\n  Definitions: {}\n  Controls: {}\n\nErrors ({}):",
                definitions,
                controls,
                errors.len()
            );
            for e in errors {
                s.push_str(&format!("\n  - {}", e));
            }
            Ok(s)
        }
    }
}
