//! Resolved surfaces presentation.

use super::shared::{dim_if, heading, to_json};
use crate::cli::parse::SurfaceFilter;
use crate::config::OutputFormat;
use crate::context::ElementType;
use crate::engine::ResolvedSurfaces;
use crate::error::ControlError;
use crate::menu::MenuRow;
use crate::panel::PanelView;
use crate::registry::ControlKind;
use crate::resolve::ToolbarItem;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ToolbarItemView {
    Control {
        id: &'static str,
        label: &'static str,
        kind: &'static str,
        enabled: bool,
        #[serde(rename = "iconOnly", skip_serializing_if = "std::ops::Not::not")]
        icon_only: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        tooltip: Option<&'static str>,
    },
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MenuRowView {
    Command {
        id: String,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        shortcut: Option<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        checked: Option<bool>,
        enabled: bool,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<MenuRowView>,
    },
    Help {
        text: String,
    },
}

impl From<&MenuRow> for MenuRowView {
    fn from(row: &MenuRow) -> Self {
        match row {
            MenuRow::Command(command) => MenuRowView::Command {
                id: command.id.clone(),
                label: command.label.clone(),
                shortcut: command.shortcut,
                checked: command.checked,
                enabled: !command.disabled,
                children: command.sub_menu_items.iter().map(MenuRowView::from).collect(),
            },
            MenuRow::Help(help) => MenuRowView::Help {
                text: help.text.clone(),
            },
        }
    }
}

/// Serializable snapshot of a resolution result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfacesView {
    pub element_type: ElementType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolbar: Option<Vec<ToolbarItemView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<Vec<Vec<MenuRowView>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<Vec<PanelView>>,
}

pub fn surfaces_view(surfaces: &ResolvedSurfaces<'_>, filter: SurfaceFilter) -> SurfacesView {
    let toolbar = filter.includes(SurfaceFilter::Toolbar).then(|| {
        surfaces
            .toolbar
            .iter()
            .map(|item| match item {
                ToolbarItem::Spacer => ToolbarItemView::Spacer,
                ToolbarItem::Control(control) => {
                    let hints = control.definition.toolbar_hints();
                    ToolbarItemView::Control {
                        id: control.id(),
                        label: control.definition.label(),
                        kind: match control.definition.kind() {
                            ControlKind::Command => "command",
                            ControlKind::Panel => "panel",
                        },
                        enabled: control.enabled,
                        icon_only: hints.icon_only,
                        tooltip: hints.tooltip,
                    }
                }
            })
            .collect()
    });

    let menu = filter.includes(SurfaceFilter::Menu).then(|| {
        surfaces
            .menu
            .iter()
            .map(|section| {
                section
                    .iter()
                    .filter_map(|control| control.menu_row.as_ref())
                    .map(MenuRowView::from)
                    .collect()
            })
            .collect()
    });

    let panel = filter.includes(SurfaceFilter::Panel).then(|| {
        surfaces
            .panel
            .iter()
            .map(|panel| panel.renderer.render(&surfaces.context))
            .collect()
    });

    SurfacesView {
        element_type: surfaces.context.element_type,
        toolbar,
        menu,
        panel,
    }
}

pub fn format_surfaces(
    view: &SurfacesView,
    format: OutputFormat,
    color: bool,
) -> Result<String, ControlError> {
    match format {
        OutputFormat::Json => to_json(view),
        OutputFormat::Text => Ok(format_surfaces_text(view, color)),
    }
}

fn format_surfaces_text(view: &SurfacesView, color: bool) -> String {
    let mut out = vec![format!("Element type: {}", view.element_type)];

    if let Some(toolbar) = &view.toolbar {
        out.push(String::new());
        out.push(heading("Toolbar", color));
        if toolbar.is_empty() {
            out.push("  (empty)".to_string());
        }
        for item in toolbar {
            match item {
                ToolbarItemView::Spacer => out.push("  ----".to_string()),
                ToolbarItemView::Control {
                    id,
                    label,
                    enabled,
                    icon_only,
                    tooltip,
                    ..
                } => {
                    let mut line = format!("  {:<20} {}", id, label);
                    if *icon_only {
                        line.push_str(" [icon]");
                    }
                    if let Some(tooltip) = tooltip {
                        line.push_str(&format!(" \"{}\"", tooltip));
                    }
                    out.push(dim_if(line, !enabled, color));
                }
            }
        }
    }

    if let Some(menu) = &view.menu {
        out.push(String::new());
        out.push(heading("Menu", color));
        if menu.is_empty() {
            out.push("  (empty)".to_string());
        }
        for (i, section) in menu.iter().enumerate() {
            if i > 0 {
                out.push("  ----".to_string());
            }
            for row in section {
                push_menu_row(&mut out, row, 1, color);
            }
        }
    }

    if let Some(panels) = &view.panel {
        out.push(String::new());
        out.push(heading("Tool panel", color));
        if panels.is_empty() {
            out.push("  (empty)".to_string());
        }
        for panel in panels {
            out.push(format!("  {}", panel.title));
            for field in &panel.fields {
                out.push(dim_if(
                    format!("    {} = {}", field.name, field.value),
                    !field.enabled,
                    color,
                ));
            }
        }
    }

    out.join("\n")
}

fn push_menu_row(out: &mut Vec<String>, row: &MenuRowView, depth: usize, color: bool) {
    let indent = "  ".repeat(depth);
    match row {
        MenuRowView::Help { text } => out.push(format!("{}  {}", indent, text)),
        MenuRowView::Command {
            label,
            shortcut,
            checked,
            enabled,
            children,
            ..
        } => {
            let mark = match checked {
                Some(true) => "[x] ",
                Some(false) => "[ ] ",
                None => "",
            };
            let mut line = format!("{}{}{}", indent, mark, label);
            if let Some(shortcut) = shortcut {
                line.push_str(&format!("  ({})", shortcut));
            }
            if !children.is_empty() {
                line.push_str(" >");
            }
            out.push(dim_if(line, !enabled, color));
            for child in children {
                push_menu_row(out, child, depth + 1, color);
            }
        }
    }
}
