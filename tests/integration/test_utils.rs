//! Shared fixtures for integration tests

use canvas_controls::engine::ControlEngine;
use canvas_controls::panel::{PanelState, SharedPanelState};
use canvas_controls::resolve::{ResolvedControl, ToolbarItem};
use canvas_controls::ResolvedSurfaces;
use parking_lot::RwLock;
use std::sync::Arc;

pub fn panel_state() -> SharedPanelState {
    Arc::new(RwLock::new(PanelState::default()))
}

pub fn builtin_engine() -> ControlEngine {
    ControlEngine::builtin(panel_state()).unwrap()
}

/// Toolbar layout as ids, with "|" for spacers
pub fn toolbar_layout(surfaces: &ResolvedSurfaces<'_>) -> Vec<&'static str> {
    surfaces
        .toolbar
        .iter()
        .map(|item| match item {
            ToolbarItem::Control(control) => control.id(),
            ToolbarItem::Spacer => "|",
        })
        .collect()
}

/// Menu sections as ids
pub fn menu_layout(surfaces: &ResolvedSurfaces<'_>) -> Vec<Vec<&'static str>> {
    surfaces
        .menu
        .iter()
        .map(|section| section.iter().map(ResolvedControl::id).collect())
        .collect()
}

pub fn panel_layout(surfaces: &ResolvedSurfaces<'_>) -> Vec<&'static str> {
    surfaces.panel.iter().map(|p| p.control_id).collect()
}

pub fn toolbar_control<'a, 'r>(
    surfaces: &'a ResolvedSurfaces<'r>,
    id: &str,
) -> Option<&'a ResolvedControl<'r>> {
    surfaces
        .toolbar
        .iter()
        .filter_map(ToolbarItem::control)
        .find(|c| c.id() == id)
}

pub fn menu_control<'a, 'r>(
    surfaces: &'a ResolvedSurfaces<'r>,
    id: &str,
) -> Option<&'a ResolvedControl<'r>> {
    surfaces.menu.iter().flatten().find(|c| c.id() == id)
}
