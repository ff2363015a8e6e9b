//! Toolbar surface.

use super::{ControlResolver, ResolvedControl, ToolbarItem};
use crate::context::ControlContext;
use crate::definitions::{ElementDefinition, ToolbarEntry};
use crate::error::ControlError;
use crate::menu::MenuRow;
use crate::registry::ControlDefinition;
use crate::rules::Surface;
use crate::runtime::MenuRuntime;
use tracing::debug;

impl<'r> ControlResolver<'r> {
    /// Resolve the toolbar layout of `definition`
    ///
    /// Invisible controls are dropped, not disabled. Commands carry a single
    /// row built from their static metadata so they can move to an overflow
    /// menu unchanged. Spacers are normalized afterwards.
    pub fn resolve_toolbar(
        &self,
        definition: &ElementDefinition,
        ctx: &ControlContext,
        _runtime: &dyn MenuRuntime,
    ) -> Result<Vec<ToolbarItem<'r>>, ControlError> {
        let registry = self.registry;
        let owner = format!("{} toolbar", definition.element_type);
        let mut items = Vec::with_capacity(definition.toolbar.len());

        for entry in &definition.toolbar {
            let id = match entry {
                ToolbarEntry::Spacer => {
                    items.push(ToolbarItem::Spacer);
                    continue;
                }
                ToolbarEntry::Control(id) => *id,
            };

            let control = registry.require(id, &owner)?;
            let rule = definition.effective_rule(id, Surface::Toolbar);
            if !rule.is_visible(ctx) {
                continue;
            }
            let enabled = rule.is_enabled(ctx);
            let menu_row = match control {
                ControlDefinition::Command(command) => Some(MenuRow::Command(
                    command.default_row().disabled(!enabled),
                )),
                ControlDefinition::Panel(_) => None,
            };
            items.push(ToolbarItem::Control(ResolvedControl {
                definition: control,
                enabled,
                menu_row,
            }));
        }

        let items = normalize_spacers(items, ToolbarItem::is_spacer);
        debug!(
            element_type = %definition.element_type,
            items = items.len(),
            "Resolved toolbar"
        );
        Ok(items)
    }
}

/// Collapse spacer runs and trim spacers from both ends
///
/// Idempotent: the output never has adjacent, leading, or trailing spacers.
pub fn normalize_spacers<T>(items: Vec<T>, is_spacer: impl Fn(&T) -> bool) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if is_spacer(&item) && out.last().map_or(true, |last| is_spacer(last)) {
            continue;
        }
        out.push(item);
    }
    if out.last().is_some_and(|last| is_spacer(last)) {
        out.pop();
    }
    out
}
