//! Menu surface.

use super::{ControlResolver, ResolvedControl};
use crate::context::ControlContext;
use crate::definitions::ElementDefinition;
use crate::error::ControlError;
use crate::menu::{apply_availability, MenuRow};
use crate::registry::ControlDefinition;
use crate::rules::Surface;
use crate::runtime::MenuRuntime;
use tracing::debug;

impl<'r> ControlResolver<'r> {
    /// Resolve the menu sections of `definition`
    ///
    /// Panels are skipped. Each visible command's row goes through the
    /// availability cascade; sections left empty are omitted.
    pub fn resolve_menu(
        &self,
        definition: &ElementDefinition,
        ctx: &ControlContext,
        runtime: &dyn MenuRuntime,
    ) -> Result<Vec<Vec<ResolvedControl<'r>>>, ControlError> {
        let registry = self.registry;
        let mut sections = Vec::with_capacity(definition.menu_sections.len());

        for section_id in &definition.menu_sections {
            let section = registry.require_section(section_id, Surface::Menu)?;
            let owner = format!("section '{}'", section.id);
            let mut resolved = Vec::with_capacity(section.controls.len());

            for id in &section.controls {
                let control = registry.require(id, &owner)?;
                let command = match control {
                    ControlDefinition::Command(command) => command,
                    ControlDefinition::Panel(_) => continue,
                };

                let rule = definition.effective_rule(id, Surface::Menu);
                if !rule.is_visible(ctx) {
                    continue;
                }

                let mut row = command.build_menu_row(ctx, runtime);
                if let MenuRow::Command(top) = &mut row {
                    top.disabled = top.disabled || !rule.is_enabled(ctx);
                }
                let Some(row) = apply_availability(row, ctx, true) else {
                    continue;
                };

                let enabled = row.as_command().is_some_and(|c| !c.disabled);
                resolved.push(ResolvedControl {
                    definition: control,
                    enabled,
                    menu_row: Some(row),
                });
            }

            if !resolved.is_empty() {
                sections.push(resolved);
            }
        }

        debug!(
            element_type = %definition.element_type,
            sections = sections.len(),
            "Resolved menu"
        );
        Ok(sections)
    }
}
