//! Tool panel surface.

use super::{ControlResolver, ResolvedPanel};
use crate::context::ControlContext;
use crate::definitions::ElementDefinition;
use crate::error::ControlError;
use crate::registry::ControlDefinition;
use crate::rules::Surface;
use tracing::debug;

impl<'r> ControlResolver<'r> {
    /// Resolve the tool panel sections of `definition`
    ///
    /// Only visibility applies here; commands listed in a panel section are
    /// ignored.
    pub fn resolve_panel(
        &self,
        definition: &ElementDefinition,
        ctx: &ControlContext,
    ) -> Result<Vec<ResolvedPanel<'r>>, ControlError> {
        let registry = self.registry;
        let mut panels = Vec::new();

        for section_id in &definition.tool_panel_sections {
            let section = registry.require_section(section_id, Surface::ToolPanel)?;
            let owner = format!("section '{}'", section.id);

            for id in &section.controls {
                let panel = match registry.require(id, &owner)? {
                    ControlDefinition::Panel(panel) => panel,
                    ControlDefinition::Command(_) => continue,
                };
                if definition
                    .effective_rule(id, Surface::ToolPanel)
                    .is_visible(ctx)
                {
                    panels.push(ResolvedPanel {
                        control_id: panel.id,
                        renderer: panel.renderer.as_ref(),
                    });
                }
            }
        }

        debug!(
            element_type = %definition.element_type,
            panels = panels.len(),
            "Resolved tool panel"
        );
        Ok(panels)
    }
}
