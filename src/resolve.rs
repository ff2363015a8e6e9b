//! Resolution Engine
//!
//! Turns an element definition and a live context into render-ready output for
//! each surface. Resolution is synchronous and recomputed on every call: the
//! resolver holds nothing but a borrowed registry, never invokes actions, and
//! never touches the runtime handle itself.
//!
//! A control id missing from the registry is a composition defect and fails
//! the whole call. Predicates are trusted to be total; a panicking predicate
//! unwinds through the resolver untouched.

use crate::context::ControlContext;
use crate::definitions::ElementDefinition;
use crate::error::ControlError;
use crate::menu::MenuRow;
use crate::panel::PanelRenderer;
use crate::registry::{ControlDefinition, ControlRegistry};
use crate::rules::{ControlId, EffectiveRule, Surface};
use crate::runtime::{CanvasHost, MenuRuntime};
use tracing::info;

mod menu;
mod panel;
mod toolbar;

pub use toolbar::normalize_spacers;

/// A control that survived resolution on some surface
#[derive(Debug, Clone)]
pub struct ResolvedControl<'r> {
    pub definition: &'r ControlDefinition,
    pub enabled: bool,
    /// Render-ready row; `None` for panels
    pub menu_row: Option<MenuRow>,
}

impl<'r> ResolvedControl<'r> {
    pub fn id(&self) -> ControlId {
        self.definition.id()
    }

    /// Run the command's own action
    pub async fn activate(
        &self,
        ctx: &ControlContext,
        runtime: &dyn MenuRuntime,
        host: &dyn CanvasHost,
    ) -> Result<(), ControlError> {
        let command = match self.definition {
            ControlDefinition::Command(command) => command,
            ControlDefinition::Panel(panel) => {
                return Err(ControlError::NotACommand(panel.id.to_string()))
            }
        };
        if !self.enabled {
            return Err(ControlError::Disabled(command.id.to_string()));
        }
        info!(control = command.id, "Activating control");
        command
            .action
            .run(ctx, runtime, host)
            .await
            .map_err(|e| ControlError::ActionFailed {
                control: command.id.to_string(),
                message: format!("{:#}", e),
            })
    }
}

/// One toolbar slot after resolution
#[derive(Debug, Clone)]
pub enum ToolbarItem<'r> {
    Control(ResolvedControl<'r>),
    Spacer,
}

impl<'r> ToolbarItem<'r> {
    pub fn is_spacer(&self) -> bool {
        matches!(self, ToolbarItem::Spacer)
    }

    pub fn control(&self) -> Option<&ResolvedControl<'r>> {
        match self {
            ToolbarItem::Control(control) => Some(control),
            ToolbarItem::Spacer => None,
        }
    }
}

/// A panel that should be shown
#[derive(Clone, Copy)]
pub struct ResolvedPanel<'r> {
    pub control_id: ControlId,
    pub renderer: &'r dyn PanelRenderer,
}

impl std::fmt::Debug for ResolvedPanel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedPanel")
            .field("control_id", &self.control_id)
            .finish()
    }
}

/// Predicates for `control_id` on `surface` under `definition`
///
/// Precedence: exclusion, then the surface policy, then the general rule,
/// then always-true.
pub fn effective_rule(
    definition: &ElementDefinition,
    control_id: &str,
    surface: Surface,
) -> EffectiveRule {
    definition.effective_rule(control_id, surface)
}

/// Resolves definitions against a fixed registry
#[derive(Debug, Clone, Copy)]
pub struct ControlResolver<'r> {
    registry: &'r ControlRegistry,
}

impl<'r> ControlResolver<'r> {
    pub fn new(registry: &'r ControlRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r ControlRegistry {
        self.registry
    }
}
