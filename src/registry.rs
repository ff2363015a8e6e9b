//! Control Registry
//!
//! The immutable lookup table from control id to definition, plus the named
//! sections the menu and tool panel surfaces draw from. Built once at startup
//! and passed to the resolver explicitly.

use crate::context::ControlContext;
use crate::error::ControlError;
use crate::menu::{CommandRow, MenuRow};
use crate::panel::PanelRenderer;
use crate::rules::{ControlId, Surface};
use crate::runtime::{CommandAction, MenuRuntime};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub mod builtins;
pub mod ids;

pub use ids::SectionId;

/// Builds a menu row that reflects live context (checkmarks, dynamic submenus)
pub type MenuItemFactory = fn(&CommandControl, &ControlContext, &dyn MenuRuntime) -> MenuRow;

/// Toolbar-specific rendering hints
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolbarHints {
    pub icon_only: bool,
    pub tooltip: Option<&'static str>,
}

/// Menu-specific rendering hints
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuHints {
    /// Replaces the control label in menus
    pub label: Option<&'static str>,
    pub build_menu_item: Option<MenuItemFactory>,
}

/// A command: something that runs when activated
#[derive(Clone)]
pub struct CommandControl {
    pub id: ControlId,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub shortcut: Option<&'static str>,
    pub action: Arc<dyn CommandAction>,
    pub toolbar: ToolbarHints,
    pub menu: MenuHints,
}

impl CommandControl {
    pub fn new(id: ControlId, label: &'static str, action: impl CommandAction + 'static) -> Self {
        Self {
            id,
            label,
            icon: None,
            shortcut: None,
            action: Arc::new(action),
            toolbar: ToolbarHints::default(),
            menu: MenuHints::default(),
        }
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_shortcut(mut self, shortcut: &'static str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn with_toolbar(mut self, hints: ToolbarHints) -> Self {
        self.toolbar = hints;
        self
    }

    pub fn with_menu_label(mut self, label: &'static str) -> Self {
        self.menu.label = Some(label);
        self
    }

    pub fn with_menu_item(mut self, factory: MenuItemFactory) -> Self {
        self.menu.build_menu_item = Some(factory);
        self
    }

    /// Row built from static metadata only
    pub fn default_row(&self) -> CommandRow {
        CommandRow::new(self.id, self.menu.label.unwrap_or(self.label))
            .with_icon(self.icon)
            .with_shortcut(self.shortcut)
            .with_action(Arc::clone(&self.action))
    }

    /// Row for the menu surface: the factory's when present, else the default
    pub fn build_menu_row(&self, ctx: &ControlContext, runtime: &dyn MenuRuntime) -> MenuRow {
        match self.menu.build_menu_item {
            Some(factory) => factory(self, ctx, runtime),
            None => MenuRow::Command(self.default_row()),
        }
    }
}

impl fmt::Debug for CommandControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandControl")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("shortcut", &self.shortcut)
            .field("toolbar", &self.toolbar)
            .field("has_menu_factory", &self.menu.build_menu_item.is_some())
            .finish()
    }
}

/// A side-panel control bound to shared panel state
#[derive(Clone)]
pub struct PanelControl {
    pub id: ControlId,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub renderer: Arc<dyn PanelRenderer>,
}

impl PanelControl {
    pub fn new(id: ControlId, label: &'static str, renderer: impl PanelRenderer + 'static) -> Self {
        Self {
            id,
            label,
            icon: None,
            renderer: Arc::new(renderer),
        }
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }
}

impl fmt::Debug for PanelControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelControl")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Command,
    Panel,
}

/// Concrete definition behind a control id
#[derive(Debug, Clone)]
pub enum ControlDefinition {
    Command(CommandControl),
    Panel(PanelControl),
}

impl ControlDefinition {
    pub fn id(&self) -> ControlId {
        match self {
            ControlDefinition::Command(c) => c.id,
            ControlDefinition::Panel(p) => p.id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ControlDefinition::Command(c) => c.label,
            ControlDefinition::Panel(p) => p.label,
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            ControlDefinition::Command(c) => c.icon,
            ControlDefinition::Panel(p) => p.icon,
        }
    }

    /// Toolbar hints; panels always render with their label
    pub fn toolbar_hints(&self) -> ToolbarHints {
        match self {
            ControlDefinition::Command(c) => c.toolbar,
            ControlDefinition::Panel(_) => ToolbarHints::default(),
        }
    }

    pub fn kind(&self) -> ControlKind {
        match self {
            ControlDefinition::Command(_) => ControlKind::Command,
            ControlDefinition::Panel(_) => ControlKind::Panel,
        }
    }
}

impl From<CommandControl> for ControlDefinition {
    fn from(command: CommandControl) -> Self {
        ControlDefinition::Command(command)
    }
}

impl From<PanelControl> for ControlDefinition {
    fn from(panel: PanelControl) -> Self {
        ControlDefinition::Panel(panel)
    }
}

/// Named grouping of controls for one surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSection {
    pub id: SectionId,
    pub surface: Surface,
    pub controls: Vec<ControlId>,
}

/// Immutable control and section table
#[derive(Debug, Clone, Default)]
pub struct ControlRegistry {
    controls: HashMap<ControlId, ControlDefinition>,
    sections: HashMap<SectionId, ControlSection>,
}

impl ControlRegistry {
    pub fn builder() -> ControlRegistryBuilder {
        ControlRegistryBuilder::default()
    }

    pub fn get(&self, id: &str) -> Option<&ControlDefinition> {
        self.controls.get(id)
    }

    /// Look up a control that some definition or section depends on
    pub fn require(
        &self,
        id: &str,
        referenced_by: &str,
    ) -> Result<&ControlDefinition, ControlError> {
        self.get(id).ok_or_else(|| ControlError::UnknownControl {
            control: id.to_string(),
            referenced_by: referenced_by.to_string(),
        })
    }

    pub fn section(&self, id: &str) -> Option<&ControlSection> {
        self.sections.get(id)
    }

    /// Look up a section and check it serves `surface`
    pub fn require_section(
        &self,
        id: &str,
        surface: Surface,
    ) -> Result<&ControlSection, ControlError> {
        let section = self
            .section(id)
            .ok_or_else(|| ControlError::UnknownSection(id.to_string()))?;
        if section.surface != surface {
            return Err(ControlError::SectionSurfaceMismatch {
                section: id.to_string(),
                expected: surface,
                actual: section.surface,
            });
        }
        Ok(section)
    }

    /// All controls, sorted by id
    pub fn controls(&self) -> Vec<&ControlDefinition> {
        let mut controls: Vec<_> = self.controls.values().collect();
        controls.sort_by_key(|c| c.id());
        controls
    }

    /// All sections, sorted by id
    pub fn sections(&self) -> Vec<&ControlSection> {
        let mut sections: Vec<_> = self.sections.values().collect();
        sections.sort_by_key(|s| s.id);
        sections
    }
}

/// Collects definitions and sections; `build` checks them for consistency
#[derive(Default)]
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDefinition>,
    sections: Vec<ControlSection>,
}

impl ControlRegistryBuilder {
    pub fn command(mut self, command: CommandControl) -> Self {
        self.controls.push(command.into());
        self
    }

    pub fn panel(mut self, panel: PanelControl) -> Self {
        self.controls.push(panel.into());
        self
    }

    pub fn section(mut self, id: SectionId, surface: Surface, controls: &[ControlId]) -> Self {
        self.sections.push(ControlSection {
            id,
            surface,
            controls: controls.to_vec(),
        });
        self
    }

    /// Reject duplicate ids, toolbar sections, and sections naming unknown controls
    pub fn build(self) -> Result<ControlRegistry, ControlError> {
        let mut controls = HashMap::new();
        for control in self.controls {
            let id = control.id();
            if controls.insert(id, control).is_some() {
                return Err(ControlError::Duplicate(format!("control '{}'", id)));
            }
        }

        let mut sections = HashMap::new();
        for section in self.sections {
            if section.surface == Surface::Toolbar {
                return Err(ControlError::SectionSurfaceMismatch {
                    section: section.id.to_string(),
                    expected: Surface::Menu,
                    actual: Surface::Toolbar,
                });
            }
            for control in &section.controls {
                if !controls.contains_key(control) {
                    return Err(ControlError::UnknownControl {
                        control: control.to_string(),
                        referenced_by: format!("section '{}'", section.id),
                    });
                }
            }
            let id = section.id;
            if sections.insert(id, section).is_some() {
                return Err(ControlError::Duplicate(format!("section '{}'", id)));
            }
        }

        debug!(
            controls = controls.len(),
            sections = sections.len(),
            "Built control registry"
        );
        Ok(ControlRegistry { controls, sections })
    }
}
