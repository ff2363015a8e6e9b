//! Element Definitions
//!
//! Per element type: the toolbar layout, the menu and tool panel sections that
//! apply, and the rule map (merged presets plus per-type overrides).

use crate::context::ElementType;
use crate::error::ControlError;
use crate::registry::{ControlRegistry, SectionId};
use crate::rules::{merge, AvailabilityRulesMap, ControlId, EffectiveRule, RuleEntry, Surface};
use std::collections::BTreeMap;

pub mod builtins;

/// One slot of a toolbar layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarEntry {
    Control(ControlId),
    Spacer,
}

impl From<ControlId> for ToolbarEntry {
    fn from(id: ControlId) -> Self {
        ToolbarEntry::Control(id)
    }
}

/// Surface layout and rules for one element type
#[derive(Debug, Clone)]
pub struct ElementDefinition {
    pub element_type: ElementType,
    pub toolbar: Vec<ToolbarEntry>,
    pub menu_sections: Vec<SectionId>,
    pub tool_panel_sections: Vec<SectionId>,
    pub rules: AvailabilityRulesMap,
}

impl ElementDefinition {
    pub fn builder(element_type: ElementType) -> ElementDefinitionBuilder {
        ElementDefinitionBuilder {
            definition: ElementDefinition {
                element_type,
                toolbar: Vec::new(),
                menu_sections: Vec::new(),
                tool_panel_sections: Vec::new(),
                rules: AvailabilityRulesMap::new(),
            },
        }
    }

    /// Predicates for `control_id` on `surface`
    pub fn effective_rule(&self, control_id: &str, surface: Surface) -> EffectiveRule {
        self.rules.effective(control_id, surface)
    }

    /// Check every id this definition names against `registry`
    pub fn validate(&self, registry: &ControlRegistry) -> Vec<ControlError> {
        let mut errors = Vec::new();
        let owner = format!("{} toolbar", self.element_type);

        for entry in &self.toolbar {
            if let ToolbarEntry::Control(id) = entry {
                if let Err(e) = registry.require(id, &owner) {
                    errors.push(e);
                }
            }
        }
        for section in &self.menu_sections {
            if let Err(e) = registry.require_section(section, Surface::Menu) {
                errors.push(e);
            }
        }
        for section in &self.tool_panel_sections {
            if let Err(e) = registry.require_section(section, Surface::ToolPanel) {
                errors.push(e);
            }
        }
        let owner = format!("{} rules", self.element_type);
        for id in self.rules.ids() {
            if let Err(e) = registry.require(id, &owner) {
                errors.push(e);
            }
        }
        errors
    }
}

pub struct ElementDefinitionBuilder {
    definition: ElementDefinition,
}

impl ElementDefinitionBuilder {
    pub fn toolbar(mut self, entries: &[ToolbarEntry]) -> Self {
        self.definition.toolbar = entries.to_vec();
        self
    }

    pub fn menu_sections(mut self, sections: &[SectionId]) -> Self {
        self.definition.menu_sections = sections.to_vec();
        self
    }

    pub fn tool_panel_sections(mut self, sections: &[SectionId]) -> Self {
        self.definition.tool_panel_sections = sections.to_vec();
        self
    }

    /// Merge preset fragments, in order, onto the current rules
    pub fn presets(mut self, fragments: impl IntoIterator<Item = AvailabilityRulesMap>) -> Self {
        let merged = merge(fragments);
        self.definition.rules.extend(merged);
        self
    }

    /// Replace the entry for one control
    pub fn rule(mut self, id: ControlId, entry: impl Into<RuleEntry>) -> Self {
        self.definition.rules = std::mem::take(&mut self.definition.rules).with(id, entry);
        self
    }

    /// Hide and disable one control for this element type only
    pub fn exclude(self, id: ControlId) -> Self {
        self.rule(id, RuleEntry::Exclude)
    }

    pub fn build(self) -> ElementDefinition {
        self.definition
    }
}

/// All element definitions, keyed by type
#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
    definitions: BTreeMap<ElementType, ElementDefinition>,
}

impl DefinitionTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        builtins::builtin_definitions()
    }

    pub fn insert(&mut self, definition: ElementDefinition) {
        self.definitions.insert(definition.element_type, definition);
    }

    pub fn get(&self, element_type: ElementType) -> Option<&ElementDefinition> {
        self.definitions.get(&element_type)
    }

    /// Definition for `element_type`, or the `none` definition
    pub fn get_or_none(
        &self,
        element_type: ElementType,
    ) -> Result<&ElementDefinition, ControlError> {
        self.get(element_type)
            .or_else(|| self.get(ElementType::None))
            .ok_or(ControlError::MissingDefinition(ElementType::None))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementDefinition> {
        self.definitions.values()
    }

    /// Validate every definition against `registry`
    pub fn validate(&self, registry: &ControlRegistry) -> Result<(), Vec<ControlError>> {
        let mut errors = Vec::new();
        if self.get(ElementType::None).is_none() {
            errors.push(ControlError::MissingDefinition(ElementType::None));
        }
        for definition in self.iter() {
            errors.extend(definition.validate(registry));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
