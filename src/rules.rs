//! Availability Rules
//!
//! The declarative vocabulary for deciding whether a control is visible and
//! enabled. Rules are built from plain predicates over [`ControlContext`],
//! composed from preset fragments with last-writer-wins merging, and resolved
//! per surface with a fixed precedence:
//!
//! `Exclude` > surface policy > general rule > always true.

use crate::context::ControlContext;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub mod presets;

/// Stable identifier of a control
pub type ControlId = &'static str;

/// A pure, total function of the context
pub type Predicate = fn(&ControlContext) -> bool;

pub fn always(_: &ControlContext) -> bool {
    true
}

pub fn never(_: &ControlContext) -> bool {
    false
}

/// Presentation channel a control can appear on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Surface {
    Toolbar,
    Menu,
    ToolPanel,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surface::Toolbar => f.write_str("toolbar"),
            Surface::Menu => f.write_str("menu"),
            Surface::ToolPanel => f.write_str("toolPanel"),
        }
    }
}

/// Visible/enabled overrides for a single surface
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceRule {
    pub visible: Option<Predicate>,
    pub enabled: Option<Predicate>,
}

impl SurfaceRule {
    pub fn visible(predicate: Predicate) -> Self {
        Self {
            visible: Some(predicate),
            enabled: None,
        }
    }

    pub fn enabled(predicate: Predicate) -> Self {
        Self {
            visible: None,
            enabled: Some(predicate),
        }
    }

    pub fn and_enabled(mut self, predicate: Predicate) -> Self {
        self.enabled = Some(predicate);
        self
    }
}

/// Per-surface overrides of a rule
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfacePolicy {
    pub toolbar: Option<SurfaceRule>,
    pub menu: Option<SurfaceRule>,
    pub tool_panel: Option<SurfaceRule>,
}

impl SurfacePolicy {
    pub fn get(&self, surface: Surface) -> Option<&SurfaceRule> {
        match surface {
            Surface::Toolbar => self.toolbar.as_ref(),
            Surface::Menu => self.menu.as_ref(),
            Surface::ToolPanel => self.tool_panel.as_ref(),
        }
    }

    fn set(&mut self, surface: Surface, rule: SurfaceRule) {
        match surface {
            Surface::Toolbar => self.toolbar = Some(rule),
            Surface::Menu => self.menu = Some(rule),
            Surface::ToolPanel => self.tool_panel = Some(rule),
        }
    }
}

/// Visible/enabled contract for one control
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityRule {
    pub visible: Option<Predicate>,
    pub enabled: Option<Predicate>,
    pub surface_policy: SurfacePolicy,
}

impl AvailabilityRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(mut self, predicate: Predicate) -> Self {
        self.visible = Some(predicate);
        self
    }

    pub fn enabled(mut self, predicate: Predicate) -> Self {
        self.enabled = Some(predicate);
        self
    }

    /// Override visibility/enabling on one surface only
    pub fn on(mut self, surface: Surface, rule: SurfaceRule) -> Self {
        self.surface_policy.set(surface, rule);
        self
    }
}

/// A rule map value: a rule, or a hard exclusion
#[derive(Debug, Clone, Copy)]
pub enum RuleEntry {
    Rule(AvailabilityRule),
    Exclude,
}

impl From<AvailabilityRule> for RuleEntry {
    fn from(rule: AvailabilityRule) -> Self {
        RuleEntry::Rule(rule)
    }
}

/// The pair of predicates a resolver actually evaluates
#[derive(Debug, Clone, Copy)]
pub struct EffectiveRule {
    pub visible: Predicate,
    pub enabled: Predicate,
}

impl EffectiveRule {
    pub const ALWAYS: EffectiveRule = EffectiveRule {
        visible: always,
        enabled: always,
    };

    pub const EXCLUDED: EffectiveRule = EffectiveRule {
        visible: never,
        enabled: never,
    };

    pub fn is_visible(&self, ctx: &ControlContext) -> bool {
        (self.visible)(ctx)
    }

    pub fn is_enabled(&self, ctx: &ControlContext) -> bool {
        (self.enabled)(ctx)
    }
}

/// Rules keyed by control id
#[derive(Debug, Clone, Default)]
pub struct AvailabilityRulesMap {
    entries: BTreeMap<ControlId, RuleEntry>,
}

impl AvailabilityRulesMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry for `id`, replacing any previous one
    pub fn with(mut self, id: ControlId, entry: impl Into<RuleEntry>) -> Self {
        self.entries.insert(id, entry.into());
        self
    }

    pub fn exclude(self, id: ControlId) -> Self {
        self.with(id, RuleEntry::Exclude)
    }

    pub fn get(&self, id: &str) -> Option<&RuleEntry> {
        self.entries.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shallow overlay: every entry of `other` replaces ours wholesale
    pub fn extend(&mut self, other: AvailabilityRulesMap) {
        self.entries.extend(other.entries);
    }

    /// Resolve the predicates for `id` on `surface`
    pub fn effective(&self, id: &str, surface: Surface) -> EffectiveRule {
        let rule = match self.entries.get(id) {
            None => return EffectiveRule::ALWAYS,
            Some(RuleEntry::Exclude) => return EffectiveRule::EXCLUDED,
            Some(RuleEntry::Rule(rule)) => rule,
        };
        let surface_rule = rule.surface_policy.get(surface);
        EffectiveRule {
            visible: surface_rule
                .and_then(|s| s.visible)
                .or(rule.visible)
                .unwrap_or(always),
            enabled: surface_rule
                .and_then(|s| s.enabled)
                .or(rule.enabled)
                .unwrap_or(always),
        }
    }
}

/// Merge fragments left to right; later entries replace earlier ones
pub fn merge(fragments: impl IntoIterator<Item = AvailabilityRulesMap>) -> AvailabilityRulesMap {
    let mut merged = AvailabilityRulesMap::new();
    for fragment in fragments {
        merged.extend(fragment);
    }
    merged
}
