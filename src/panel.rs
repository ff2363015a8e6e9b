//! Tool Panel
//!
//! Panel controls render against the live [`PanelState`] the surrounding UI
//! owns. The resolver only decides whether a panel is shown; which fields
//! inside it are enabled is decided here.

use crate::context::ControlContext;
use crate::registry::ids;
use crate::rules::ControlId;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BubbleStyle {
    #[default]
    Speech,
    Caption,
    Thought,
    Exclamation,
    Circle,
    None,
}

impl BubbleStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BubbleStyle::Speech => "speech",
            BubbleStyle::Caption => "caption",
            BubbleStyle::Thought => "thought",
            BubbleStyle::Exclamation => "exclamation",
            BubbleStyle::Circle => "circle",
            BubbleStyle::None => "none",
        }
    }

    /// Styles drawn without a pointer tail
    pub fn is_tailless(&self) -> bool {
        matches!(self, BubbleStyle::Caption | BubbleStyle::None)
    }
}

/// Live panel values, owned and mutated by the UI
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelState {
    pub bubble_style: BubbleStyle,
    pub show_tail: bool,
    pub rounded_corners: bool,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub outline_color: Option<String>,
}

pub type SharedPanelState = Arc<RwLock<PanelState>>;

/// One editable field of a rendered panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelField {
    pub name: &'static str,
    pub value: String,
    pub enabled: bool,
}

/// Declarative panel output for the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub control: ControlId,
    pub title: &'static str,
    pub fields: Vec<PanelField>,
}

/// Renders a panel control from the shared state it was bound to
pub trait PanelRenderer: Send + Sync {
    fn render(&self, ctx: &ControlContext) -> PanelView;
}

/// Which color a [`ColorPanel`] edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Text,
    Background,
    Outline,
}

pub struct BubbleStylePanel {
    state: SharedPanelState,
}

pub struct TailPanel {
    state: SharedPanelState,
}

pub struct RoundedCornersPanel {
    state: SharedPanelState,
}

pub struct ColorPanel {
    state: SharedPanelState,
    target: ColorTarget,
}

impl BubbleStylePanel {
    pub fn new(state: SharedPanelState) -> Self {
        Self { state }
    }
}

impl TailPanel {
    pub fn new(state: SharedPanelState) -> Self {
        Self { state }
    }
}

impl RoundedCornersPanel {
    pub fn new(state: SharedPanelState) -> Self {
        Self { state }
    }
}

impl ColorPanel {
    pub fn new(state: SharedPanelState, target: ColorTarget) -> Self {
        Self { state, target }
    }
}

fn color_value(color: &Option<String>) -> String {
    color.clone().unwrap_or_else(|| "default".to_string())
}

impl PanelRenderer for BubbleStylePanel {
    fn render(&self, ctx: &ControlContext) -> PanelView {
        let state = self.state.read();
        PanelView {
            control: ids::BUBBLE_STYLE,
            title: "Style",
            fields: vec![PanelField {
                name: "style",
                value: state.bubble_style.as_str().to_string(),
                // Game items keep the style the activity gave them
                enabled: !ctx.is_in_draggable_game,
            }],
        }
    }
}

impl PanelRenderer for TailPanel {
    fn render(&self, _ctx: &ControlContext) -> PanelView {
        let state = self.state.read();
        PanelView {
            control: ids::SHOW_TAIL,
            title: "Show Tail",
            fields: vec![PanelField {
                name: "showTail",
                value: state.show_tail.to_string(),
                enabled: !state.bubble_style.is_tailless(),
            }],
        }
    }
}

impl PanelRenderer for RoundedCornersPanel {
    fn render(&self, _ctx: &ControlContext) -> PanelView {
        let state = self.state.read();
        PanelView {
            control: ids::ROUNDED_CORNERS,
            title: "Rounded Corners",
            fields: vec![PanelField {
                name: "roundedCorners",
                value: state.rounded_corners.to_string(),
                // Corners only show against a background
                enabled: state.background_color.is_some(),
            }],
        }
    }
}

impl PanelRenderer for ColorPanel {
    fn render(&self, ctx: &ControlContext) -> PanelView {
        let state = self.state.read();
        let (control, title, name, value, enabled) = match self.target {
            ColorTarget::Text => (
                ids::TEXT_COLOR,
                "Text Color",
                "textColor",
                color_value(&state.text_color),
                ctx.has_text,
            ),
            ColorTarget::Background => (
                ids::BACKGROUND_COLOR,
                "Background Color",
                "backgroundColor",
                color_value(&state.background_color),
                !ctx.is_rectangle || ctx.has_background,
            ),
            ColorTarget::Outline => (
                ids::OUTLINE_COLOR,
                "Outer Outline Color",
                "outlineColor",
                color_value(&state.outline_color),
                !state.bubble_style.is_tailless() || state.background_color.is_some(),
            ),
        };
        PanelView {
            control,
            title,
            fields: vec![PanelField {
                name,
                value,
                enabled,
            }],
        }
    }
}
