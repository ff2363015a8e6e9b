//! Element inspection port.
//!
//! The read-only view of the document the context builder needs. Selectors
//! are simple compound selectors: an optional tag, any number of `.class`
//! parts, and any number of `[attr]` or `[attr=value]` parts. No combinators.

/// Read-only queries against the selected element and its page
pub trait ElementInspector {
    /// Whether the element itself carries `class`
    fn has_class(&self, class: &str) -> bool;

    /// Attribute on the element itself
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Number of descendants matching `selector`
    fn count_descendants(&self, selector: &str) -> usize;

    /// Attribute of the first descendant (document order) matching `selector`
    fn descendant_attribute(&self, selector: &str, attribute: &str) -> Option<&str>;

    /// Whether the containing page carries `class`
    fn page_has_class(&self, class: &str) -> bool;

    /// Attribute on the containing page
    fn page_attribute(&self, name: &str) -> Option<&str>;

    /// Nodes anywhere on the page outside this element whose attribute `name`
    /// equals `value` exactly
    fn count_page_elements_with_attribute(&self, name: &str, value: &str) -> usize;

    /// Nodes matching `selector` that precede this element in document order
    fn count_preceding(&self, selector: &str) -> usize;

    /// Nodes matching `selector` that follow this element in document order
    fn count_following(&self, selector: &str) -> usize;
}

pub mod classes {
    pub const CANVAS_ELEMENT: &str = "bloom-canvas-element";
    pub const BACKGROUND_IMAGE: &str = "bloom-backgroundImage";
    pub const FILLS_SPACE: &str = "bloom-fills-space";
    pub const IMAGES_LOCKED: &str = "bloom-images-locked";
    pub const THEME_BACKGROUND: &str = "bloom-theme-background";
    pub const CANVAS_BUTTON: &str = "bloom-canvas-button";
    pub const DRAG_ITEM_WRONG: &str = "drag-item-wrong";
    pub const DRAG_ITEM_CORRECT: &str = "drag-item-correct";
    pub const DRAG_ITEM_ORDER_SENTENCE: &str = "drag-item-order-sentence";
    pub const GAME_BUTTON: &str = "bloom-game-button";
}

pub mod attributes {
    pub const SRC: &str = "src";
    pub const STYLE: &str = "style";
    pub const COPYRIGHT: &str = "data-copyright";
    pub const HREF: &str = "data-href";
    pub const ACTIVITY: &str = "data-activity";
    pub const DRAGGABLE_ID: &str = "data-draggable-id";
    pub const TARGET_OF: &str = "data-target-of";
    pub const SOUND: &str = "data-sound";
    pub const BUBBLE_STYLE: &str = "data-bubble-style";
}

pub mod selectors {
    pub const IMAGE_CONTAINER: &str = ".bloom-imageContainer";
    pub const IMG: &str = "img";
    pub const UNMODIFIABLE_IMAGE: &str = ".bloom-unmodifiable-image";
    pub const VIDEO_CONTAINER: &str = ".bloom-videoContainer";
    pub const TRANSLATION_GROUP: &str = ".bloom-translationGroup";
    pub const RECORDED_EDITABLE: &str = ".bloom-editable[data-audiorecordingmode]";
    pub const RECTANGLE: &str = ".bloom-rectangle";
    pub const LINK_GRID: &str = ".bloom-link-grid";
    pub const AUDIO_ICON: &str = "[data-icon-type=audio]";
}

/// Parsed compound selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    pub tag: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, Option<String>)>,
}

impl Selector {
    /// Parse a compound selector; malformed input yields `None`
    pub fn parse(input: &str) -> Option<Selector> {
        let input = input.trim();
        if input.is_empty() || input.contains(char::is_whitespace) {
            return None;
        }

        let mut selector = Selector::default();
        let mut rest = input;

        let tag_end = rest.find(['.', '[']).unwrap_or(rest.len());
        if tag_end > 0 {
            selector.tag = Some(rest[..tag_end].to_string());
        }
        rest = &rest[tag_end..];

        while !rest.is_empty() {
            if let Some(after_dot) = rest.strip_prefix('.') {
                let end = after_dot.find(['.', '[']).unwrap_or(after_dot.len());
                if end == 0 {
                    return None;
                }
                selector.classes.push(after_dot[..end].to_string());
                rest = &after_dot[end..];
            } else if let Some(after_bracket) = rest.strip_prefix('[') {
                let close = after_bracket.find(']')?;
                let body = &after_bracket[..close];
                let (name, value) = match body.split_once('=') {
                    Some((name, value)) => {
                        (name, Some(value.trim_matches(['"', '\'']).to_string()))
                    }
                    None => (body, None),
                };
                if name.is_empty() {
                    return None;
                }
                selector.attributes.push((name.to_string(), value));
                rest = &after_bracket[close + 1..];
            } else {
                return None;
            }
        }

        Some(selector)
    }
}
