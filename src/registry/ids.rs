//! Stable control and section identifiers.

use crate::rules::ControlId;

pub type SectionId = &'static str;

// Image
pub const CHOOSE_IMAGE: ControlId = "chooseImage";
pub const PASTE_IMAGE: ControlId = "pasteImage";
pub const COPY_IMAGE: ControlId = "copyImage";
pub const MISSING_METADATA: ControlId = "missingMetadata";
pub const RESET_IMAGE: ControlId = "resetImage";
pub const EXPAND_TO_FILL_SPACE: ControlId = "expandToFillSpace";

// Video
pub const CHOOSE_VIDEO: ControlId = "chooseVideo";
pub const RECORD_VIDEO: ControlId = "recordVideo";
pub const PLAY_VIDEO_EARLIER: ControlId = "playVideoEarlier";
pub const PLAY_VIDEO_LATER: ControlId = "playVideoLater";

// Audio
pub const CHOOSE_AUDIO: ControlId = "chooseAudio";

// Text
pub const FORMAT: ControlId = "format";
pub const COPY_TEXT: ControlId = "copyText";
pub const PASTE_TEXT: ControlId = "pasteText";
pub const AUTO_HEIGHT: ControlId = "autoHeight";
pub const FILL_BACKGROUND: ControlId = "fillBackground";

// Bubble
pub const ADD_CHILD_BUBBLE: ControlId = "addChildBubble";

// Navigation
pub const LINK_GRID_CHOOSE_BOOKS: ControlId = "linkGridChooseBooks";
pub const SET_DESTINATION: ControlId = "setDestination";

// Whole element
pub const TOGGLE_DRAGGABLE: ControlId = "toggleDraggable";
pub const DUPLICATE: ControlId = "duplicate";
pub const DELETE: ControlId = "delete";

// Panels
pub const BUBBLE_STYLE: ControlId = "bubbleStyle";
pub const SHOW_TAIL: ControlId = "showTail";
pub const ROUNDED_CORNERS: ControlId = "roundedCorners";
pub const OUTLINE_COLOR: ControlId = "outlineColor";
pub const TEXT_COLOR: ControlId = "textColor";
pub const BACKGROUND_COLOR: ControlId = "backgroundColor";

// Menu sections
pub const IMAGE_SECTION: SectionId = "image";
pub const VIDEO_SECTION: SectionId = "video";
pub const AUDIO_SECTION: SectionId = "audio";
pub const TEXT_SECTION: SectionId = "text";
pub const BUBBLE_SECTION: SectionId = "bubble";
pub const LINK_GRID_SECTION: SectionId = "linkGrid";
pub const NAVIGATION_SECTION: SectionId = "navigation";
pub const WHOLE_ELEMENT_SECTION: SectionId = "wholeElement";

// Tool panel sections
pub const BUBBLE_PANEL_SECTION: SectionId = "bubblePanel";
pub const TEXT_PANEL_SECTION: SectionId = "textPanel";
pub const RECTANGLE_PANEL_SECTION: SectionId = "rectanglePanel";
