//! Reusable rule fragments, grouped by concern.
//!
//! Element definitions merge the fragments they need and override single
//! entries on top.

use super::{AvailabilityRule, AvailabilityRulesMap, Surface, SurfaceRule};
use crate::registry::ids;

/// Image replacement, clipboard, metadata and cropping
pub fn image() -> AvailabilityRulesMap {
    AvailabilityRulesMap::new()
        .with(
            ids::CHOOSE_IMAGE,
            AvailabilityRule::new()
                .visible(|c| c.has_image)
                .enabled(|c| c.can_modify_image),
        )
        .with(
            ids::PASTE_IMAGE,
            AvailabilityRule::new()
                .visible(|c| c.has_image)
                .enabled(|c| c.can_modify_image),
        )
        .with(
            ids::COPY_IMAGE,
            AvailabilityRule::new()
                .visible(|c| c.has_image)
                .enabled(|c| c.has_real_image),
        )
        // Always offered in the menu; the toolbar only nags when it matters.
        .with(
            ids::MISSING_METADATA,
            AvailabilityRule::new()
                .visible(|c| c.has_image)
                .enabled(|c| c.has_real_image && c.can_modify_image)
                .on(
                    Surface::Toolbar,
                    SurfaceRule::visible(|c| c.has_real_image && c.missing_metadata),
                ),
        )
        .with(
            ids::RESET_IMAGE,
            AvailabilityRule::new()
                .visible(|c| c.has_image)
                .enabled(|c| c.is_cropped),
        )
        .with(
            ids::EXPAND_TO_FILL_SPACE,
            AvailabilityRule::new()
                .visible(|c| c.is_background_image)
                .enabled(|c| c.can_expand_to_fill_space),
        )
}

pub fn video() -> AvailabilityRulesMap {
    AvailabilityRulesMap::new()
        .with(
            ids::CHOOSE_VIDEO,
            AvailabilityRule::new().visible(|c| c.has_video),
        )
        .with(
            ids::RECORD_VIDEO,
            AvailabilityRule::new().visible(|c| c.has_video),
        )
        .with(
            ids::PLAY_VIDEO_EARLIER,
            AvailabilityRule::new()
                .visible(|c| c.has_video)
                .enabled(|c| c.has_previous_video_container),
        )
        .with(
            ids::PLAY_VIDEO_LATER,
            AvailabilityRule::new()
                .visible(|c| c.has_video)
                .enabled(|c| c.has_next_video_container),
        )
}

/// Sounds played when a game item is dropped
pub fn audio() -> AvailabilityRulesMap {
    AvailabilityRulesMap::new().with(
        ids::CHOOSE_AUDIO,
        AvailabilityRule::new().visible(|c| c.is_in_draggable_game && !c.is_special_game_element),
    )
}

pub fn text() -> AvailabilityRulesMap {
    AvailabilityRulesMap::new()
        .with(ids::FORMAT, AvailabilityRule::new().visible(|c| c.has_text))
        .with(ids::COPY_TEXT, AvailabilityRule::new().visible(|c| c.has_text))
        .with(ids::PASTE_TEXT, AvailabilityRule::new().visible(|c| c.has_text))
        .with(
            ids::AUTO_HEIGHT,
            AvailabilityRule::new().visible(|c| c.has_text && !c.is_button),
        )
        .with(
            ids::FILL_BACKGROUND,
            AvailabilityRule::new().visible(|c| c.is_rectangle),
        )
        .with(ids::TEXT_COLOR, AvailabilityRule::new().visible(|c| c.has_text))
        .with(
            ids::BACKGROUND_COLOR,
            AvailabilityRule::new().visible(|c| c.has_text || c.is_rectangle || c.is_button),
        )
}

/// Comic-style bubbles around text
pub fn bubble() -> AvailabilityRulesMap {
    AvailabilityRulesMap::new()
        .with(
            ids::ADD_CHILD_BUBBLE,
            AvailabilityRule::new()
                .visible(|c| c.has_text && !c.is_button)
                .enabled(|c| !c.is_in_draggable_game),
        )
        .with(
            ids::BUBBLE_STYLE,
            AvailabilityRule::new().visible(|c| c.has_text && !c.is_button),
        )
        .with(
            ids::SHOW_TAIL,
            AvailabilityRule::new().visible(|c| c.has_text && !c.is_button),
        )
        .with(
            ids::ROUNDED_CORNERS,
            AvailabilityRule::new().visible(|c| c.has_text),
        )
        .with(
            ids::OUTLINE_COLOR,
            AvailabilityRule::new().visible(|c| c.has_text && !c.is_button),
        )
}

/// Link grids and navigation buttons
pub fn navigation() -> AvailabilityRulesMap {
    AvailabilityRulesMap::new()
        .with(
            ids::LINK_GRID_CHOOSE_BOOKS,
            AvailabilityRule::new().visible(|c| c.is_link_grid),
        )
        .with(
            ids::SET_DESTINATION,
            AvailabilityRule::new().visible(|c| c.is_button),
        )
}

/// Operations on the element as a whole
pub fn whole_element() -> AvailabilityRulesMap {
    AvailabilityRulesMap::new()
        .with(
            ids::DUPLICATE,
            AvailabilityRule::new()
                .visible(|c| !c.is_background_image && !c.is_special_game_element),
        )
        // A background image placeholder is part of the page, not a user element.
        .with(
            ids::DELETE,
            AvailabilityRule::new().enabled(|c| {
                !(c.is_background_image && !c.has_real_image) && !c.is_special_game_element
            }),
        )
        .with(
            ids::TOGGLE_DRAGGABLE,
            AvailabilityRule::new().visible(|c| c.can_toggle_draggability),
        )
}
