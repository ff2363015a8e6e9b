//! The built-in definition table.

use super::{DefinitionTable, ElementDefinition, ToolbarEntry};
use crate::context::ElementType;
use crate::registry::ids::*;
use crate::rules::{presets, AvailabilityRule};

use ToolbarEntry::Spacer;

fn c(id: crate::rules::ControlId) -> ToolbarEntry {
    ToolbarEntry::Control(id)
}

pub fn builtin_definitions() -> DefinitionTable {
    let mut table = DefinitionTable::empty();

    table.insert(
        ElementDefinition::builder(ElementType::None)
            .toolbar(&[c(DUPLICATE), c(DELETE)])
            .menu_sections(&[WHOLE_ELEMENT_SECTION])
            .presets([presets::whole_element()])
            .build(),
    );

    table.insert(
        ElementDefinition::builder(ElementType::Image)
            .toolbar(&[
                c(MISSING_METADATA),
                c(CHOOSE_IMAGE),
                c(PASTE_IMAGE),
                Spacer,
                c(EXPAND_TO_FILL_SPACE),
                Spacer,
                c(DUPLICATE),
                c(DELETE),
            ])
            .menu_sections(&[IMAGE_SECTION, AUDIO_SECTION, WHOLE_ELEMENT_SECTION])
            .presets([presets::image(), presets::audio(), presets::whole_element()])
            .build(),
    );

    table.insert(
        ElementDefinition::builder(ElementType::Video)
            .toolbar(&[
                c(CHOOSE_VIDEO),
                c(RECORD_VIDEO),
                Spacer,
                c(DUPLICATE),
                c(DELETE),
            ])
            .menu_sections(&[VIDEO_SECTION, WHOLE_ELEMENT_SECTION])
            .presets([presets::video(), presets::whole_element()])
            .build(),
    );

    // A sound element is nothing but its sound
    table.insert(
        ElementDefinition::builder(ElementType::Sound)
            .toolbar(&[c(CHOOSE_AUDIO), Spacer, c(DUPLICATE), c(DELETE)])
            .menu_sections(&[AUDIO_SECTION, WHOLE_ELEMENT_SECTION])
            .presets([presets::audio(), presets::whole_element()])
            .rule(CHOOSE_AUDIO, AvailabilityRule::new())
            .build(),
    );

    table.insert(
        ElementDefinition::builder(ElementType::Rectangle)
            .toolbar(&[c(FILL_BACKGROUND), Spacer, c(DUPLICATE), c(DELETE)])
            .menu_sections(&[TEXT_SECTION, WHOLE_ELEMENT_SECTION])
            .tool_panel_sections(&[RECTANGLE_PANEL_SECTION])
            .presets([presets::text(), presets::whole_element()])
            .build(),
    );

    table.insert(
        ElementDefinition::builder(ElementType::Speech)
            .toolbar(&[c(FORMAT), Spacer, c(DUPLICATE), c(DELETE)])
            .menu_sections(&[
                TEXT_SECTION,
                BUBBLE_SECTION,
                AUDIO_SECTION,
                WHOLE_ELEMENT_SECTION,
            ])
            .tool_panel_sections(&[BUBBLE_PANEL_SECTION, TEXT_PANEL_SECTION])
            .presets([
                presets::text(),
                presets::bubble(),
                presets::audio(),
                presets::whole_element(),
            ])
            .build(),
    );

    table.insert(
        ElementDefinition::builder(ElementType::Caption)
            .toolbar(&[c(FORMAT), Spacer, c(DUPLICATE), c(DELETE)])
            .menu_sections(&[
                TEXT_SECTION,
                BUBBLE_SECTION,
                AUDIO_SECTION,
                WHOLE_ELEMENT_SECTION,
            ])
            .tool_panel_sections(&[BUBBLE_PANEL_SECTION, TEXT_PANEL_SECTION])
            .presets([
                presets::text(),
                presets::bubble(),
                presets::audio(),
                presets::whole_element(),
            ])
            .exclude(ADD_CHILD_BUBBLE)
            .exclude(SHOW_TAIL)
            .build(),
    );

    table.insert(
        ElementDefinition::builder(ElementType::BookLinkGrid)
            .toolbar(&[c(LINK_GRID_CHOOSE_BOOKS), Spacer, c(DELETE)])
            .menu_sections(&[LINK_GRID_SECTION, WHOLE_ELEMENT_SECTION])
            .presets([presets::navigation(), presets::whole_element()])
            .exclude(DUPLICATE)
            .exclude(TOGGLE_DRAGGABLE)
            .build(),
    );

    table.insert(
        ElementDefinition::builder(ElementType::NavigationImageButton)
            .toolbar(&[
                c(SET_DESTINATION),
                c(CHOOSE_IMAGE),
                c(PASTE_IMAGE),
                Spacer,
                c(DUPLICATE),
                c(DELETE),
            ])
            .menu_sections(&[NAVIGATION_SECTION, IMAGE_SECTION, WHOLE_ELEMENT_SECTION])
            .tool_panel_sections(&[TEXT_PANEL_SECTION])
            .presets([
                presets::image(),
                presets::text(),
                presets::navigation(),
                presets::whole_element(),
            ])
            .exclude(MISSING_METADATA)
            .exclude(EXPAND_TO_FILL_SPACE)
            .exclude(TOGGLE_DRAGGABLE)
            .build(),
    );

    table.insert(
        ElementDefinition::builder(ElementType::NavigationImageWithLabelButton)
            .toolbar(&[
                c(SET_DESTINATION),
                c(CHOOSE_IMAGE),
                c(PASTE_IMAGE),
                c(FORMAT),
                Spacer,
                c(DUPLICATE),
                c(DELETE),
            ])
            .menu_sections(&[
                NAVIGATION_SECTION,
                IMAGE_SECTION,
                TEXT_SECTION,
                WHOLE_ELEMENT_SECTION,
            ])
            .tool_panel_sections(&[TEXT_PANEL_SECTION])
            .presets([
                presets::image(),
                presets::text(),
                presets::navigation(),
                presets::whole_element(),
            ])
            .exclude(MISSING_METADATA)
            .exclude(EXPAND_TO_FILL_SPACE)
            .exclude(AUTO_HEIGHT)
            .exclude(TOGGLE_DRAGGABLE)
            .build(),
    );

    table.insert(
        ElementDefinition::builder(ElementType::NavigationLabelButton)
            .toolbar(&[c(SET_DESTINATION), c(FORMAT), Spacer, c(DUPLICATE), c(DELETE)])
            .menu_sections(&[NAVIGATION_SECTION, TEXT_SECTION, WHOLE_ELEMENT_SECTION])
            .tool_panel_sections(&[TEXT_PANEL_SECTION])
            .presets([presets::text(), presets::navigation(), presets::whole_element()])
            .exclude(AUTO_HEIGHT)
            .exclude(TOGGLE_DRAGGABLE)
            .build(),
    );

    table
}
