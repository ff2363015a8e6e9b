//! Built-in controls and sections.

use super::ids::{self, *};
use super::{CommandControl, ControlRegistry, PanelControl, ToolbarHints};
use crate::context::ControlContext;
use crate::error::ControlError;
use crate::menu::{CommandRow, HelpRow, MenuRow};
use crate::panel::{
    BubbleStylePanel, ColorPanel, ColorTarget, RoundedCornersPanel, SharedPanelState, TailPanel,
};
use crate::rules::Surface;
use crate::runtime::{HostAction, HostRequest, MenuRuntime};
use std::sync::Arc;

const SOUND_HELP: &str = "The sound plays when the item is dropped on its target.";

/// Register the built-in controls, binding panels to `state`
pub fn builtin_registry(state: SharedPanelState) -> Result<ControlRegistry, ControlError> {
    use HostRequest::*;

    ControlRegistry::builder()
        // Image
        .command(
            CommandControl::new(
                CHOOSE_IMAGE,
                "Choose image from your computer...",
                HostAction::dialog(ChooseImage),
            )
            .with_icon("image-search")
            .with_toolbar(ToolbarHints {
                icon_only: true,
                tooltip: Some("Choose image"),
            }),
        )
        .command(
            CommandControl::new(PASTE_IMAGE, "Paste image", HostAction::immediate(PasteImage))
                .with_icon("paste")
                .with_toolbar(icon_only("Paste image")),
        )
        .command(
            CommandControl::new(COPY_IMAGE, "Copy image", HostAction::immediate(CopyImage))
                .with_icon("copy"),
        )
        .command(
            CommandControl::new(
                MISSING_METADATA,
                "Missing image information",
                HostAction::dialog(EditImageMetadata),
            )
            .with_icon("copyright")
            .with_menu_label("Set Image Information..."),
        )
        .command(
            CommandControl::new(
                RESET_IMAGE,
                "Reset image",
                HostAction::immediate(ResetImageCropping),
            )
            .with_icon("crop-free"),
        )
        .command(
            CommandControl::new(
                EXPAND_TO_FILL_SPACE,
                "Fit space",
                HostAction::immediate(ExpandToFillSpace),
            )
            .with_icon("fill-space"),
        )
        // Video
        .command(
            CommandControl::new(
                CHOOSE_VIDEO,
                "Choose video from your computer...",
                HostAction::dialog(ChooseVideo),
            )
            .with_icon("video-search")
            .with_toolbar(icon_only("Choose video")),
        )
        .command(
            CommandControl::new(RECORD_VIDEO, "Record yourself...", HostAction::dialog(RecordVideo))
                .with_icon("record")
                .with_toolbar(icon_only("Record video")),
        )
        .command(
            CommandControl::new(
                PLAY_VIDEO_EARLIER,
                "Play earlier",
                HostAction::immediate(MoveVideoEarlier),
            )
            .with_icon("arrow-up"),
        )
        .command(
            CommandControl::new(
                PLAY_VIDEO_LATER,
                "Play later",
                HostAction::immediate(MoveVideoLater),
            )
            .with_icon("arrow-down"),
        )
        // Audio
        .command(
            CommandControl::new(CHOOSE_AUDIO, "Sound", HostAction::dialog(ChooseSound))
                .with_icon("volume")
                .with_menu_item(choose_audio_row),
        )
        // Text
        .command(
            CommandControl::new(FORMAT, "Format", HostAction::dialog(FormatText))
                .with_icon("settings")
                .with_toolbar(icon_only("Format")),
        )
        .command(
            CommandControl::new(COPY_TEXT, "Copy text", HostAction::immediate(CopyText))
                .with_icon("copy")
                .with_shortcut("Ctrl+C"),
        )
        .command(
            CommandControl::new(PASTE_TEXT, "Paste text", HostAction::immediate(PasteText))
                .with_icon("paste")
                .with_shortcut("Ctrl+V"),
        )
        .command(
            CommandControl::new(AUTO_HEIGHT, "Auto height", HostAction::immediate(ToggleAutoHeight))
                .with_icon("auto-height"),
        )
        .command(
            CommandControl::new(
                FILL_BACKGROUND,
                "Fill background",
                HostAction::immediate(ToggleBackground),
            )
            .with_icon("fill")
            .with_menu_item(fill_background_row),
        )
        // Bubble
        .command(
            CommandControl::new(
                ADD_CHILD_BUBBLE,
                "Add child bubble",
                HostAction::immediate(AddChildBubble),
            )
            .with_icon("bubble-add"),
        )
        // Navigation
        .command(
            CommandControl::new(
                LINK_GRID_CHOOSE_BOOKS,
                "Choose books...",
                HostAction::dialog(ChooseLinkedBooks),
            )
            .with_icon("book-grid")
            .with_toolbar(ToolbarHints {
                icon_only: false,
                tooltip: Some("Choose which books the grid links to"),
            }),
        )
        .command(
            CommandControl::new(
                SET_DESTINATION,
                "Set destination...",
                HostAction::dialog(ChooseDestination),
            )
            .with_icon("link"),
        )
        // Whole element
        .command(
            CommandControl::new(
                TOGGLE_DRAGGABLE,
                "Draggable",
                HostAction::immediate(ToggleDraggable),
            )
            .with_icon("drag")
            .with_menu_item(toggle_draggable_row),
        )
        .command(
            CommandControl::new(DUPLICATE, "Duplicate", HostAction::immediate(Duplicate))
                .with_icon("duplicate")
                .with_shortcut("Ctrl+D")
                .with_toolbar(icon_only("Duplicate")),
        )
        .command(
            CommandControl::new(DELETE, "Delete", HostAction::immediate(Delete))
                .with_icon("delete")
                .with_shortcut("Del")
                .with_toolbar(icon_only("Delete")),
        )
        // Panels
        .panel(PanelControl::new(BUBBLE_STYLE, "Style", BubbleStylePanel::new(state.clone())))
        .panel(PanelControl::new(SHOW_TAIL, "Show Tail", TailPanel::new(state.clone())))
        .panel(PanelControl::new(
            ROUNDED_CORNERS,
            "Rounded Corners",
            RoundedCornersPanel::new(state.clone()),
        ))
        .panel(PanelControl::new(
            OUTLINE_COLOR,
            "Outer Outline Color",
            ColorPanel::new(state.clone(), ColorTarget::Outline),
        ))
        .panel(PanelControl::new(
            TEXT_COLOR,
            "Text Color",
            ColorPanel::new(state.clone(), ColorTarget::Text),
        ))
        .panel(PanelControl::new(
            BACKGROUND_COLOR,
            "Background Color",
            ColorPanel::new(state, ColorTarget::Background),
        ))
        // Menu sections
        .section(
            IMAGE_SECTION,
            Surface::Menu,
            &[
                CHOOSE_IMAGE,
                PASTE_IMAGE,
                COPY_IMAGE,
                MISSING_METADATA,
                RESET_IMAGE,
                EXPAND_TO_FILL_SPACE,
            ],
        )
        .section(
            VIDEO_SECTION,
            Surface::Menu,
            &[CHOOSE_VIDEO, RECORD_VIDEO, PLAY_VIDEO_EARLIER, PLAY_VIDEO_LATER],
        )
        .section(AUDIO_SECTION, Surface::Menu, &[CHOOSE_AUDIO])
        .section(
            TEXT_SECTION,
            Surface::Menu,
            &[FORMAT, COPY_TEXT, PASTE_TEXT, AUTO_HEIGHT, FILL_BACKGROUND],
        )
        .section(BUBBLE_SECTION, Surface::Menu, &[ADD_CHILD_BUBBLE])
        .section(LINK_GRID_SECTION, Surface::Menu, &[LINK_GRID_CHOOSE_BOOKS])
        .section(NAVIGATION_SECTION, Surface::Menu, &[SET_DESTINATION])
        .section(
            WHOLE_ELEMENT_SECTION,
            Surface::Menu,
            &[TOGGLE_DRAGGABLE, DUPLICATE, DELETE],
        )
        // Tool panel sections
        .section(
            BUBBLE_PANEL_SECTION,
            Surface::ToolPanel,
            &[BUBBLE_STYLE, SHOW_TAIL, ROUNDED_CORNERS, OUTLINE_COLOR],
        )
        .section(TEXT_PANEL_SECTION, Surface::ToolPanel, &[TEXT_COLOR, BACKGROUND_COLOR])
        .section(RECTANGLE_PANEL_SECTION, Surface::ToolPanel, &[BACKGROUND_COLOR])
        .build()
}

fn icon_only(tooltip: &'static str) -> ToolbarHints {
    ToolbarHints {
        icon_only: true,
        tooltip: Some(tooltip),
    }
}

/// Sound submenu: none / current sound / choose, plus a hint for games
fn choose_audio_row(
    control: &CommandControl,
    ctx: &ControlContext,
    _runtime: &dyn MenuRuntime,
) -> MenuRow {
    let label = match &ctx.current_sound {
        Some(sound) => format!("{}: {}", control.label, sound),
        None => control.label.to_string(),
    };
    let current = ctx.current_sound.clone().unwrap_or_default();

    let mut row = control.default_row();
    row.label = label;
    // The parent only opens the submenu
    row.action = None;
    row.with_children(vec![
        CommandRow::new("none", "None")
            .checked(!ctx.has_current_sound)
            .with_action(Arc::new(HostAction::immediate(HostRequest::RemoveSound)))
            .into(),
        CommandRow::new("current", current)
            .checked(true)
            .visible_when(|c| c.has_current_sound)
            .with_action(Arc::new(HostAction::immediate(HostRequest::PlayCurrentSound)))
            .into(),
        CommandRow::new("choose", "Choose...")
            .with_action(Arc::new(HostAction::dialog(HostRequest::ChooseSound)))
            .into(),
        HelpRow::new(SOUND_HELP)
            .visible_when(|c| c.is_in_draggable_game)
            .into(),
    ])
    .into()
}

fn toggle_draggable_row(
    control: &CommandControl,
    ctx: &ControlContext,
    _runtime: &dyn MenuRuntime,
) -> MenuRow {
    control.default_row().checked(ctx.has_draggable_id).into()
}

fn fill_background_row(
    control: &CommandControl,
    ctx: &ControlContext,
    _runtime: &dyn MenuRuntime,
) -> MenuRow {
    control.default_row().checked(ctx.has_background).into()
}
