//! End-to-end resolution against the built-in catalogue and fixture tables

use super::test_utils::{
    builtin_engine, menu_control, menu_layout, panel_layout, panel_state, toolbar_control,
    toolbar_layout,
};
use canvas_controls::context::{ControlContext, ElementType};
use canvas_controls::definitions::{DefinitionTable, ElementDefinition, ToolbarEntry};
use canvas_controls::engine::ControlEngine;
use canvas_controls::error::ControlError;
use canvas_controls::menu::MenuRow;
use canvas_controls::registry::builtins::builtin_registry;
use canvas_controls::registry::ids::*;
use canvas_controls::rules::{never, presets, AvailabilityRule, Surface, SurfaceRule};
use canvas_controls::runtime::DetachedRuntime;

fn fixture_engine(definition: ElementDefinition) -> ControlEngine {
    let mut table = DefinitionTable::empty();
    table.insert(definition);
    ControlEngine::new(builtin_registry(panel_state()).unwrap(), table)
}

#[test]
fn test_unmodifiable_image_disables_choose_image_everywhere() {
    let engine = builtin_engine();
    let ctx = ControlContext {
        element_type: ElementType::Image,
        has_image: true,
        can_modify_image: false,
        ..Default::default()
    };
    let surfaces = engine.resolve_context(ctx, &DetachedRuntime).unwrap();

    let on_toolbar = toolbar_control(&surfaces, CHOOSE_IMAGE).unwrap();
    assert!(!on_toolbar.enabled);
    let on_menu = menu_control(&surfaces, CHOOSE_IMAGE).unwrap();
    assert!(!on_menu.enabled);
    assert!(on_menu.menu_row.as_ref().unwrap().as_command().unwrap().disabled);

    assert_eq!(
        toolbar_layout(&surfaces),
        vec![CHOOSE_IMAGE, PASTE_IMAGE, "|", DUPLICATE, DELETE]
    );
    assert_eq!(
        menu_layout(&surfaces),
        vec![
            vec![CHOOSE_IMAGE, PASTE_IMAGE, COPY_IMAGE, MISSING_METADATA, RESET_IMAGE],
            vec![DUPLICATE, DELETE],
        ]
    );
}

#[test]
fn test_toolbar_commands_carry_a_single_row_and_panels_none() {
    let engine = builtin_engine();
    let ctx = ControlContext {
        element_type: ElementType::Image,
        has_image: true,
        can_modify_image: false,
        ..Default::default()
    };
    let surfaces = engine.resolve_context(ctx, &DetachedRuntime).unwrap();

    let choose = toolbar_control(&surfaces, CHOOSE_IMAGE).unwrap();
    let row = choose.menu_row.as_ref().unwrap().as_command().unwrap();
    assert_eq!(row.id, CHOOSE_IMAGE);
    assert!(row.disabled);
    assert!(row.action.is_some());
    assert!(row.sub_menu_items.is_empty());

    let duplicate = toolbar_control(&surfaces, DUPLICATE).unwrap();
    assert!(duplicate.enabled);
    let row = duplicate.menu_row.as_ref().unwrap().as_command().unwrap();
    assert!(!row.disabled);
    assert!(row.action.is_some());

    let engine = fixture_engine(
        ElementDefinition::builder(ElementType::None)
            .toolbar(&[ToolbarEntry::Control(TEXT_COLOR), ToolbarEntry::Control(DELETE)])
            .build(),
    );
    let surfaces = engine
        .resolve_context(ControlContext::default(), &DetachedRuntime)
        .unwrap();
    assert_eq!(toolbar_layout(&surfaces), vec![TEXT_COLOR, DELETE]);
    let panel = toolbar_control(&surfaces, TEXT_COLOR).unwrap();
    assert!(panel.enabled);
    assert!(panel.menu_row.is_none());
}

#[test]
fn test_background_placeholder_cannot_be_deleted() {
    let engine = builtin_engine();
    let ctx = ControlContext {
        element_type: ElementType::Image,
        is_background_image: true,
        has_real_image: false,
        ..Default::default()
    };
    let surfaces = engine.resolve_context(ctx, &DetachedRuntime).unwrap();

    let delete = toolbar_control(&surfaces, DELETE).unwrap();
    assert!(!delete.enabled);
    assert_eq!(
        toolbar_layout(&surfaces),
        vec![EXPAND_TO_FILL_SPACE, "|", DELETE]
    );
    assert!(toolbar_control(&surfaces, DUPLICATE).is_none());
}

#[test]
fn test_excluded_control_is_absent_from_every_surface() {
    let ctx = ControlContext {
        element_type: ElementType::BookLinkGrid,
        is_link_grid: true,
        ..Default::default()
    };

    // Without the exclusion the shared preset shows it
    let baseline = builtin_engine();
    let surfaces = baseline.resolve_context(ctx.clone(), &DetachedRuntime).unwrap();
    assert!(toolbar_control(&surfaces, LINK_GRID_CHOOSE_BOOKS).is_some());
    assert!(menu_control(&surfaces, LINK_GRID_CHOOSE_BOOKS).is_some());

    let engine = fixture_engine(
        ElementDefinition::builder(ElementType::BookLinkGrid)
            .toolbar(&[
                ToolbarEntry::Control(LINK_GRID_CHOOSE_BOOKS),
                ToolbarEntry::Spacer,
                ToolbarEntry::Control(DELETE),
            ])
            .menu_sections(&[LINK_GRID_SECTION, WHOLE_ELEMENT_SECTION])
            .tool_panel_sections(&[TEXT_PANEL_SECTION])
            .presets([presets::navigation(), presets::whole_element()])
            .exclude(LINK_GRID_CHOOSE_BOOKS)
            .build(),
    );
    let surfaces = engine.resolve_context(ctx, &DetachedRuntime).unwrap();

    assert!(toolbar_control(&surfaces, LINK_GRID_CHOOSE_BOOKS).is_none());
    assert!(menu_control(&surfaces, LINK_GRID_CHOOSE_BOOKS).is_none());
    assert!(!panel_layout(&surfaces).contains(&LINK_GRID_CHOOSE_BOOKS));
    assert_eq!(toolbar_layout(&surfaces), vec![DELETE]);
    // The emptied link grid section is omitted entirely
    assert_eq!(menu_layout(&surfaces), vec![vec![DUPLICATE, DELETE]]);
}

#[test]
fn test_surface_policy_hides_missing_metadata_on_toolbar_only() {
    let engine = builtin_engine();
    let ctx = ControlContext {
        element_type: ElementType::Image,
        has_image: true,
        has_real_image: true,
        can_modify_image: true,
        missing_metadata: false,
        ..Default::default()
    };
    let surfaces = engine.resolve_context(ctx, &DetachedRuntime).unwrap();
    assert!(toolbar_control(&surfaces, MISSING_METADATA).is_none());
    assert!(menu_control(&surfaces, MISSING_METADATA).unwrap().enabled);

    let nagging = ControlContext {
        element_type: ElementType::Image,
        has_image: true,
        has_real_image: true,
        can_modify_image: true,
        missing_metadata: true,
        ..Default::default()
    };
    let surfaces = engine.resolve_context(nagging, &DetachedRuntime).unwrap();
    assert_eq!(toolbar_layout(&surfaces)[0], MISSING_METADATA);
}

#[test]
fn test_surface_enabled_override_combines_with_general_visibility() {
    let engine = fixture_engine(
        ElementDefinition::builder(ElementType::None)
            .toolbar(&[ToolbarEntry::Control(DUPLICATE)])
            .menu_sections(&[WHOLE_ELEMENT_SECTION])
            .rule(
                DUPLICATE,
                AvailabilityRule::new().on(Surface::Toolbar, SurfaceRule::enabled(never)),
            )
            .build(),
    );
    let surfaces = engine
        .resolve_context(ControlContext::default(), &DetachedRuntime)
        .unwrap();
    assert!(!toolbar_control(&surfaces, DUPLICATE).unwrap().enabled);
    assert!(menu_control(&surfaces, DUPLICATE).unwrap().enabled);
}

#[test]
fn test_caption_exclusions_leave_speech_untouched() {
    let engine = builtin_engine();
    let text = |element_type| ControlContext {
        element_type,
        has_text: true,
        ..Default::default()
    };

    let speech = engine
        .resolve_context(text(ElementType::Speech), &DetachedRuntime)
        .unwrap();
    assert!(menu_control(&speech, ADD_CHILD_BUBBLE).is_some());
    assert!(panel_layout(&speech).contains(&SHOW_TAIL));

    let caption = engine
        .resolve_context(text(ElementType::Caption), &DetachedRuntime)
        .unwrap();
    assert!(menu_control(&caption, ADD_CHILD_BUBBLE).is_none());
    assert!(!panel_layout(&caption).contains(&SHOW_TAIL));
    assert_eq!(
        panel_layout(&caption),
        vec![BUBBLE_STYLE, ROUNDED_CORNERS, OUTLINE_COLOR, TEXT_COLOR, BACKGROUND_COLOR]
    );
}

#[test]
fn test_disabled_submenu_parent_disables_children() {
    let engine = fixture_engine(
        ElementDefinition::builder(ElementType::Sound)
            .menu_sections(&[AUDIO_SECTION])
            .rule(CHOOSE_AUDIO, AvailabilityRule::new().enabled(never))
            .build(),
    );
    let ctx = ControlContext {
        element_type: ElementType::Sound,
        ..Default::default()
    };
    let surfaces = engine.resolve_context(ctx, &DetachedRuntime).unwrap();
    let control = menu_control(&surfaces, CHOOSE_AUDIO).unwrap();
    assert!(!control.enabled);

    let row = control.menu_row.as_ref().unwrap().as_command().unwrap();
    assert!(row.disabled);
    let children: Vec<&MenuRow> = row.sub_menu_items.iter().collect();
    // "none" and "choose"; "current" needs a sound, the help row needs a game
    assert_eq!(children.len(), 2);
    for child in children {
        assert!(child.as_command().unwrap().disabled);
    }
}

#[test]
fn test_submenu_rows_follow_context() {
    let engine = builtin_engine();
    let ctx = ControlContext {
        element_type: ElementType::Sound,
        is_in_draggable_game: true,
        has_current_sound: true,
        current_sound: Some("bell.mp3".to_string()),
        ..Default::default()
    };
    let surfaces = engine.resolve_context(ctx, &DetachedRuntime).unwrap();
    let row = menu_control(&surfaces, CHOOSE_AUDIO)
        .unwrap()
        .menu_row
        .clone()
        .unwrap();

    let parent = row.as_command().unwrap();
    assert!(parent.label.ends_with("bell.mp3"));
    assert!(!parent.disabled);
    assert_eq!(parent.sub_menu_items.len(), 4);
    assert_eq!(row.find(&["none"]).unwrap().checked, Some(false));
    assert_eq!(row.find(&["current"]).unwrap().label, "bell.mp3");
    assert!(matches!(parent.sub_menu_items[3], MenuRow::Help(_)));
}

#[test]
fn test_menu_depth_is_bounded_for_every_type() {
    let engine = builtin_engine();
    for element_type in ElementType::ALL {
        let ctx = ControlContext {
            element_type,
            has_image: true,
            has_video: true,
            has_text: true,
            is_rectangle: true,
            is_link_grid: true,
            is_button: true,
            is_in_draggable_game: true,
            can_toggle_draggability: true,
            has_current_sound: true,
            current_sound: Some("a.mp3".to_string()),
            ..Default::default()
        };
        let surfaces = engine.resolve_context(ctx, &DetachedRuntime).unwrap();
        for control in surfaces.menu.iter().flatten() {
            let depth = control.menu_row.as_ref().unwrap().depth();
            assert!(depth <= 3, "{} nests {} levels", control.id(), depth);
        }
    }
}

#[test]
fn test_every_builtin_type_resolves() {
    let engine = builtin_engine();
    for element_type in ElementType::ALL {
        let ctx = ControlContext {
            element_type,
            ..Default::default()
        };
        assert!(engine.resolve_context(ctx, &DetachedRuntime).is_ok());
    }
}

#[test]
fn test_unknown_control_in_toolbar_fails_resolution() {
    let engine = fixture_engine(
        ElementDefinition::builder(ElementType::None)
            .toolbar(&[ToolbarEntry::Control("noSuchControl")])
            .build(),
    );
    let err = engine
        .resolve_context(ControlContext::default(), &DetachedRuntime)
        .unwrap_err();
    assert!(matches!(
        err,
        ControlError::UnknownControl { ref control, .. } if control == "noSuchControl"
    ));
}

#[test]
fn test_menu_section_on_wrong_surface_fails_resolution() {
    let engine = fixture_engine(
        ElementDefinition::builder(ElementType::None)
            .menu_sections(&[TEXT_PANEL_SECTION])
            .build(),
    );
    let err = engine
        .resolve_context(ControlContext::default(), &DetachedRuntime)
        .unwrap_err();
    assert!(matches!(err, ControlError::SectionSurfaceMismatch { .. }));
}

#[test]
#[should_panic(expected = "predicate exploded")]
fn test_panicking_predicate_propagates() {
    let engine = fixture_engine(
        ElementDefinition::builder(ElementType::None)
            .toolbar(&[ToolbarEntry::Control(DELETE)])
            .rule(
                DELETE,
                AvailabilityRule::new().visible(|_| panic!("predicate exploded")),
            )
            .build(),
    );
    let _ = engine.resolve_context(ControlContext::default(), &DetachedRuntime);
}

#[test]
fn test_resolution_is_repeatable() {
    let engine = builtin_engine();
    let ctx = ControlContext {
        element_type: ElementType::Speech,
        has_text: true,
        ..Default::default()
    };
    let first = engine.resolve_context(ctx.clone(), &DetachedRuntime).unwrap();
    let second = engine.resolve_context(ctx, &DetachedRuntime).unwrap();
    assert_eq!(toolbar_layout(&first), toolbar_layout(&second));
    assert_eq!(menu_layout(&first), menu_layout(&second));
    assert_eq!(panel_layout(&first), panel_layout(&second));
}
