//! Command activation through resolved surfaces

use super::test_utils::{builtin_engine, menu_control, panel_state, toolbar_control};
use async_trait::async_trait;
use canvas_controls::context::{ControlContext, ElementType};
use canvas_controls::definitions::{DefinitionTable, ElementDefinition, ToolbarEntry};
use canvas_controls::engine::ControlEngine;
use canvas_controls::error::ControlError;
use canvas_controls::registry::ids::*;
use canvas_controls::registry::{CommandControl, ControlRegistry};
use canvas_controls::rules::Surface;
use canvas_controls::runtime::{
    CanvasHost, CommandAction, DetachedRuntime, HostRequest, LoggingHost, MenuRuntime,
    RecordingRuntime,
};

fn sound_context() -> ControlContext {
    ControlContext {
        element_type: ElementType::Sound,
        is_in_draggable_game: true,
        has_current_sound: true,
        current_sound: Some("bell.mp3".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_dialog_command_keeps_menu_owner_alive() {
    let engine = builtin_engine();
    let runtime = RecordingRuntime::new();
    let host = LoggingHost::new();
    let ctx = ControlContext {
        element_type: ElementType::Image,
        has_image: true,
        can_modify_image: true,
        ..Default::default()
    };
    let surfaces = engine.resolve_context(ctx, &runtime).unwrap();

    // Resolution itself never touches the runtime
    assert!(runtime.calls().is_empty());

    menu_control(&surfaces, CHOOSE_IMAGE)
        .unwrap()
        .activate(&surfaces.context, &runtime, &host)
        .await
        .unwrap();
    assert_eq!(runtime.calls(), vec![true]);
    assert_eq!(host.performed(), vec![HostRequest::ChooseImage]);
}

#[tokio::test]
async fn test_immediate_command_closes_menu() {
    let engine = builtin_engine();
    let runtime = RecordingRuntime::new();
    let host = LoggingHost::new();
    let surfaces = engine
        .resolve_context(ControlContext::default(), &runtime)
        .unwrap();

    toolbar_control(&surfaces, DUPLICATE)
        .unwrap()
        .activate(&surfaces.context, &runtime, &host)
        .await
        .unwrap();
    assert_eq!(runtime.calls(), vec![false]);
    assert_eq!(host.performed(), vec![HostRequest::Duplicate]);
}

#[tokio::test]
async fn test_submenu_rows_dispatch_their_own_requests() {
    let engine = builtin_engine();
    let runtime = RecordingRuntime::new();
    let host = LoggingHost::new();
    let surfaces = engine.resolve_context(sound_context(), &runtime).unwrap();
    let row = menu_control(&surfaces, CHOOSE_AUDIO)
        .unwrap()
        .menu_row
        .as_ref()
        .unwrap();

    row.find(&["current"])
        .unwrap()
        .activate(&surfaces.context, &runtime, &host)
        .await
        .unwrap();
    row.find(&["choose"])
        .unwrap()
        .activate(&surfaces.context, &runtime, &host)
        .await
        .unwrap();

    assert_eq!(runtime.calls(), vec![false, true]);
    assert_eq!(
        host.performed(),
        vec![HostRequest::PlayCurrentSound, HostRequest::ChooseSound]
    );
}

#[tokio::test]
async fn test_submenu_parent_has_no_row_action() {
    let engine = builtin_engine();
    let surfaces = engine
        .resolve_context(sound_context(), &DetachedRuntime)
        .unwrap();
    let parent = menu_control(&surfaces, CHOOSE_AUDIO)
        .unwrap()
        .menu_row
        .as_ref()
        .unwrap()
        .as_command()
        .unwrap();

    let err = parent
        .activate(&surfaces.context, &DetachedRuntime, &LoggingHost::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ControlError::NoAction(ref id) if id == CHOOSE_AUDIO));
}

#[tokio::test]
async fn test_disabled_control_refuses_activation() {
    let engine = builtin_engine();
    let host = LoggingHost::new();
    let ctx = ControlContext {
        element_type: ElementType::Image,
        is_background_image: true,
        ..Default::default()
    };
    let surfaces = engine.resolve_context(ctx, &DetachedRuntime).unwrap();

    let err = toolbar_control(&surfaces, DELETE)
        .unwrap()
        .activate(&surfaces.context, &DetachedRuntime, &host)
        .await
        .unwrap_err();
    assert!(matches!(err, ControlError::Disabled(ref id) if id == DELETE));
    assert!(host.performed().is_empty());
}

#[tokio::test]
async fn test_panel_cannot_be_activated() {
    let engine = builtin_engine();
    let ctx = ControlContext {
        element_type: ElementType::Rectangle,
        is_rectangle: true,
        ..Default::default()
    };
    let surfaces = engine.resolve_context(ctx, &DetachedRuntime).unwrap();
    assert_eq!(surfaces.panel.len(), 1);

    let definition = engine.registry().get(BACKGROUND_COLOR).unwrap();
    let resolved = canvas_controls::resolve::ResolvedControl {
        definition,
        enabled: true,
        menu_row: None,
    };
    let err = resolved
        .activate(&surfaces.context, &DetachedRuntime, &LoggingHost::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ControlError::NotACommand(_)));
}

struct FailingAction;

#[async_trait]
impl CommandAction for FailingAction {
    async fn run(
        &self,
        _ctx: &ControlContext,
        runtime: &dyn MenuRuntime,
        _host: &dyn CanvasHost,
    ) -> anyhow::Result<()> {
        runtime.close_menu(false);
        anyhow::bail!("disk full")
    }
}

#[tokio::test]
async fn test_action_failure_is_reported_with_control_id() {
    let registry = ControlRegistry::builder()
        .command(CommandControl::new("explode", "Explode", FailingAction))
        .section("misc", Surface::Menu, &["explode"])
        .build()
        .unwrap();
    let mut table = DefinitionTable::empty();
    table.insert(
        ElementDefinition::builder(ElementType::None)
            .toolbar(&[ToolbarEntry::Control("explode")])
            .menu_sections(&["misc"])
            .build(),
    );
    let engine = ControlEngine::new(registry, table);
    let runtime = RecordingRuntime::new();
    let surfaces = engine
        .resolve_context(ControlContext::default(), &runtime)
        .unwrap();

    let err = menu_control(&surfaces, "explode")
        .unwrap()
        .activate(&surfaces.context, &runtime, &LoggingHost::new())
        .await
        .unwrap_err();
    match err {
        ControlError::ActionFailed { control, message } => {
            assert_eq!(control, "explode");
            assert!(message.contains("disk full"));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(runtime.calls(), vec![false]);
}

#[tokio::test]
async fn test_panel_renders_shared_state() {
    let state = panel_state();
    let engine = ControlEngine::builtin(state.clone()).unwrap();
    let ctx = ControlContext {
        element_type: ElementType::Speech,
        has_text: true,
        ..Default::default()
    };

    state.write().text_color = Some("#ff0000".to_string());
    let surfaces = engine.resolve_context(ctx, &DetachedRuntime).unwrap();
    let text_color = surfaces
        .panel
        .iter()
        .find(|p| p.control_id == TEXT_COLOR)
        .unwrap();
    let view = text_color.renderer.render(&surfaces.context);
    assert!(view.fields.iter().any(|f| f.value == "#ff0000"));
}
