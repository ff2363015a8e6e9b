//! CLI route table driven through RunContext

use canvas_controls::cli::{
    map_error, ActivationSurface, Cli, Commands, RunContext, SurfaceFilter,
};
use canvas_controls::config::{ControlsConfig, OutputFormat};
use canvas_controls::error::ControlError;
use clap::Parser;
use std::path::PathBuf;
use tempfile::TempDir;

const SOUND: &str = r#"{
    "classes": ["bloom-canvas-element"],
    "attributes": {"data-sound": "bell.mp3"},
    "children": [{"tag": "img", "attributes": {"data-icon-type": "audio"}}],
    "page": {"attributes": {"data-activity": "drag-sort"}}
}"#;

const CAPTION: &str = r#"{
    "classes": ["bloom-canvas-element"],
    "attributes": {"data-bubble-style": "none"},
    "children": [{"classes": ["bloom-translationGroup"]}]
}"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn element(&self, name: &str, json: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, json).unwrap();
        path
    }

    fn context(&self, config: ControlsConfig) -> RunContext {
        RunContext::with_config(self.dir.path().to_path_buf(), config).unwrap()
    }
}

fn plain_config(format: OutputFormat) -> ControlsConfig {
    let mut config = ControlsConfig::default();
    config.output.format = format;
    config.output.color = false;
    config
}

fn json(output: &str) -> serde_json::Value {
    serde_json::from_str(output).unwrap()
}

#[test]
fn test_resolve_json_output() {
    let fixture = Fixture::new();
    let element = fixture.element("caption.json", CAPTION);
    let ctx = fixture.context(plain_config(OutputFormat::Text));

    let output = ctx
        .execute(&Commands::Resolve {
            element,
            surface: SurfaceFilter::All,
            format: Some("json".to_string()),
        })
        .unwrap();
    let value = json(&output);
    assert_eq!(value["elementType"], "caption");
    let toolbar: Vec<&str> = value["toolbar"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap_or("|"))
        .collect();
    assert_eq!(toolbar, vec!["format", "|", "duplicate", "delete"]);
    assert_eq!(value["toolbar"][0]["iconOnly"], true);
    assert_eq!(value["toolbar"][0]["tooltip"], "Format");
    assert!(value["panel"].as_array().unwrap().len() >= 2);
}

#[test]
fn test_resolve_single_surface() {
    let fixture = Fixture::new();
    let element = fixture.element("caption.json", CAPTION);
    let ctx = fixture.context(plain_config(OutputFormat::Json));

    let output = ctx
        .execute(&Commands::Resolve {
            element,
            surface: SurfaceFilter::Menu,
            format: None,
        })
        .unwrap();
    let value = json(&output);
    assert!(value.get("toolbar").is_none());
    assert!(value.get("panel").is_none());
    assert!(value["menu"].is_array());
}

#[test]
fn test_resolve_text_output() {
    let fixture = Fixture::new();
    let element = fixture.element("sound.json", SOUND);
    let ctx = fixture.context(plain_config(OutputFormat::Text));

    let output = ctx
        .execute(&Commands::Resolve {
            element,
            surface: SurfaceFilter::All,
            format: None,
        })
        .unwrap();
    assert!(output.starts_with("Element type: sound"));
    assert!(output.contains("Toolbar"));
    assert!(output.contains("bell.mp3"));
}

#[test]
fn test_context_command() {
    let fixture = Fixture::new();
    let element = fixture.element("sound.json", SOUND);
    let ctx = fixture.context(plain_config(OutputFormat::Json));

    let output = ctx
        .execute(&Commands::Context {
            element,
            format: None,
        })
        .unwrap();
    let value = json(&output);
    assert_eq!(value["element_type"], "sound");
    assert_eq!(value["current_sound"], "bell.mp3");
    assert_eq!(value["is_in_draggable_game"], true);
    // Audio-icon children are fixed scaffolding
    assert_eq!(value["can_toggle_draggability"], false);
}

#[test]
fn test_describe_command() {
    let fixture = Fixture::new();
    let ctx = fixture.context(plain_config(OutputFormat::Json));

    let output = ctx
        .execute(&Commands::Describe {
            element_type: Some("book-link-grid".to_string()),
            format: None,
        })
        .unwrap();
    let value = json(&output);
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["elementType"], "book-link-grid");

    let all = ctx
        .execute(&Commands::Describe {
            element_type: None,
            format: Some("json".to_string()),
        })
        .unwrap();
    assert_eq!(json(&all).as_array().unwrap().len(), 11);

    let err = ctx
        .execute(&Commands::Describe {
            element_type: Some("teapot".to_string()),
            format: None,
        })
        .unwrap_err();
    assert!(matches!(err, ControlError::ConfigError(_)));
}

#[test]
fn test_validate_command() {
    let fixture = Fixture::new();
    let ctx = fixture.context(plain_config(OutputFormat::Text));
    let output = ctx.execute(&Commands::Validate).unwrap();
    assert!(output.contains("All checks passed"));

    // The sound submenu nests two levels
    let mut shallow = plain_config(OutputFormat::Text);
    shallow.engine.max_menu_depth = 1;
    let ctx = fixture.context(shallow);
    let err = ctx.execute(&Commands::Validate).unwrap_err();
    assert!(err.to_string().contains("chooseAudio"));
}

#[test]
fn test_activate_submenu_row() {
    let fixture = Fixture::new();
    let element = fixture.element("sound.json", SOUND);
    let ctx = fixture.context(plain_config(OutputFormat::Json));

    let output = ctx
        .execute(&Commands::Activate {
            element,
            control: "chooseAudio".to_string(),
            surface: ActivationSurface::Menu,
            path: vec!["choose".to_string()],
        })
        .unwrap();
    let value = json(&output);
    assert_eq!(value["menuCloses"], serde_json::json!([true]));
    assert_eq!(value["hostRequests"], serde_json::json!(["chooseSound"]));
}

#[test]
fn test_activate_unavailable_control() {
    let fixture = Fixture::new();
    let element = fixture.element("caption.json", CAPTION);
    let ctx = fixture.context(plain_config(OutputFormat::Text));

    let err = ctx
        .execute(&Commands::Activate {
            element: element.clone(),
            control: "chooseImage".to_string(),
            surface: ActivationSurface::Menu,
            path: Vec::new(),
        })
        .unwrap_err();
    assert!(matches!(err, ControlError::Unavailable(ref id) if id == "chooseImage"));

    let err = ctx
        .execute(&Commands::Activate {
            element,
            control: "format".to_string(),
            surface: ActivationSurface::Menu,
            path: vec!["nested".to_string()],
        })
        .unwrap_err();
    assert!(matches!(err, ControlError::Unavailable(_)));
}

const PLACEHOLDER_IMAGE: &str = r#"{
    "classes": ["bloom-canvas-element"],
    "children": [
        {"classes": ["bloom-imageContainer"], "children": [
            {"tag": "img", "attributes": {"src": "placeHolder.png"}}
        ]}
    ]
}"#;

#[test]
fn test_activate_uses_the_chosen_surface() {
    let fixture = Fixture::new();
    let element = fixture.element("placeholder.json", PLACEHOLDER_IMAGE);
    let ctx = fixture.context(plain_config(OutputFormat::Json));
    let activate = |control: &str, surface| Commands::Activate {
        element: element.clone(),
        control: control.to_string(),
        surface,
        path: Vec::new(),
    };

    // Offered (disabled) in the menu, hidden on the toolbar without a real image
    let err = ctx
        .execute(&activate("missingMetadata", ActivationSurface::Menu))
        .unwrap_err();
    assert!(matches!(err, ControlError::Disabled(ref id) if id == "missingMetadata"));
    let err = ctx
        .execute(&activate("missingMetadata", ActivationSurface::Toolbar))
        .unwrap_err();
    assert!(matches!(err, ControlError::Unavailable(ref id) if id == "missingMetadata"));

    let output = ctx
        .execute(&activate("duplicate", ActivationSurface::Toolbar))
        .unwrap();
    let value = json(&output);
    assert_eq!(value["menuCloses"], serde_json::json!([false]));
    assert_eq!(value["hostRequests"], serde_json::json!(["duplicate"]));
}

#[test]
fn test_invalid_format_flag() {
    let fixture = Fixture::new();
    let element = fixture.element("caption.json", CAPTION);
    let ctx = fixture.context(plain_config(OutputFormat::Text));
    let err = ctx
        .execute(&Commands::Context {
            element,
            format: Some("yaml".to_string()),
        })
        .unwrap_err();
    assert!(map_error(&err).contains("yaml"));
}

#[test]
fn test_bad_snapshot_maps_to_hint() {
    let fixture = Fixture::new();
    let element = fixture.element("broken.json", "{ nope");
    let ctx = fixture.context(plain_config(OutputFormat::Text));
    let err = ctx
        .execute(&Commands::Context {
            element,
            format: None,
        })
        .unwrap_err();
    assert!(map_error(&err).contains("hint"));
}

#[test]
fn test_cli_parses_activate_path() {
    let cli = Cli::try_parse_from([
        "canvas-controls",
        "activate",
        "--element",
        "sound.json",
        "--control",
        "chooseAudio",
        "--path",
        "choose",
    ])
    .unwrap();
    match cli.command {
        Commands::Activate {
            control,
            surface,
            path,
            ..
        } => {
            assert_eq!(control, "chooseAudio");
            assert_eq!(surface, ActivationSurface::Menu);
            assert_eq!(path, vec!["choose".to_string()]);
        }
        _ => panic!("expected activate"),
    }
}

#[test]
fn test_cli_parses_activate_surface() {
    let cli = Cli::try_parse_from([
        "canvas-controls",
        "activate",
        "--element",
        "image.json",
        "--control",
        "delete",
        "--surface",
        "toolbar",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Activate {
            surface: ActivationSurface::Toolbar,
            ..
        }
    ));
}

#[test]
fn test_cli_parses_resolve_surface() {
    let cli = Cli::try_parse_from([
        "canvas-controls",
        "--verbose",
        "resolve",
        "--element",
        "x.json",
        "--surface",
        "panel",
    ])
    .unwrap();
    assert!(cli.verbose);
    assert!(matches!(
        cli.command,
        Commands::Resolve {
            surface: SurfaceFilter::Panel,
            ..
        }
    ));
}
