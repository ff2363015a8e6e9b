//! CLI route: single route table and run context. Dispatches to the engine and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::{ActivationSurface, Commands};
use crate::cli::presentation::{
    format_activation, format_context, format_definitions, format_surfaces, format_validation,
    surfaces_view, ActivationReport,
};
use crate::config::{ConfigLoader, ControlsConfig, OutputFormat};
use crate::context::{ControlContext, ElementType};
use crate::engine::ControlEngine;
use crate::error::ControlError;
use crate::panel::{PanelState, SharedPanelState};
use crate::registry::ControlDefinition;
use crate::resolve::ToolbarItem;
use crate::runtime::{DetachedRuntime, LoggingHost, RecordingRuntime};
use crate::snapshot::ElementSnapshot;
use parking_lot::RwLock;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: loaded config and the built-in engine.
pub struct RunContext {
    workspace_root: PathBuf,
    config: ControlsConfig,
    engine: ControlEngine,
    panel_state: SharedPanelState,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
    ) -> Result<Self, ControlError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Self::with_config(workspace_root, config)
    }

    /// Create run context from an already loaded config.
    pub fn with_config(
        workspace_root: PathBuf,
        config: ControlsConfig,
    ) -> Result<Self, ControlError> {
        config.ensure_valid()?;
        let panel_state: SharedPanelState = Arc::new(RwLock::new(PanelState::default()));
        let engine = ControlEngine::builtin(Arc::clone(&panel_state))?;
        Ok(Self {
            workspace_root,
            config,
            engine,
            panel_state,
        })
    }

    pub fn config(&self) -> &ControlsConfig {
        &self.config
    }

    pub fn engine(&self) -> &ControlEngine {
        &self.engine
    }

    /// Panel state the built-in panels render from
    pub fn panel_state(&self) -> SharedPanelState {
        Arc::clone(&self.panel_state)
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ControlError> {
        let name = command_name(command);
        let started = Instant::now();
        debug!(command = name, "Executing command");

        let result = self.execute_inner(command);

        info!(
            command = name,
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ControlError> {
        if self.config.engine.validate_on_load && !matches!(command, Commands::Validate) {
            self.ensure_definitions_valid()?;
        }

        match command {
            Commands::Resolve {
                element,
                surface,
                format,
            } => {
                let format = self.output_format(format.as_deref())?;
                let snapshot = ElementSnapshot::from_file(element)?;
                let surfaces = self.engine.resolve(&snapshot, &DetachedRuntime)?;
                let view = surfaces_view(&surfaces, *surface);
                format_surfaces(&view, format, self.use_color())
            }
            Commands::Context { element, format } => {
                let format = self.output_format(format.as_deref())?;
                let snapshot = ElementSnapshot::from_file(element)?;
                let ctx = self.engine.context_for(&snapshot);
                format_context(&ctx, format)
            }
            Commands::Describe {
                element_type,
                format,
            } => {
                let format = self.output_format(format.as_deref())?;
                let definitions = self.engine.definitions();
                let selected = match element_type {
                    Some(name) => {
                        let element_type =
                            ElementType::from_str(name).map_err(ControlError::ConfigError)?;
                        let definition = definitions
                            .get(element_type)
                            .ok_or(ControlError::MissingDefinition(element_type))?;
                        vec![definition]
                    }
                    None => definitions.iter().collect(),
                };
                format_definitions(&selected, format)
            }
            Commands::Validate => self.validate(),
            Commands::Activate {
                element,
                control,
                surface,
                path,
            } => self.activate(element, control, *surface, path),
        }
    }

    fn validate(&self) -> Result<String, ControlError> {
        let mut errors: Vec<String> = match self.engine.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors.iter().map(|e| e.to_string()).collect(),
        };
        errors.extend(self.menu_depth_violations());

        let output = format_validation(
            &errors,
            self.engine.definitions().iter().count(),
            self.engine.registry().controls().len(),
            self.config.output.format,
        )?;
        if errors.is_empty() {
            Ok(output)
        } else {
            Err(ControlError::ConfigError(output))
        }
    }

    /// Rows deeper than the configured limit, built against an empty context
    fn menu_depth_violations(&self) -> Vec<String> {
        let max = self.config.engine.max_menu_depth;
        let ctx = ControlContext::default();
        self.engine
            .registry()
            .controls()
            .into_iter()
            .filter_map(|control| match control {
                ControlDefinition::Command(command) => Some(command),
                ControlDefinition::Panel(_) => None,
            })
            .filter_map(|command| {
                let depth = command.build_menu_row(&ctx, &DetachedRuntime).depth();
                (depth > max).then(|| {
                    format!(
                        "Menu row '{}' nests {} levels (max {})",
                        command.id, depth, max
                    )
                })
            })
            .collect()
    }

    fn activate(
        &self,
        element: &Path,
        control: &str,
        surface: ActivationSurface,
        path: &[String],
    ) -> Result<String, ControlError> {
        let snapshot = ElementSnapshot::from_file(element)?;
        let ctx = self.engine.context_for(&snapshot);
        let runtime = RecordingRuntime::new();
        let host = LoggingHost::new();

        let surfaces = self.engine.resolve_context(ctx, &runtime)?;
        let resolved = match surface {
            ActivationSurface::Menu => surfaces.menu.iter().flatten().find(|c| c.id() == control),
            ActivationSurface::Toolbar => surfaces
                .toolbar
                .iter()
                .filter_map(ToolbarItem::control)
                .find(|c| c.id() == control),
        }
        .ok_or_else(|| ControlError::Unavailable(control.to_string()))?;

        let executor = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        if path.is_empty() {
            executor.block_on(resolved.activate(&surfaces.context, &runtime, &host))?;
        } else {
            let steps: Vec<&str> = path.iter().map(String::as_str).collect();
            let row = resolved
                .menu_row
                .as_ref()
                .and_then(|row| row.find(&steps))
                .ok_or_else(|| {
                    ControlError::Unavailable(format!("{} > {}", control, path.join(" > ")))
                })?;
            executor.block_on(row.activate(&surfaces.context, &runtime, &host))?;
        }

        let report = ActivationReport {
            control: control.to_string(),
            path: path.to_vec(),
            menu_closes: runtime.calls(),
            host_requests: host.performed(),
        };
        format_activation(&report, self.config.output.format)
    }

    fn ensure_definitions_valid(&self) -> Result<(), ControlError> {
        self.engine.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ControlError::ConfigError(format!(
                "Element definitions failed validation:\n{}",
                msgs.join("\n")
            ))
        })
    }

    fn output_format(&self, flag: Option<&str>) -> Result<OutputFormat, ControlError> {
        match flag {
            None => Ok(self.config.output.format),
            Some("text") => Ok(OutputFormat::Text),
            Some("json") => Ok(OutputFormat::Json),
            Some(other) => Err(ControlError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn use_color(&self) -> bool {
        self.config.output.color && std::io::stdout().is_terminal()
    }
}
