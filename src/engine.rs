//! Control Engine
//!
//! Wires the pieces together for a caller that just has a selected element:
//! build the context, pick the definition, resolve all three surfaces.

use crate::context::{
    build_control_context, ControlContext, ElementInspector, StructuralInference, TypeInference,
};
use crate::definitions::{DefinitionTable, ElementDefinition};
use crate::error::ControlError;
use crate::panel::SharedPanelState;
use crate::registry::builtins::builtin_registry;
use crate::registry::ControlRegistry;
use crate::resolve::{ControlResolver, ResolvedControl, ResolvedPanel, ToolbarItem};
use crate::runtime::MenuRuntime;

/// Everything the rendering layer needs for one selection
#[derive(Debug)]
pub struct ResolvedSurfaces<'r> {
    pub context: ControlContext,
    pub toolbar: Vec<ToolbarItem<'r>>,
    pub menu: Vec<Vec<ResolvedControl<'r>>>,
    pub panel: Vec<ResolvedPanel<'r>>,
}

/// Static configuration plus the type inference used for new selections
pub struct ControlEngine {
    registry: ControlRegistry,
    definitions: DefinitionTable,
    inference: Box<dyn TypeInference + Send + Sync>,
}

impl ControlEngine {
    pub fn new(registry: ControlRegistry, definitions: DefinitionTable) -> Self {
        Self {
            registry,
            definitions,
            inference: Box::new(StructuralInference),
        }
    }

    /// Built-in registry and definitions, with panels bound to `state`
    pub fn builtin(state: SharedPanelState) -> Result<Self, ControlError> {
        Ok(Self::new(builtin_registry(state)?, DefinitionTable::builtin()))
    }

    pub fn with_inference(mut self, inference: impl TypeInference + Send + Sync + 'static) -> Self {
        self.inference = Box::new(inference);
        self
    }

    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    pub fn definitions(&self) -> &DefinitionTable {
        &self.definitions
    }

    pub fn resolver(&self) -> ControlResolver<'_> {
        ControlResolver::new(&self.registry)
    }

    /// Validate the definition table against the registry
    pub fn validate(&self) -> Result<(), Vec<ControlError>> {
        self.definitions.validate(&self.registry)
    }

    pub fn context_for(&self, element: &dyn ElementInspector) -> ControlContext {
        build_control_context(element, self.inference.as_ref(), &self.definitions)
    }

    pub fn definition_for(&self, ctx: &ControlContext) -> Result<&ElementDefinition, ControlError> {
        self.definitions.get_or_none(ctx.element_type)
    }

    /// Resolve all surfaces for an already built context
    pub fn resolve_context(
        &self,
        context: ControlContext,
        runtime: &dyn MenuRuntime,
    ) -> Result<ResolvedSurfaces<'_>, ControlError> {
        let definition = self.definition_for(&context)?;
        let resolver = self.resolver();
        let toolbar = resolver.resolve_toolbar(definition, &context, runtime)?;
        let menu = resolver.resolve_menu(definition, &context, runtime)?;
        let panel = resolver.resolve_panel(definition, &context)?;
        Ok(ResolvedSurfaces {
            context,
            toolbar,
            menu,
            panel,
        })
    }

    /// Build a fresh context for `element` and resolve all surfaces
    pub fn resolve(
        &self,
        element: &dyn ElementInspector,
        runtime: &dyn MenuRuntime,
    ) -> Result<ResolvedSurfaces<'_>, ControlError> {
        let context = self.context_for(element);
        self.resolve_context(context, runtime)
    }
}

impl std::fmt::Debug for ControlEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlEngine")
            .field("registry", &self.registry)
            .field("definitions", &self.definitions)
            .finish()
    }
}
