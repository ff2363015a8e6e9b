//! CLI presentation: view models and text/json formatters. No resolution logic.

mod activation;
mod context;
mod definitions;
mod shared;
mod surfaces;

pub use activation::{format_activation, ActivationReport};
pub use context::format_context;
pub use definitions::{format_definitions, format_validation};
pub use surfaces::{format_surfaces, surfaces_view, MenuRowView, SurfacesView, ToolbarItemView};
