//! CLI domain: parse, route, help, output, and presentation only.
//! No resolution logic; a single route table dispatches to the engine.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{ActivationSurface, Cli, Commands, SurfaceFilter};
pub use presentation::{
    format_activation, format_context, format_definitions, format_surfaces, format_validation,
    surfaces_view, ActivationReport, MenuRowView, SurfacesView, ToolbarItemView,
};
pub use route::RunContext;
