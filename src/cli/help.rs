//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "resolve", "activate").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Resolve { .. } => "resolve",
        Commands::Context { .. } => "context",
        Commands::Describe { .. } => "describe",
        Commands::Validate => "validate",
        Commands::Activate { .. } => "activate",
    }
}
