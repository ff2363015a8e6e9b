//! CLI parse: clap types for canvas-controls. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// canvas-controls CLI - resolve editing controls for canvas elements
#[derive(Parser)]
#[command(name = "canvas-controls")]
#[command(about = "Resolve toolbar, menu, and tool panel controls for a selected canvas element")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,
}

/// Which surfaces `resolve` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SurfaceFilter {
    Toolbar,
    Menu,
    Panel,
    All,
}

impl SurfaceFilter {
    pub fn includes(self, other: SurfaceFilter) -> bool {
        self == SurfaceFilter::All || self == other
    }
}

/// Surface `activate` looks the control up on
///
/// Surface rules may disagree, so the same control can be enabled in the menu
/// and disabled on the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActivationSurface {
    Menu,
    Toolbar,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the surfaces for an element snapshot
    Resolve {
        /// Element snapshot (JSON)
        #[arg(long)]
        element: PathBuf,
        /// Surface to print
        #[arg(long, value_enum, default_value = "all")]
        surface: SurfaceFilter,
        /// Output format (text or json); defaults to the configured format
        #[arg(long)]
        format: Option<String>,
    },
    /// Print the control context computed for an element snapshot
    Context {
        /// Element snapshot (JSON)
        #[arg(long)]
        element: PathBuf,
        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Describe element definitions
    Describe {
        /// Only this element type (e.g. image, speech, book-link-grid)
        #[arg(long = "type")]
        element_type: Option<String>,
        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Validate the built-in definitions against the control registry
    Validate,
    /// Run a command against a logging host
    Activate {
        /// Element snapshot (JSON)
        #[arg(long)]
        element: PathBuf,
        /// Control id (e.g. chooseAudio)
        #[arg(long)]
        control: String,
        /// Surface whose availability applies
        #[arg(long, value_enum, default_value = "menu")]
        surface: ActivationSurface,
        /// Submenu row ids to follow below the control (menu only)
        #[arg(long, num_args = 1..)]
        path: Vec<String>,
    },
}
