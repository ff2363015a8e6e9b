//! canvas-controls: Control Availability and Resolution
//!
//! Decides which editing controls a selected canvas element offers on the
//! toolbar, the context menu, and the tool panel, and whether each one is
//! enabled. Element definitions list controls by id; rule maps built from
//! shared presets decide visibility and enablement from a [`ControlContext`]
//! snapshot; the resolver turns both into render-ready surfaces.
//!
//! [`ControlContext`]: context::ControlContext

pub mod cli;
pub mod config;
pub mod context;
pub mod definitions;
pub mod engine;
pub mod error;
pub mod logging;
pub mod menu;
pub mod panel;
pub mod registry;
pub mod resolve;
pub mod rules;
pub mod runtime;
pub mod snapshot;

pub use context::{ControlContext, ElementType};
pub use engine::{ControlEngine, ResolvedSurfaces};
pub use error::ControlError;
