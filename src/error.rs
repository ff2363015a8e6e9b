//! Error types for the control availability engine.

use crate::context::ElementType;
use crate::rules::Surface;
use thiserror::Error;

/// Engine errors
///
/// Unknown ids and surface mismatches are static composition defects: the
/// resolvers return them instead of silently hiding controls.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("Control '{control}' is not registered (referenced by {referenced_by})")]
    UnknownControl {
        control: String,
        referenced_by: String,
    },

    #[error("Section '{0}' is not registered")]
    UnknownSection(String),

    #[error("Section '{section}' belongs to the {actual} surface, not {expected}")]
    SectionSurfaceMismatch {
        section: String,
        expected: Surface,
        actual: Surface,
    },

    #[error("Duplicate registration: {0}")]
    Duplicate(String),

    #[error("No definition for element type '{0}'")]
    MissingDefinition(ElementType),

    #[error("Control '{0}' is disabled")]
    Disabled(String),

    #[error("Control '{0}' is a panel and cannot be activated")]
    NotACommand(String),

    #[error("Control '{0}' is not available for the selected element")]
    Unavailable(String),

    #[error("Menu row '{0}' has no action")]
    NoAction(String),

    #[error("Action for '{control}' failed: {message}")]
    ActionFailed { control: String, message: String },

    #[error("Invalid element snapshot: {0}")]
    Snapshot(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for ControlError {
    fn from(err: config::ConfigError) -> Self {
        ControlError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ControlError {
    fn from(err: serde_json::Error) -> Self {
        ControlError::Snapshot(err.to_string())
    }
}
