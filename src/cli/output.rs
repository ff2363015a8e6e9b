//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ControlError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ControlError) -> String {
    match e {
        ControlError::Snapshot(_) => {
            format!("{}\nhint: --element expects a JSON element snapshot", e)
        }
        ControlError::UnknownControl { .. }
        | ControlError::UnknownSection(_)
        | ControlError::SectionSurfaceMismatch { .. } => {
            format!("{}\nhint: run `canvas-controls validate`", e)
        }
        _ => e.to_string(),
    }
}
