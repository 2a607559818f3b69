use std::path::PathBuf;
use thiserror::Error;

use crate::tool::response::Tag;

/// Error types for talking to the external vimvs tool
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool executable could not be started at all
    #[error("Failed to spawn tool: {exe}")]
    Spawn {
        exe: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but exited with a non-zero status
    #[error("Tool exited with status {status}: {stderr}")]
    ToolExit { status: i32, stderr: String },

    /// The tool exited cleanly but its output had no line for the expected tag
    #[error("Tool output did not contain a {tag} line")]
    TagNotFound { tag: Tag },

    /// The tool's response could not be understood at all
    #[error("Unparseable tool response: {reason}")]
    Protocol { reason: String },

    /// The tool reported that the current directory is outside any project
    #[error("No project root found")]
    NoRoot,
}
