//! Error types for motorsort-art.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating artwork.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// An external tool failed to execute.
    #[error("tool execution failed: {tool}: {message}")]
    ToolFailed { tool: String, message: String },

    /// The destination folder for the artwork does not exist.
    #[error("destination folder not found: {}", path.display())]
    FolderNotFound { path: PathBuf },

    /// No source image was found for an artifact.
    #[error("no source image for {artifact} in {}", dir.display())]
    MissingSource { artifact: &'static str, dir: PathBuf },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a folder not found error.
    pub fn folder_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FolderNotFound { path: path.into() }
    }
}
