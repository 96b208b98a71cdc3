//! Destination library: weekend folder resolution and file placement.

mod destination;
mod placement;

pub use destination::DestinationResolver;
pub use placement::{place_file, PlaceMode, Placement};

use std::path::PathBuf;

/// Result type alias using [`LibraryError`].
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Failures while touching the destination library.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// The folder lookup pattern could not be built.
    #[error("invalid folder pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A filesystem operation failed.
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LibraryError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
