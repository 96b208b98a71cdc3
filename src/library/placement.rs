//! Placing source files into their weekend folder.

use std::fs;
use std::path::Path;

use super::{LibraryError, Result};

/// How a file ends up in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceMode {
    /// Hardlink, the source stays in place and no space is used
    Link,
    /// Full copy
    Copy,
}

impl PlaceMode {
    pub fn from_copy_flag(copy_files: bool) -> Self {
        if copy_files {
            Self::Copy
        } else {
            Self::Link
        }
    }
}

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Linked,
    Copied,
    /// The destination already existed and was left untouched
    Existing,
}

/// Place `source` at `destination`, never overwriting.
pub fn place_file(source: &Path, destination: &Path, mode: PlaceMode) -> Result<Placement> {
    if destination.exists() {
        return Ok(Placement::Existing);
    }

    match mode {
        PlaceMode::Link => {
            fs::hard_link(source, destination)
                .map_err(|e| LibraryError::io("failed to link", destination, e))?;
            Ok(Placement::Linked)
        }
        PlaceMode::Copy => {
            fs::copy(source, destination)
                .map_err(|e| LibraryError::io("failed to copy", destination, e))?;
            Ok(Placement::Copied)
        }
    }
}
