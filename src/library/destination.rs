//! Weekend folder resolution.
//!
//! Race names drift between broadcasters ("Emilia Romagna" one year,
//! "Imola" in the next feed), so the folder of a weekend is identified by
//! `series/season-round` only. If any folder with that prefix exists it is
//! reused, otherwise a new one is named after the current record.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use motorsort_parser::EventRecord;
use tracing::debug;

use super::{LibraryError, Result};

/// Resolves the destination folder of each record under a library root.
#[derive(Debug, Clone)]
pub struct DestinationResolver {
    root: PathBuf,
}

impl DestinationResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Folder a record would get if none exists for its round.
    pub fn candidate(&self, record: &EventRecord) -> PathBuf {
        self.root.join(&record.series).join(record.folder_name())
    }

    /// First existing folder (lexicographically) matching
    /// `root/series/season-round*`.
    pub fn find_existing(&self, record: &EventRecord) -> Result<Option<PathBuf>> {
        let series_dir = self.root.join(&record.series);
        let pattern = format!(
            "{}/{}*",
            Pattern::escape(&series_dir.to_string_lossy()),
            Pattern::escape(&record.round_prefix())
        );

        let paths = glob::glob(&pattern).map_err(|source| LibraryError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        let mut matches: Vec<PathBuf> = paths
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_dir())
            .collect();
        matches.sort();

        Ok(matches.into_iter().next())
    }

    /// Pick the folder for a record without touching the filesystem.
    ///
    /// Returns the folder and whether it already exists.
    pub fn resolve(&self, record: &EventRecord) -> Result<(PathBuf, bool)> {
        match self.find_existing(record)? {
            Some(existing) => {
                debug!("Reusing existing folder {:?}", existing);
                Ok((existing, true))
            }
            None => Ok((self.candidate(record), false)),
        }
    }

    /// Resolve the folder and create it if it is new.
    pub fn ensure(&self, record: &EventRecord) -> Result<PathBuf> {
        let (folder, exists) = self.resolve(record)?;
        if !exists {
            fs::create_dir_all(&folder)
                .map_err(|e| LibraryError::io("failed to create folder", &folder, e))?;
            debug!("Created folder {:?}", folder);
        }
        Ok(folder)
    }
}
