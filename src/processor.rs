//! Batch processor.
//!
//! Runs every source file through parse, order resolution, folder
//! resolution, artwork and placement, one file at a time. A failing file
//! is logged and counted, it never stops the batch.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use motorsort_art::{ArtGenerator, ArtworkRequest};
use motorsort_parser::{EventRecord, ParseError, Parser, SprintWeekends};
use tracing::{debug, info, warn};

use crate::library::{place_file, DestinationResolver, LibraryError, PlaceMode, Placement};

/// Why a single file could not be sorted.
#[derive(Debug, thiserror::Error)]
pub enum FileFailure {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Library(#[from] LibraryError),
}

/// A per-file failure, tagged with the source path.
#[derive(Debug, thiserror::Error)]
#[error("{}: {source}", path.display())]
pub struct FileError {
    pub path: PathBuf,
    #[source]
    pub source: FileFailure,
}

impl FileError {
    fn new(path: &Path, source: impl Into<FileFailure>) -> Self {
        Self {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// Parse failures are skips, everything else is a failure.
    pub fn is_skip(&self) -> bool {
        matches!(self.source, FileFailure::Parse(_))
    }
}

/// Where a file is going.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub record: EventRecord,
    pub folder: PathBuf,
    pub destination: PathBuf,
}

/// Counters reported at the end of a batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Linked or copied (or would be, in a dry run)
    pub placed: usize,
    /// Destination already present
    pub existing: usize,
    /// Unparseable names
    pub skipped: usize,
    /// I/O failures
    pub failed: usize,
    pub art_created: usize,
    pub art_failed: usize,
    pub errors: Vec<FileError>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.placed + self.existing + self.skipped + self.failed
    }

    fn record_error(&mut self, error: FileError) {
        if error.is_skip() {
            warn!("Skipping {}", error);
            self.skipped += 1;
        } else {
            warn!("Failed {}", error);
            self.failed += 1;
        }
        self.errors.push(error);
    }
}

/// Processor options.
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub mode: PlaceMode,
    /// Log what would happen without touching the library
    pub dry_run: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            mode: PlaceMode::Link,
            dry_run: false,
        }
    }
}

/// Sorts a batch of files into the library.
pub struct Processor {
    parser: Parser,
    resolver: DestinationResolver,
    art: Option<Box<dyn ArtGenerator>>,
    options: BatchOptions,
}

impl Processor {
    pub fn new(parser: Parser, resolver: DestinationResolver, options: BatchOptions) -> Self {
        Self {
            parser,
            resolver,
            art: None,
            options,
        }
    }

    /// Generate artwork for every folder touched by the batch.
    pub fn with_art(mut self, generator: Box<dyn ArtGenerator>) -> Self {
        self.art = Some(generator);
        self
    }

    /// Parse a file and work out its destination without side effects.
    pub fn plan(&self, path: &Path, sprints: &SprintWeekends) -> Result<PlannedFile, FileError> {
        let record = self
            .parser
            .parse(path, sprints)
            .map_err(|e| FileError::new(path, e))?;
        let file_name = record.final_file_name().map_err(|e| FileError::new(path, e))?;
        let (folder, _) = self
            .resolver
            .resolve(&record)
            .map_err(|e| FileError::new(path, e))?;

        Ok(PlannedFile {
            destination: folder.join(file_name),
            folder,
            record,
        })
    }

    /// Plan a whole batch in order without side effects.
    ///
    /// A folder planned for an earlier file is reused by later files of the
    /// same `series/season-round`, the way a real run finds the folder it
    /// created moments before.
    pub fn plan_batch(
        &self,
        files: &[PathBuf],
        sprints: &SprintWeekends,
    ) -> Vec<Result<PlannedFile, FileError>> {
        let mut folders: HashMap<PathBuf, PathBuf> = HashMap::new();

        files
            .iter()
            .map(|path| {
                let mut planned = self.plan(path, sprints)?;
                let key = Path::new(&planned.record.series).join(planned.record.round_prefix());

                match folders.entry(key) {
                    Entry::Occupied(entry) => {
                        let folder = entry.get();
                        if *folder != planned.folder {
                            debug!("Folding {:?} into planned folder {:?}", path, folder);
                            if let Some(file_name) = planned.destination.file_name() {
                                planned.destination = folder.join(file_name);
                            }
                            planned.folder = folder.clone();
                        }
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(planned.folder.clone());
                    }
                }
                Ok(planned)
            })
            .collect()
    }

    /// Process every file in order.
    ///
    /// `sprints` must have been detected over the complete file list.
    pub fn run(&self, files: &[PathBuf], sprints: &SprintWeekends) -> BatchSummary {
        let mut summary = BatchSummary::default();

        if self.options.dry_run {
            for (path, planned) in files.iter().zip(self.plan_batch(files, sprints)) {
                match planned {
                    Ok(planned) if planned.destination.exists() => summary.existing += 1,
                    Ok(planned) => {
                        info!("[DRY RUN] {:?} -> {:?}", path, planned.destination);
                        summary.placed += 1;
                    }
                    Err(e) => summary.record_error(e),
                }
            }
        } else {
            let mut art_done: HashSet<PathBuf> = HashSet::new();
            for path in files {
                match self.process_file(path, sprints, &mut art_done, &mut summary) {
                    Ok(Placement::Existing) => {
                        debug!("Already in library: {:?}", path);
                        summary.existing += 1;
                    }
                    Ok(placement) => {
                        debug!("{:?}: {:?}", placement, path);
                        summary.placed += 1;
                    }
                    Err(e) => summary.record_error(e),
                }
            }
        }

        info!(
            placed = summary.placed,
            existing = summary.existing,
            skipped = summary.skipped,
            failed = summary.failed,
            "Batch complete"
        );

        summary
    }

    fn process_file(
        &self,
        path: &Path,
        sprints: &SprintWeekends,
        art_done: &mut HashSet<PathBuf>,
        summary: &mut BatchSummary,
    ) -> Result<Placement, FileError> {
        let record = self
            .parser
            .parse(path, sprints)
            .map_err(|e| FileError::new(path, e))?;
        let file_name = record.final_file_name().map_err(|e| FileError::new(path, e))?;

        // fresh lookup for every file, earlier files may have created it
        let folder = self
            .resolver
            .ensure(&record)
            .map_err(|e| FileError::new(path, e))?;

        if let Some(generator) = &self.art {
            if art_done.insert(folder.clone()) {
                self.generate_art(generator.as_ref(), &record, &folder, summary);
            }
        }

        let destination = folder.join(&file_name);
        let placement = place_file(path, &destination, self.options.mode)
            .map_err(|e| FileError::new(path, e))?;

        if placement != Placement::Existing {
            info!("{:?} {}", placement, destination.display());
        }

        Ok(placement)
    }

    fn generate_art(
        &self,
        generator: &dyn ArtGenerator,
        record: &EventRecord,
        folder: &Path,
        summary: &mut BatchSummary,
    ) {
        let request = ArtworkRequest {
            series: record.series.clone(),
            season: record.season.clone(),
            round: record.round.clone(),
            race_name: record.race_name.clone(),
            folder: folder.to_path_buf(),
        };

        match generator.generate(&request) {
            Ok(outcome) if outcome.created_any() => {
                info!("Artwork created for {:?}", folder);
                summary.art_created += 1;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Artwork failed for {:?}: {}", folder, e);
                summary.art_failed += 1;
            }
        }
    }
}
