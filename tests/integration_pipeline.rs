//! Pipeline integration tests
//!
//! Runs whole batches through the processor against a temporary library.

use motorsort::library::{DestinationResolver, PlaceMode};
use motorsort::processor::{BatchOptions, Processor};
use motorsort::scanner::{scan_source, Eligibility};
use motorsort_art::{
    ArtGenerator, Artifact, ArtworkOutcome, ArtworkRequest, Error as ArtError,
};
use motorsort_parser::{Parser, SprintWeekends};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};

/// Records every request instead of running ImageMagick.
#[derive(Clone, Default)]
struct RecordingArt {
    requests: Arc<Mutex<Vec<ArtworkRequest>>>,
    fail: bool,
}

impl ArtGenerator for RecordingArt {
    fn generate(&self, request: &ArtworkRequest) -> motorsort_art::Result<ArtworkOutcome> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(ArtError::tool_failed("convert", "no fonts"));
        }
        Ok(ArtworkOutcome {
            background: Artifact::Created,
            poster: Artifact::Created,
        })
    }
}

struct Fixture {
    _temp: TempDir,
    source: PathBuf,
    library: PathBuf,
}

fn fixture(names: &[&str]) -> Fixture {
    let temp = tempdir().unwrap();
    let source = temp.path().join("source");
    let library = temp.path().join("library");
    fs::create_dir_all(&source).unwrap();
    fs::create_dir_all(&library).unwrap();
    for name in names {
        fs::write(source.join(name), name.as_bytes()).unwrap();
    }
    Fixture {
        _temp: temp,
        source,
        library,
    }
}

fn files(source: &Path) -> Vec<PathBuf> {
    let eligibility = Eligibility::new(
        &["Formula1".to_string(), "WEC".to_string()],
        &["mkv".to_string(), "mp4".to_string()],
    );
    scan_source(source, &eligibility).unwrap()
}

fn processor(library: &Path, mode: PlaceMode) -> Processor {
    Processor::new(
        Parser::default(),
        DestinationResolver::new(library),
        BatchOptions {
            mode,
            dry_run: false,
        },
    )
}

#[test]
fn test_sprint_weekend_sorted_regardless_of_file_order() {
    let fx = fixture(&[
        "Formula1.2023.Round06.Miami.FP2.SkyF1HD.mkv",
        "Formula1.2023.Round06.Miami.Sprint.Race.SkyF1HD.mkv",
        "Formula1.2023.Round06.Miami.Sprint.SkyF1HD.mkv",
    ]);
    let files = files(&fx.source);
    let sprints = SprintWeekends::detect(&files, &[], 2023);

    let summary = processor(&fx.library, PlaceMode::Link).run(&files, &sprints);
    assert_eq!(summary.placed, 3);
    assert!(summary.errors.is_empty());

    let folder = fx.library.join("Formula 1/2023-06 - Miami GP");
    for name in [
        "Miami GP - S06E06 - Free Practice 2 [SkyF1HD].mkv",
        "Miami GP - S06E08 - Sprint [SkyF1HD].mkv",
        "Miami GP - S06E13 - Race [SkyF1HD].mkv",
    ] {
        assert!(folder.join(name).is_file(), "missing {}", name);
    }
}

#[test]
fn test_second_run_places_nothing() {
    let fx = fixture(&[
        "Formula1.2024.Round05.Miami.FP1.SkyF1HD.mkv",
        "WEC.2024.Round02.Spa.Race.Eurosport.mp4",
    ]);
    let files = files(&fx.source);
    let sprints = SprintWeekends::detect(&files, &[], 2024);
    let processor = processor(&fx.library, PlaceMode::Copy);

    let first = processor.run(&files, &sprints);
    assert_eq!((first.placed, first.existing), (2, 0));

    let second = processor.run(&files, &sprints);
    assert_eq!((second.placed, second.existing), (0, 2));
    assert_eq!(second.total(), 2);
}

#[test]
fn test_files_fold_into_existing_round_folder() {
    let fx = fixture(&["Formula1.2024.Round07.Imola.Race.SkyF1HD.mkv"]);
    let existing = fx.library.join("Formula 1/2024-07 - Emilia Romagna GP");
    fs::create_dir_all(&existing).unwrap();

    let files = files(&fx.source);
    let summary = processor(&fx.library, PlaceMode::Link).run(&files, &SprintWeekends::new());
    assert_eq!(summary.placed, 1);

    assert!(existing
        .join("Imola GP - S07E09 - Race [SkyF1HD].mkv")
        .is_file());
    assert!(!fx.library.join("Formula 1/2024-07 - Imola GP").exists());
}

#[test]
fn test_unparseable_files_are_skipped() {
    let fx = fixture(&[
        "Formula1.2023.Round01.Bahrain.Highlights.mkv",
        "Formula1.2023.Round01.Bahrain.Qualifying.mkv",
    ]);
    let files = files(&fx.source);
    let summary = processor(&fx.library, PlaceMode::Link).run(&files, &SprintWeekends::new());

    assert_eq!(summary.placed, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failed, 0);
    assert!(summary.errors[0].is_skip());
    assert!(summary.errors[0]
        .path
        .ends_with("Formula1.2023.Round01.Bahrain.Highlights.mkv"));
}

#[test]
fn test_artwork_generated_once_per_folder() {
    let fx = fixture(&[
        "Formula1.2024.Round05.Miami.FP1.SkyF1HD.mkv",
        "Formula1.2024.Round05.Miami.FP2.SkyF1HD.mkv",
        "Formula1.2024.Round06.Imola.FP1.SkyF1HD.mkv",
    ]);
    let files = files(&fx.source);
    let art = RecordingArt::default();
    let processor = processor(&fx.library, PlaceMode::Link).with_art(Box::new(art.clone()));

    let summary = processor.run(&files, &SprintWeekends::new());
    assert_eq!(summary.placed, 3);
    assert_eq!(summary.art_created, 2);

    let requests = art.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].race_name, "Miami");
    assert_eq!(requests[0].round, "05");
    assert_eq!(
        requests[0].folder,
        fx.library.join("Formula 1/2024-05 - Miami GP")
    );
    assert_eq!(requests[1].race_name, "Imola");
}

#[test]
fn test_artwork_failure_does_not_block_placement() {
    let fx = fixture(&["Formula1.2024.Round05.Miami.FP1.SkyF1HD.mkv"]);
    let files = files(&fx.source);
    let art = RecordingArt {
        fail: true,
        ..Default::default()
    };
    let processor = processor(&fx.library, PlaceMode::Link).with_art(Box::new(art));

    let summary = processor.run(&files, &SprintWeekends::new());
    assert_eq!(summary.placed, 1);
    assert_eq!(summary.art_failed, 1);
    assert_eq!(summary.failed, 0);
}

#[test]
fn test_dry_run_plans_without_side_effects() {
    let fx = fixture(&["Formula1.2024.Round05.Miami.FP1.SkyF1HD.mkv"]);
    let files = files(&fx.source);
    let art = RecordingArt::default();
    let processor = Processor::new(
        Parser::default(),
        DestinationResolver::new(&fx.library),
        BatchOptions {
            mode: PlaceMode::Link,
            dry_run: true,
        },
    )
    .with_art(Box::new(art.clone()));

    let summary = processor.run(&files, &SprintWeekends::new());
    assert_eq!(summary.placed, 1);
    assert!(art.requests.lock().unwrap().is_empty());
    assert!(!fx.library.join("Formula 1").exists());

    let planned = processor
        .plan(&files[0], &SprintWeekends::new())
        .unwrap();
    assert_eq!(
        planned.destination,
        fx.library
            .join("Formula 1/2024-05 - Miami GP/Miami GP - S05E01 - Free Practice 1 [SkyF1HD].mkv")
    );
}

#[test]
fn test_dry_run_folds_like_a_real_run() {
    let fx = fixture(&[
        "Formula1.2024.Round07.Emilia.Romagna.Race.SkyF1HD.mkv",
        "Formula1.2024.Round07.Imola.FP1.SkyF1HD.mkv",
    ]);
    let files = files(&fx.source);
    let sprints = SprintWeekends::new();
    let dry = Processor::new(
        Parser::default(),
        DestinationResolver::new(&fx.library),
        BatchOptions {
            mode: PlaceMode::Link,
            dry_run: true,
        },
    );

    let planned: Vec<_> = dry
        .plan_batch(&files, &sprints)
        .into_iter()
        .map(|p| p.unwrap())
        .collect();
    let folder = fx.library.join("Formula 1/2024-07 - Emilia Romagna GP");
    assert_eq!(planned[0].folder, folder);
    assert_eq!(planned[1].folder, folder);
    assert_eq!(
        planned[1].destination,
        folder.join("Imola GP - S07E01 - Free Practice 1 [SkyF1HD].mkv")
    );
    assert_eq!(dry.run(&files, &sprints).placed, 2);
    assert!(!fx.library.join("Formula 1").exists());

    processor(&fx.library, PlaceMode::Link).run(&files, &sprints);
    let created: Vec<_> = fs::read_dir(fx.library.join("Formula 1"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(created, vec![folder.clone()]);
    for planned in &planned {
        assert!(planned.destination.is_file());
    }
}
