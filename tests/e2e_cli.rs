//! CLI end-to-end tests
//!
//! Tests for the motorsort command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::{tempdir, TempDir};

/// Get a command for the motorsort binary, isolated from the caller's
/// environment overrides.
#[allow(deprecated)]
fn motorsort_cmd() -> Command {
    let mut cmd = Command::cargo_bin("motorsort").unwrap();
    for key in [
        "CONFIG_PATH",
        "MEDIA_SOURCE_PATH",
        "MEDIA_DESTINATION_PATH",
        "COPY_FILES",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

/// Write a config with artwork disabled.
fn write_config(dir: &Path, source: &Path, destination: &Path) -> String {
    let path = dir.join("config.toml");
    fs::write(
        &path,
        format!(
            r#"
[library]
source_path = "{}"
destination_path = "{}"

[art]
enabled = false
"#,
            source.display(),
            destination.display()
        ),
    )
    .unwrap();
    path.to_str().unwrap().to_string()
}

/// Source tree with one sprint weekend and one unparseable recording.
fn source_tree() -> TempDir {
    let temp = tempdir().unwrap();
    let source = temp.path().join("source");
    fs::create_dir_all(&source).unwrap();
    for name in [
        "Formula1.2023.Round06.Miami.FP2.SkyF1HD.mkv",
        "Formula1.2023.Round06.Miami.Sprint.SkyF1HD.mkv",
        "Formula1.2023.Round01.Bahrain.Highlights.mkv",
        "notes.txt",
    ] {
        fs::write(source.join(name), name.as_bytes()).unwrap();
    }
    temp
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = motorsort_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = motorsort_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("motorsort"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = motorsort_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("motorsort"));
}

#[test]
fn test_cli_run_help() {
    let mut cmd = motorsort_cmd();
    cmd.args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sort the source directory"));
}

#[test]
fn test_cli_parse_prints_target() {
    let temp = tempdir().unwrap();
    let config = write_config(temp.path(), temp.path(), temp.path());

    let mut cmd = motorsort_cmd();
    cmd.args([
        "parse",
        "--config",
        &config,
        "Formula1.2022.Round04.Example.FP1.FastChannelHD.1080p.mkv",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Series:  Formula 1"))
    .stdout(predicate::str::contains(
        "Formula 1/2022-04 - Example GP/Example GP - S04E01 - Free Practice 1 [FastChannelHD 1080p].mkv",
    ));
}

#[test]
fn test_cli_parse_json() {
    let temp = tempdir().unwrap();
    let config = write_config(temp.path(), temp.path(), temp.path());

    let mut cmd = motorsort_cmd();
    let output = cmd
        .args([
            "parse",
            "--json",
            "--config",
            &config,
            "WEC.2023.Round04.France.Le.Mans.Hyperpole.Eurosport.mp4",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &value[0];
    assert_eq!(first["file_name"], "Le Mans - S04E06 - Hyperpole [Eurosport].mp4");
    assert_eq!(first["record"]["series"], "World Endurance Championship");
    assert_eq!(first["record"]["weekend_order"], "06");
}

#[test]
fn test_cli_parse_sprint_flag_changes_order() {
    let temp = tempdir().unwrap();
    let config = write_config(temp.path(), temp.path(), temp.path());
    let name = "Formula1.2023.Round06.Miami.FP2.SkyF1HD.mkv";

    motorsort_cmd()
        .args(["parse", "--config", &config, name])
        .assert()
        .success()
        .stdout(predicate::str::contains("S06E02"));

    motorsort_cmd()
        .args(["parse", "--config", &config, "--sprint", "2023-06", name])
        .assert()
        .success()
        .stdout(predicate::str::contains("S06E06"));
}

#[test]
fn test_cli_parse_unknown_series_fails() {
    let temp = tempdir().unwrap();
    let config = write_config(temp.path(), temp.path(), temp.path());

    let mut cmd = motorsort_cmd();
    cmd.args([
        "parse",
        "--config",
        &config,
        "NASCAR.2023.Round01.Daytona.Race.mkv",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("1 of 1 filenames could not be parsed"));
}

#[test]
fn test_cli_validate_config() {
    let temp = tempdir().unwrap();
    let config = write_config(temp.path(), temp.path(), temp.path());

    let mut cmd = motorsort_cmd();
    cmd.args(["validate", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Artwork enabled: false"));
}

#[test]
fn test_cli_validate_rejects_empty_file_types() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[library]\nfile_types = []\n").unwrap();

    let mut cmd = motorsort_cmd();
    cmd.args(["validate", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file_types"));
}

#[test]
fn test_cli_run_missing_source() {
    let temp = tempdir().unwrap();
    let config = write_config(
        temp.path(),
        &temp.path().join("missing"),
        &temp.path().join("library"),
    );

    let mut cmd = motorsort_cmd();
    cmd.args(["run", "--config", &config])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_cli_run_dry_run_leaves_library_untouched() {
    let temp = source_tree();
    let source = temp.path().join("source");
    let library = temp.path().join("library");
    let config = write_config(temp.path(), &source, &library);

    let mut cmd = motorsort_cmd();
    cmd.args(["run", "--dry-run", "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[DRY RUN] Placed: 2, existing: 0, skipped: 1, failed: 0",
        ));

    assert!(!library.exists());
}

#[test]
fn test_cli_run_sorts_and_is_idempotent() {
    let temp = source_tree();
    let source = temp.path().join("source");
    let library = temp.path().join("library");
    let config = write_config(temp.path(), &source, &library);

    motorsort_cmd()
        .args(["run", "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Placed: 2, existing: 0, skipped: 1, failed: 0",
        ));

    let folder = library.join("Formula 1/2023-06 - Miami GP");
    assert!(folder
        .join("Miami GP - S06E06 - Free Practice 2 [SkyF1HD].mkv")
        .is_file());
    assert!(folder.join("Miami GP - S06E08 - Sprint [SkyF1HD].mkv").is_file());
    assert!(!library.join("Formula 1/2023-01 - Bahrain GP").exists());

    motorsort_cmd()
        .args(["run", "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Placed: 0, existing: 2, skipped: 1, failed: 0",
        ));
}

#[test]
fn test_cli_run_destination_flag_overrides_config() {
    let temp = source_tree();
    let source = temp.path().join("source");
    let other = temp.path().join("other");
    let config = write_config(temp.path(), &source, &temp.path().join("library"));

    motorsort_cmd()
        .args([
            "run",
            "--config",
            &config,
            "--destination",
            other.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(other.join("Formula 1/2023-06 - Miami GP").is_dir());
    assert!(!temp.path().join("library").exists());
}
