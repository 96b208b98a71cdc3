mod types;

pub use types::*;

use anyhow::{Context, Result};
use motorsort_art::ArtAssets;
use motorsort_parser::{parse_override, SprintOverride};
use std::path::{Path, PathBuf};

/// Environment variable naming the directory that holds `config.toml`.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const SOURCE_PATH_ENV: &str = "MEDIA_SOURCE_PATH";
pub const DESTINATION_PATH_ENV: &str = "MEDIA_DESTINATION_PATH";
pub const COPY_FILES_ENV: &str = "COPY_FILES";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Candidate config files in search order.
fn default_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(dir) = std::env::var(CONFIG_PATH_ENV) {
        paths.push(Path::new(&dir).join("config.toml"));
    }

    for path_str in [
        "./motorsort.toml",
        "~/.config/motorsort/config.toml",
        "/config/config.toml",
    ] {
        paths.push(PathBuf::from(shellexpand::tilde(path_str).as_ref()));
    }

    paths
}

/// Load config from default locations or return default config.
///
/// Environment overrides are applied on top of whatever was loaded.
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    let mut config = match custom_path {
        Some(path) => load_config(path)?,
        None => match default_paths().into_iter().find(|p| p.exists()) {
            Some(path) => {
                tracing::debug!("Using config file {:?}", path);
                load_config(&path)?
            }
            None => Config::default(),
        },
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config)?;

    Ok(config)
}

/// Override library settings from the environment.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(source) = lookup(SOURCE_PATH_ENV) {
        config.library.source_path = PathBuf::from(source);
    }
    if let Some(destination) = lookup(DESTINATION_PATH_ENV) {
        config.library.destination_path = PathBuf::from(destination);
    }
    if let Some(copy) = lookup(COPY_FILES_ENV) {
        config.library.copy_files = matches!(copy.trim(), "true" | "True" | "TRUE" | "1");
    }
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.library.file_types.is_empty() {
        anyhow::bail!("library.file_types cannot be empty");
    }
    if config.library.file_prefixes.iter().any(|p| p.is_empty()) {
        anyhow::bail!("library.file_prefixes cannot contain an empty prefix");
    }

    let problems = config.vocabulary.problems();
    if !problems.is_empty() {
        anyhow::bail!("Invalid vocabulary: {}", problems.join(", "));
    }
    for label in config.vocabulary.unordered_labels() {
        tracing::warn!("Session '{}' is not part of any weekend order", label);
    }

    sprint_overrides(config)?;

    if config.art.enabled && config.art.tool.trim().is_empty() {
        anyhow::bail!("art.tool cannot be empty when art is enabled");
    }

    Ok(())
}

/// Parsed `[sprint] rounds` entries.
pub fn sprint_overrides(config: &Config) -> Result<Vec<SprintOverride>> {
    config
        .sprint
        .rounds
        .iter()
        .map(|raw| parse_override(raw).context("Invalid [sprint] rounds entry"))
        .collect()
}

/// Artwork assets, with font overrides applied.
pub fn art_assets(config: &Config) -> ArtAssets {
    let mut assets = ArtAssets::from_root(&config.art.assets_path);
    if let Some(font) = &config.art.font_regular {
        assets.font_regular = font.clone();
    }
    if let Some(font) = &config.art.font_black {
        assets.font_black = font.clone();
    }
    assets
}
