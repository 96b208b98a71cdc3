use motorsort_parser::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub sprint: SprintConfig,

    #[serde(default)]
    pub art: ArtConfig,

    /// Series prefixes, session keywords and weekend orderings
    #[serde(default)]
    pub vocabulary: Vocabulary,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Directory scanned for recordings
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,

    /// Library root the weekend folders are created in
    #[serde(default = "default_destination_path")]
    pub destination_path: PathBuf,

    /// Only files starting with one of these are processed
    #[serde(default = "default_file_prefixes")]
    pub file_prefixes: Vec<String>,

    /// Extensions (without the dot) that are processed
    #[serde(default = "default_file_types")]
    pub file_types: Vec<String>,

    /// Copy files instead of hardlinking them
    #[serde(default)]
    pub copy_files: bool,
}

fn default_source_path() -> PathBuf {
    PathBuf::from("/media/source")
}

fn default_destination_path() -> PathBuf {
    PathBuf::from("/media/motorsport")
}

fn default_file_prefixes() -> Vec<String> {
    vec!["Formula1".to_string(), "WEC".to_string()]
}

fn default_file_types() -> Vec<String> {
    vec!["mkv".to_string(), "mp4".to_string()]
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            destination_path: default_destination_path(),
            file_prefixes: default_file_prefixes(),
            file_types: default_file_types(),
            copy_files: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SprintConfig {
    /// Sprint rounds that cannot be detected from filenames, written
    /// `"05"` (current season) or `"2024-05"`
    #[serde(default)]
    pub rounds: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtConfig {
    #[serde(default = "default_art_enabled")]
    pub enabled: bool,

    /// ImageMagick executable name or path
    #[serde(default = "default_art_tool")]
    pub tool: String,

    /// Directory holding `images/` and `tracks/`
    #[serde(default = "default_assets_path")]
    pub assets_path: PathBuf,

    #[serde(default)]
    pub font_regular: Option<PathBuf>,

    #[serde(default)]
    pub font_black: Option<PathBuf>,
}

fn default_art_enabled() -> bool {
    true
}

fn default_art_tool() -> String {
    motorsort_art::tools::DEFAULT_TOOL.to_string()
}

fn default_assets_path() -> PathBuf {
    PathBuf::from("/config")
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            enabled: default_art_enabled(),
            tool: default_art_tool(),
            assets_path: default_assets_path(),
            font_regular: None,
            font_black: None,
        }
    }
}
