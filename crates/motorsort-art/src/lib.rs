//! # motorsort-art
//!
//! Cover art for race weekend folders.
//!
//! Each destination folder gets two artifacts: a `background.jpg` with the
//! round number and a `show.png` poster with the series title, season and
//! round. Artifacts that already exist are never regenerated.
//!
//! ## Example
//!
//! ```no_run
//! use motorsort_art::{ArtAssets, ArtGenerator, ArtworkRequest, ImageMagick};
//!
//! let generator = ImageMagick::from_config("convert", ArtAssets::from_root("/config"))?;
//! let request = ArtworkRequest {
//!     series: "Formula 1".to_string(),
//!     season: "2024".to_string(),
//!     round: "05".to_string(),
//!     race_name: "Miami".to_string(),
//!     folder: "/media/motorsport/Formula 1/2024-05 - Miami GP".into(),
//! };
//! let outcome = generator.generate(&request)?;
//! println!("poster: {:?}", outcome.poster);
//! # Ok::<(), motorsort_art::Error>(())
//! ```

mod error;
pub mod imagemagick;
pub mod tools;

pub use error::{Error, Result};
pub use imagemagick::{ArtAssets, ImageMagick};
pub use tools::{check_tool, require_tool, ToolInfo};

use std::path::PathBuf;

/// Background artifact file name.
pub const BACKGROUND_FILE: &str = "background.jpg";

/// Poster artifact file name.
pub const POSTER_FILE: &str = "show.png";

/// What the artwork is generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRequest {
    pub series: String,
    pub season: String,
    pub round: String,
    pub race_name: String,
    /// Destination folder the artifacts are written into
    pub folder: PathBuf,
}

impl ArtworkRequest {
    pub fn background_path(&self) -> PathBuf {
        self.folder.join(BACKGROUND_FILE)
    }

    pub fn poster_path(&self) -> PathBuf {
        self.folder.join(POSTER_FILE)
    }
}

/// State of one artifact after a generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// Written by this call
    Created,
    /// Already present, left untouched
    Existing,
}

/// Result of generating the artwork of one folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtworkOutcome {
    pub background: Artifact,
    pub poster: Artifact,
}

impl ArtworkOutcome {
    /// Whether anything was written.
    pub fn created_any(&self) -> bool {
        self.background == Artifact::Created || self.poster == Artifact::Created
    }
}

/// Something that can produce the artwork of a weekend folder.
pub trait ArtGenerator {
    /// Generate missing artifacts for the request's folder.
    fn generate(&self, request: &ArtworkRequest) -> Result<ArtworkOutcome>;
}
