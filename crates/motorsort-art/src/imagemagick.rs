//! ImageMagick-backed artwork generator.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::tools::get_tool_path;
use crate::{ArtGenerator, Artifact, ArtworkOutcome, ArtworkRequest, Error, Result};

const FORMULA_ONE: &str = "Formula 1";
const WORLD_ENDURANCE: &str = "World Endurance Championship";

/// Largest poster title size; shrinks with long race names.
const POSTER_TITLE_BASE: usize = 120;
const POSTER_TITLE_MIN: usize = 20;

/// Images, track maps and fonts the artwork is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtAssets {
    /// Source images (`<race>-background.jpg`, `<season>-poster.jpg`, ...)
    pub images: PathBuf,
    /// Track maps, `<race>.png`
    pub tracks: PathBuf,
    pub font_regular: PathBuf,
    pub font_black: PathBuf,
}

impl ArtAssets {
    /// Standard layout under one assets directory.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            images: root.join("images"),
            tracks: root.join("tracks"),
            font_regular: root.join("fonts").join("regular.ttf"),
            font_black: root.join("fonts").join("black.ttf"),
        }
    }

    /// Pick the source image for an artifact kind (`background`/`poster`).
    ///
    /// Race-specific images win over season images, which win over the
    /// default `<kind>.jpg`.
    pub fn source_image(&self, kind: &'static str, race_name: &str, season: &str) -> Result<PathBuf> {
        [
            format!("{}-{}.jpg", race_name, kind),
            format!("{}-{}.jpg", season, kind),
            format!("{}.jpg", kind),
        ]
        .iter()
        .map(|name| self.images.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| Error::MissingSource {
            artifact: kind,
            dir: self.images.clone(),
        })
    }

    /// Track map for a race, if one exists.
    pub fn track_map(&self, race_name: &str) -> Option<PathBuf> {
        let path = self.tracks.join(format!("{}.png", race_name));
        path.is_file().then_some(path)
    }
}

/// Poster title, laid out per series.
pub fn poster_title(series: &str, race_name: &str) -> String {
    match series {
        FORMULA_ONE => format!(
            "{}\n{}\nGRAND PRIX",
            series.to_uppercase(),
            race_name.to_uppercase()
        ),
        WORLD_ENDURANCE => format!("World\nEndurance\nChampionship\n{}", race_name),
        _ => series.to_string(),
    }
}

/// Poster title point size for a race name.
pub fn poster_point_size(race_name: &str) -> usize {
    let length = race_name.chars().count().max(12);
    POSTER_TITLE_BASE
        .saturating_sub(length * 5)
        .max(POSTER_TITLE_MIN)
}

/// Generates artwork by shelling out to ImageMagick.
#[derive(Debug, Clone)]
pub struct ImageMagick {
    tool: PathBuf,
    assets: ArtAssets,
}

impl ImageMagick {
    pub fn new(tool: impl Into<PathBuf>, assets: ArtAssets) -> Self {
        Self {
            tool: tool.into(),
            assets,
        }
    }

    /// Resolve the configured tool name or path first.
    pub fn from_config(tool: &str, assets: ArtAssets) -> Result<Self> {
        Ok(Self::new(get_tool_path(tool)?, assets))
    }

    pub fn assets(&self) -> &ArtAssets {
        &self.assets
    }

    /// Arguments producing `background.jpg`.
    pub fn background_args(&self, request: &ArtworkRequest) -> Result<Vec<OsString>> {
        let source = self
            .assets
            .source_image("background", &request.race_name, &request.season)?;

        let mut args: Vec<OsString> = vec![source.into()];
        push(&mut args, ["-resize", "1920x1080!", "-gravity", "NorthEast", "-font"]);
        args.push(self.assets.font_regular.clone().into());
        push(
            &mut args,
            [
                "-pointsize",
                "280",
                "-fill",
                "none",
                "-stroke",
                "white",
                "-strokewidth",
                "14",
                "-annotate",
                "+160+160",
                request.round.as_str(),
            ],
        );
        args.push(request.background_path().into());
        Ok(args)
    }

    /// Arguments producing `show.png`.
    pub fn poster_args(&self, request: &ArtworkRequest) -> Result<Vec<OsString>> {
        let source = self
            .assets
            .source_image("poster", &request.race_name, &request.season)?;
        let title = poster_title(&request.series, &request.race_name);
        let point_size = poster_point_size(&request.race_name).to_string();

        let mut args: Vec<OsString> = vec![source.into()];
        push(&mut args, ["-resize", "600x900!"]);

        if let Some(track) = self.assets.track_map(&request.race_name) {
            push(&mut args, ["-blur", "0x4"]);
            args.push(track.into());
            push(
                &mut args,
                [
                    "-compose",
                    "Src_Over",
                    "-gravity",
                    "Center",
                    "-background",
                    "None",
                    "-composite",
                ],
            );
        }

        // title
        push(&mut args, ["-gravity", "NorthWest", "-font"]);
        args.push(self.assets.font_black.clone().into());
        push(
            &mut args,
            [
                "-pointsize",
                point_size.as_str(),
                "-fill",
                "white",
                "-stroke",
                "black",
                "-strokewidth",
                "4",
                "-annotate",
                "+20+40",
                title.as_str(),
            ],
        );

        // season
        args.push("-font".into());
        args.push(self.assets.font_black.clone().into());
        push(
            &mut args,
            [
                "-fill",
                "red4",
                "-stroke",
                "white",
                "-strokewidth",
                "2",
                "-pointsize",
                "65",
                "-gravity",
                "SouthWest",
                "-annotate",
                "+20+20",
                request.season.as_str(),
            ],
        );

        // round
        push(&mut args, ["-gravity", "SouthEast", "-font"]);
        args.push(self.assets.font_regular.clone().into());
        push(
            &mut args,
            [
                "-pointsize",
                "90",
                "-fill",
                "none",
                "-stroke",
                "white",
                "-strokewidth",
                "4",
                "-annotate",
                "+10+10",
                request.round.as_str(),
            ],
        );

        args.push(request.poster_path().into());
        Ok(args)
    }

    fn run(&self, args: &[OsString], artifact: &str) -> Result<()> {
        let tool = self.tool.display().to_string();

        let output = Command::new(&self.tool).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found(&tool)
            } else {
                Error::Io(e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::tool_failed(
                tool,
                format!("{} generation failed: {}", artifact, stderr.trim()),
            ));
        }

        Ok(())
    }

    fn ensure(
        &self,
        target: &Path,
        artifact: &str,
        args: impl FnOnce() -> Result<Vec<OsString>>,
    ) -> Result<Artifact> {
        if target.exists() {
            return Ok(Artifact::Existing);
        }

        self.run(&args()?, artifact)?;

        #[cfg(feature = "tracing")]
        tracing::info!(path = %target.display(), "{} created", artifact);

        Ok(Artifact::Created)
    }
}

impl ArtGenerator for ImageMagick {
    fn generate(&self, request: &ArtworkRequest) -> Result<ArtworkOutcome> {
        if !request.folder.is_dir() {
            return Err(Error::folder_not_found(&request.folder));
        }

        let background = self.ensure(&request.background_path(), "background", || {
            self.background_args(request)
        })?;
        let poster = self.ensure(&request.poster_path(), "poster", || self.poster_args(request))?;

        Ok(ArtworkOutcome { background, poster })
    }
}

fn push<'a>(args: &mut Vec<OsString>, items: impl IntoIterator<Item = &'a str>) {
    args.extend(items.into_iter().map(OsString::from));
}
