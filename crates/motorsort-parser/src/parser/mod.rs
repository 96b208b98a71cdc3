//! Extraction passes over a normalized filename stem.
//!
//! The filename is split into stem and extension, periods in the stem are
//! replaced by spaces and the result is tokenized once. Each pass then reads
//! the stem (and the shared token list) independently:
//!
//! 1. series prefix
//! 2. season and round
//! 3. session keyword, longest key wins
//! 4. host-country adjustment of the race-name start
//! 5. `Pre`/`Post` qualifier
//! 6. Teds/Notebook marker

mod notebook;
mod season;
mod series;
mod session;

use std::path::Path;

use crate::error::{ParseError, Result};
use crate::lexer::Lexer;
use crate::vocabulary::Vocabulary;

pub use season::pad_round;
pub(crate) use season::{extract_round, extract_season};

/// Raw fields pulled out of one filename.
///
/// Season and round stay optional here; the sentinels are only applied when
/// the [`EventRecord`](crate::EventRecord) is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extracted {
    /// Final path component the fields were extracted from
    pub file_name: String,
    pub series: String,
    pub season: Option<String>,
    pub round: Option<String>,
    pub race_name: String,
    pub session: String,
    pub info: String,
    /// Extension including the leading dot, empty if there is none
    pub extension: String,
    /// Teds/Notebook marker present
    pub notebook: bool,
}

/// Split a file name into stem and extension (with its dot).
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => file_name.split_at(dot),
        _ => (file_name, ""),
    }
}

/// Replace periods with spaces. Lengths are preserved, so byte offsets into
/// the normalized stem are also valid in the original stem.
pub fn normalize(stem: &str) -> String {
    stem.replace('.', " ")
}

/// Extract the raw fields of a single file.
pub fn extract(path: &Path, vocabulary: &Vocabulary) -> Result<Extracted> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ParseError::MissingFileName {
            path: path.display().to_string(),
        })?;

    let (stem, extension) = split_extension(&file_name);
    let extension = extension.to_string();
    let stem = normalize(stem);

    let series = series::extract_series(&stem, vocabulary).ok_or_else(|| {
        ParseError::UnknownSeries {
            filename: file_name.clone(),
        }
    })?;

    let lexer = Lexer::new(&stem);
    let season = season::extract_season(&lexer);
    let round = season::extract_round(&lexer);

    // Race name starts after the round, else after the season, else after
    // the series prefix
    let boundary = round
        .as_ref()
        .map(|r| r.end)
        .or_else(|| season.as_ref().map(|s| s.span.end))
        .unwrap_or(series.end)
        .max(series.end);

    let found = session::longest_keyword(&stem, boundary, vocabulary).ok_or_else(|| {
        ParseError::NoSession {
            filename: file_name.clone(),
        }
    })?;

    let boundary = series::skip_host_country(&lexer, &series.name, boundary..found.start);

    let mut label = found.label.clone();
    let mut name_end = found.start;
    if let Some((qualifier, qualifier_start)) = session::qualifier_before(&stem, boundary, &found) {
        label = session::apply_qualifier(&label, qualifier, vocabulary);
        name_end = qualifier_start;
    }

    let mut race_name = stem[boundary..name_end].trim().to_string();
    let mut info = stem[found.end..].trim().to_string();

    let markers = notebook::markers(&stem);
    let is_notebook = !markers.is_empty();
    if is_notebook {
        label = notebook::notebook_session(&label, vocabulary);
        race_name = notebook::notebook_race_name(&stem, boundary, &markers, &race_name);
        info = notebook::info_without_markers(&stem, found.end);
    }

    if race_name.is_empty() {
        race_name = series.name.clone();
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        filename = %file_name,
        race_name = %race_name,
        session = %label,
        notebook = is_notebook,
        "Extracted fields"
    );

    Ok(Extracted {
        file_name,
        series: series.name,
        season: season.map(|s| s.year),
        round: round.map(|r| r.number),
        race_name,
        session: label,
        info,
        extension,
        notebook: is_notebook,
    })
}
