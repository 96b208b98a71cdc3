//! The per-file event record.

use std::path::{Path, PathBuf};

use super::{GP_SUFFIX, NO_ROUND, NO_SEASON};
use crate::error::{ParseError, Result};
use crate::order::{resolve_order, OrderError};
use crate::parser::Extracted;
use crate::sprint::SprintWeekends;
use crate::vocabulary::{WeekendOrders, FORMULA_ONE};

/// Everything known about one source file once it has been parsed and
/// placed in its weekend.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventRecord {
    /// Path of the source file
    pub source: PathBuf,
    /// Canonical series name
    pub series: String,
    /// Four digit season, `1970` when unknown
    pub season: String,
    /// Two digit round, `00` when unknown
    pub round: String,
    pub race_name: String,
    /// Canonical session label
    pub session: String,
    /// Trailing free text, display only
    pub info: String,
    /// Extension including the dot
    pub extension: String,
    /// Two digit, 1-based position in the weekend ordering
    pub weekend_order: String,
    /// `" GP"` for Formula 1, empty otherwise
    pub gp_suffix: String,
    /// Teds/Notebook marker present
    pub notebook: bool,
}

impl EventRecord {
    /// Build a record from extracted fields, resolving the weekend order.
    pub fn from_extracted(
        source: &Path,
        extracted: Extracted,
        sprints: &SprintWeekends,
        orders: &WeekendOrders,
    ) -> Result<Self> {
        let season = extracted.season.unwrap_or_else(|| NO_SEASON.to_string());
        let round = extracted.round.unwrap_or_else(|| NO_ROUND.to_string());

        let weekend_order = resolve_order(
            &extracted.series,
            &extracted.session,
            &season,
            &round,
            sprints,
            orders,
        )
        .map_err(|OrderError { session, calendar }| ParseError::NotInWeekendOrder {
            filename: extracted.file_name.clone(),
            session,
            calendar: calendar.to_string(),
        })?;

        let gp_suffix = if extracted.series == FORMULA_ONE {
            GP_SUFFIX.to_string()
        } else {
            String::new()
        };

        Ok(Self {
            source: source.to_path_buf(),
            series: extracted.series,
            season,
            round,
            race_name: extracted.race_name,
            session: extracted.session,
            info: extracted.info,
            extension: extracted.extension,
            weekend_order,
            gp_suffix,
            notebook: extracted.notebook,
        })
    }

    /// `season-round`, the stable part of the destination folder name.
    pub fn round_prefix(&self) -> String {
        format!("{}-{}", self.season, self.round)
    }

    /// Race name with the series suffix, e.g. `Miami GP`.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.race_name, self.gp_suffix)
    }

    /// Folder name used when no folder for this round exists yet.
    pub fn folder_name(&self) -> String {
        format!("{} - {}", self.round_prefix(), self.display_name())
    }

    /// `SxxEyy` code used by media servers.
    pub fn episode_code(&self) -> String {
        format!("S{}E{}", self.round, self.weekend_order)
    }

    /// Final file name inside the destination folder.
    pub fn final_file_name(&self) -> Result<String> {
        let filename = self
            .source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string());

        format_file_name(
            &filename,
            &self.race_name,
            &self.gp_suffix,
            &self.round,
            &self.weekend_order,
            &self.session,
            &self.info,
            &self.extension,
        )
    }
}

/// Compose `{race}{suffix} - S{round}E{order} - {session} [{info}]{ext}`.
///
/// `filename` only labels the error when the race name or session is empty.
///
/// # Example
///
/// ```
/// use motorsort_parser::format_file_name;
///
/// let name = format_file_name(
///     "source.mkv", "Example", " GP", "04", "01", "Free Practice 1",
///     "FastChannelHD.1080p", ".mkv",
/// ).unwrap();
/// assert_eq!(name, "Example GP - S04E01 - Free Practice 1 [FastChannelHD 1080p].mkv");
/// ```
#[allow(clippy::too_many_arguments)]
pub fn format_file_name(
    filename: &str,
    race_name: &str,
    gp_suffix: &str,
    round: &str,
    weekend_order: &str,
    session: &str,
    info: &str,
    extension: &str,
) -> Result<String> {
    let empty = |field| ParseError::EmptyField {
        filename: filename.to_string(),
        field,
    };

    let race_name = race_name.trim();
    if race_name.is_empty() {
        return Err(empty("race name"));
    }
    let session = session.trim();
    if session.is_empty() {
        return Err(empty("session"));
    }

    let info = info.replace('.', " ");
    Ok(format!(
        "{}{} - S{}E{} - {} [{}]{}",
        race_name,
        gp_suffix,
        round,
        weekend_order,
        session,
        info.trim(),
        extension
    ))
}
