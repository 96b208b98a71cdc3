//! Sprint-weekend detection.
//!
//! A Formula 1 weekend uses the sprint ordering when any file of that
//! weekend mentions `Sprint`, or when the round is listed in the
//! configuration. The whole corpus is scanned before the first order is
//! resolved, so files of a sprint weekend sort the same way regardless of
//! the order they are processed in.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::lexer::Lexer;
use crate::model::{NO_ROUND, NO_SEASON};
use crate::parser::{extract_round, extract_season, normalize, pad_round, split_extension};

/// Token that marks a file as belonging to a sprint weekend.
const SPRINT_TOKEN: &str = "Sprint";

/// Set of `(season, round)` pairs that run the sprint format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SprintWeekends {
    weekends: BTreeSet<(String, String)>,
}

impl SprintWeekends {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weekend. Returns `false` if it was already present.
    pub fn insert(&mut self, season: impl Into<String>, round: impl Into<String>) -> bool {
        self.weekends.insert((season.into(), round.into()))
    }

    /// Whether `(season, round)` is a sprint weekend.
    pub fn contains(&self, season: &str, round: &str) -> bool {
        self.weekends
            .contains(&(season.to_string(), round.to_string()))
    }

    pub fn len(&self) -> usize {
        self.weekends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weekends.is_empty()
    }

    /// Iterate the weekends in `(season, round)` order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.weekends.iter().map(|(s, r)| (s.as_str(), r.as_str()))
    }

    /// Build the set from configured overrides and the full file list.
    ///
    /// Overrides without an explicit season are assigned `current_year`.
    pub fn detect<I, P>(
        filenames: I,
        overrides: &[SprintOverride],
        current_year: i32,
    ) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut set = Self::new();

        for entry in overrides {
            let season = entry
                .season
                .clone()
                .unwrap_or_else(|| current_year.to_string());
            set.insert(season, entry.round.clone());
        }

        for path in filenames {
            let Some(file_name) = path.as_ref().file_name() else {
                continue;
            };
            let file_name = file_name.to_string_lossy();
            if !file_name.contains(SPRINT_TOKEN) {
                continue;
            }

            let stem = normalize(split_extension(&file_name).0);
            let lexer = Lexer::new(&stem);
            let season = extract_season(&lexer)
                .map(|s| s.year)
                .unwrap_or_else(|| NO_SEASON.to_string());
            let round = extract_round(&lexer)
                .map(|r| r.number)
                .unwrap_or_else(|| NO_ROUND.to_string());

            #[cfg(feature = "tracing")]
            tracing::debug!(season = %season, round = %round, "Sprint weekend from {}", file_name);

            set.insert(season, round);
        }

        set
    }
}

/// A sprint round listed in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintOverride {
    /// Explicit season, or `None` for the current year
    pub season: Option<String>,
    /// Zero-padded round
    pub round: String,
}

impl fmt::Display for SprintOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.season {
            Some(season) => write!(f, "{}-{}", season, self.round),
            None => write!(f, "{}", self.round),
        }
    }
}

/// Error for a malformed sprint override entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sprint round '{0}': expected \"RR\" or \"YYYY-RR\"")]
pub struct InvalidOverride(pub String);

/// Parse `"05"`, `"5"` or `"2024-05"`.
pub fn parse_override(raw: &str) -> Result<SprintOverride, InvalidOverride> {
    let raw = raw.trim();
    let invalid = || InvalidOverride(raw.to_string());

    let (season, round) = match raw.split_once('-') {
        Some((season, round)) => (Some(season), round),
        None => (None, raw),
    };

    if round.is_empty() || round.len() > 2 || !round.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if let Some(season) = season {
        if season.len() != 4 || !season.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
    }

    Ok(SprintOverride {
        season: season.map(str::to_string),
        round: pad_round(round),
    })
}
