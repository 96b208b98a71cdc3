//! Series prefix pass and the host-country boundary adjustment.

use std::ops::Range;

use crate::lexer::Lexer;
use crate::vocabulary::{Vocabulary, FORMULA_ONE, WORLD_ENDURANCE};

/// Series resolved from the start of the stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesMatch {
    pub name: String,
    /// Byte offset right after the matched prefix
    pub end: usize,
}

/// Match the ordered prefix table against the start of the stem.
pub fn extract_series(stem: &str, vocabulary: &Vocabulary) -> Option<SeriesMatch> {
    vocabulary.find_series(stem).map(|entry| SeriesMatch {
        name: entry.name.clone(),
        end: entry.prefix.len(),
    })
}

/// Host-country word some feeds put in front of the official race name.
pub fn host_country(series: &str) -> Option<&'static str> {
    match series {
        FORMULA_ONE => Some("USA"),
        WORLD_ENDURANCE => Some("France"),
        _ => None,
    }
}

/// Move the race-name start past the series' host-country word.
///
/// Only a country word inside `window` (between the current start and the
/// session keyword) counts, and the start only ever moves forward.
pub fn skip_host_country(lexer: &Lexer, series: &str, window: Range<usize>) -> usize {
    let Some(country) = host_country(series) else {
        return window.start;
    };

    let start = window.start;
    lexer
        .find_word(country, window)
        .map(|span| span.end)
        .unwrap_or(start)
}
