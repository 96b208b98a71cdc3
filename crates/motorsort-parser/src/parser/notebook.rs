//! Teds/Notebook pass.
//!
//! Notebook recaps are tagged with "Teds" and/or "Notebook" anywhere in the
//! filename. The tag turns the detected base session into its notebook
//! variant and can sit on either side of the session keyword.

use std::ops::Range;

use crate::vocabulary::Vocabulary;

const MARKERS: &[&str] = &["Teds", "Notebook"];

/// Spans of every notebook marker in the stem, in order.
///
/// Markers are case-sensitive substrings, so fused tags such as
/// `TedsNotebook` are found too.
pub fn markers(stem: &str) -> Vec<Range<usize>> {
    let mut spans: Vec<Range<usize>> = MARKERS
        .iter()
        .flat_map(|marker| {
            stem.match_indices(marker)
                .map(|(start, found)| start..start + found.len())
        })
        .collect();
    spans.sort_by_key(|span| span.start);
    spans
}

/// Remove every marker from `text` and collapse the leftover whitespace.
pub fn strip_markers(text: &str) -> String {
    let mut stripped = text.to_string();
    for marker in MARKERS {
        stripped = stripped.replace(marker, " ");
    }
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Notebook variant of a session, or the session itself if it has none.
pub fn notebook_session(label: &str, vocabulary: &Vocabulary) -> String {
    vocabulary
        .variants_of(label)
        .and_then(|variants| variants.notebook.clone())
        .unwrap_or_else(|| label.to_string())
}

/// Pick the race name for a notebook file.
///
/// `at_session` is the name captured up to the session keyword. The name
/// captured up to the first marker after the race-name start is the other
/// candidate; the shorter non-empty one wins. Markers left in the winner
/// (a marker right at the race-name start) are stripped.
pub fn notebook_race_name(
    stem: &str,
    boundary: usize,
    markers: &[Range<usize>],
    at_session: &str,
) -> String {
    let at_marker = markers
        .iter()
        .find(|span| span.start >= boundary)
        .and_then(|span| stem.get(boundary..span.start))
        .map(str::trim)
        .filter(|name| !name.is_empty());

    let chosen = match at_marker {
        Some(name) if at_session.is_empty() || name.len() < at_session.len() => name,
        _ => at_session,
    };
    strip_markers(chosen)
}

/// Info tag text after the session keyword with notebook markers removed.
pub fn info_without_markers(stem: &str, session_end: usize) -> String {
    stem.get(session_end..).map(strip_markers).unwrap_or_default()
}
