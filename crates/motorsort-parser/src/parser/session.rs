//! Session keyword pass and the Pre/Post qualifier pass.

use crate::vocabulary::Vocabulary;

/// The winning session keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMatch {
    /// Canonical session label
    pub label: String,
    /// Byte offset where the keyword starts
    pub start: usize,
    /// Byte offset right after the keyword
    pub end: usize,
}

/// Find the longest session keyword occurring at or after `from`.
///
/// Keys are compared case-insensitively. The longest key wins no matter
/// where it was found; between keys of equal length the earlier occurrence
/// wins.
pub fn longest_keyword(stem: &str, from: usize, vocabulary: &Vocabulary) -> Option<SessionMatch> {
    // ASCII lowercasing keeps byte offsets aligned with `stem`
    let haystack = stem.get(from..)?.to_ascii_lowercase();

    let mut best: Option<(usize, SessionMatch)> = None;

    for (key, label) in &vocabulary.sessions {
        let key = key.to_ascii_lowercase();
        if key.is_empty() {
            continue;
        }
        let Some(position) = haystack.find(&key) else {
            continue;
        };

        let candidate = SessionMatch {
            label: label.clone(),
            start: from + position,
            end: from + position + key.len(),
        };

        let better = match &best {
            None => true,
            Some((best_len, best_match)) => {
                key.len() > *best_len
                    || (key.len() == *best_len && candidate.start < best_match.start)
            }
        };
        if better {
            best = Some((key.len(), candidate));
        }
    }

    best.map(|(_, found)| found)
}

/// A `Pre`/`Post` qualifier directly in front of the session keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    Pre,
    Post,
}

/// Look for a qualifier word right before the session keyword.
///
/// Returns the qualifier and the byte offset where it starts, which becomes
/// the new end of the race name.
pub fn qualifier_before(stem: &str, boundary: usize, session: &SessionMatch) -> Option<(Qualifier, usize)> {
    let before = stem.get(boundary..session.start)?.trim_end();
    let word = before.rsplit(' ').next()?;
    // "Pre-Race" style
    let bare = word.strip_suffix('-').unwrap_or(word);

    let qualifier = if bare.eq_ignore_ascii_case("pre") {
        Qualifier::Pre
    } else if bare.eq_ignore_ascii_case("post") {
        Qualifier::Post
    } else {
        return None;
    };

    Some((qualifier, boundary + before.len() - word.len()))
}

/// Reclassify a base session according to its qualifier.
///
/// Only base sessions that declare the matching variant are changed, so an
/// already specific label such as "Race Analysis" is kept as is.
pub fn apply_qualifier(label: &str, qualifier: Qualifier, vocabulary: &Vocabulary) -> String {
    let variant = vocabulary
        .variants_of(label)
        .and_then(|variants| match qualifier {
            Qualifier::Pre => variants.buildup.as_ref(),
            Qualifier::Post => variants.analysis.as_ref(),
        });

    variant.cloned().unwrap_or_else(|| label.to_string())
}
