//! Series prefixes, session keywords and weekend orderings.
//!
//! A [`Vocabulary`] is built once at startup (from defaults or from the
//! application configuration) and passed by reference into every pass.
//! Nothing here is mutated after construction.

use std::collections::BTreeMap;
use std::fmt;

use phf::phf_map;

/// Canonical name of the Formula 1 series.
pub const FORMULA_ONE: &str = "Formula 1";

/// Canonical name of the World Endurance Championship.
pub const WORLD_ENDURANCE: &str = "World Endurance Championship";

/// Default series prefixes. Order matters: the first matching prefix wins.
const DEFAULT_SERIES: &[(&str, &str)] = &[
    ("Formula1", FORMULA_ONE),
    ("F1", FORMULA_ONE),
    ("WEC", WORLD_ENDURANCE),
    ("FormulaE", "Formula E"),
    ("IndyCar", "IndyCar Series"),
    ("MotoGP", "MotoGP"),
];

/// Default session keywords. Keys are lowercase; the longest key found in
/// a filename decides the session.
static DEFAULT_SESSIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "fp1" => "Free Practice 1",
    "free practice 1" => "Free Practice 1",
    "practice 1" => "Free Practice 1",
    "fp2" => "Free Practice 2",
    "free practice 2" => "Free Practice 2",
    "practice 2" => "Free Practice 2",
    "fp3" => "Free Practice 3",
    "free practice 3" => "Free Practice 3",
    "practice 3" => "Free Practice 3",
    "quali" => "Qualifying",
    "qualifying" => "Qualifying",
    "quali buildup" => "Quali Buildup",
    "qualifying buildup" => "Quali Buildup",
    "quali analysis" => "Quali Analysis",
    "qualifying analysis" => "Quali Analysis",
    "sprint" => "Sprint",
    "sprint shootout" => "Sprint Shootout",
    "sprint qualifying" => "Sprint Shootout",
    "sprint analysis" => "Sprint Analysis",
    // a sprint race file is the main race of that weekend
    "sprint race" => "Race",
    "race" => "Race",
    "race buildup" => "Race Buildup",
    "race analysis" => "Race Analysis",
    "onboard channel" => "Onboard Channel",
    "hyperpole" => "Hyperpole",
    "warm up" => "Warm Up",
    "warmup" => "Warm Up",
};

/// Default variants as (base, buildup, analysis, notebook).
const DEFAULT_VARIANTS: &[(&str, Option<&str>, Option<&str>, Option<&str>)] = &[
    (
        "Qualifying",
        Some("Quali Buildup"),
        Some("Quali Analysis"),
        Some("Quali Notebook"),
    ),
    (
        "Race",
        Some("Race Buildup"),
        Some("Race Analysis"),
        Some("Race Notebook"),
    ),
    ("Sprint", None, Some("Sprint Analysis"), Some("Sprint Notebook")),
];

const REGULAR_ORDER: &[&str] = &[
    "Free Practice 1",
    "Free Practice 2",
    "Free Practice 3",
    "Quali Buildup",
    "Qualifying",
    "Quali Analysis",
    "Quali Notebook",
    "Race Buildup",
    "Race",
    "Race Analysis",
    "Race Notebook",
    "Onboard Channel",
];

const SPRINT_ORDER: &[&str] = &[
    "Free Practice 1",
    "Quali Buildup",
    "Qualifying",
    "Quali Analysis",
    "Quali Notebook",
    "Free Practice 2",
    "Sprint Shootout",
    "Sprint",
    "Sprint Analysis",
    "Sprint Notebook",
    "Free Practice 3",
    "Race Buildup",
    "Race",
    "Race Analysis",
    "Race Notebook",
    "Onboard Channel",
];

const GENERIC_ORDER: &[&str] = &[
    "Free Practice 1",
    "Free Practice 2",
    "Free Practice 3",
    "Quali Buildup",
    "Qualifying",
    "Hyperpole",
    "Quali Analysis",
    "Warm Up",
    "Race Buildup",
    "Race",
    "Race Analysis",
    "Onboard Channel",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Maps a filename prefix to a canonical series name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesPrefix {
    /// Prefix the filename must start with (e.g., "Formula1")
    pub prefix: String,
    /// Canonical series name (e.g., "Formula 1")
    pub name: String,
}

impl SeriesPrefix {
    /// Create a new prefix mapping.
    pub fn new(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
        }
    }
}

/// Derived labels of a base session.
///
/// `Pre`/`Post` qualifiers select the buildup/analysis label and the
/// Teds/Notebook marker selects the notebook label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionVariants {
    pub buildup: Option<String>,
    pub analysis: Option<String>,
    pub notebook: Option<String>,
}

/// Which ordering sequence applies to a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    /// Formula 1 weekend without a sprint
    Regular,
    /// Formula 1 sprint weekend
    Sprint,
    /// Every other series
    Generic,
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calendar::Regular => write!(f, "regular"),
            Calendar::Sprint => write!(f, "sprint"),
            Calendar::Generic => write!(f, "generic"),
        }
    }
}

/// The three canonical session orderings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeekendOrders {
    pub regular: Vec<String>,
    pub sprint: Vec<String>,
    pub generic: Vec<String>,
}

impl WeekendOrders {
    /// The sequence used for a calendar.
    pub fn sequence(&self, calendar: Calendar) -> &[String] {
        match calendar {
            Calendar::Regular => &self.regular,
            Calendar::Sprint => &self.sprint,
            Calendar::Generic => &self.generic,
        }
    }
}

impl Default for WeekendOrders {
    fn default() -> Self {
        Self {
            regular: owned(REGULAR_ORDER),
            sprint: owned(SPRINT_ORDER),
            generic: owned(GENERIC_ORDER),
        }
    }
}

/// Everything the parser needs to know about series and sessions.
///
/// # Example
///
/// ```
/// use motorsort_parser::Vocabulary;
///
/// let vocabulary = Vocabulary::default();
/// let series = vocabulary.find_series("Formula1 2024 Round05").unwrap();
/// assert_eq!(series.name, "Formula 1");
/// assert_eq!(vocabulary.sessions["fp1"], "Free Practice 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Vocabulary {
    /// Ordered prefix table, first match wins
    pub series: Vec<SeriesPrefix>,
    /// Lowercase keyword fragment to canonical session label
    pub sessions: BTreeMap<String, String>,
    /// Base session label to its derived labels
    pub variants: BTreeMap<String, SessionVariants>,
    /// Weekend orderings
    pub order: WeekendOrders,
}

impl Default for Vocabulary {
    fn default() -> Self {
        let series = DEFAULT_SERIES
            .iter()
            .map(|(prefix, name)| SeriesPrefix::new(*prefix, *name))
            .collect();

        let sessions = DEFAULT_SESSIONS
            .entries()
            .map(|(key, label)| (key.to_string(), label.to_string()))
            .collect();

        let variants = DEFAULT_VARIANTS
            .iter()
            .map(|(base, buildup, analysis, notebook)| {
                (
                    base.to_string(),
                    SessionVariants {
                        buildup: buildup.map(str::to_string),
                        analysis: analysis.map(str::to_string),
                        notebook: notebook.map(str::to_string),
                    },
                )
            })
            .collect();

        Self {
            series,
            sessions,
            variants,
            order: WeekendOrders::default(),
        }
    }
}

impl Vocabulary {
    /// First prefix entry matching the start of a normalized filename stem.
    pub fn find_series(&self, stem: &str) -> Option<&SeriesPrefix> {
        self.series.iter().find(|entry| {
            let prefix = entry.prefix.replace('.', " ");
            !prefix.is_empty() && stem.starts_with(&prefix)
        })
    }

    /// Variants of a base session, if it has any.
    pub fn variants_of(&self, session: &str) -> Option<&SessionVariants> {
        self.variants.get(session)
    }

    /// Check the vocabulary for problems that make parsing impossible.
    ///
    /// Returns a human-readable message per problem; an empty list means
    /// the vocabulary is usable.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.series.is_empty() {
            problems.push("no series prefixes configured".to_string());
        }
        if self.series.iter().any(|s| s.prefix.trim().is_empty()) {
            problems.push("series prefix cannot be empty".to_string());
        }
        if self.sessions.is_empty() {
            problems.push("no session keywords configured".to_string());
        }
        if self.sessions.keys().any(|k| k.trim().is_empty()) {
            problems.push("session keyword cannot be empty".to_string());
        }
        for calendar in [Calendar::Regular, Calendar::Sprint, Calendar::Generic] {
            if self.order.sequence(calendar).is_empty() {
                problems.push(format!("{} weekend order is empty", calendar));
            }
        }

        problems
    }

    /// Session labels that appear in no ordering sequence at all.
    ///
    /// Files with these sessions always fail order resolution, which is
    /// worth a warning at startup.
    pub fn unordered_labels(&self) -> Vec<&str> {
        let in_any_order = |label: &str| {
            [Calendar::Regular, Calendar::Sprint, Calendar::Generic]
                .iter()
                .any(|c| self.order.sequence(*c).iter().any(|s| s == label))
        };

        let mut labels: Vec<&str> = self
            .sessions
            .values()
            .map(String::as_str)
            .chain(self.variants.values().flat_map(|v| {
                [&v.buildup, &v.analysis, &v.notebook]
                    .into_iter()
                    .flatten()
                    .map(String::as_str)
            }))
            .filter(|label| !in_any_order(*label))
            .collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_lengths() {
        let orders = WeekendOrders::default();
        assert_eq!(orders.regular.len(), 12);
        assert_eq!(orders.sprint.len(), 16);
        assert!(!orders.regular.iter().any(|s| s == "Sprint"));
    }

    #[test]
    fn test_series_first_match_wins() {
        let vocabulary = Vocabulary {
            series: vec![
                SeriesPrefix::new("F1", "Formula 1"),
                SeriesPrefix::new("F1 Academy", "F1 Academy"),
            ],
            ..Vocabulary::default()
        };
        let found = vocabulary.find_series("F1 Academy 2024").unwrap();
        assert_eq!(found.name, "Formula 1");
        assert!(vocabulary.find_series("IndyCar 2024").is_none());
    }

    #[test]
    fn test_default_vocabulary_is_usable() {
        let vocabulary = Vocabulary::default();
        assert!(vocabulary.problems().is_empty());
        assert!(vocabulary.unordered_labels().is_empty());
    }

    #[test]
    fn test_problems_reported() {
        let vocabulary = Vocabulary {
            series: Vec::new(),
            sessions: BTreeMap::new(),
            variants: BTreeMap::new(),
            order: WeekendOrders {
                regular: Vec::new(),
                ..WeekendOrders::default()
            },
        };
        let problems = vocabulary.problems();
        assert_eq!(problems.len(), 3);
        assert!(problems.contains(&"regular weekend order is empty".to_string()));
    }

    #[test]
    fn test_unordered_labels() {
        let mut vocabulary = Vocabulary::default();
        vocabulary
            .sessions
            .insert("shakedown".to_string(), "Shakedown".to_string());
        assert_eq!(vocabulary.unordered_labels(), vec!["Shakedown"]);
    }

    #[test]
    fn test_calendar_display() {
        assert_eq!(Calendar::Sprint.to_string(), "sprint");
        assert_eq!(Calendar::Generic.to_string(), "generic");
    }
}
