//! Error types for motorsort-parser.

/// Result type alias using [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

/// Per-file failures raised while turning a filename into an event record.
///
/// Every variant carries the offending filename so callers can log and skip
/// without extra bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The path has no final component to parse.
    #[error("no file name in path: {path}")]
    MissingFileName { path: String },

    /// The filename does not start with any configured series prefix.
    #[error("{filename}: no series prefix matched")]
    UnknownSeries { filename: String },

    /// No session keyword was found after the race name.
    #[error("{filename}: no session keyword matched")]
    NoSession { filename: String },

    /// The session has no slot in the weekend order used for this event.
    #[error("{filename}: session '{session}' not found in {calendar} weekend order")]
    NotInWeekendOrder {
        filename: String,
        session: String,
        calendar: String,
    },

    /// A field required by the final name is empty.
    #[error("{filename}: {field} is empty")]
    EmptyField {
        filename: String,
        field: &'static str,
    },
}

impl ParseError {
    /// The filename this error refers to.
    pub fn filename(&self) -> &str {
        match self {
            Self::MissingFileName { path } => path,
            Self::UnknownSeries { filename }
            | Self::NoSession { filename }
            | Self::NotInWeekendOrder { filename, .. }
            | Self::EmptyField { filename, .. } => filename,
        }
    }
}
