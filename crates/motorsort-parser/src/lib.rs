//! # motorsort-parser
//!
//! Filename parser for motorsport broadcast recordings.
//!
//! Broadcast files follow a loose naming convention such as
//! `Formula1.2022.Round04.Example.FP1.FastChannelHD.1080p.mkv`. This crate
//! pulls the series, season, round, race name, session and trailing info
//! out of such names, places the session in the correct slot of its race
//! weekend (regular, sprint or generic) and formats the final file name.
//!
//! ## Quick Start
//!
//! ```
//! use motorsort_parser::{Parser, SprintWeekends};
//!
//! let parser = Parser::default();
//! let record = parser
//!     .parse(
//!         "Formula1.2022.Round04.Example.FP1.FastChannelHD.1080p.mkv",
//!         &SprintWeekends::new(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(record.folder_name(), "2022-04 - Example GP");
//! assert_eq!(
//!     record.final_file_name().unwrap(),
//!     "Example GP - S04E01 - Free Practice 1 [FastChannelHD 1080p].mkv"
//! );
//! ```

pub mod error;
pub mod lexer;
pub mod model;
pub mod order;
pub mod sprint;
pub mod vocabulary;

mod parser;

pub use error::{ParseError, Result};
pub use model::{format_file_name, EventRecord};
pub use order::{calendar_for, resolve_order, OrderError};
pub use parser::{extract, Extracted};
pub use sprint::{parse_override, InvalidOverride, SprintOverride, SprintWeekends};
pub use vocabulary::{Calendar, SeriesPrefix, SessionVariants, Vocabulary, WeekendOrders};

use std::path::Path;

/// A filename parser bound to one vocabulary.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    vocabulary: Vocabulary,
}

impl Parser {
    /// Create a parser using the given vocabulary.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Run the extraction passes without resolving the weekend order.
    pub fn extract(&self, path: impl AsRef<Path>) -> Result<Extracted> {
        parser::extract(path.as_ref(), &self.vocabulary)
    }

    /// Parse a file into a complete [`EventRecord`].
    ///
    /// `sprints` must already cover the whole batch, see
    /// [`SprintWeekends::detect`].
    pub fn parse(&self, path: impl AsRef<Path>, sprints: &SprintWeekends) -> Result<EventRecord> {
        let path = path.as_ref();
        let extracted = self.extract(path)?;
        EventRecord::from_extracted(path, extracted, sprints, &self.vocabulary.order)
    }
}
