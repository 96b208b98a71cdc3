//! Event record and the final name formatter.

mod record;

pub use record::{format_file_name, EventRecord};

/// Season used when a filename carries no year.
pub const NO_SEASON: &str = "1970";

/// Round used when a filename carries no `Round` marker.
pub const NO_ROUND: &str = "00";

/// Suffix appended to Formula 1 race names.
pub const GP_SUFFIX: &str = " GP";
