//! Normalized lesson record.

use chrono::DateTime;
use chrono_tz::Tz;

/// One scheduled teaching event extracted from a plan export.
///
/// Built field by field while its `<lesson>` element is open and never
/// modified once the closing tag has been seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lesson {
    /// Display title, empty if the export has none.
    pub name: String,
    pub description: Option<String>,
    /// `<start>` exactly as found in the export (UTC, `YYYY-MM-DDTHH:MM:SS`).
    pub start_raw: String,
    /// `<stop>` exactly as found in the export.
    pub stop_raw: String,
    /// `start_raw` converted to the target zone, if it parsed.
    pub start_local: Option<DateTime<Tz>>,
    /// `stop_raw` converted to the target zone, if it parsed.
    pub stop_local: Option<DateTime<Tz>>,
    /// Fed by either `<room>` or `<location>`.
    pub room: Option<String>,
    pub teacher: Option<String>,
}

impl Lesson {
    #[must_use]
    pub fn room_or_empty(&self) -> &str {
        self.room.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn teacher_or_empty(&self) -> &str {
        self.teacher.as_deref().unwrap_or_default()
    }
}
