use athena_plan::Lesson;
use chrono::DateTime;
use chrono_tz::Tz;

use super::{Sheet, SheetRow};
use crate::week::WeekTracker;

const HEADER: [&str; 7] = [
    "Date", "Weekday", "Start", "Stop", "Title", "Teacher", "Location",
];
const WIDTHS: [f64; 7] = [11.0, 9.0, 6.0, 6.0, 50.0, 30.0, 20.0];

/// ## Summary
/// Lays out one row per lesson under a bold header, with an empty row at
/// each week boundary.
///
/// Date and time cells are text. Cells whose local time is missing are
/// left empty.
#[must_use]
pub fn lessons_sheet(lessons: &[Lesson]) -> Sheet {
    let mut rows = Vec::with_capacity(lessons.len() + lessons.len() / 5 + 1);
    rows.push(SheetRow::header(&HEADER));

    let mut weeks = WeekTracker::new();
    for lesson in lessons {
        if let Some(start) = &lesson.start_local
            && weeks.advance(start)
        {
            rows.push(SheetRow::blank());
        }

        let start = lesson.start_local.as_ref();
        let stop = lesson.stop_local.as_ref();
        rows.push(SheetRow::body(vec![
            format_local(start, "%Y-%m-%d"),
            format_local(start, "%a"),
            format_local(start, "%H:%M"),
            format_local(stop, "%H:%M"),
            lesson.name.clone(),
            lesson.teacher_or_empty().to_string(),
            lesson.room_or_empty().to_string(),
        ]));
    }

    tracing::debug!(rows = rows.len(), "Laid out lesson sheet");
    Sheet {
        name: "Lessons".to_string(),
        widths: WIDTHS.to_vec(),
        rows,
    }
}

fn format_local(time: Option<&DateTime<Tz>>, format: &str) -> String {
    time.map(|t| t.format(format).to_string()).unwrap_or_default()
}
