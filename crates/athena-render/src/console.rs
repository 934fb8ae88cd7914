//! Fixed-width console listing.

use athena_plan::Lesson;

use crate::week::WeekTracker;

const START_FORMAT: &str = "%Y-%m-%d %a    %H:%M";
const TIME_FORMAT: &str = "%H:%M";
/// Width of the `start-stop` block.
const TIME_BLOCK: usize = 29;
const TIME_WIDTH: usize = 5;

/// Renders lessons one per line, with a blank line at each week boundary.
#[must_use]
pub fn render_console(lessons: &[Lesson]) -> String {
    let mut out = String::new();
    let mut weeks = WeekTracker::new();

    for lesson in lessons {
        if let Some(start) = &lesson.start_local
            && weeks.advance(start)
        {
            out.push('\n');
        }
        out.push_str(&console_line(lesson));
        out.push('\n');
    }

    out
}

fn console_line(lesson: &Lesson) -> String {
    let times = match (&lesson.start_local, &lesson.stop_local) {
        (Some(start), Some(stop)) => {
            format!("{}-{}", start.format(START_FORMAT), stop.format(TIME_FORMAT))
        }
        (Some(start), None) => {
            format!("{}-{}", start.format(START_FORMAT), " ".repeat(TIME_WIDTH))
        }
        (None, _) => " ".repeat(TIME_BLOCK),
    };

    format!(
        "{times} {:55} {:30} {:20}",
        lesson.name,
        lesson.teacher_or_empty(),
        lesson.room_or_empty()
    )
}
