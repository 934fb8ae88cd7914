//! Swedish course schedule layout.

use athena_plan::Lesson;
use chrono::{Datelike, IsoWeek, NaiveDate};

use super::{RowStyle, Sheet, SheetRow};

const HEADER: [&str; 8] = [
    "Dag",
    "Datum",
    "Tid",
    "Kurs",
    "Kurskod",
    "Aktivitet",
    "Föreläsere",
    "Lokal",
];
const WIDTHS: [f64; 8] = [5.0, 11.0, 12.0, 25.0, 10.0, 45.0, 25.0, 15.0];

/// Indexed by `Weekday::num_days_from_monday`.
const WEEKDAYS_SV: [&str; 7] = ["Mån", "Tis", "Ons", "Tor", "Fre", "Lör", "Sön"];

const EXAM: &str = "exam";
const EXAM_SV: &str = "TENTAMEN";

/// Course columns repeated on every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IulianaOptions {
    pub course_name: String,
    pub course_code: String,
}

/// ## Summary
/// Lays out lessons as a Swedish course schedule.
///
/// Only the first lesson of a day shows the weekday and date. The first
/// lesson of each new ISO week gets a rule above it. A lesson named `exam`
/// is shown as `TENTAMEN` with no lecturer. Lessons without a local start
/// keep their place but are not part of any day or week.
#[must_use]
pub fn iuliana_sheet(lessons: &[Lesson], options: &IulianaOptions) -> Sheet {
    let mut rows = Vec::with_capacity(lessons.len() + 1);
    rows.push(SheetRow::header(&HEADER));

    let mut last_day: Option<NaiveDate> = None;
    let mut last_week: Option<IsoWeek> = None;

    for lesson in lessons {
        let is_exam = lesson.name.trim().eq_ignore_ascii_case(EXAM);
        let (activity, lecturer) = if is_exam {
            (EXAM_SV.to_string(), String::new())
        } else {
            (lesson.name.clone(), lesson.teacher_or_empty().to_string())
        };

        let mut style = RowStyle::Body;
        let (weekday, date, time) = match &lesson.start_local {
            Some(start) => {
                let day = start.date_naive();
                let week = start.iso_week();
                if last_week.is_some_and(|w| w != week) {
                    style = RowStyle::WeekStart;
                }
                last_week = Some(week);

                let first_of_day = last_day != Some(day);
                last_day = Some(day);

                let time = match &lesson.stop_local {
                    Some(stop) => format!("{}-{}", start.format("%H:%M"), stop.format("%H:%M")),
                    None => start.format("%H:%M").to_string(),
                };
                if first_of_day {
                    let weekday = WEEKDAYS_SV[start.weekday().num_days_from_monday() as usize];
                    (weekday.to_string(), day.format("%Y-%m-%d").to_string(), time)
                } else {
                    (String::new(), String::new(), time)
                }
            }
            None => (String::new(), String::new(), String::new()),
        };

        rows.push(SheetRow {
            cells: vec![
                weekday,
                date,
                time,
                options.course_name.clone(),
                options.course_code.clone(),
                activity,
                lecturer,
                lesson.room_or_empty().to_string(),
            ],
            style,
        });
    }

    tracing::debug!(rows = rows.len(), "Laid out course schedule");
    Sheet {
        name: "Schema".to_string(),
        widths: WIDTHS.to_vec(),
        rows,
    }
}
