//! Lessons to iCalendar.

use athena_core::constants::PRODID;
use athena_ical::{Component, DateValue, ICalendar, Property, serialize};
use athena_plan::Lesson;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Namespace for lesson UIDs, so the same lesson keeps its UID across runs.
const UID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a8e_4b0d_5e7a_9c3f_1d2b_8a4e_6c50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    /// `X-WR-CALNAME`
    pub name: Option<String>,
    /// `X-WR-CALDESC`
    pub description: Option<String>,
    /// Written as `DTSTAMP` on every event.
    pub generated_at: DateTime<Utc>,
}

/// ## Summary
/// Builds a calendar with one VEVENT per lesson that has a local start.
///
/// Times are written in UTC. Lessons without a local start cannot be
/// placed and are skipped with a warning.
#[must_use]
pub fn lessons_calendar(lessons: &[Lesson], options: &CalendarOptions) -> ICalendar {
    let mut ical = ICalendar::new(PRODID);
    if let Some(name) = non_empty(options.name.as_deref()) {
        ical.root.add_property(Property::text("X-WR-CALNAME", name));
    }
    if let Some(description) = non_empty(options.description.as_deref()) {
        ical.root
            .add_property(Property::text("X-WR-CALDESC", description));
    }

    let stamp = DateValue::Utc(options.generated_at).to_raw();
    for lesson in lessons {
        let Some(start) = &lesson.start_local else {
            tracing::warn!(
                name = %lesson.name,
                start = %lesson.start_raw,
                "Skipping lesson without a usable start time"
            );
            continue;
        };

        let mut event = Component::event();
        event.add_property(Property::raw("UID", lesson_uid(lesson).to_string()));
        event.add_property(Property::raw("DTSTAMP", stamp.clone()));
        event.add_property(Property::raw(
            "DTSTART",
            DateValue::Utc(start.to_utc()).to_raw(),
        ));
        if let Some(stop) = &lesson.stop_local {
            event.add_property(Property::raw("DTEND", DateValue::Utc(stop.to_utc()).to_raw()));
        }
        event.add_property(Property::text("SUMMARY", &lesson.name));
        for (name, value) in [
            ("DESCRIPTION", lesson.description.as_deref()),
            ("LOCATION", lesson.room.as_deref()),
            ("CONTACT", lesson.teacher.as_deref()),
        ] {
            if let Some(value) = non_empty(value) {
                event.add_property(Property::text(name, value));
            }
        }
        ical.add_event(event);
    }

    tracing::debug!(events = ical.events().count(), "Built lesson calendar");
    ical
}

/// Serializes [`lessons_calendar`].
#[must_use]
pub fn render_ics(lessons: &[Lesson], options: &CalendarOptions) -> String {
    serialize(&lessons_calendar(lessons, options))
}

fn lesson_uid(lesson: &Lesson) -> Uuid {
    let key = format!(
        "{}\u{1f}{}\u{1f}{}",
        lesson.start_raw,
        lesson.name,
        lesson.room_or_empty()
    );
    Uuid::new_v5(&UID_NAMESPACE, key.as_bytes())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
