//! Plain text agenda of a course calendar.

use athena_ical::{Component, DateValue, ICalendar, TimeZoneResolver};
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use crate::error::RenderResult;

const DATE_FORMAT: &str = "%a, %d %b";
const TIME_FORMAT: &str = "%H:%M";
const LOCATION_WIDTH: usize = 20;

struct Entry<'a> {
    start: DateTime<Tz>,
    stop: Option<DateTime<Tz>>,
    event: &'a Component,
}

/// ## Summary
/// Lists the events of a calendar in start order, one line each, in `zone`.
///
/// The calendar name heads the listing and its description closes it.
/// Consecutive days are separated by an empty line. Events without a
/// `DTSTART` are left out.
///
/// ## Errors
/// Returns an error if a start or end value is malformed or names an
/// unknown zone.
#[tracing::instrument(skip(ical))]
pub fn render_agenda(ical: &ICalendar, zone: Tz) -> RenderResult<String> {
    let mut resolver = TimeZoneResolver::new();
    let mut entries = Vec::new();

    for event in ical.events() {
        let Some(start) = event.property("DTSTART") else {
            tracing::warn!(summary = ?event.summary(), "Skipping event without DTSTART");
            continue;
        };
        let start = DateValue::from_property(start)?.instant(zone, &mut resolver)?;
        let stop = event
            .property("DTEND")
            .map(|p| DateValue::from_property(p)?.instant(zone, &mut resolver))
            .transpose()?;

        entries.push(Entry {
            start: start.with_timezone(&zone),
            stop: stop.map(|s| s.with_timezone(&zone)),
            event,
        });
    }
    entries.sort_by_key(|e| e.start);

    let mut out = String::new();
    if let Some(name) = ical.name() {
        out.push_str(&name);
        out.push_str("\n\n");
    }

    let mut last_day: Option<NaiveDate> = None;
    for entry in &entries {
        let day = entry.start.date_naive();
        if last_day.is_some_and(|d| d != day) {
            out.push('\n');
        }
        last_day = Some(day);

        let stop = entry
            .stop
            .map(|s| s.format(TIME_FORMAT).to_string())
            .unwrap_or_default();
        let line = format!(
            "{}  {}  {:5}  {:width$}  {}",
            entry.start.format(DATE_FORMAT),
            entry.start.format(TIME_FORMAT),
            stop,
            entry.event.location().unwrap_or_default(),
            entry.event.summary().unwrap_or_default(),
            width = LOCATION_WIDTH,
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    if let Some(description) = ical.description() {
        out.push('\n');
        out.push_str(&description);
        out.push('\n');
    }

    tracing::debug!(events = entries.len(), "Rendered agenda");
    Ok(out)
}
