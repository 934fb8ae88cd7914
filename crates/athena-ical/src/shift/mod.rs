//! Re-hosting a past course calendar on a new start date.
//!
//! Every VEVENT moves by the same number of calendar days so that the
//! earliest event lands on the requested date. Times of day are kept on the
//! local wall clock.

use athena_core::constants::SHIFT_DATE_FORMAT;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::core::{ICalendar, Property};
use crate::time::{ConversionError, DateValue, TimeZoneResolver};

const DTSTART: &str = "DTSTART";
const DTEND: &str = "DTEND";
const DTSTAMP: &str = "DTSTAMP";

pub type ShiftResult<T> = Result<T, ShiftError>;

#[derive(Debug, thiserror::Error)]
pub enum ShiftError {
    #[error("Calendar has no events with a start time")]
    NoEvents,

    #[error("Invalid start date '{value}', expected DD.MM.YYYY")]
    InvalidStartDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("{property} of event {event}: {source}")]
    Value {
        event: usize,
        property: &'static str,
        #[source]
        source: ConversionError,
    },
}

/// Outcome of a course shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftReport {
    /// Earliest event start before the shift, in the target zone.
    pub old_start: DateTime<Tz>,
    /// The same event's start after the shift.
    pub new_start: DateTime<Tz>,
    pub delta_days: i64,
    /// Number of events whose times moved.
    pub shifted: usize,
}

/// Parses a `DD.MM.YYYY` start date.
///
/// ## Errors
/// Returns `ShiftError::InvalidStartDate` if the date does not parse.
pub fn parse_shift_date(value: &str) -> ShiftResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), SHIFT_DATE_FORMAT).map_err(|source| {
        ShiftError::InvalidStartDate {
            value: value.to_string(),
            source,
        }
    })
}

/// ## Summary
/// Shifts every VEVENT so that the earliest one starts on `new_date`.
///
/// `DTSTART` and `DTEND` move by whole days in their own form, `DTSTAMP` is
/// set to `now`, and everything else is left as it was.
///
/// ## Errors
/// Returns `ShiftError::NoEvents` if no VEVENT has a `DTSTART`, or an error
/// if a date value is malformed or names an unknown zone. The calendar is
/// not modified when an error is returned.
#[tracing::instrument(skip(ical, now))]
pub fn shift_course(
    ical: &mut ICalendar,
    new_date: NaiveDate,
    zone: Tz,
    now: DateTime<Utc>,
) -> ShiftResult<ShiftReport> {
    let mut resolver = TimeZoneResolver::new();
    let mut plan = Vec::new();
    let mut earliest: Option<DateTime<Utc>> = None;

    for (event, component) in ical.events().enumerate() {
        let start = read_value(component.property(DTSTART), event, DTSTART)?;
        let end = read_value(component.property(DTEND), event, DTEND)?;

        if let Some(start) = &start {
            let instant = start
                .instant(zone, &mut resolver)
                .map_err(|source| ShiftError::Value {
                    event,
                    property: DTSTART,
                    source,
                })?;
            earliest = Some(earliest.map_or(instant, |e| e.min(instant)));
        }
        plan.push((start, end));
    }

    let earliest = earliest.ok_or(ShiftError::NoEvents)?;
    let old_start = earliest.with_timezone(&zone);
    let delta_days = (new_date - old_start.date_naive()).num_days();
    tracing::debug!(%old_start, delta_days, "Computed course shift");

    let mut updates = Vec::with_capacity(plan.len());
    for (event, (start, end)) in plan.into_iter().enumerate() {
        let shift = |value: Option<DateValue>, property| {
            value
                .map(|v| v.shift_days(delta_days, zone))
                .transpose()
                .map_err(|source| ShiftError::Value {
                    event,
                    property,
                    source,
                })
        };
        updates.push((shift(start, DTSTART)?, shift(end, DTEND)?));
    }

    let new_start = DateValue::Utc(earliest)
        .shift_days(delta_days, zone)
        .and_then(|v| v.instant(zone, &mut resolver))
        .map_err(|source| ShiftError::Value {
            event: 0,
            property: DTSTART,
            source,
        })?
        .with_timezone(&zone);

    let stamp = DateValue::Utc(now).to_raw();
    let mut shifted = 0;
    for (component, (start, end)) in ical.events_mut().zip(updates) {
        if start.is_some() || end.is_some() {
            shifted += 1;
        }
        for (name, value) in [(DTSTART, start), (DTEND, end)] {
            if let (Some(prop), Some(value)) = (component.property_mut(name), value) {
                prop.value = value.to_raw();
            }
        }
        component.set_property(Property::raw(DTSTAMP, stamp.clone()));
    }

    tracing::info!(
        %old_start,
        %new_start,
        delta_days,
        shifted,
        "Shifted course calendar"
    );

    Ok(ShiftReport {
        old_start,
        new_start,
        delta_days,
        shifted,
    })
}

fn read_value(
    prop: Option<&Property>,
    event: usize,
    property: &'static str,
) -> ShiftResult<Option<DateValue>> {
    prop.map(DateValue::from_property)
        .transpose()
        .map_err(|source| ShiftError::Value {
            event,
            property,
            source,
        })
}

#[cfg(test)]
mod tests;
