//! Time zone resolution and local to UTC conversion.

use std::collections::HashMap;

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Non-existent time (DST gap): {0}")]
    NonExistentTime(String),

    #[error("Invalid date-time value: {0}")]
    InvalidDateTime(String),

    #[error("Date-time out of range: {0}")]
    OutOfRange(String),
}

/// TZIDs written by common calendar clients that are not IANA names.
const WINDOWS_ZONES: &[(&str, &str)] = &[
    ("W. Europe Standard Time", "Europe/Berlin"),
    ("Central Europe Standard Time", "Europe/Budapest"),
    ("Romance Standard Time", "Europe/Paris"),
    ("GMT Standard Time", "Europe/London"),
    ("FLE Standard Time", "Europe/Helsinki"),
    ("Eastern Standard Time", "America/New_York"),
    ("Central Standard Time", "America/Chicago"),
    ("Mountain Standard Time", "America/Denver"),
    ("Pacific Standard Time", "America/Los_Angeles"),
];

/// Resolves TZID parameter values to zones, caching each lookup.
#[derive(Debug, Default)]
pub struct TimeZoneResolver {
    cache: HashMap<String, Tz>,
}

impl TimeZoneResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Resolves a TZID to a `chrono_tz::Tz`.
    ///
    /// Vendor prefixes such as `/mozilla.org/` are stripped and a handful of
    /// Windows zone names are mapped to IANA names.
    ///
    /// ## Errors
    ///
    /// Returns `ConversionError::UnknownTimezone` if the TZID cannot be resolved.
    pub fn resolve(&mut self, tzid: &str) -> Result<Tz, ConversionError> {
        if let Some(tz) = self.cache.get(tzid) {
            return Ok(*tz);
        }

        let tz: Tz = normalize_tzid(tzid)
            .parse()
            .map_err(|_e| ConversionError::UnknownTimezone(tzid.to_string()))?;
        tracing::trace!(tzid, %tz, "Resolved timezone");
        self.cache.insert(tzid.to_string(), tz);

        Ok(tz)
    }
}

fn normalize_tzid(tzid: &str) -> &str {
    let stripped = tzid
        .strip_prefix("/mozilla.org/")
        .or_else(|| tzid.strip_prefix("/softwarestudio.org/"))
        .unwrap_or(tzid);

    WINDOWS_ZONES
        .iter()
        .find(|(windows, _)| *windows == stripped)
        .map_or(stripped, |(_, iana)| iana)
}

/// Converts a wall-clock time in `tz` to UTC.
///
/// An ambiguous time (DST fold) resolves to its first occurrence.
///
/// ## Errors
///
/// Returns `ConversionError::NonExistentTime` for a time inside a DST gap.
pub fn local_to_utc(tz: Tz, local: NaiveDateTime) -> Result<DateTime<Utc>, ConversionError> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.with_timezone(&Utc)),
        LocalResult::None => Err(ConversionError::NonExistentTime(format!("{local} in {tz}"))),
    }
}

/// Like [`local_to_utc`], but a time inside a DST gap is moved forward one
/// hour instead of failing.
///
/// ## Errors
///
/// Returns an error only if the shifted time is still not representable.
pub fn local_to_utc_lenient(
    tz: Tz,
    local: NaiveDateTime,
) -> Result<DateTime<Utc>, ConversionError> {
    match local_to_utc(tz, local) {
        Err(ConversionError::NonExistentTime(_)) => {
            let shifted = local
                .checked_add_signed(TimeDelta::hours(1))
                .ok_or_else(|| ConversionError::OutOfRange(local.to_string()))?;
            tracing::debug!(%local, %shifted, %tz, "Shifting time out of DST gap");
            local_to_utc(tz, shifted)
        }
        other => other,
    }
}

/// ## Summary
/// Converts a wall-clock time in the zone named by `tzid` to UTC, moving
/// times inside a DST gap forward one hour.
///
/// ## Errors
///
/// Returns an error if the TZID is unknown.
pub fn convert_to_utc_lenient(
    local: NaiveDateTime,
    tzid: &str,
    resolver: &mut TimeZoneResolver,
) -> Result<DateTime<Utc>, ConversionError> {
    local_to_utc_lenient(resolver.resolve(tzid)?, local)
}
