//! DATE and DATE-TIME property values (RFC 5545 §3.3.4, §3.3.5).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use chrono_tz::Tz;

use super::timezone::{
    ConversionError, TimeZoneResolver, convert_to_utc_lenient, local_to_utc_lenient,
};
use crate::core::Property;

const DATE_FORMAT: &str = "%Y%m%d";
const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// The four forms a DTSTART/DTEND value can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    /// `VALUE=DATE`, e.g. `20240115`.
    Date(NaiveDate),
    /// Local time with no zone, e.g. `20240115T100000`.
    Floating(NaiveDateTime),
    /// UTC time, e.g. `20240115T090000Z`.
    Utc(DateTime<Utc>),
    /// Local time in the zone named by the `TZID` parameter.
    Zoned { local: NaiveDateTime, tzid: String },
}

impl DateValue {
    /// Reads the value of a DTSTART-like property.
    ///
    /// ## Errors
    /// Returns `ConversionError::InvalidDateTime` if the value is malformed.
    pub fn from_property(prop: &Property) -> Result<Self, ConversionError> {
        Self::parse(&prop.value, prop.tzid(), prop.value_type())
    }

    /// ## Errors
    /// Returns `ConversionError::InvalidDateTime` if `raw` is malformed.
    pub fn parse(
        raw: &str,
        tzid: Option<&str>,
        value_type: Option<&str>,
    ) -> Result<Self, ConversionError> {
        let raw = raw.trim();
        let invalid = |_e| ConversionError::InvalidDateTime(raw.to_string());

        let is_date =
            value_type.is_some_and(|v| v.eq_ignore_ascii_case("DATE")) || !raw.contains('T');
        if is_date {
            return NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map(Self::Date)
                .map_err(invalid);
        }

        if let Some(utc) = raw.strip_suffix(['Z', 'z']) {
            let naive = NaiveDateTime::parse_from_str(utc, DATE_TIME_FORMAT).map_err(invalid)?;
            return Ok(Self::Utc(naive.and_utc()));
        }

        let local = NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT).map_err(invalid)?;
        Ok(match tzid {
            Some(tzid) => Self::Zoned {
                local,
                tzid: tzid.to_string(),
            },
            None => Self::Floating(local),
        })
    }

    /// Formats the value back into its wire form. Parameters are unchanged,
    /// so the form never changes.
    #[must_use]
    pub fn to_raw(&self) -> String {
        match self {
            Self::Date(date) => date.format(DATE_FORMAT).to_string(),
            Self::Floating(local) | Self::Zoned { local, .. } => {
                local.format(DATE_TIME_FORMAT).to_string()
            }
            Self::Utc(dt) => format!("{}Z", dt.format(DATE_TIME_FORMAT)),
        }
    }

    /// Resolves the value to an instant. Dates and floating times are read
    /// as wall-clock time in `zone`; dates start at midnight.
    ///
    /// ## Errors
    /// Returns an error if a TZID cannot be resolved.
    pub fn instant(
        &self,
        zone: Tz,
        resolver: &mut TimeZoneResolver,
    ) -> Result<DateTime<Utc>, ConversionError> {
        match self {
            Self::Date(date) => local_to_utc_lenient(zone, date.and_time(NaiveTime::MIN)),
            Self::Floating(local) => local_to_utc_lenient(zone, *local),
            Self::Utc(dt) => Ok(*dt),
            Self::Zoned { local, tzid } => convert_to_utc_lenient(*local, tzid, resolver),
        }
    }

    /// Moves the value by whole days on the wall clock, keeping its form.
    ///
    /// UTC values are shifted as wall-clock time in `zone` and converted
    /// back, so their local time of day survives DST changes.
    ///
    /// ## Errors
    /// Returns an error if the result is out of range.
    pub fn shift_days(&self, days: i64, zone: Tz) -> Result<Self, ConversionError> {
        let delta = TimeDelta::try_days(days)
            .ok_or_else(|| ConversionError::OutOfRange(format!("{days} days")))?;
        let add = |local: NaiveDateTime| {
            local
                .checked_add_signed(delta)
                .ok_or_else(|| ConversionError::OutOfRange(local.to_string()))
        };

        Ok(match self {
            Self::Date(date) => Self::Date(
                date.checked_add_signed(delta)
                    .ok_or_else(|| ConversionError::OutOfRange(date.to_string()))?,
            ),
            Self::Floating(local) => Self::Floating(add(*local)?),
            Self::Zoned { local, tzid } => Self::Zoned {
                local: add(*local)?,
                tzid: tzid.clone(),
            },
            Self::Utc(dt) => {
                let local = add(dt.with_timezone(&zone).naive_local())?;
                Self::Utc(local_to_utc_lenient(zone, local)?)
            }
        })
    }
}
