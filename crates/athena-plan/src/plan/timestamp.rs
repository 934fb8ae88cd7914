//! Timestamp parsing and UTC to local conversion.

use athena_core::constants::PLAN_TIMESTAMP_FORMAT;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Byte layout of `YYYY-MM-DDTHH:MM:SS`: `d` is an ASCII digit, anything
/// else must match exactly.
const TIMESTAMP_SHAPE: &[u8; 19] = b"dddd-dd-ddTdd:dd:dd";
const SECONDS_AT: usize = 17;

#[derive(Debug, thiserror::Error)]
pub enum TimestampError {
    #[error("expected YYYY-MM-DDTHH:MM:SS")]
    Shape,

    #[error("seconds must be below 60")]
    LeapSecond,

    #[error(transparent)]
    Invalid(#[from] chrono::ParseError),
}

/// ## Summary
/// Parses a plan timestamp (`YYYY-MM-DDTHH:MM:SS`, no fraction, no offset).
///
/// Every field is zero padded and there is no surrounding whitespace or
/// sign, so valid values sort chronologically as plain strings.
///
/// ## Errors
/// Returns `TimestampError::Shape` if `raw` is not exactly in that layout,
/// `TimestampError::LeapSecond` for second `60`, and the `chrono` error for
/// out-of-range dates or times.
pub fn parse_plan_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    let bytes = raw.as_bytes();
    if bytes.len() != TIMESTAMP_SHAPE.len() {
        return Err(TimestampError::Shape);
    }
    let matches_shape = bytes
        .iter()
        .zip(TIMESTAMP_SHAPE)
        .all(|(&b, &expected)| match expected {
            b'd' => b.is_ascii_digit(),
            _ => b == expected,
        });
    if !matches_shape {
        return Err(TimestampError::Shape);
    }
    if bytes[SECONDS_AT] > b'5' {
        return Err(TimestampError::LeapSecond);
    }

    Ok(NaiveDateTime::parse_from_str(raw, PLAN_TIMESTAMP_FORMAT)?)
}

/// Interprets `utc` as a UTC instant and returns the civil time in `tz`.
///
/// Going from an instant to local time is never ambiguous, so DST folds and
/// gaps need no special handling here.
#[must_use]
pub fn utc_to_local(utc: NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    Utc.from_utc_datetime(&utc).with_timezone(&tz)
}
