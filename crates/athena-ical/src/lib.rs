//! iCalendar (RFC 5545) support for course calendars.
//!
//! Only what the course tools need: a raw-value document model that
//! round-trips, a serializer, a parser, date-time value resolution and the
//! course shift used to re-host a past calendar on a new start date.

pub mod build;
pub mod core;
pub mod parse;
pub mod shift;
pub mod time;

#[cfg(test)]
mod tests;

pub use build::serialize;
pub use self::core::{Component, ComponentKind, ICalendar, Parameter, Property};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse};
pub use shift::{ShiftError, ShiftReport, ShiftResult, parse_shift_date, shift_course};
pub use time::{ConversionError, DateValue, TimeZoneResolver};
