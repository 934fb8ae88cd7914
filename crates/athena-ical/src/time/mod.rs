//! Date-time values and time zone resolution.

mod timezone;
mod value;

pub use timezone::{
    ConversionError, TimeZoneResolver, convert_to_utc_lenient, local_to_utc_lenient,
};
pub use value::DateValue;
