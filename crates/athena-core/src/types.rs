use std::str::FromStr;

use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// What to do with a `<start>`/`<stop>` value that is not a valid timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampPolicy {
    /// Abort the whole conversion.
    Strict,
    /// Keep the raw string, leave the local time unset and record a diagnostic.
    #[default]
    Lenient,
}

impl TimestampPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl std::fmt::Display for TimestampPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ## Summary
/// Resolves an IANA zone name such as `Europe/Stockholm`.
///
/// ## Errors
/// Returns `CoreError::UnknownTimezone` if the name is not in the tz database.
pub fn parse_timezone(name: &str) -> CoreResult<Tz> {
    Tz::from_str(name.trim()).map_err(|_e| CoreError::UnknownTimezone(name.to_string()))
}
