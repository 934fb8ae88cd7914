use athena_core::TimestampPolicy;
use chrono_tz::Tz;

use super::{Diagnostic, Lesson};

/// Settings for one conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    /// Zone that UTC timestamps are converted into.
    pub timezone: Tz,
    pub timestamps: TimestampPolicy,
}

impl PlanOptions {
    #[must_use]
    pub fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            timestamps: TimestampPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp_policy(mut self, timestamps: TimestampPolicy) -> Self {
        self.timestamps = timestamps;
        self
    }
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self::new(Tz::Europe__Stockholm)
    }
}

/// Result of a conversion: the lessons plus any lenient-mode diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub lessons: Vec<Lesson>,
    pub diagnostics: Vec<Diagnostic>,
}
