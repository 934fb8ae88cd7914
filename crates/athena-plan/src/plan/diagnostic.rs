use std::fmt;

use super::Field;

/// A non-fatal problem found while building a lesson.
///
/// Only produced under `TimestampPolicy::Lenient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Zero-based index of the lesson in document order.
    pub lesson: usize,
    pub field: Field,
    /// The offending value, verbatim.
    pub value: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lesson {}: invalid {} {:?}: {}",
            self.lesson, self.field, self.value, self.message
        )
    }
}
