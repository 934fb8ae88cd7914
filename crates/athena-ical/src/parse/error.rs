//! iCalendar parsing error types.

use std::fmt;

pub type ParseResult<T> = Result<T, ParseError>;

/// A parse failure with its position in the unfolded input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Physical line number where the content line starts (1-based).
    pub line: usize,
    /// Column within the unfolded content line (1-based).
    pub column: usize,
    pub context: Option<String>,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}, column {}", self.kind, self.line, self.column)?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The document has no content lines.
    Empty,
    MissingPropertyName,
    InvalidPropertyName,
    MissingColon,
    InvalidParameter,
    UnclosedQuote,
    /// A property or END line outside any component.
    MissingBegin,
    /// Input ended with components still open.
    MissingEnd,
    /// END does not match the innermost BEGIN.
    MismatchedComponent,
    /// The root component is not VCALENDAR.
    NotACalendar,
    /// Content after the root component closed.
    TrailingContent,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Empty => "empty document",
            Self::MissingPropertyName => "missing property name",
            Self::InvalidPropertyName => "invalid property name",
            Self::MissingColon => "missing colon separator",
            Self::InvalidParameter => "invalid parameter format",
            Self::UnclosedQuote => "unclosed quoted string",
            Self::MissingBegin => "missing BEGIN line",
            Self::MissingEnd => "missing END line",
            Self::MismatchedComponent => "mismatched BEGIN/END",
            Self::NotACalendar => "root component is not VCALENDAR",
            Self::TrailingContent => "content after END:VCALENDAR",
        };
        f.write_str(msg)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
