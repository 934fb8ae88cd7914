//! Tests for iCalendar parse errors.

use super::*;

#[test]
fn new_error_has_no_context() {
    let error = ParseError::new(ParseErrorKind::MissingEnd, 10, 1);
    assert_eq!(error.kind, ParseErrorKind::MissingEnd);
    assert_eq!(error.line, 10);
    assert_eq!(error.column, 1);
    assert!(error.context.is_none());
}

#[test]
fn display_includes_position() {
    let error = ParseError::new(ParseErrorKind::MissingColon, 3, 12);
    assert_eq!(
        error.to_string(),
        "missing colon separator at line 3, column 12"
    );
}

#[test]
fn display_includes_context() {
    let error = ParseError::new(ParseErrorKind::MismatchedComponent, 7, 1)
        .with_context("expected END:VEVENT, got END:VCALENDAR");
    assert_eq!(
        error.to_string(),
        "mismatched BEGIN/END at line 7, column 1: expected END:VEVENT, got END:VCALENDAR"
    );
}
