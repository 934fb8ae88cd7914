//! iCalendar document parser.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{parse_content_line, split_lines};
use crate::core::{Component, ComponentKind, ICalendar};

/// Parses an iCalendar document.
///
/// The document must hold exactly one VCALENDAR. Property values are kept
/// raw; nothing is interpreted here.
///
/// ## Errors
///
/// Returns an error if a content line is malformed, BEGIN/END lines do not
/// nest, or the root is not VCALENDAR.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<ICalendar> {
    tracing::debug!("Parsing iCalendar document");

    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let lines = split_lines(input);
    tracing::trace!(count = lines.len(), "Split lines");

    let mut stack: Vec<Component> = Vec::new();
    let mut root: Option<Component> = None;
    let mut last_line = 1;

    for (line_num, line) in lines {
        last_line = line_num;
        let prop = parse_content_line(&line, line_num)?;

        if root.is_some() {
            return Err(ParseError::new(ParseErrorKind::TrailingContent, line_num, 1));
        }

        match prop.name.as_str() {
            "BEGIN" => {
                let component = Component::named(&prop.value);
                if stack.is_empty() && component.kind != ComponentKind::Calendar {
                    return Err(ParseError::new(ParseErrorKind::NotACalendar, line_num, 1)
                        .with_context(format!("found {}", component.name)));
                }
                stack.push(component);
            }
            "END" => {
                let Some(component) = stack.pop() else {
                    return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1));
                };
                if !component.name.eq_ignore_ascii_case(&prop.value) {
                    return Err(
                        ParseError::new(ParseErrorKind::MismatchedComponent, line_num, 1)
                            .with_context(format!(
                                "expected END:{}, got END:{}",
                                component.name, prop.value
                            )),
                    );
                }
                match stack.last_mut() {
                    Some(parent) => parent.children.push(component),
                    None => root = Some(component),
                }
            }
            _ => match stack.last_mut() {
                Some(component) => component.properties.push(prop),
                None => {
                    return Err(ParseError::new(ParseErrorKind::MissingBegin, line_num, 1)
                        .with_context(format!("{} outside any component", prop.name)));
                }
            },
        }
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::new(ParseErrorKind::MissingEnd, last_line, 1)
            .with_context(format!("missing END:{}", open.name)));
    }

    let root = root.ok_or_else(|| ParseError::new(ParseErrorKind::Empty, 1, 1))?;
    let ical = ICalendar { root };
    tracing::debug!(events = ical.events().count(), "iCalendar document parsed");
    Ok(ical)
}
