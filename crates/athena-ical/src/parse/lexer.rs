//! Content line lexer (RFC 5545 §3.1).

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::core::{Parameter, Property};

/// Splits input into unfolded content lines, tagged with the physical line
/// number each one starts on.
///
/// Accepts CRLF and bare LF. A line starting with SPACE or HTAB continues
/// the previous one; the fold and the single whitespace character are
/// removed. Blank lines are skipped.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            continue;
        }

        match (line.strip_prefix([' ', '\t']), lines.last_mut()) {
            (Some(continuation), Some((_, prev))) => prev.push_str(continuation),
            (Some(continuation), None) => lines.push((idx + 1, continuation.to_string())),
            (None, _) => lines.push((idx + 1, line.to_string())),
        }
    }

    lines
}

/// Parses one unfolded content line: `name *(";" param) ":" value`.
///
/// ## Errors
/// Returns an error if the name is missing or invalid, a parameter is
/// malformed, or there is no colon before the value.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<Property> {
    let name_end = line.find([';', ':']).unwrap_or(line.len());
    let name = &line[..name_end];

    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::MissingPropertyName,
            line_num,
            1,
        ));
    }
    if let Some(pos) = name.find(|c: char| !c.is_ascii_alphanumeric() && c != '-') {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            pos + 1,
        ));
    }

    let mut cursor = Cursor {
        line,
        pos: name_end,
        line_num,
    };
    let mut params = Vec::new();

    loop {
        match cursor.bump() {
            Some(':') => break,
            Some(';') => params.push(cursor.parameter()?),
            _ => {
                return Err(ParseError::new(
                    ParseErrorKind::MissingColon,
                    line_num,
                    line.len() + 1,
                ));
            }
        }
    }

    Ok(Property {
        name: name.to_ascii_uppercase(),
        params,
        value: line[cursor.pos..].to_string(),
    })
}

struct Cursor<'a> {
    line: &'a str,
    pos: usize,
    line_num: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<char> {
        self.line[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.line_num, self.pos + 1)
    }

    /// Parses `NAME=value *("," value)`, leaving the cursor on the
    /// delimiter that ends it.
    fn parameter(&mut self) -> ParseResult<Parameter> {
        let start = self.pos;
        let eq = self.line[start..]
            .find('=')
            .map(|i| start + i)
            .ok_or_else(|| self.error(ParseErrorKind::InvalidParameter))?;
        let name = &self.line[start..eq];

        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(self
                .error(ParseErrorKind::InvalidParameter)
                .with_context(format!("bad parameter name '{name}'")));
        }
        self.pos = eq + 1;

        let mut values = vec![self.param_value()?];
        while self.peek() == Some(',') {
            self.pos += 1;
            values.push(self.param_value()?);
        }

        match self.peek() {
            Some(';' | ':') => Ok(Parameter::with_values(name, values)),
            Some(c) => Err(self
                .error(ParseErrorKind::InvalidParameter)
                .with_context(format!("unexpected character '{c}'"))),
            None => Err(self.error(ParseErrorKind::MissingColon)),
        }
    }

    fn param_value(&mut self) -> ParseResult<String> {
        if self.peek() != Some('"') {
            let rest = &self.line[self.pos..];
            let len = rest.find([',', ';', ':']).unwrap_or(rest.len());
            self.pos += len;
            return Ok(rest[..len].to_string());
        }

        let open = self.error(ParseErrorKind::UnclosedQuote);
        self.pos += 1;
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(value),
                // RFC 6868 caret encoding
                Some('^') => match self.peek() {
                    Some('^') => {
                        self.pos += 1;
                        value.push('^');
                    }
                    Some('n') => {
                        self.pos += 1;
                        value.push('\n');
                    }
                    Some('\'') => {
                        self.pos += 1;
                        value.push('"');
                    }
                    _ => value.push('^'),
                },
                Some(c) => value.push(c),
                None => return Err(open),
            }
        }
    }
}
