//! Value escaping.

/// Escapes a TEXT value (RFC 5545 §3.3.11).
///
/// Backslash, comma and semicolon are backslash-escaped; line breaks become
/// `\n`. A CR that is part of CRLF is dropped.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' | ',' | ';' => {
                out.push('\\');
                out.push(c);
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Encodes a parameter value, quoting it when it contains a delimiter.
///
/// Inside quotes, `^`, newline and `"` use caret encoding (RFC 6868).
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    if !s.contains([':', ';', ',', '"', '\n']) {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '^' => out.push_str("^^"),
            '\n' => out.push_str("^n"),
            '"' => out.push_str("^'"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
