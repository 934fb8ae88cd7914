//! Content line folding (RFC 5545 §3.1).

/// Maximum line length in octets, excluding the CRLF.
const MAX_LINE_OCTETS: usize = 75;

/// Folds one content line and terminates it with CRLF.
///
/// Each physical line is at most 75 octets; continuation lines start with a
/// single space, which counts toward the limit. Folds never split a UTF-8
/// sequence.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3 + 2);
    let mut rest = line;
    let mut budget = MAX_LINE_OCTETS;

    while rest.len() > budget {
        let mut cut = budget;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        let (head, tail) = rest.split_at(cut);
        out.push_str(head);
        out.push_str("\r\n ");
        rest = tail;
        budget = MAX_LINE_OCTETS - 1;
    }

    out.push_str(rest);
    out.push_str("\r\n");
    out
}
