//! iCalendar parsing.

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{parse_content_line, split_lines};
pub use parser::parse;
pub use values::unescape_text;
