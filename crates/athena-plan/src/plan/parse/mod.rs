//! Plan export XML parsing.
//!
//! This module reads the export with `quick-xml` and feeds the events into
//! the [`TagStream`] state machine. Namespace processing is off: tags are
//! matched on their raw qualified names.

mod state;

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

pub use state::{ParserState, TagStream};

use crate::error::{PlanError, PlanResult};
use crate::plan::{Plan, PlanOptions};

const COL_NAME: &str = "colName";

/// Parses a plan export into lessons, in document order.
///
/// Text, CDATA and entity references between two tags are joined and handed
/// to the state machine as one run of character data.
///
/// ## Errors
///
/// Returns an error if the document is not well-formed XML, or if a timestamp
/// is invalid under `TimestampPolicy::Strict`. No partial result is returned.
#[tracing::instrument(
    skip(xml, options),
    fields(xml_len = xml.len(), timezone = %options.timezone)
)]
pub fn parse_plan(xml: &str, options: &PlanOptions) -> PlanResult<Plan> {
    tracing::debug!("Parsing plan export");

    let mut reader = Reader::from_str(xml);
    let mut stream = TagStream::new(options);
    let mut text = String::new();
    let mut depth: usize = 0;
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                flush_text(&mut stream, &mut text, depth)?;
                if depth == 0 && seen_root {
                    return Err(PlanError::Structure(
                        "more than one root element".to_string(),
                    ));
                }
                seen_root = true;
                depth += 1;
                open_element(&mut stream, &reader, e)?;
            }
            Event::Empty(ref e) => {
                flush_text(&mut stream, &mut text, depth)?;
                if depth == 0 && seen_root {
                    return Err(PlanError::Structure(
                        "more than one root element".to_string(),
                    ));
                }
                seen_root = true;
                open_element(&mut stream, &reader, e)?;
                stream.close(std::str::from_utf8(e.name().as_ref())?);
            }
            Event::End(ref e) => {
                flush_text(&mut stream, &mut text, depth)?;
                depth = depth.saturating_sub(1);
                stream.close(std::str::from_utf8(e.name().as_ref())?);
            }
            Event::Text(ref e) => text.push_str(&e.decode()?),
            Event::CData(ref e) => text.push_str(&e.decode()?),
            Event::GeneralRef(ref e) => {
                if let Some(ch) = e.resolve_char_ref()? {
                    text.push(ch);
                } else {
                    let name = e.decode()?;
                    let resolved = resolve_predefined_entity(&name).ok_or_else(|| {
                        PlanError::Structure(format!("unknown entity &{name};"))
                    })?;
                    text.push_str(resolved);
                }
            }
            Event::Eof => {
                flush_text(&mut stream, &mut text, depth)?;
                if depth > 0 {
                    return Err(PlanError::Structure(format!(
                        "unexpected end of document with {depth} unclosed element(s)"
                    )));
                }
                if !seen_root {
                    return Err(PlanError::Structure("no root element".to_string()));
                }
                break;
            }
            // Declarations, processing instructions, doctypes and comments
            _ => {}
        }
    }

    let plan = stream.finish();
    tracing::debug!(
        lessons = plan.lessons.len(),
        diagnostics = plan.diagnostics.len(),
        "Plan export parsed"
    );
    Ok(plan)
}

fn open_element(
    stream: &mut TagStream<'_>,
    reader: &Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> PlanResult<()> {
    let name = e.name();
    let tag = std::str::from_utf8(name.as_ref())?;
    let col_name = match e.try_get_attribute(COL_NAME)? {
        Some(attr) => Some(attr.decode_and_unescape_value(reader.decoder())?),
        None => None,
    };
    stream.open(tag, col_name.as_deref());
    Ok(())
}

fn flush_text(stream: &mut TagStream<'_>, text: &mut String, depth: usize) -> PlanResult<()> {
    if text.is_empty() {
        return Ok(());
    }
    if depth == 0 {
        if !text.trim().is_empty() {
            return Err(PlanError::Structure(
                "character data outside the root element".to_string(),
            ));
        }
    } else {
        stream.characters(text)?;
    }
    text.clear();
    Ok(())
}
