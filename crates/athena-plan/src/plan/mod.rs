//! Course-plan extraction pipeline.
//!
//! - `parse`: tag-stream state machine and the `quick-xml` driver
//! - `builder`: per-lesson accumulation and field coercion
//! - `timestamp`: strict timestamp parsing and UTC to local conversion
//! - `sequence`: final ordering handed to renderers

mod builder;
mod diagnostic;
mod field;
mod lesson;
mod options;
pub mod parse;
mod sequence;
pub mod timestamp;


pub use diagnostic::Diagnostic;
pub use field::{FIELD_ALIASES, Field};
pub use lesson::Lesson;
pub use options::{Plan, PlanOptions};
pub use parse::{ParserState, TagStream, parse_plan};
pub use sequence::sequence;

use crate::error::PlanResult;

/// ## Summary
/// Parses a plan export and returns its lessons in start order.
///
/// ## Errors
/// Returns an error if the XML is malformed, or if a timestamp is invalid
/// under `TimestampPolicy::Strict`.
pub fn convert_plan(xml: &str, options: &PlanOptions) -> PlanResult<Plan> {
    let plan = parse_plan(xml, options)?;
    Ok(Plan {
        lessons: sequence(plan.lessons),
        diagnostics: plan.diagnostics,
    })
}
