//! Extraction core for Athena/itslearning course-plan exports.
//!
//! Turns the XML export into normalized [`Lesson`] records: a tag-stream
//! state machine picks out the lesson fields, a builder coerces timestamps
//! from UTC into the target zone, and a sequencer orders the result.

pub mod error;
pub mod plan;

pub use error::{PlanError, PlanResult};
pub use plan::{
    Diagnostic, Field, Lesson, ParserState, Plan, PlanOptions, TagStream, convert_plan,
    parse_plan, sequence,
};
