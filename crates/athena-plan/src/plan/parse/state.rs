//! Tag-stream state machine.
//!
//! Independent of any particular XML reader: feed it open, character and
//! close events and it builds lessons.

use std::borrow::Cow;

use crate::error::PlanResult;
use crate::plan::builder::LessonBuilder;
use crate::plan::{Diagnostic, Field, Plan, PlanOptions};

const LESSON: &str = "lesson";
const OBJECTIVES: &str = "objectives";
const CUSTOM: &str = "custom";

/// Where the tag stream currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParserState {
    /// No element with meaningful text is open.
    #[default]
    Idle,
    /// A recognized field element is open; its text goes into the lesson.
    InField(Field),
    /// An element whose name is not a field is open; its text is dropped.
    InUnrecognized,
    /// Inside an `objectives` region. Everything is ignored until the
    /// outermost `objectives` element closes.
    InObjectives { depth: usize },
}

/// Drives lesson construction from a stream of element events.
#[derive(Debug)]
pub struct TagStream<'o> {
    options: &'o PlanOptions,
    state: ParserState,
    current: Option<LessonBuilder>,
    lessons: Vec<crate::plan::Lesson>,
    diagnostics: Vec<Diagnostic>,
}

impl<'o> TagStream<'o> {
    #[must_use]
    pub fn new(options: &'o PlanOptions) -> Self {
        Self {
            options,
            state: ParserState::Idle,
            current: None,
            lessons: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> ParserState {
        self.state
    }

    /// Handles an element opening. `col_name` is the element's `colName`
    /// attribute, if it has one; it only matters for `custom` elements.
    pub fn open(&mut self, tag: &str, col_name: Option<&str>) {
        if let ParserState::InObjectives { depth } = &mut self.state {
            if tag == OBJECTIVES {
                *depth += 1;
            }
            return;
        }

        match tag {
            OBJECTIVES => {
                self.state = ParserState::InObjectives { depth: 1 };
                return;
            }
            LESSON => {
                if self.current.is_some() {
                    tracing::warn!(
                        lesson = self.lessons.len(),
                        "Discarding unterminated lesson"
                    );
                }
                tracing::trace!(lesson = self.lessons.len(), "Found a new lesson");
                self.current = Some(LessonBuilder::new(self.lessons.len()));
            }
            _ => {}
        }

        let name = match (tag, col_name) {
            (CUSTOM, Some(col_name)) => Cow::Owned(col_name.to_lowercase()),
            _ => Cow::Borrowed(tag),
        };

        self.state = match Field::from_tag(&name) {
            Some(field) => ParserState::InField(field),
            None => {
                if tag == CUSTOM {
                    tracing::trace!(col_name = %name, "Ignoring unrecognized custom field");
                }
                ParserState::InUnrecognized
            }
        };
    }

    /// Handles one run of character data.
    ///
    /// ## Errors
    /// Returns an error if a timestamp is invalid under the strict policy.
    pub fn characters(&mut self, text: &str) -> PlanResult<()> {
        let ParserState::InField(field) = self.state else {
            return Ok(());
        };

        match self.current.as_mut() {
            Some(builder) => builder.apply(field, text, self.options, &mut self.diagnostics),
            None => {
                tracing::debug!(%field, "Dropping field text outside of a lesson");
                Ok(())
            }
        }
    }

    /// Handles an element closing.
    pub fn close(&mut self, tag: &str) {
        if let ParserState::InObjectives { depth } = &mut self.state {
            if tag == OBJECTIVES {
                *depth -= 1;
                if *depth == 0 {
                    self.state = ParserState::Idle;
                }
            }
            return;
        }

        if tag == LESSON {
            if let Some(builder) = self.current.take() {
                let lesson = builder.finish();
                tracing::debug!(
                    index = self.lessons.len(),
                    name = %lesson.name,
                    start = %lesson.start_raw,
                    "Lesson complete"
                );
                self.lessons.push(lesson);
            } else {
                tracing::warn!("Closing lesson tag without an open lesson");
            }
        }

        self.state = ParserState::Idle;
    }

    /// Ends the stream, returning lessons in document order.
    #[must_use]
    pub fn finish(self) -> Plan {
        if self.current.is_some() {
            tracing::warn!("Discarding unterminated lesson at end of input");
        }
        Plan {
            lessons: self.lessons,
            diagnostics: self.diagnostics,
        }
    }
}
