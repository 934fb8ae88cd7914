//! Per-lesson accumulation and field coercion.

use athena_core::TimestampPolicy;
use chrono::DateTime;
use chrono_tz::Tz;

use super::timestamp::{parse_plan_timestamp, utc_to_local};
use super::{Diagnostic, Field, Lesson, PlanOptions};
use crate::error::{PlanError, PlanResult};

/// The lesson currently being filled in by the tag stream.
#[derive(Debug)]
pub(crate) struct LessonBuilder {
    index: usize,
    lesson: Lesson,
}

impl LessonBuilder {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            lesson: Lesson::default(),
        }
    }

    /// Writes `value` into `field`, last write wins.
    pub(crate) fn apply(
        &mut self,
        field: Field,
        value: &str,
        options: &PlanOptions,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> PlanResult<()> {
        match field {
            Field::Name => self.lesson.name = value.to_string(),
            Field::Description => self.lesson.description = Some(value.to_string()),
            Field::Room => self.lesson.room = Some(value.to_string()),
            Field::Teacher => self.lesson.teacher = Some(value.to_string()),
            Field::Start => {
                let local = self.coerce(field, value, options, diagnostics)?;
                self.lesson.start_raw = value.to_string();
                self.lesson.start_local = local;
            }
            Field::Stop => {
                let local = self.coerce(field, value, options, diagnostics)?;
                self.lesson.stop_raw = value.to_string();
                self.lesson.stop_local = local;
            }
        }
        Ok(())
    }

    fn coerce(
        &self,
        field: Field,
        value: &str,
        options: &PlanOptions,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> PlanResult<Option<DateTime<Tz>>> {
        match parse_plan_timestamp(value) {
            Ok(naive) => Ok(Some(utc_to_local(naive, options.timezone))),
            Err(source) => match options.timestamps {
                TimestampPolicy::Strict => Err(PlanError::TimestampFormat {
                    lesson: self.index,
                    field,
                    value: value.to_string(),
                    source,
                }),
                TimestampPolicy::Lenient => {
                    tracing::warn!(
                        lesson = self.index,
                        %field,
                        value,
                        error = %source,
                        "Unparseable timestamp, leaving local time unset"
                    );
                    diagnostics.push(Diagnostic {
                        lesson: self.index,
                        field,
                        value: value.to_string(),
                        message: source.to_string(),
                    });
                    Ok(None)
                }
            },
        }
    }

    pub(crate) fn finish(self) -> Lesson {
        self.lesson
    }
}
