use thiserror::Error;

use crate::plan::Field;
use crate::plan::timestamp::TimestampError;

/// Errors raised while extracting lessons from a plan export.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Malformed document: {0}")]
    Structure(String),

    #[error("Invalid {field} timestamp {value:?} in lesson {lesson}: {source}")]
    TimestampFormat {
        lesson: usize,
        field: Field,
        value: String,
        #[source]
        source: TimestampError,
    },
}

impl From<quick_xml::encoding::EncodingError> for PlanError {
    fn from(err: quick_xml::encoding::EncodingError) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<std::str::Utf8Error> for PlanError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

pub type PlanResult<T> = std::result::Result<T, PlanError>;
