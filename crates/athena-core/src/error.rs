use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
