//! Shared settings, error types and constants for the athena tools.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{TimestampPolicy, parse_timezone};
