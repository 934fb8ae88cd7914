//! End-to-end test support for the athena tools.
//!
//! Fixtures live here so the integration tests and any future benches
//! share the same inputs.

pub mod fixtures;
