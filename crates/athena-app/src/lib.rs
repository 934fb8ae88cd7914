//! The `athena` command line tool.

pub mod cli;
pub mod commands;
pub mod logging;
