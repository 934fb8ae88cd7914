//! End-to-end tests running the `athena` commands against files on disk.

mod agenda;
mod conversion;
mod helpers;
mod shift;
