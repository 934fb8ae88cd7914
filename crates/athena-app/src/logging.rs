//! Logging bootstrap.

use std::borrow::Cow;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Handle for replacing the active filter once settings are known.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Installs the global subscriber: a reloadable filter and a stderr
/// formatter. Starts at `warn` until [`apply_level`] is called.
pub fn init() -> FilterHandle {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    filter_handle
}

/// Picks the filter directive: the configured one, raised to the level the
/// `-v` flags ask for. Never lowers a more verbose configured level.
#[must_use]
pub fn effective_level(configured: &str, verbose: u8) -> Cow<'_, str> {
    let (requested, name) = match verbose {
        0 => return Cow::Borrowed(configured),
        1 => (LevelFilter::INFO, "info"),
        2 => (LevelFilter::DEBUG, "debug"),
        _ => (LevelFilter::TRACE, "trace"),
    };

    match configured.trim().parse::<LevelFilter>() {
        Ok(level) if level >= requested => Cow::Borrowed(configured),
        Ok(_) => Cow::Borrowed(name),
        // Per-target directives are kept; only the default level is raised.
        Err(_) => Cow::Owned(format!("{name},{configured}")),
    }
}

/// Swaps the active filter, keeping the old one if `level` does not parse.
pub fn apply_level(handle: &FilterHandle, level: &str) {
    match EnvFilter::try_new(level) {
        Ok(filter) => {
            if let Err(e) = handle.modify(|current| *current = filter) {
                tracing::warn!(error = %e, "Failed to update log filter");
            }
        }
        Err(e) => tracing::warn!(level, error = %e, "Invalid log level, keeping warn"),
    }
}
