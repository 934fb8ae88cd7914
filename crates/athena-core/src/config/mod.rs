use std::path::Path;

use anyhow::Result;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, DEFAULT_TIMEZONE, ENV_PREFIX};
use crate::error::CoreResult;
use crate::types::{TimestampPolicy, parse_timezone};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub timezone: String,
    pub timestamps: TimestampPolicy,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub course: CourseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Metadata written into exported iCalendar files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarConfig {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Course columns of the bilingual spreadsheet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseConfig {
    pub name: Option<String>,
    pub code: Option<String>,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, a TOML file and `ATHENA_*` environment
    /// variables. Environment variables take precedence over file values.
    ///
    /// When `path` is given the file must exist, otherwise `athena.toml` in the
    /// working directory is read if present.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE).required(false),
        };

        Ok(Config::builder()
            .set_default("timezone", DEFAULT_TIMEZONE)?
            .set_default("timestamps", TimestampPolicy::default().as_str())?
            .set_default("logging.level", "warn")?
            // TOML file
            .add_source(file)
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("_")
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Returns the configured target zone.
    ///
    /// ## Errors
    /// Returns an error if the configured name is not a known IANA zone.
    pub fn tz(&self) -> CoreResult<Tz> {
        parse_timezone(&self.timezone)
    }
}

/// ## Summary
/// Loads `.env` into the process environment, then the settings.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load(path)?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}
