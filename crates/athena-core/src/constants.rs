/// Constants shared across crates
pub const APP_NAME: &str = "athena";

/// Zone used when nothing else is configured.
pub const DEFAULT_TIMEZONE: &str = "Europe/Stockholm";

/// Layout of `<start>`/`<stop>` values in a plan export (UTC, no offset).
pub const PLAN_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Layout of the date argument accepted by the course shift tool.
pub const SHIFT_DATE_FORMAT: &str = "%d.%m.%Y";

pub const PRODID: &str = const_str::concat!("-//", APP_NAME, "//plan export//EN");

pub const CONFIG_FILE: &str = const_str::concat!(APP_NAME, ".toml");
pub const ENV_PREFIX: &str = "ATHENA";
