use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_FEED_URL: &str = "https://api.nasa.gov/neo/rest/v1";
pub const DEFAULT_SBDB_URL: &str = "https://ssd-api.jpl.nasa.gov";
const DEFAULT_API_KEY: &str = "DEMO_KEY";
const DEFAULT_START_DATE: &str = "2025-01-01";
const DEFAULT_END_DATE: &str = "2025-01-02";
const DEFAULT_OUTPUT_DIR: &str = ".";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest window the feed service accepts, in days between start and end.
pub const MAX_WINDOW_DAYS: i64 = 7;

pub const FEED_URL_VAR: &str = "NEO_FEED_URL";
pub const SBDB_URL_VAR: &str = "NEO_SBDB_URL";
pub const API_KEY_VAR: &str = "NEO_API_KEY";
pub const START_DATE_VAR: &str = "NEO_START_DATE";
pub const END_DATE_VAR: &str = "NEO_END_DATE";
pub const OUTPUT_DIR_VAR: &str = "NEO_OUTPUT_DIR";
pub const TIMEOUT_VAR: &str = "NEO_HTTP_TIMEOUT_SECS";

/// An inclusive range of calendar days requested from the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Creates a new window.
    ///
    /// # Errors
    /// - [`ConfigError::InvertedWindow`] if `end` lies before `start`.
    /// - [`ConfigError::WindowTooLong`] if the window exceeds [`MAX_WINDOW_DAYS`].
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ConfigError> {
        if end < start {
            return Err(ConfigError::InvertedWindow { start, end });
        }
        let days = (end - start).num_days();
        if days > MAX_WINDOW_DAYS {
            return Err(ConfigError::WindowTooLong { days });
        }
        Ok(Self { start, end })
    }

    /// Parses a window from two `YYYY-MM-DD` dates.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidDate`] for malformed dates and the errors of [`Self::new`].
    pub fn parse(start: &str, end: &str) -> Result<Self, ConfigError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate { self.start }
    pub fn end(&self) -> NaiveDate { self.end }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 { (self.end - self.start).num_days() + 1 }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start.format(DATE_FORMAT), self.end.format(DATE_FORMAT))
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ConfigError::InvalidDate(value.to_string()))
}

/// Everything a pipeline run needs to know about its environment.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    feed_url: String,
    sbdb_url: String,
    api_key: String,
    window: DateWindow,
    output_dir: PathBuf,
    /// Per-request limit. `None` leaves requests unbounded.
    timeout: Option<Duration>,
}

impl PipelineConfig {
    pub fn new(
        feed_url: impl Into<String>,
        sbdb_url: impl Into<String>,
        api_key: impl Into<String>,
        window: DateWindow,
        output_dir: impl Into<PathBuf>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            feed_url: feed_url.into(),
            sbdb_url: sbdb_url.into(),
            api_key: api_key.into(),
            window,
            output_dir: output_dir.into(),
            timeout,
        }
    }

    /// Builds the configuration from the process environment, falling back to defaults for
    /// unset variables. Without `NEO_HTTP_TIMEOUT_SECS` requests carry no timeout.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if a set variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where F: Fn(&str) -> Option<String> {
        let var_or = |key: &str, default: &str| {
            lookup(key).filter(|v| !v.trim().is_empty()).unwrap_or_else(|| default.to_string())
        };
        let window = DateWindow::parse(
            &var_or(START_DATE_VAR, DEFAULT_START_DATE),
            &var_or(END_DATE_VAR, DEFAULT_END_DATE),
        )?;
        let timeout = lookup(TIMEOUT_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs)
                    .ok_or(ConfigError::InvalidTimeout(raw))
            })
            .transpose()?;
        Ok(Self::new(
            var_or(FEED_URL_VAR, DEFAULT_FEED_URL),
            var_or(SBDB_URL_VAR, DEFAULT_SBDB_URL),
            var_or(API_KEY_VAR, DEFAULT_API_KEY),
            window,
            var_or(OUTPUT_DIR_VAR, DEFAULT_OUTPUT_DIR),
            timeout,
        ))
    }

    pub fn feed_url(&self) -> &str { &self.feed_url }
    pub fn sbdb_url(&self) -> &str { &self.sbdb_url }
    pub fn api_key(&self) -> &str { &self.api_key }
    pub fn window(&self) -> DateWindow { self.window }
    pub fn output_dir(&self) -> &Path { &self.output_dir }
    pub fn timeout(&self) -> Option<Duration> { self.timeout }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidDate(String),
    InvertedWindow { start: NaiveDate, end: NaiveDate },
    WindowTooLong { days: i64 },
    InvalidTimeout(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDate(value) => write!(f, "invalid date {value:?}, expected YYYY-MM-DD"),
            ConfigError::InvertedWindow { start, end } => {
                write!(f, "end date {end} lies before start date {start}")
            }
            ConfigError::WindowTooLong { days } => {
                write!(f, "window spans {days} days, the feed allows at most {MAX_WINDOW_DAYS}")
            }
            ConfigError::InvalidTimeout(value) => {
                write!(f, "invalid timeout {value:?}, expected a positive number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
