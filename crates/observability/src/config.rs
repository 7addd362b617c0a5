use core::str::FromStr;

use thiserror::Error;

/// Filter directive used when neither `CATALOG_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable lines. Also accepted as `text`.
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format `{0}` (expected `json` or `pretty`)")]
    UnknownFormat(String),
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Logging configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `EnvFilter` directive, e.g. `info` or `catalog_products=debug`.
    pub filter: String,
    pub format: LogFormat,
    /// Set when `CATALOG_LOG_FORMAT` was present but unrecognized.
    pub format_error: Option<ConfigError>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            format_error: None,
        }
    }
}

impl Config {
    /// Read `CATALOG_LOG` (falling back to `RUST_LOG`) and `CATALOG_LOG_FORMAT`.
    ///
    /// An unrecognized format falls back to JSON; the error is kept so it can
    /// be reported once tracing is up.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok();
        Self::from_vars(var("CATALOG_LOG"), var("RUST_LOG"), var("CATALOG_LOG_FORMAT"))
    }

    fn from_vars(
        catalog_log: Option<String>,
        rust_log: Option<String>,
        format: Option<String>,
    ) -> Self {
        let filter = catalog_log
            .or(rust_log)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, format_error) = match format.map(|raw| raw.parse::<LogFormat>()) {
            None => (LogFormat::default(), None),
            Some(Ok(format)) => (format, None),
            Some(Err(e)) => (LogFormat::Json, Some(e)),
        };

        Self {
            filter,
            format,
            format_error,
        }
    }
}
