use tracing_subscriber::filter::LevelFilter;

mod var {
    env_var::env_var!(pub struct LogLevel;);
}

/// Severity threshold for the tracing subscriber, expressed with the names accepted by `LOG_LEVEL`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum LogLevel {
    /// Everything down to debug events
    Debug,
    /// Info and above
    Info,
    /// Warnings and errors
    Warning,
    /// Errors only
    #[default]
    Error,
    /// Treated the same as [LogLevel::Error]; tracing has no higher level
    Critical,
}

impl LogLevel {
    /// Parses a raw `LOG_LEVEL` value. Missing or unrecognized values fall back to [LogLevel::Error].
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Reads `LOG_LEVEL` on its own so a binary can initialize tracing before loading the rest of
    /// its configuration
    pub fn from_env() -> Self {
        Self::parse_or_default(var::LogLevel::optional().ok().flatten().as_deref())
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}
