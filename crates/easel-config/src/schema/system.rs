//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the easel crates at this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "easel=debug",
            LogLevel::Info => "easel=info",
            LogLevel::Warning => "easel=warn",
            LogLevel::Error => "easel=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_directive() {
        assert_eq!(LogLevel::default().directive(), "easel=info");
        assert_eq!(LogLevel::Warning.directive(), "easel=warn");
    }

    #[test]
    fn log_level_uppercase_toml() {
        let config: LoggingConfig = toml::from_str("level = \"ERROR\"").unwrap();
        assert_eq!(config.level, LogLevel::Error);
    }
}
