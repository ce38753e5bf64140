//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache headers, parser invocation, logging format, and default paths.
//! `AppConfig` is the root configuration struct containing all settings.

use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Parse responses are per-request dynamic content and must never be cached
/// by upstream proxies or CDNs.
pub const CACHE_CONTROL_PARSE: &str = "no-store";

// =============================================================================
// Parser Invocation Constants
// =============================================================================

/// Flag passed to the external parser to request JSON output on stdout.
pub const PARSER_JSON_FLAG: &str = "--json";

/// Flag passed to the external parser to request indented JSON output.
pub const PARSER_PRETTY_FLAG: &str = "--pretty";

/// Prefix on the external parser's stdout that signals a parse failure.
/// Anything else, including empty output, is treated as a JSON document.
pub const PARSER_ERROR_PREFIX: &str = "Error";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "parsegate=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// External parser invocation settings
    pub parser: ParserConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Settings for invoking the external log parser.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Program to run, e.g. `./parselog.py`. Resolved through PATH if not a path.
    pub command: String,
    /// Ask the parser for indented JSON output (default: compact)
    #[serde(default)]
    pub pretty: bool,
    /// Bound on external parser execution time, in seconds.
    /// Unset means the handler waits for the parser indefinitely.
    pub timeout_seconds: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        if config.parser.command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No parser command configured. Set parser.command to the log parser executable"
                    .to_string(),
            ));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> AppConfig {
        toml::from_str(toml).expect("config should deserialize")
    }

    #[test]
    fn minimal_config_applies_defaults() {
        let config = parse(
            r#"
            [http]
            host = "0.0.0.0"
            port = 3000

            [parser]
            command = "./parselog.py"
            "#,
        );

        assert_eq!(config.http.port, 3000);
        assert_eq!(config.parser.command, "./parselog.py");
        assert!(!config.parser.pretty);
        assert_eq!(config.parser.timeout_seconds, None);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn full_config_round_trips() {
        let config = parse(
            r#"
            [http]
            host = "127.0.0.1"
            port = 8080

            [parser]
            command = "parselog"
            pretty = true
            timeout_seconds = 30

            [logging]
            format = "json"
            "#,
        );

        assert_eq!(config.http.host, "127.0.0.1");
        assert!(config.parser.pretty);
        assert_eq!(config.parser.timeout_seconds, Some(30));
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn empty_parser_command_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [http]
            host = "0.0.0.0"
            port = 3000

            [parser]
            command = ""
            "#,
        )
        .unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
