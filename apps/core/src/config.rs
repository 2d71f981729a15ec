//! Runtime configuration read from the environment.
//!
//! Variables (a `.env` file is loaded first when present):
//! - `HOST`: bind address (default `0.0.0.0`)
//! - `PORT`: bind port (default `3000`)
//! - `LOG_FORMAT`: `pretty` (default) or `json`
//! - `RUST_LOG`: tracing filter, read by [`crate::telemetry`]

use std::env;
use std::str::FromStr;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Log output flavor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    /// Bunyan-style JSON lines
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("unsupported LOG_FORMAT: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if any) and reads the process environment
    pub fn load() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("invalid PORT '{}': {}", raw, e)))?,
            _ => DEFAULT_PORT,
        };

        let log_format = match env::var("LOG_FORMAT") {
            Ok(raw) => raw.parse()?,
            Err(_) => LogFormat::default(),
        };

        Ok(Self {
            host,
            port,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 3] = ["HOST", "PORT", "LOG_FORMAT"];

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars_unset(VARS, || {
            let config = AppConfig::from_env().unwrap();
            assert_eq!(config, AppConfig::default());
            assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        });
    }

    #[test]
    fn test_reads_overrides() {
        temp_env::with_vars(
            [
                ("HOST", Some("127.0.0.1")),
                ("PORT", Some("8081")),
                ("LOG_FORMAT", Some("JSON")),
            ],
            || {
                let config = AppConfig::from_env().unwrap();
                assert_eq!(config.bind_addr(), "127.0.0.1:8081");
                assert_eq!(config.log_format, LogFormat::Json);
            },
        );
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        temp_env::with_vars(
            [("PORT", Some("http")), ("HOST", None), ("LOG_FORMAT", None)],
            || {
                let err = AppConfig::from_env().unwrap_err();
                assert!(matches!(err, AppError::Config(_)));
            },
        );
    }

    #[test]
    fn test_unknown_log_format() {
        assert!(matches!("xml".parse::<LogFormat>(), Err(AppError::Config(_))));
        assert_eq!("".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    }
}
