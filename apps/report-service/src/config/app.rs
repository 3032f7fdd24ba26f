//! Service configuration loaded from environment variables.

use std::env;

use super::service::ServiceKind;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Everything `main` needs to start one report service.
#[derive(Debug, Clone)]
pub struct Config {
    pub service: ServiceKind,
    pub host: String,
    pub port: u16,
    pub security: SecurityConfig,
}

impl Config {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let service = env::var("REPORT_SERVICE")
            .map_err(|_| AppError::config("REPORT_SERVICE must be set".to_string()))?
            .parse::<ServiceKind>()?;

        let host = env::var("REPORT_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("REPORT_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("REPORT_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let security = SecurityConfig::from_env()?;

        Ok(Config {
            service,
            host,
            port,
            security,
        })
    }
}
