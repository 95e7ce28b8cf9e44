use std::env;
use std::fmt;

use crate::people::CompanyId;

/// Distinguishes runtime behavior for different stages of the tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub directory: DirectoryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let company_id = env::var("APP_COMPANY_ID")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidCompanyId)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            directory: DirectoryConfig {
                company_id: CompanyId(company_id),
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Default company context for directory-backed commands.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub company_id: CompanyId,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCompanyId,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCompanyId => {
                write!(f, "APP_COMPANY_ID must be a valid unsigned integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_COMPANY_ID");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.directory.company_id, CompanyId(1));
    }

    #[test]
    fn load_reads_company_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_COMPANY_ID", "42");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.directory.company_id, CompanyId(42));
        reset_env();
    }

    #[test]
    fn load_rejects_unparseable_company() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_COMPANY_ID", "acme");
        match AppConfig::load() {
            Err(ConfigError::InvalidCompanyId) => {}
            other => panic!("expected invalid company id, got {other:?}"),
        }
        reset_env();
    }
}
