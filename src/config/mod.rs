use crate::core::{AppError, Result};
use crate::modules::fees::{FeeCalculator, DEFAULT_FEE_RATE_HT, DEFAULT_POSTAL_CODE};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub billing: BillingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `json` for structured logs, anything else for human-readable output
    pub log_format: String,
}

impl AppConfig {
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// Defaults applied when a calculation request omits them
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    pub default_fee_rate_ht: Decimal,
    pub default_postal_code: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            default_fee_rate_ht: DEFAULT_FEE_RATE_HT,
            default_postal_code: DEFAULT_POSTAL_CODE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            billing: BillingConfig {
                default_fee_rate_ht: match env::var("DEFAULT_FEE_RATE_HT") {
                    Ok(raw) => raw.parse().map_err(|_| {
                        AppError::Configuration("Invalid DEFAULT_FEE_RATE_HT".to_string())
                    })?,
                    Err(_) => DEFAULT_FEE_RATE_HT,
                },
                default_postal_code: env::var("DEFAULT_POSTAL_CODE")
                    .unwrap_or_else(|_| DEFAULT_POSTAL_CODE.to_string()),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        FeeCalculator::validate_fee_rate(self.billing.default_fee_rate_ht).map_err(|e| {
            AppError::Configuration(format!("DEFAULT_FEE_RATE_HT: {}", e))
        })?;

        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "Database max connections must be greater than 0".to_string(),
            ));
        }

        if self.database.pool_size > self.database.max_connections {
            return Err(AppError::Configuration(
                "DATABASE_POOL_SIZE cannot exceed DATABASE_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(())
    }
}
