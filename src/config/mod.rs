use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{PricePolicy, DEFAULT_MAX_PRICE, DEFAULT_PRICE_DECIMAL_PLACES};
use crate::services::EventEmitter;

/// Prefix of every environment variable read by the application
pub const ENV_PREFIX: &str = "MENU";

/// Largest number of decimal places a price policy may allow
pub const MAX_DECIMAL_PLACES: u32 = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading error: {message}")]
    LoadError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub menu: MenuConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_max_price")]
    pub max_price: Decimal,
    #[serde(default = "default_price_decimal_places")]
    pub price_decimal_places: u32,
    #[serde(default = "default_events_enabled")]
    pub events_enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_service_version")]
    pub service_version: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_enable_json_logging")]
    pub enable_json_logging: bool,
}

impl Config {
    /// Load configuration from `MENU_*` environment variables
    pub fn from_environment() -> Result<Self, ConfigError> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from an explicit environment source
    pub fn from_source(source: config::Environment) -> Result<Self, ConfigError> {
        info!("Loading configuration from environment");

        let settings = config::Config::builder()
            .add_source(source)
            .build()
            .map_err(|e| ConfigError::LoadError {
                message: format!("Failed to load config: {}", e),
            })?;

        let config = Config {
            menu: MenuConfig::from_settings(&settings)?,
            observability: ObservabilityConfig::from_settings(&settings)?,
        };

        config.validate()?;

        info!("Configuration loaded successfully");
        debug!("Configuration: {:?}", config);

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.menu.currency_symbol.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Currency symbol cannot be empty".to_string(),
            });
        }

        if self.menu.max_price <= Decimal::ZERO {
            return Err(ConfigError::ValidationError {
                message: "Maximum price must be greater than zero".to_string(),
            });
        }

        if self.menu.price_decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Price decimal places cannot exceed {}",
                    MAX_DECIMAL_PLACES
                ),
            });
        }

        if self.observability.service_name.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Service name cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

impl MenuConfig {
    fn from_settings(settings: &config::Config) -> Result<Self, ConfigError> {
        settings
            .clone()
            .try_deserialize()
            .map_err(|e| ConfigError::LoadError {
                message: format!("Failed to deserialize menu config: {}", e),
            })
    }

    pub fn price_policy(&self) -> PricePolicy {
        PricePolicy {
            max_price: self.max_price,
            decimal_places: self.price_decimal_places,
        }
    }

    pub fn event_emitter(&self) -> EventEmitter {
        EventEmitter::new(self.events_enabled)
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            max_price: default_max_price(),
            price_decimal_places: default_price_decimal_places(),
            events_enabled: default_events_enabled(),
        }
    }
}

impl ObservabilityConfig {
    fn from_settings(settings: &config::Config) -> Result<Self, ConfigError> {
        settings
            .clone()
            .try_deserialize()
            .map_err(|e| ConfigError::LoadError {
                message: format!("Failed to deserialize observability config: {}", e),
            })
    }
}

// Default value functions
pub(crate) fn default_currency_symbol() -> String {
    "R".to_string()
}

pub(crate) fn default_max_price() -> Decimal {
    DEFAULT_MAX_PRICE
}

pub(crate) fn default_price_decimal_places() -> u32 {
    DEFAULT_PRICE_DECIMAL_PLACES
}

pub(crate) fn default_events_enabled() -> bool {
    true
}

pub(crate) fn default_service_name() -> String {
    "menu-rs".to_string()
}

pub(crate) fn default_service_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_enable_json_logging() -> bool {
    false
}
