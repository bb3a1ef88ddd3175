//! Configuration loading for the trade validation service
//!
//! Supports JSON configuration files for:
//! - Server settings (host, port)
//! - Reference data (onboarded counterparties, tradable currency pairs)
//! - Holiday calendars (global and per currency)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tradeval_calendar::{HolidayCalendar, MarketCalendar};
use tradeval_core::CurrencyPair;
use tradeval_ports::{CalendarProvider, PairMatching};
use tradeval_reference::{DEFAULT_COUNTERPARTIES, DEFAULT_CURRENCY_PAIRS, StaticReferenceData};

/// Root configuration for the validation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name/identifier
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Counterparty and currency pair allow-lists
    #[serde(default)]
    pub reference_data: ReferenceDataConfig,

    /// Holiday calendars
    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_service_name() -> String {
    "Trade Validation Service".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            server: ServerConfig::default(),
            reference_data: ReferenceDataConfig::default(),
            calendar: CalendarConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject reference data the providers could never match against
    pub fn validate(&self) -> Result<(), ConfigError> {
        for pair in &self.reference_data.currency_pairs {
            if CurrencyPair::new(pair.as_str()).legs().is_none() {
                return Err(ConfigError::InvalidReferenceData(format!(
                    "currency pair '{}' is not two 3-letter currency codes",
                    pair
                )));
            }
        }

        for counterparty in &self.reference_data.counterparties {
            if counterparty.trim().is_empty() {
                return Err(ConfigError::InvalidReferenceData(
                    "counterparty codes cannot be blank".to_string(),
                ));
            }
        }

        for currency in self.calendar.currency_holidays.keys() {
            let valid = currency.len() == 3 && currency.chars().all(|c| c.is_ascii_alphabetic());
            if !valid {
                return Err(ConfigError::InvalidCalendar(format!(
                    "'{}' is not a 3-letter currency code",
                    currency
                )));
            }
        }

        Ok(())
    }

    /// Build the calendar provider described by this configuration
    ///
    /// Per-currency holidays select a market-aware calendar; otherwise a
    /// single global calendar is used.
    pub fn build_calendar(&self) -> Arc<dyn CalendarProvider> {
        let calendar = &self.calendar;

        if calendar.currency_holidays.is_empty() {
            return Arc::new(
                HolidayCalendar::new(calendar.name.as_str())
                    .with_holidays(calendar.holidays.iter().copied()),
            );
        }

        let market = calendar.currency_holidays.iter().fold(
            MarketCalendar::new(calendar.name.as_str())
                .with_global_holidays(calendar.holidays.iter().copied()),
            |market, (currency, dates)| {
                market.with_currency_holidays(currency, dates.iter().copied())
            },
        );
        Arc::new(market)
    }

    /// Build the reference data provider described by this configuration
    pub fn build_reference_data(&self) -> StaticReferenceData {
        let reference = &self.reference_data;
        StaticReferenceData::new(
            reference.counterparties.iter().cloned(),
            reference.currency_pairs.iter().map(|p| p.as_str()),
            reference.pair_matching,
        )
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    12345
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Reference data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceDataConfig {
    /// Onboarded counterparties, in the order rejections list them
    #[serde(default = "default_counterparties")]
    pub counterparties: Vec<String>,
    /// Tradable currency pairs (EURUSD or EUR/USD)
    #[serde(default = "default_currency_pairs")]
    pub currency_pairs: Vec<String>,
    /// Whether USDEUR matches a configured EURUSD
    #[serde(default)]
    pub pair_matching: PairMatching,
}

fn default_counterparties() -> Vec<String> {
    DEFAULT_COUNTERPARTIES.iter().map(|c| c.to_string()).collect()
}

fn default_currency_pairs() -> Vec<String> {
    DEFAULT_CURRENCY_PAIRS.iter().map(|p| p.to_string()).collect()
}

impl Default for ReferenceDataConfig {
    fn default() -> Self {
        Self {
            counterparties: default_counterparties(),
            currency_pairs: default_currency_pairs(),
            pair_matching: PairMatching::default(),
        }
    }
}

/// Holiday calendar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_calendar_name")]
    pub name: String,
    /// Holidays observed for every currency
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// Holidays observed by one currency's market
    #[serde(default)]
    pub currency_holidays: BTreeMap<String, Vec<NaiveDate>>,
}

fn default_calendar_name() -> String {
    "GLOBAL".to_string()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            name: default_calendar_name(),
            holidays: Vec::new(),
            currency_holidays: BTreeMap::new(),
        }
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid reference data config: {0}")]
    InvalidReferenceData(String),

    #[error("Invalid calendar config: {0}")]
    InvalidCalendar(String),
}
