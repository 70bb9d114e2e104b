//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the SlotCast API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (optional, in-memory stores when unset)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `BOOKING_WINDOW_DAYS`: How many days ahead guests may book (default: 14)
//! - `SLOT_TIMEZONE`: IANA timezone of the working hours (default: "UTC")
//! - `SLOT_AVAILABILITY`: Probability that a generated slot is open (default: 0.7)
//! - `SLOT_SEEDED`: Keep availability stable per host and date (default: true)
//! - `HUB_API_URL`: Social hub base URL
//! - `HUB_API_KEY`: Social hub bearer token; profile lookups and casts are disabled without it

use std::env;

use chrono_tz::Tz;
use eyre::{Result, WrapErr, eyre};
use slotcast_core::{calendar::DEFAULT_AVAILABILITY, window::DEFAULT_WINDOW_DAYS};
use slotcast_hub::{HubConfig, config::DEFAULT_HUB_URL};
use tracing::Level;

/// Configuration for the SlotCast API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: Option<String>,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    pub booking_window_days: u32,

    pub slot_timezone: Tz,

    pub slot_availability: f64,

    pub slot_seeded: bool,

    pub hub_url: String,

    pub hub_api_key: Option<String>,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if a numeric value cannot be parsed
    /// or `SLOT_TIMEZONE` is not a known timezone.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key-value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        // Logging settings
        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS")
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Booking settings
        let booking_window_days = match lookup("BOOKING_WINDOW_DAYS") {
            Some(days) => days.parse().wrap_err("Invalid BOOKING_WINDOW_DAYS value")?,
            None => DEFAULT_WINDOW_DAYS,
        };
        let slot_timezone = match lookup("SLOT_TIMEZONE") {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|e| eyre!("Invalid SLOT_TIMEZONE {}: {}", name, e))?,
            None => Tz::UTC,
        };
        let slot_availability = match lookup("SLOT_AVAILABILITY") {
            Some(p) => p.parse().wrap_err("Invalid SLOT_AVAILABILITY value")?,
            None => DEFAULT_AVAILABILITY,
        };
        let slot_seeded = lookup("SLOT_SEEDED")
            .map(|v| !matches!(v.as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        // Social hub settings
        let hub_url = lookup("HUB_API_URL").unwrap_or_else(|| DEFAULT_HUB_URL.to_string());
        let hub_api_key = lookup("HUB_API_KEY").filter(|key| !key.is_empty());

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            booking_window_days,
            slot_timezone,
            slot_availability,
            slot_seeded,
            hub_url,
            hub_api_key,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Hub settings, or `None` when no API key is configured.
    pub fn hub_config(&self) -> Result<Option<HubConfig>> {
        match &self.hub_api_key {
            Some(key) => Ok(Some(HubConfig::new(&self.hub_url, Some(key.clone()))?)),
            None => Ok(None),
        }
    }
}
