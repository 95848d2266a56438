use std::{net::SocketAddr, path::PathBuf, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_CHECK_BATTERY_INTERVAL_MINUTES: u64 = 15;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_LOG_DIR: &str = "logs";

pub struct Config {
    pub database_url: String,

    /// Time between two battery ticks.
    pub check_battery_interval: Duration,

    pub bind_address: SocketAddr,
    pub static_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value parsed
    /// - `Err(AppError::ConfigErr)` - Variable missing or unparsable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let check_battery_interval = match lookup("CHECK_BATTERY_INTERVAL") {
            Some(value) => parse_interval_minutes("CHECK_BATTERY_INTERVAL", &value)?,
            None => DEFAULT_CHECK_BATTERY_INTERVAL_MINUTES,
        };

        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: bind_address.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            check_battery_interval: Duration::from_secs(check_battery_interval * 60),
            bind_address,
            static_dir: lookup("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
            log_dir: lookup("LOG_DIR")
                .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string())
                .into(),
        })
    }
}

fn parse_interval_minutes(name: &str, value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    };

    let minutes = value.trim().parse::<u64>().map_err(|e| invalid(e.to_string()))?;
    if minutes == 0 {
        return Err(invalid("interval must be at least one minute".to_string()));
    }

    Ok(minutes)
}
