//! Configuration module for the FoodBridge backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Seed example records into an empty store on startup
    pub seed: bool,
}

/// A configuration variable held a value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value {:?} for {}", self.value, self.var)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("FOODBRIDGE_DB_PATH")
            .unwrap_or_else(|_| "./data/foodbridge.sqlite".to_string())
            .into();

        let bind_addr_raw =
            env::var("FOODBRIDGE_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = bind_addr_raw.parse().map_err(|_| ConfigError {
            var: "FOODBRIDGE_BIND_ADDR",
            value: bind_addr_raw.clone(),
        })?;

        let log_level = env::var("FOODBRIDGE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            log_json: bool_var("FOODBRIDGE_LOG_JSON", false)?,
            seed: bool_var("FOODBRIDGE_SEED", true)?,
        })
    }
}

fn bool_var(var: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(var) {
        Err(_) => Ok(default),
        Ok(value) => parse_bool(&value).ok_or(ConfigError { var, value }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases touch the same process environment, so they run in one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("FOODBRIDGE_DB_PATH");
        env::remove_var("FOODBRIDGE_BIND_ADDR");
        env::remove_var("FOODBRIDGE_LOG_LEVEL");
        env::remove_var("FOODBRIDGE_LOG_JSON");
        env::remove_var("FOODBRIDGE_SEED");

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/foodbridge.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert!(config.seed);

        env::set_var("FOODBRIDGE_BIND_ADDR", "not-an-address");
        let err = Config::from_env().unwrap_err();
        assert_eq!(err.var, "FOODBRIDGE_BIND_ADDR");
        env::remove_var("FOODBRIDGE_BIND_ADDR");
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
