// src/config/mod.rs
// All values come from the .env file / environment, with sensible defaults

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct WardrobeConfig {
    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Authentication Service
    pub auth_base_url: String,
    pub auth_timeout: u64,

    // ── Logging Configuration
    pub log_level: String,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl WardrobeConfig {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            host: env_var_or("WARDROBE_HOST", "0.0.0.0".to_string()),
            port: env_var_or("WARDROBE_PORT", 3000),
            auth_base_url: env_var_or(
                "WARDROBE_AUTH_BASE_URL",
                "http://localhost:4000".to_string(),
            ),
            auth_timeout: env_var_or("WARDROBE_AUTH_TIMEOUT", 10),
            log_level: env_var_or("WARDROBE_LOG_LEVEL", "info".to_string()),
        }
    }

    // --- Convenience Methods for Common Operations ---

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Full URL of the authentication service's session endpoint
    pub fn session_endpoint(&self) -> String {
        format!("{}/session", self.auth_base_url)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<WardrobeConfig> = Lazy::new(WardrobeConfig::from_env);
