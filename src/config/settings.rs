//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_BCRYPT_COST, DEFAULT_SECURE_MODE, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub bcrypt_cost: u32,
    pub secure_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            secure_mode: DEFAULT_SECURE_MODE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unparseable values fall back to their defaults. The bcrypt cost range
    /// is checked later, when the hasher is built from this config.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secure_mode = match env::var("SECURE_MODE") {
            Ok(v) => parse_flag(&v).unwrap_or_else(|| {
                tracing::warn!("SECURE_MODE={:?} is not a boolean, using default", v);
                DEFAULT_SECURE_MODE
            }),
            Err(_) => DEFAULT_SECURE_MODE,
        };

        let bcrypt_cost = match env::var("BCRYPT_COST") {
            Ok(v) => parse_cost(&v).unwrap_or_else(|| {
                tracing::warn!("BCRYPT_COST={:?} is not a number, using default", v);
                DEFAULT_BCRYPT_COST
            }),
            Err(_) => DEFAULT_BCRYPT_COST,
        };

        if !secure_mode {
            tracing::warn!("Starting in insecure mode: new passwords get unsalted SHA-1");
        }

        Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            bcrypt_cost,
            secure_mode,
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_cost(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
