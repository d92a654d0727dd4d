//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `CONVERSION_RATE` (required): minor currency units (e.g. USD cents) needed to obtain 1 credit
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    /// How many minor currency units buy one credit. Fixed for the lifetime
    /// of the process; changing it requires a restart.
    pub conversion_rate: u64,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL, CONVERSION_RATE)
    /// - Environment variable values cannot be parsed into expected types
    /// - CONVERSION_RATE is zero (the conversion would divide by it)
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: database_url -> DATABASE_URL
        let config = envy::from_env::<Config>()?;

        // A zero rate can never be divided by; reject it here so the credit
        // service never has to check it per request.
        if config.conversion_rate == 0 {
            return Err(envy::Error::Custom(
                "CONVERSION_RATE must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }
}
