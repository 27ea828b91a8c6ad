//! Application configuration management.
//!
//! Configuration is loaded from environment variables and deserialized
//! into a type-safe struct with the `envy` crate.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): SQLite connection string, e.g.
///   `sqlite:kvss.db`
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

fn default_port() -> u16 {
    8000
}

impl Config {
    /// Load configuration from environment variables, reading a `.env`
    /// file first if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a value cannot be
    /// parsed into its expected type.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>()
    }
}
