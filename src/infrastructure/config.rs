//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Remote character store endpoint; saved with POST, loaded with GET
    pub character_store_url: String,
    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            character_store_url: env::var("CHARACTER_STORE_URL").unwrap_or_else(|_| {
                "https://recruiting.verylongdomaintotestwith.ca/api/charbldr/character".to_string()
            }),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}
