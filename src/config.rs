use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{AppError, Result};

pub const DEFAULT_FIRECRAWL_API_URL: &str = "https://api.firecrawl.dev";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// `None` leaves the service running; analyses fail until a key is provided.
    pub firecrawl_api_key: Option<String>,
    pub firecrawl_api_url: String,
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let firecrawl_api_key = env::var("FIRECRAWL_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        let firecrawl_api_url = env::var("FIRECRAWL_API_URL")
            .unwrap_or_else(|_| DEFAULT_FIRECRAWL_API_URL.to_string());

        let timeout = env::var("FIRECRAWL_TIMEOUT_SECS").unwrap_or_else(|_| "60".to_string());
        let timeout = timeout
            .parse::<u64>()
            .map_err(|e| AppError::ConfigError(format!("Invalid fetch timeout: {}", e)))?;

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            firecrawl_api_key,
            firecrawl_api_url,
            fetch_timeout: Duration::from_secs(timeout),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.firecrawl_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            firecrawl_api_key: None,
            firecrawl_api_url: DEFAULT_FIRECRAWL_API_URL.to_string(),
            fetch_timeout: Duration::from_secs(60),
        }
    }
}
