use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, Result};

/// Source of rendered HTML for a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_html(&self, url: &str) -> Result<String>;
}

#[derive(Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: [&'a str; 1],
}

#[derive(Deserialize)]
struct ScrapeResponse {
    #[serde(default)]
    success: bool,
    data: Option<ScrapeData>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct ScrapeData {
    html: Option<String>,
}

/// Client for the Firecrawl `/v1/scrape` endpoint.
pub struct FirecrawlClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl FirecrawlClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(config.fetch_timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(FirecrawlClient {
            client,
            api_key: config.firecrawl_api_key.clone(),
            endpoint: format!("{}/v1/scrape", config.firecrawl_api_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl PageFetcher for FirecrawlClient {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::ConfigError("Firecrawl API key is not set".to_string()))?;

        let body = ScrapeRequest {
            url,
            formats: ["html"],
        };

        debug!(endpoint = %self.endpoint, url, "requesting scrape");
        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(%status, "scraping service rejected credential");
            return Err(AppError::AuthError(format!("scraping service returned {}", status)));
        }

        let text = res.text().await?;
        let parsed: ScrapeResponse = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => {
                return Err(AppError::ParseError(format!("Invalid response from scraping service: {}", e)));
            }
            Err(_) => {
                return Err(AppError::FetchError(format!("scraping service returned {}", status)));
            }
        };

        if !status.is_success() || !parsed.success {
            let reason = parsed.error.unwrap_or_else(|| "unknown error".to_string());
            return Err(AppError::FetchError(format!(
                "scraping service returned {}: {}",
                status, reason
            )));
        }

        Ok(parsed.data.and_then(|d| d.html).unwrap_or_default())
    }
}
