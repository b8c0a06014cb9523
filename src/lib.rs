pub mod analysis;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod interpreter;
pub mod readability;
pub mod tokenizer;

use std::sync::Arc;

use config::Config;
use error::Result;
use fetcher::{FirecrawlClient, PageFetcher};

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: Arc<dyn PageFetcher>,
}

impl AppState {
    /// Builds state backed by the Firecrawl scraping service.
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = FirecrawlClient::new(&config)?;
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: impl PageFetcher + 'static) -> Self {
        AppState {
            config: Arc::new(config),
            fetcher: Arc::new(fetcher),
        }
    }
}
