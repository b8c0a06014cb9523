use async_trait::async_trait;
use readability_scorer::error::{AppError, Result};
use readability_scorer::fetcher::PageFetcher;

/// Serves the same HTML for every URL.
pub struct StaticPage(pub &'static str);

#[async_trait]
impl PageFetcher for StaticPage {
    async fn fetch_html(&self, _url: &str) -> Result<String> {
        Ok(self.0.to_string())
    }
}

/// Fails every fetch like an unreachable host.
pub struct Unreachable;

#[async_trait]
impl PageFetcher for Unreachable {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        Err(AppError::FetchError(format!("error sending request for url ({url})")))
    }
}

pub const ARTICLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Sample</title><script>var tracking = "ignored.";</script></head>
<body>
  <nav>Home. About. Contact.</nav>
  <main>
    <h1>This is easy.</h1>
    <p>Short words here.</p>
  </main>
  <footer>Copyright notice.</footer>
</body>
</html>"#;
