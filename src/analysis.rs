use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::extractor::extract_text;
use crate::fetcher::PageFetcher;
use crate::readability::{analyze_text, ReadabilityResult};

/// Runs one analysis: fetch the page, extract its main text, score it.
///
/// Every failure is reported as [`AppError::AnalysisFailed`] for `url`.
pub async fn analyze_url(fetcher: &dyn PageFetcher, url: &str) -> Result<ReadabilityResult> {
    let start = Instant::now();
    info!(url, "analyzing content readability");

    let html = fetcher.fetch_html(url).await.map_err(|e| {
        warn!(url, error = %e, "fetch failed");
        AppError::analysis_failed(url, e)
    })?;
    debug!(url, bytes = html.len(), elapsed = ?start.elapsed(), "fetched html");

    let text = extract_text(&html);
    debug!(url, chars = text.len(), "extracted main content");

    let result = analyze_text(&text);
    info!(
        url,
        words = result.total_words,
        sentences = result.total_sentences,
        elapsed = ?start.elapsed(),
        "analysis complete"
    );

    Ok(result)
}
