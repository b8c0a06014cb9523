use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interpreter::{interpret, Metric};
use crate::readability::ReadabilityResult;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// One index with its display name and qualitative label.
#[derive(Debug, Clone, Serialize)]
pub struct MetricReport {
    pub metric: Metric,
    pub name: &'static str,
    pub score: f64,
    pub label: &'static str,
}

impl MetricReport {
    pub fn from_result(result: &ReadabilityResult) -> Vec<MetricReport> {
        result
            .scores()
            .into_iter()
            .map(|(metric, score)| MetricReport {
                metric,
                name: metric.name(),
                score,
                label: interpret(score, metric.scale()),
            })
            .collect()
    }
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub url: String,
    pub analyzed_at: DateTime<Utc>,
    pub metrics: Vec<MetricReport>,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub total_words: usize,
    pub total_sentences: usize,
}

impl AnalyzeResponse {
    pub fn new(url: &str, result: &ReadabilityResult) -> Self {
        AnalyzeResponse {
            url: url.to_string(),
            analyzed_at: Utc::now(),
            metrics: MetricReport::from_result(result),
            avg_sentence_length: result.avg_sentence_length,
            avg_word_length: result.avg_word_length,
            total_words: result.total_words,
            total_sentences: result.total_sentences,
        }
    }
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub firecrawl_api_key_set: bool,
}
