mod common;

use common::{StaticPage, Unreachable, ARTICLE_PAGE};
use readability_scorer::analysis::analyze_url;
use readability_scorer::error::AppError;

#[tokio::test]
async fn analyzes_only_the_main_region() {
    let result = analyze_url(&StaticPage(ARTICLE_PAGE), "https://example.com/post")
        .await
        .unwrap();

    assert_eq!(result.total_sentences, 2);
    assert_eq!(result.total_words, 6);
    assert!((result.avg_sentence_length - 3.0).abs() < 1e-9);
    assert!((result.avg_word_length - 4.0).abs() < 1e-9);
}

#[tokio::test]
async fn page_without_content_scores_zero() {
    let result = analyze_url(&StaticPage("<div>no container</div>"), "https://example.com")
        .await
        .unwrap();

    assert_eq!(result.total_words, 0);
    assert_eq!(result.total_sentences, 0);
    for (_, score) in result.scores() {
        assert_eq!(score, 0.0);
    }
}

#[tokio::test]
async fn fetch_failure_names_the_url() {
    let err = analyze_url(&Unreachable, "https://unreachable.invalid/page")
        .await
        .unwrap_err();

    match &err {
        AppError::AnalysisFailed { url, source } => {
            assert_eq!(url, "https://unreachable.invalid/page");
            assert!(matches!(**source, AppError::FetchError(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("Error analyzing https://unreachable.invalid/page: "));
}
