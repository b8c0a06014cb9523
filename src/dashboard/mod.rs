//! Server-rendered dashboard: the request form, results and chart.

pub mod chart;
pub mod page;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use tracing::warn;

use crate::analysis::analyze_url;
use crate::AppState;
use page::{DashboardPage, Outcome};

#[derive(Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub url: String,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(
        DashboardPage {
            url: "",
            api_key_set: state.config.has_api_key(),
            outcome: Outcome::Empty,
        }
        .render(),
    )
}

/// Handles one "Analyze Content" submission.
pub async fn analyze_form(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> (StatusCode, Html<String>) {
    let url = form.url.trim();
    let api_key_set = state.config.has_api_key();

    if url.is_empty() {
        let page = DashboardPage {
            url,
            api_key_set,
            outcome: Outcome::Empty,
        };
        return (StatusCode::OK, Html(page.render()));
    }

    match analyze_url(state.fetcher.as_ref(), url).await {
        Ok(result) => {
            let page = DashboardPage {
                url,
                api_key_set,
                outcome: Outcome::Report(&result),
            };
            (StatusCode::OK, Html(page.render()))
        }
        Err(err) => {
            warn!(url, error = %err, "analysis failed");
            let page = DashboardPage {
                url,
                api_key_set,
                outcome: Outcome::Failed(err.to_string()),
            };
            (err.status_code(), Html(page.render()))
        }
    }
}
