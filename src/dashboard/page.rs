use html_escape::{encode_double_quoted_attribute, encode_text};
use crate::api::models::MetricReport;
use crate::dashboard::chart::bar_chart;
use crate::readability::ReadabilityResult;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; display: flex; color: #222; }
aside { width: 260px; padding: 1.5rem; background: #f0f2f6; min-height: 100vh; }
main { flex: 1; padding: 1.5rem 3rem; max-width: 900px; }
input[type=url] { width: 100%; padding: .4rem; margin: .5rem 0; box-sizing: border-box; }
.badge { padding: .5rem; border-radius: 4px; }
.badge.ok { background: #d4edda; color: #155724; }
.badge.missing, .error { background: #f8d7da; color: #721c24; }
.error { padding: 1rem; border-radius: 4px; }
#loading { display: none; }
form.busy + #loading { display: block; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.metric .value { font-size: 2rem; }
.metric .label { color: #09ab3b; }
.chart { width: 100%; max-width: 640px; }
.chart .bar { fill: #4c72b0; }
.chart .axis { stroke: #555; }
"#;

const INTERPRETATION: &str = "<ul>\
<li>Flesch Reading Ease: Higher scores indicate easier readability (0-100 scale).</li>\
<li>Other indices approximate the U.S. grade level needed to understand the text.</li>\
<li>Aim for a Flesch Reading Ease score above 60 for general audience content.</li>\
<li>For most web content, aim for a grade level between 7-9 for optimal readability.</li>\
</ul>";

/// What the main panel shows below the title.
pub enum Outcome<'a> {
    Empty,
    Report(&'a ReadabilityResult),
    Failed(String),
}

pub struct DashboardPage<'a> {
    pub url: &'a str,
    pub api_key_set: bool,
    pub outcome: Outcome<'a>,
}

impl DashboardPage<'_> {
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(8 * 1024);
        html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
        html.push_str("<title>Content Readability Scorer</title>");
        html.push_str("<style>");
        html.push_str(STYLE);
        html.push_str("</style></head><body>");

        self.render_sidebar(&mut html);

        html.push_str("<main><h1>Content Readability Scorer</h1>");
        match &self.outcome {
            Outcome::Empty => {}
            Outcome::Report(result) => render_report(&mut html, result),
            Outcome::Failed(message) => {
                html.push_str(&format!(r#"<div class="error">{}</div>"#, encode_text(message)));
            }
        }
        html.push_str("</main></body></html>");
        html
    }

    fn render_sidebar(&self, html: &mut String) {
        html.push_str("<aside><h2>User Input</h2>");
        html.push_str(&format!(
            r#"<form method="post" action="/analyze" onsubmit="this.classList.add('busy');this.querySelector('button').disabled=true;">
<label for="url">Enter URL to analyze:</label>
<input type="url" id="url" name="url" required value="{}">
<button type="submit">Analyze Content</button>
</form>
<p id="loading">Analyzing content readability...</p>"#,
            encode_double_quoted_attribute(self.url)
        ));

        html.push_str("<h3>Firecrawl API Status</h3>");
        if self.api_key_set {
            html.push_str(r#"<div class="badge ok">Firecrawl API key is set</div>"#);
        } else {
            html.push_str(r#"<div class="badge missing">Firecrawl API key is not set</div>"#);
        }
        html.push_str("</aside>");
    }
}

fn render_report(html: &mut String, result: &ReadabilityResult) {
    let reports = MetricReport::from_result(result);

    html.push_str("<h2>Readability Analysis Results</h2><div class=\"columns\">");
    // First three metrics in the left column, the rest on the right.
    for column in reports.chunks(3) {
        html.push_str("<div>");
        for report in column {
            html.push_str(&format!(
                r#"<div class="metric"><div>{}</div><div class="value">{:.2}</div><div class="label">{}</div></div>"#,
                report.name, report.score, report.label
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");

    html.push_str("<h2>Additional Metrics</h2>");
    html.push_str(&format!(
        "<p>Average Sentence Length: {:.2} words</p>\
         <p>Average Word Length: {:.2} characters</p>\
         <p>Total Words: {}</p>\
         <p>Total Sentences: {}</p>",
        result.avg_sentence_length, result.avg_word_length, result.total_words, result.total_sentences
    ));

    let bars: Vec<(&str, f64)> = reports.iter().map(|r| (r.name, r.score)).collect();
    html.push_str(&bar_chart("Readability Scores", "Score", &bars));

    html.push_str("<h2>Interpretation</h2>");
    html.push_str(INTERPRETATION);
}
