use serde::Serialize;

/// The two threshold tables used to label a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// 0-100, higher is easier.
    Ease,
    /// U.S. school grade, higher is harder.
    GradeLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    FleschReadingEase,
    FleschKincaidGrade,
    SmogIndex,
    ColemanLiauIndex,
    AutomatedReadabilityIndex,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::FleschReadingEase,
        Metric::FleschKincaidGrade,
        Metric::SmogIndex,
        Metric::ColemanLiauIndex,
        Metric::AutomatedReadabilityIndex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::FleschReadingEase => "Flesch Reading Ease",
            Metric::FleschKincaidGrade => "Flesch-Kincaid Grade",
            Metric::SmogIndex => "SMOG Index",
            Metric::ColemanLiauIndex => "Coleman-Liau Index",
            Metric::AutomatedReadabilityIndex => "Automated Readability Index",
        }
    }

    pub fn scale(self) -> Scale {
        match self {
            Metric::FleschReadingEase => Scale::Ease,
            _ => Scale::GradeLevel,
        }
    }
}

pub fn interpret(score: f64, scale: Scale) -> &'static str {
    match scale {
        Scale::Ease => {
            if score >= 90.0 {
                "Very Easy"
            } else if score >= 80.0 {
                "Easy"
            } else if score >= 70.0 {
                "Fairly Easy"
            } else if score >= 60.0 {
                "Standard"
            } else if score >= 50.0 {
                "Fairly Difficult"
            } else if score >= 30.0 {
                "Difficult"
            } else {
                "Very Difficult"
            }
        }
        Scale::GradeLevel => {
            if score <= 6.0 {
                "Easy"
            } else if score <= 10.0 {
                "Average"
            } else if score <= 14.0 {
                "Difficult"
            } else {
                "Very Difficult"
            }
        }
    }
}
