pub mod json;
pub mod md;

use crate::analytics::AnalyticsSummary;
use crate::catalog::Question;
use crate::classify::{classify, CategoryBucket};
use crate::error::DonorscoreError;
use crate::scoring::{compute_score, tally, AnswerSet};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

pub static RECOMMENDATIONS: [Recommendation; 3] = [
    Recommendation {
        title: "Start with Curiosity",
        description: "Begin every donor conversation by asking about their interests and what matters to them personally.",
        tips: &[
            "Ask: 'What first got you interested in this issue?'",
            "Listen for personal stories and experiences",
            "Show genuine curiosity about their perspective",
        ],
    },
    Recommendation {
        title: "Listen More, Talk Less",
        description: "Aim for 70% listening and 30% talking in your donor conversations.",
        tips: &[
            "Ask follow-up questions to understand deeper",
            "Resist the urge to immediately connect to your organization",
            "Let donors share their full story before responding",
        ],
    },
    Recommendation {
        title: "Connect Authentically",
        description: "Make connections between donor interests and your work naturally, not forcefully.",
        tips: &[
            "Wait for organic opportunities to share your work",
            "Focus on shared values rather than organizational needs",
            "Let the connection emerge from their interests",
        ],
    },
];

pub static PRACTICE_QUESTIONS: [&str; 3] = [
    "What first got you interested in this issue?",
    "What do you think would make the biggest difference?",
    "Have you seen any approaches that really impressed you?",
];

pub static BEFORE_NEXT_MEETING: [&str; 3] = [
    "Prepare curiosity-based questions",
    "Set a goal to listen 70% of the time",
    "Research the donor's interests, not just capacity",
];

#[derive(Debug, Clone, Serialize)]
pub struct ResultReport {
    pub score: u8,
    pub category: &'static CategoryBucket,
    pub answered: usize,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_by: Option<String>,
    pub recommendations: &'static [Recommendation],
}

impl ResultReport {
    pub fn build(answers: &AnswerSet, catalog: &[Question], shared_by: Option<&str>) -> Self {
        let score = compute_score(answers, catalog);
        Self {
            score,
            category: classify(score),
            answered: tally(answers, catalog).counted as usize,
            total_questions: catalog.len(),
            shared_by: shared_by.map(str::to_string),
            recommendations: &RECOMMENDATIONS,
        }
    }

    pub fn is_partial(&self) -> bool {
        self.answered < self.total_questions
    }
}

pub fn render_result(report: &ResultReport, format: OutputFormat) -> Result<String, DonorscoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(DonorscoreError::Json),
        OutputFormat::Md => Ok(md::result_markdown(report)),
    }
}

pub fn render_summary(
    summary: &AnalyticsSummary,
    format: OutputFormat,
) -> Result<String, DonorscoreError> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(DonorscoreError::Json),
        OutputFormat::Md => Ok(md::summary_markdown(summary)),
    }
}

pub fn render_catalog(catalog: &[Question], format: OutputFormat) -> Result<String, DonorscoreError> {
    match format {
        OutputFormat::Json => json::to_json(catalog).map_err(DonorscoreError::Json),
        OutputFormat::Md => Ok(md::catalog_markdown(catalog)),
    }
}
