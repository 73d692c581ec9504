use crate::analytics::{AnalyticsSummary, SCORE_BANDS};
use crate::catalog::Question;
use crate::report::{ResultReport, BEFORE_NEXT_MEETING, PRACTICE_QUESTIONS};

pub fn result_markdown(report: &ResultReport) -> String {
    let mut output = String::new();
    output.push_str("# Your Assessment Results\n\n");
    output.push_str(&format!(
        "Based on your responses to {} of {} questions.\n\n",
        report.answered, report.total_questions
    ));
    output.push_str(&format!("Score: {}%\n\n", report.score));
    output.push_str(&format!("## {}\n\n", report.category.label));
    output.push_str(&format!("{}\n\n", report.category.description));
    if let Some(shared_by) = &report.shared_by {
        output.push_str(&format!("Shared by: {shared_by}\n\n"));
    }

    output.push_str("## Recommendations\n\n");
    for recommendation in report.recommendations {
        output.push_str(&format!("### {}\n\n", recommendation.title));
        output.push_str(&format!("{}\n\n", recommendation.description));
        for tip in recommendation.tips {
            output.push_str(&format!("- {tip}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Next Steps\n\n");
    output.push_str("Practice questions:\n\n");
    for question in PRACTICE_QUESTIONS {
        output.push_str(&format!("- \"{question}\"\n"));
    }
    output.push_str("\nBefore your next meeting:\n\n");
    for step in BEFORE_NEXT_MEETING {
        output.push_str(&format!("- {step}\n"));
    }

    output
}

pub fn summary_markdown(summary: &AnalyticsSummary) -> String {
    let mut output = String::new();
    output.push_str("# Assessment Analytics\n\n");
    output.push_str(&format!("Total completions: {}\n", summary.total_count));
    output.push_str(&format!("Average score: {}%\n\n", summary.average_score));

    output.push_str("## Score Distribution\n\n");
    if summary.score_band_counts.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for (_, label) in &SCORE_BANDS {
            let count = summary.score_band_counts.get(*label).copied().unwrap_or(0);
            output.push_str(&format!("- {label}: {count}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Categories\n\n");
    if summary.category_counts.is_empty() {
        output.push_str("- none\n\n");
    } else {
        let shares = summary.category_shares();
        for (label, count) in &summary.category_counts {
            let share = shares.get(label).copied().unwrap_or(0);
            output.push_str(&format!("- {label}: {count} ({share}%)\n"));
        }
        output.push('\n');
    }

    output.push_str("## Completions by Sharer\n\n");
    if summary.attribution_counts.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for (sharer, count) in &summary.attribution_counts {
            output.push_str(&format!("- {sharer}: {count}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Recent Completions\n\n");
    if summary.recent.is_empty() {
        output.push_str("- none\n");
    } else {
        for record in &summary.recent {
            output.push_str(&format!(
                "- {} | {}% | {} | {}\n",
                record.timestamp.format("%Y-%m-%d %H:%M"),
                record.score,
                record.category_label,
                record
                    .attribution
                    .as_deref()
                    .unwrap_or(crate::analytics::DIRECT_ACCESS)
            ));
        }
    }

    output
}

pub fn catalog_markdown(catalog: &[Question]) -> String {
    let mut output = String::new();
    output.push_str("# Donor-Centered Fundraising Assessment\n\n");
    for (index, question) in catalog.iter().enumerate() {
        output.push_str(&format!(
            "## [{}] {} ({})\n\n",
            index,
            question.prompt,
            question.category.as_str()
        ));
        if let Some(detail) = question.detail {
            output.push_str(&format!("{detail}\n\n"));
        }
        for option in question.options {
            output.push_str(&format!("- `{}`: {}\n", option.value, option.label));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::summarize;
    use crate::catalog::questions;
    use crate::recorder::ResultLog;
    use crate::scoring::AnswerSet;

    #[test]
    fn result_markdown_contains_sections() {
        let answers = AnswerSet::from([(0, "organization".to_string())]);
        let report = ResultReport::build(&answers, questions(), Some("Mike Davis"));

        let rendered = result_markdown(&report);
        assert!(rendered.contains("Score: 20%"));
        assert!(rendered.contains("## Organization-Centered Approach"));
        assert!(rendered.contains("Shared by: Mike Davis"));
        assert!(rendered.contains("### Listen More, Talk Less"));
        assert!(rendered.contains("## Next Steps"));
    }

    #[test]
    fn summary_markdown_lists_bands_in_descending_order() {
        let mut log = ResultLog::new();
        log.seed_sample_data();
        let rendered = summary_markdown(&summarize(log.records()));

        assert!(rendered.contains("Average score: 66%"));
        let top = rendered.find("- 80-100%: 2").expect("top band listed");
        let bottom = rendered.find("- 0-39%: 1").expect("bottom band listed");
        assert!(top < bottom);
        assert!(rendered.contains("- Relationship Builder: 2 (33%)"));
        assert!(rendered.contains("- Direct Access: 2"));
    }

    #[test]
    fn summary_markdown_handles_empty_log() {
        let rendered = summary_markdown(&summarize(&[]));
        assert!(rendered.contains("Total completions: 0"));
        assert!(rendered.contains("## Recent Completions\n\n- none"));
    }

    #[test]
    fn catalog_markdown_lists_option_values() {
        let rendered = catalog_markdown(questions());
        assert!(rendered.contains("## [0] When you first meet a potential donor"));
        assert!(rendered.contains("- `ask_interests`:"));
        assert!(rendered.contains("(relationship)"));
    }
}
