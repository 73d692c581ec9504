use crate::recorder::CompletionRecord;
use crate::scoring::round_percent;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

pub const DIRECT_ACCESS: &str = "Direct Access";
pub const RECENT_LIMIT: usize = 10;

/// Histogram bands. These are closed integer ranges and are kept apart from
/// the classifier thresholds even though the edges line up today.
pub static SCORE_BANDS: [(RangeInclusive<u8>, &str); 4] = [
    (80..=100, "80-100%"),
    (60..=79, "60-79%"),
    (40..=59, "40-59%"),
    (0..=39, "0-39%"),
];

pub fn score_band(score: u8) -> &'static str {
    SCORE_BANDS
        .iter()
        .find(|(range, _)| range.contains(&score))
        .map(|(_, label)| *label)
        // scores above 100 only reach here when a caller skipped clamping
        .unwrap_or(SCORE_BANDS[0].1)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub total_count: usize,
    pub average_score: i64,
    pub score_band_counts: BTreeMap<String, usize>,
    pub category_counts: BTreeMap<String, usize>,
    pub attribution_counts: BTreeMap<String, usize>,
    pub recent: Vec<CompletionRecord>,
}

impl AnalyticsSummary {
    /// Share of completions per category label, rounded to whole percents.
    pub fn category_shares(&self) -> BTreeMap<String, i64> {
        if self.total_count == 0 {
            return BTreeMap::new();
        }
        self.category_counts
            .iter()
            .map(|(label, count)| {
                let share = 100.0 * *count as f64 / self.total_count as f64;
                (label.clone(), round_percent(share))
            })
            .collect()
    }
}

pub fn summarize(log: &[CompletionRecord]) -> AnalyticsSummary {
    if log.is_empty() {
        return AnalyticsSummary::default();
    }

    let total_count = log.len();
    let score_sum: u64 = log.iter().map(|record| u64::from(record.score)).sum();
    let average_score = round_percent(score_sum as f64 / total_count as f64);

    let mut score_band_counts = BTreeMap::new();
    let mut category_counts = BTreeMap::new();
    let mut attribution_counts = BTreeMap::new();
    for record in log {
        *score_band_counts
            .entry(score_band(record.score).to_string())
            .or_insert(0) += 1;
        *category_counts
            .entry(record.category_label.clone())
            .or_insert(0) += 1;
        let attribution = record.attribution.as_deref().unwrap_or(DIRECT_ACCESS);
        *attribution_counts
            .entry(attribution.to_string())
            .or_insert(0) += 1;
    }

    let mut recent = log.to_vec();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent.truncate(RECENT_LIMIT);

    AnalyticsSummary {
        total_count,
        average_score,
        score_band_counts,
        category_counts,
        attribution_counts,
        recent,
    }
}
