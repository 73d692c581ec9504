use crate::scoring::AnswerSet;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

pub const SAMPLE_AGENT: &str = "Sample Data";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub score: u8,
    pub category_label: String,
    pub answers: AnswerSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_context: Option<ClientContext>,
}

/// Append-only log of completed assessments held for the life of the process.
#[derive(Debug, Default)]
pub struct ResultLog {
    records: Vec<CompletionRecord>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        score: u8,
        category_label: &str,
        answers: &AnswerSet,
        attribution: Option<&str>,
        context: Option<ClientContext>,
    ) -> &CompletionRecord {
        let record = self.push(CompletionRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            score,
            category_label: category_label.to_string(),
            answers: answers.clone(),
            attribution: attribution.map(str::to_string),
            client_context: context,
        });
        info!(id = %record.id, score, "assessment completion tracked");
        record
    }

    /// Adds the demonstration entries, one day apart, when the log is empty.
    pub fn seed_sample_data(&mut self) {
        self.seed_sample_data_at(Utc::now());
    }

    pub fn seed_sample_data_at(&mut self, now: DateTime<Utc>) {
        if !self.is_empty() {
            debug!("result log already populated; skipping sample data");
            return;
        }

        let samples: [(u8, &str, Option<&str>); 6] = [
            (85, "Donor-Centered Champion", Some("John Smith")),
            (72, "Relationship Builder", Some("Sarah Johnson")),
            (45, "Transitioning Fundraiser", None),
            (91, "Donor-Centered Champion", Some("John Smith")),
            (38, "Organization-Centered Approach", None),
            (67, "Relationship Builder", Some("Mike Davis")),
        ];

        for (days_ago, (score, category, shared_by)) in (0i64..).zip(samples) {
            self.push(CompletionRecord {
                id: Uuid::new_v4(),
                timestamp: now - Duration::days(days_ago),
                score,
                category_label: category.to_string(),
                answers: AnswerSet::new(),
                attribution: shared_by.map(str::to_string),
                client_context: Some(ClientContext {
                    agent: Some(SAMPLE_AGENT.to_string()),
                    referrer: None,
                }),
            });
        }
        debug!(count = self.len(), "seeded sample results");
    }

    pub fn records(&self) -> &[CompletionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn push(&mut self, record: CompletionRecord) -> &CompletionRecord {
        self.records.push(record);
        match self.records.last() {
            Some(stored) => stored,
            None => unreachable!("record was just pushed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn record_appends_with_unique_ids() {
        let mut log = ResultLog::new();
        let answers = AnswerSet::from([(0, "ask_interests".to_string())]);
        for _ in 0..5 {
            log.record(100, "Donor-Centered Champion", &answers, None, None);
        }

        assert_eq!(log.len(), 5);
        let ids = log
            .records()
            .iter()
            .map(|record| record.id)
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn record_returns_the_stored_snapshot() {
        let mut log = ResultLog::new();
        let mut answers = AnswerSet::from([(1, "ask_more".to_string())]);
        let context = ClientContext {
            agent: Some("cli".to_string()),
            referrer: Some("https://example.org".to_string()),
        };
        let id = log
            .record(
                100,
                "Donor-Centered Champion",
                &answers,
                Some("Jane Doe"),
                Some(context.clone()),
            )
            .id;

        answers.insert(2, "org_programs".to_string());
        let stored = &log.records()[0];
        assert_eq!(stored.id, id);
        assert_eq!(stored.answers.len(), 1);
        assert_eq!(stored.attribution.as_deref(), Some("Jane Doe"));
        assert_eq!(stored.client_context.as_ref(), Some(&context));
    }

    #[test]
    fn record_returns_the_latest_entry() {
        let mut log = ResultLog::new();
        log.seed_sample_data();
        let id = log
            .record(50, "Transitioning Fundraiser", &AnswerSet::new(), None, None)
            .id;

        assert_eq!(log.len(), 7);
        assert_eq!(log.records().last().map(|record| record.id), Some(id));
        assert_eq!(log.records()[6].score, 50);
    }

    #[test]
    fn seed_adds_six_entries_once() {
        let now = Utc::now();
        let mut log = ResultLog::new();
        log.seed_sample_data_at(now);
        log.seed_sample_data_at(now);

        assert_eq!(log.len(), 6);
        assert_eq!(log.records()[0].timestamp, now);
        assert_eq!(log.records()[5].timestamp, now - Duration::days(5));
        assert!(log.records().iter().all(|record| record.answers.is_empty()));
    }

    #[test]
    fn seed_is_skipped_when_log_has_entries() {
        let mut log = ResultLog::new();
        log.record(50, "Transitioning Fundraiser", &AnswerSet::new(), None, None);
        log.seed_sample_data();
        assert_eq!(log.len(), 1);
    }
}
