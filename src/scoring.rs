use crate::catalog::{Question, MAX_POINTS};
use std::collections::BTreeMap;

/// Chosen option value keyed by 0-based catalog position. Partial sets are
/// allowed; serialized as a JSON object with stringified indices.
pub type AnswerSet = BTreeMap<usize, String>;

/// Rounds half away from zero. All percentages and means go through here.
pub fn round_percent(value: f64) -> i64 {
    value.round() as i64
}

/// Clamps an arbitrary integer into the 0..=100 percent domain.
pub fn clamp_score(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub total_points: u32,
    pub counted: u32,
}

/// Sums points for every answer that resolves to a catalog option.
/// Out-of-range indices and unknown values are skipped.
pub fn tally(answers: &AnswerSet, catalog: &[Question]) -> Tally {
    answers
        .iter()
        .filter_map(|(index, value)| catalog.get(*index)?.option(value))
        .fold(Tally::default(), |acc, option| Tally {
            total_points: acc.total_points + u32::from(option.points),
            counted: acc.counted + 1,
        })
}

pub fn compute_score(answers: &AnswerSet, catalog: &[Question]) -> u8 {
    let tally = tally(answers, catalog);
    if tally.counted == 0 {
        return 0;
    }
    let max = f64::from(tally.counted * u32::from(MAX_POINTS));
    clamp_score(round_percent(100.0 * f64::from(tally.total_points) / max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::questions;

    fn answers_with(pick: impl Fn(&Question) -> &'static str) -> AnswerSet {
        questions()
            .iter()
            .enumerate()
            .map(|(index, question)| (index, pick(question).to_string()))
            .collect()
    }

    #[test]
    fn all_top_options_score_one_hundred() {
        let answers = answers_with(|question| {
            question
                .options
                .iter()
                .max_by_key(|option| option.points)
                .map(|option| option.value)
                .expect("question has options")
        });
        assert_eq!(compute_score(&answers, questions()), 100);
    }

    #[test]
    fn all_one_point_options_score_twenty() {
        let one_point = |question: &Question| {
            question
                .options
                .iter()
                .find(|option| option.points == 1)
                .map(|option| option.value)
        };
        let catalog = questions()
            .iter()
            .filter(|question| one_point(*question).is_some())
            .cloned()
            .collect::<Vec<_>>();
        assert!(!catalog.is_empty());
        let answers = catalog
            .iter()
            .enumerate()
            .map(|(index, question)| {
                (
                    index,
                    one_point(question).expect("filtered above").to_string(),
                )
            })
            .collect::<AnswerSet>();
        assert_eq!(compute_score(&answers, &catalog), 20);
    }

    #[test]
    fn empty_answers_score_zero() {
        assert_eq!(compute_score(&AnswerSet::new(), questions()), 0);
        assert_eq!(compute_score(&AnswerSet::new(), &[]), 0);
    }

    #[test]
    fn two_question_slice_scores_full_marks() {
        let answers = AnswerSet::from([
            (0, "ask_interests".to_string()),
            (1, "ask_more".to_string()),
        ]);
        assert_eq!(compute_score(&answers, &questions()[..2]), 100);
    }

    #[test]
    fn unresolvable_entries_are_skipped() {
        let answers = AnswerSet::from([
            (0, "ask_interests".to_string()),
            (1, "not_an_option".to_string()),
            (42, "ask_more".to_string()),
        ]);
        assert_eq!(
            tally(&answers, questions()),
            Tally {
                total_points: 5,
                counted: 1
            }
        );
        assert_eq!(compute_score(&answers, questions()), 100);
    }

    #[test]
    fn half_percent_rounds_away_from_zero() {
        // 5 + 5 + 5 + 1 + 2 + 1 + 2 + 2 = 23 of 40 -> 57.5%
        let answers = AnswerSet::from([
            (0, "ask_interests".to_string()),
            (1, "ask_more".to_string()),
            (2, "personal_connection".to_string()),
            (3, "push_harder".to_string()),
            (4, "compelling_case".to_string()),
            (5, "mostly_talking".to_string()),
            (6, "early_meeting".to_string()),
            (7, "present_opportunities".to_string()),
        ]);
        assert_eq!(tally(&answers, questions()).total_points, 23);
        assert_eq!(compute_score(&answers, questions()), 58);
        assert_eq!(round_percent(62.5), 63);
        assert_eq!(round_percent(61.49), 61);
    }

    #[test]
    fn clamp_score_bounds_input() {
        assert_eq!(clamp_score(-4), 0);
        assert_eq!(clamp_score(140), 100);
        assert_eq!(clamp_score(73), 73);
    }
}
