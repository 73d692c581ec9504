use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryBucket {
    pub min_score_inclusive: u8,
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub style_tag: &'static str,
}

/// Evaluated top-down; the last row has a zero floor so every score matches.
pub static CATEGORY_BUCKETS: [CategoryBucket; 4] = [
    CategoryBucket {
        min_score_inclusive: 80,
        key: "excellent",
        label: "Donor-Centered Champion",
        description: "You have mastered the art of donor-centered fundraising. You consistently start with curiosity about your donors and build genuine relationships.",
        style_tag: "text-green-600",
    },
    CategoryBucket {
        min_score_inclusive: 60,
        key: "good",
        label: "Relationship Builder",
        description: "You understand the importance of donor relationships and often put their interests first. With some refinement, you can become even more effective.",
        style_tag: "text-blue-600",
    },
    CategoryBucket {
        min_score_inclusive: 40,
        key: "developing",
        label: "Transitioning Fundraiser",
        description: "You are beginning to shift from organization-centered to donor-centered approaches. Focus on asking more questions and listening more deeply.",
        style_tag: "text-yellow-600",
    },
    CategoryBucket {
        min_score_inclusive: 0,
        key: "needs_improvement",
        label: "Organization-Centered Approach",
        description: "You tend to lead with your organization's needs rather than donor interests. Learning to start with curiosity will transform your fundraising success.",
        style_tag: "text-red-600",
    },
];

/// Maps a percent score to its bucket.
///
/// Callers must clamp to `0..=100` first (see [`crate::scoring::clamp_score`]);
/// anything above 100 lands in the top bucket.
pub fn classify(score: u8) -> &'static CategoryBucket {
    CATEGORY_BUCKETS
        .iter()
        .find(|bucket| score >= bucket.min_score_inclusive)
        .unwrap_or(&CATEGORY_BUCKETS[CATEGORY_BUCKETS.len() - 1])
}
