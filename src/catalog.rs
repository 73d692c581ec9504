use crate::error::{DonorscoreError, Result};
use serde::Serialize;
use std::collections::HashSet;

/// Highest point value any option may carry. Percent scores are normalized
/// against this, so every question must offer an option worth exactly this.
pub const MAX_POINTS: u8 = 5;
pub const MIN_POINTS: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Approach,
    Listening,
    Relationship,
    Strategy,
}

impl QuestionCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approach => "approach",
            Self::Listening => "listening",
            Self::Relationship => "relationship",
            Self::Strategy => "strategy",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
    pub points: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
    pub category: QuestionCategory,
    pub options: &'static [QuestionOption],
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.value == value)
    }

    pub fn max_points(&self) -> u8 {
        self.options.iter().map(|option| option.points).max().unwrap_or(0)
    }

    pub fn min_points(&self) -> u8 {
        self.options.iter().map(|option| option.points).min().unwrap_or(0)
    }
}

const fn opt(
    value: &'static str,
    label: &'static str,
    detail: &'static str,
    points: u8,
) -> QuestionOption {
    QuestionOption {
        value,
        label,
        detail: Some(detail),
        points,
    }
}

static QUESTIONS: [Question; 8] = [
    Question {
        id: 1,
        prompt: "When you first meet a potential donor, what do you typically start with?",
        detail: Some("Think about your usual opening conversation in a first meeting."),
        category: QuestionCategory::Approach,
        options: &[
            opt(
                "organization",
                "Tell them about your organization and its needs",
                "Start with your mission, programs, and funding requirements",
                1,
            ),
            opt(
                "ask_interests",
                "Ask about their interests and what matters to them",
                "Show curiosity about their passions and values first",
                5,
            ),
            opt(
                "mixed",
                "Brief organization intro, then ask about their interests",
                "Combine both approaches in the conversation",
                3,
            ),
            opt(
                "unsure",
                "I'm not sure - it varies depending on the situation",
                "No consistent approach to opening conversations",
                2,
            ),
        ],
    },
    Question {
        id: 2,
        prompt: "How do you typically respond when someone shares their personal experiences or interests?",
        detail: Some("Consider your natural reaction when donors open up about what they care about."),
        category: QuestionCategory::Listening,
        options: &[
            opt(
                "connect_org",
                "Immediately connect it to how your organization addresses that issue",
                "Quick to make the link to your programs and services",
                2,
            ),
            opt(
                "ask_more",
                "Ask follow-up questions to understand their perspective better",
                "Show genuine curiosity and let them share more",
                5,
            ),
            opt(
                "acknowledge_pivot",
                "Acknowledge their interest, then pivot to your organization",
                "Brief recognition before steering to your agenda",
                3,
            ),
            opt(
                "listen_wait",
                "Listen carefully and wait for natural opportunities to connect",
                "Patient approach, letting connections emerge organically",
                4,
            ),
        ],
    },
    Question {
        id: 3,
        prompt: "What questions do you find most effective in donor conversations?",
        detail: Some("Think about the questions that generate the most meaningful responses."),
        category: QuestionCategory::Strategy,
        options: &[
            opt(
                "giving_capacity",
                "Questions about their giving capacity and preferences",
                "Focus on donation amounts and giving history",
                2,
            ),
            opt(
                "personal_connection",
                "Questions about their personal connection to the cause",
                "What first got you interested in this issue?",
                5,
            ),
            opt(
                "org_programs",
                "Questions about which of your programs interest them most",
                "Present options and ask for their preferences",
                3,
            ),
            opt(
                "impact_vision",
                "Questions about what impact they'd most like to see",
                "What would make the biggest difference in your view?",
                4,
            ),
        ],
    },
    Question {
        id: 4,
        prompt: "How do you handle it when a donor seems hesitant or unengaged?",
        detail: Some("Your approach when conversations aren't flowing naturally."),
        category: QuestionCategory::Relationship,
        options: &[
            opt(
                "push_harder",
                "Present more compelling information about your organization",
                "Share more statistics, stories, and urgent needs",
                1,
            ),
            opt(
                "step_back",
                "Step back and ask what's really important to them",
                "Shift focus entirely to their interests and concerns",
                5,
            ),
            opt(
                "different_angle",
                "Try a different angle or program that might interest them",
                "Present alternative ways they could get involved",
                3,
            ),
            opt(
                "end_gracefully",
                "Acknowledge it might not be the right fit and end gracefully",
                "Respect their position and maintain the relationship",
                4,
            ),
        ],
    },
    Question {
        id: 5,
        prompt: "What do you believe is the most important factor in successful fundraising?",
        detail: Some("Your core philosophy about what makes fundraising work."),
        category: QuestionCategory::Approach,
        options: &[
            opt(
                "compelling_case",
                "Having a compelling case for support",
                "Strong organizational story and clear needs",
                2,
            ),
            opt(
                "genuine_relationships",
                "Building genuine relationships based on shared values",
                "Authentic connections that go beyond transactions",
                5,
            ),
            opt(
                "right_timing",
                "Finding the right timing and approach for each donor",
                "Strategic timing and personalized cultivation",
                4,
            ),
            opt(
                "clear_impact",
                "Demonstrating clear, measurable impact",
                "Concrete results and accountability",
                3,
            ),
        ],
    },
    Question {
        id: 6,
        prompt: "How often do you find yourself talking versus listening in donor meetings?",
        detail: Some("Be honest about the typical balance in your conversations."),
        category: QuestionCategory::Listening,
        options: &[
            opt(
                "mostly_talking",
                "I do most of the talking - sharing information and making the case",
                "60-80% talking, presenting organizational information",
                1,
            ),
            opt(
                "balanced",
                "It's fairly balanced - we both share equally",
                "50/50 split between talking and listening",
                3,
            ),
            opt(
                "mostly_listening",
                "I do more listening - asking questions and learning about them",
                "60-80% listening, focusing on their perspectives",
                5,
            ),
            opt(
                "varies",
                "It varies greatly depending on the donor and situation",
                "No consistent pattern in conversation balance",
                2,
            ),
        ],
    },
    Question {
        id: 7,
        prompt: "When do you typically bring up specific funding needs or donation amounts?",
        detail: Some("The timing of your financial asks in the relationship."),
        category: QuestionCategory::Strategy,
        options: &[
            opt(
                "early_meeting",
                "Early in the first or second meeting",
                "Get the financial conversation started quickly",
                2,
            ),
            opt(
                "after_connection",
                "After establishing a connection to their interests",
                "Wait until you understand what motivates them",
                5,
            ),
            opt(
                "when_asked",
                "When they ask about ways to get involved",
                "Let them initiate the conversation about giving",
                4,
            ),
            opt(
                "formal_proposal",
                "In a formal proposal after several meetings",
                "Follow a structured cultivation timeline",
                3,
            ),
        ],
    },
    Question {
        id: 8,
        prompt: "What's your primary goal for a first meeting with a potential major donor?",
        detail: Some("What you most hope to accomplish in that initial conversation."),
        category: QuestionCategory::Relationship,
        options: &[
            opt(
                "secure_gift",
                "Secure a significant gift or commitment",
                "Make the ask and close the deal",
                1,
            ),
            opt(
                "understand_interests",
                "Understand their interests and motivations",
                "Learn what they care about and why",
                5,
            ),
            opt(
                "present_opportunities",
                "Present various giving opportunities",
                "Show them different ways to get involved",
                2,
            ),
            opt(
                "build_rapport",
                "Build rapport and schedule a follow-up meeting",
                "Establish relationship foundation for future conversations",
                4,
            ),
        ],
    },
];

pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn validate_catalog(catalog: &[Question]) -> Result<()> {
    for question in catalog {
        if question.options.is_empty() {
            return Err(DonorscoreError::InvalidCatalog(format!(
                "question {} has no options",
                question.id
            )));
        }

        let mut seen = HashSet::new();
        for option in question.options {
            if !seen.insert(option.value) {
                return Err(DonorscoreError::InvalidCatalog(format!(
                    "question {} repeats option value '{}'",
                    question.id, option.value
                )));
            }
        }

        if question.min_points() < MIN_POINTS || question.max_points() > MAX_POINTS {
            return Err(DonorscoreError::InvalidCatalog(format!(
                "question {} has points outside {}..={} ({}..={})",
                question.id,
                MIN_POINTS,
                MAX_POINTS,
                question.min_points(),
                question.max_points()
            )));
        }

        if question.max_points() != MAX_POINTS {
            return Err(DonorscoreError::InvalidCatalog(format!(
                "question {} must offer a {}-point option",
                question.id, MAX_POINTS
            )));
        }
    }
    Ok(())
}
