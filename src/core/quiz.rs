use std::collections::HashMap;
use crate::core::scoring::round_half_up;
use crate::models::{
    Criterion, DetectedCriterion, Importance, MatcherResult, QuizOption, QuizQuestion,
    ScoringPreferences,
};
use crate::models::domain::DEFAULT_WEIGHT;

use Criterion::*;

static QUIZ: [QuizQuestion; 7] = [
    QuizQuestion {
        id: "budget",
        question: "What's your monthly budget for housing?",
        options: &[
            QuizOption { label: "Tight, every penny counts", weights: &[(Affordability, 100)] },
            QuizOption { label: "Moderate, I want good value", weights: &[(Affordability, 70)] },
            QuizOption { label: "Comfortable", weights: &[(Affordability, 40)] },
            QuizOption { label: "Money is no object", weights: &[(Affordability, 10)] },
        ],
    },
    QuizQuestion {
        id: "safety",
        question: "How important is feeling safe walking home late?",
        options: &[
            QuizOption { label: "Non-negotiable", weights: &[(Safety, 100)] },
            QuizOption { label: "Important but not everything", weights: &[(Safety, 70)] },
            QuizOption { label: "I'm street smart", weights: &[(Safety, 30)] },
        ],
    },
    QuizQuestion {
        id: "commute",
        question: "How will you mostly get around?",
        options: &[
            QuizOption { label: "Public transport every day", weights: &[(Transit, 100)] },
            QuizOption { label: "A mix of transit and walking", weights: &[(Transit, 60)] },
            QuizOption { label: "I drive or work from home", weights: &[(Transit, 20)] },
        ],
    },
    QuizQuestion {
        id: "weekend",
        question: "What does your ideal Saturday night look like?",
        options: &[
            QuizOption { label: "Out until the early hours", weights: &[(Nightlife, 100), (Vibe, 90)] },
            QuizOption { label: "Dinner and drinks with friends", weights: &[(Dining, 90), (Nightlife, 50)] },
            QuizOption { label: "A quiet night in", weights: &[(Nightlife, 10), (Vibe, 10)] },
        ],
    },
    QuizQuestion {
        id: "household",
        question: "Who are you moving with?",
        options: &[
            QuizOption { label: "Family with kids", weights: &[(FamilyFriendly, 100), (Safety, 80), (GreenSpace, 70)] },
            QuizOption { label: "A partner", weights: &[(FamilyFriendly, 40)] },
            QuizOption { label: "Just me or flatmates", weights: &[(FamilyFriendly, 10), (Nightlife, 70)] },
        ],
    },
    QuizQuestion {
        id: "outdoors",
        question: "How much do you need parks and green space nearby?",
        options: &[
            QuizOption { label: "I need a park on my doorstep", weights: &[(GreenSpace, 100)] },
            QuizOption { label: "Nice to have", weights: &[(GreenSpace, 60)] },
            QuizOption { label: "I'm a city person", weights: &[(GreenSpace, 20)] },
        ],
    },
    QuizQuestion {
        id: "food",
        question: "How big a part of your life is eating out?",
        options: &[
            QuizOption { label: "I'm a foodie, restaurants matter", weights: &[(Dining, 100)] },
            QuizOption { label: "A decent local spot is enough", weights: &[(Dining, 60)] },
            QuizOption { label: "I mostly cook at home", weights: &[(Dining, 20)] },
        ],
    },
];

/// Fixed quiz catalog
pub fn quiz_questions() -> &'static [QuizQuestion] {
    &QUIZ
}

/// Option at `index` of a question, `None` for negative or out-of-range indices
fn option_at(question: &'static QuizQuestion, index: i64) -> Option<&'static QuizOption> {
    usize::try_from(index).ok().and_then(|i| question.options.get(i))
}

/// Selected option for a question id, `None` for unknown ids or indices
fn selected_option(question_id: &str, option_index: i64) -> Option<&'static QuizOption> {
    QUIZ.iter()
        .find(|q| q.id == question_id)
        .and_then(|q| option_at(q, option_index))
}

/// Resolve quiz answers into a preference vector
///
/// Each touched criterion becomes `round((50 + sum) / (count + 1))`, so the default
/// still counts as one vote. Untouched criteria keep 50. Unknown question ids and
/// out-of-range option indices are skipped.
pub fn calculate_preferences_from_quiz(answers: &HashMap<String, i64>) -> ScoringPreferences {
    let mut sums = [0u32; 8];
    let mut counts = [0u32; 8];

    for (question_id, option_index) in answers {
        let Some(option) = selected_option(question_id, *option_index) else {
            tracing::debug!("Skipping unknown quiz answer {}={}", question_id, option_index);
            continue;
        };
        for (criterion, weight) in option.weights {
            let slot = *criterion as usize;
            sums[slot] += *weight as u32;
            counts[slot] += 1;
        }
    }

    let mut preferences = ScoringPreferences::default();
    for criterion in Criterion::ALL {
        let slot = criterion as usize;
        if counts[slot] == 0 {
            continue;
        }
        let total = (DEFAULT_WEIGHT as u32 + sums[slot]) as f64;
        let value = round_half_up(total / (counts[slot] + 1) as f64);
        preferences.set(criterion, value as i64);
    }

    preferences
}

/// Quiz completion as a `MatcherResult`, so quiz and text input share one results shape
pub fn quiz_result(answers: &HashMap<String, i64>) -> MatcherResult {
    let preferences = calculate_preferences_from_quiz(answers);

    let mut labels: HashMap<Criterion, Vec<String>> = HashMap::new();
    let mut answered = 0usize;

    // Walk the catalog rather than the map so label order is stable
    for question in QUIZ.iter() {
        let Some(option) = answers
            .get(question.id)
            .and_then(|idx| option_at(question, *idx))
        else {
            continue;
        };
        answered += 1;
        for (criterion, _) in option.weights {
            labels.entry(*criterion).or_default().push(option.label.to_string());
        }
    }

    let detected_criteria = Criterion::ALL
        .into_iter()
        .filter_map(|criterion| {
            let matched_keywords = labels.remove(&criterion)?;
            let weight = preferences.get(criterion);
            let importance = if weight >= 70 {
                Importance::High
            } else if weight <= 30 {
                Importance::Low
            } else {
                Importance::Neutral
            };
            Some(DetectedCriterion { criterion, importance, matched_keywords })
        })
        .collect();

    MatcherResult {
        preferences,
        detected_criteria,
        confidence: answered as f64 / QUIZ.len() as f64,
    }
}
