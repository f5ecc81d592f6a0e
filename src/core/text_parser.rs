//! Keyword heuristics that turn a free-text description into preference weights.
//!
//! Matching is plain substring containment on the lower-cased input. "cheaper" matches
//! "cheap" and "parking" matches "park"; outputs are expected to stay identical for the
//! same text, so keep it that way rather than switching to word boundaries.

use crate::models::{Criterion, DetectedCriterion, Importance, MatcherResult, ScoringPreferences};

/// Characters after a low-importance phrase that may mention the criterion
const LOW_IMPORTANCE_WINDOW: usize = 50;
/// Characters on either side of a keyword searched for an importance booster
const HIGH_IMPORTANCE_WINDOW: usize = 40;

const LOW_IMPORTANCE_WEIGHT: u8 = 10;
const HIGH_IMPORTANCE_BASE: u8 = 100;
const NEUTRAL_BASE: u8 = 80;
const PER_KEYWORD_BONUS: u8 = 5;
const NEGATIVE_BASE: u8 = 25;
const PER_NEGATIVE_PENALTY: u8 = 5;

/// Keyword hits needed for full confidence
const FULL_CONFIDENCE_HITS: f64 = 3.0;

struct KeywordSet {
    criterion: Criterion,
    positive: &'static [&'static str],
    negative: &'static [&'static str],
}

static KEYWORDS: [KeywordSet; 8] = [
    KeywordSet {
        criterion: Criterion::Safety,
        positive: &["safe", "safety", "secure", "low crime", "well lit", "police"],
        negative: &["edgy", "gritty", "rough around the edges"],
    },
    KeywordSet {
        criterion: Criterion::Affordability,
        positive: &[
            "cheap", "affordable", "budget", "inexpensive", "low rent", "value for money",
            "save money", "not expensive",
        ],
        negative: &["luxury", "upscale", "expensive", "high-end", "posh", "money is no object"],
    },
    KeywordSet {
        criterion: Criterion::Transit,
        positive: &[
            "transit", "tube", "subway", "train", "metro", "public transport", "commute",
            "station", "buses", "transport links",
        ],
        negative: &["drive", "driving", "parking", "work from home"],
    },
    KeywordSet {
        criterion: Criterion::GreenSpace,
        positive: &["park", "green", "nature", "outdoor", "garden", "trees", "heath", "running"],
        negative: &["concrete", "urban jungle"],
    },
    KeywordSet {
        criterion: Criterion::Nightlife,
        positive: &[
            "nightlife", "bars", "pubs", "clubs", "party", "going out", "night out",
            "live music", "late night",
        ],
        negative: &["quiet", "peaceful", "calm", "early nights", "sleep"],
    },
    KeywordSet {
        criterion: Criterion::FamilyFriendly,
        positive: &["family", "kids", "children", "school", "playground", "child"],
        negative: &["child-free", "childfree", "singles", "young professionals"],
    },
    KeywordSet {
        criterion: Criterion::Dining,
        positive: &[
            "restaurant", "food", "dining", "eating out", "cafe", "coffee", "brunch",
            "foodie", "cuisine",
        ],
        negative: &["cook at home", "cooking at home"],
    },
    KeywordSet {
        criterion: Criterion::Vibe,
        positive: &["vibrant", "lively", "buzzing", "happening", "energetic", "trendy", "exciting"],
        negative: &["quiet", "sleepy", "relaxed", "residential", "chill", "slow pace"],
    },
];

static LOW_IMPORTANCE_PHRASES: &[&str] = &[
    "don't care", "dont care", "do not care", "not important", "doesn't matter",
    "doesnt matter", "not bothered", "not a priority", "no preference", "skip",
    "less important", "indifferent",
];

static HIGH_IMPORTANCE_PHRASES: &[&str] = &[
    "must have", "must", "need", "essential", "important", "priority", "crucial",
    "really want", "top of my list", "non-negotiable",
];

/// Byte offset of the `n`th char, or the end of the text past the last char
fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(i, _)| i)
}

/// Chars `[start, end)` of `text`; window sizes count chars, not bytes
fn window(text: &str, start: usize, end: usize) -> &str {
    let s = byte_offset(text, start);
    let e = byte_offset(text, end.max(start));
    &text[s..e]
}

/// Char position of the first occurrence of `needle`
fn find_char(text: &str, needle: &str) -> Option<usize> {
    text.find(needle).map(|idx| text[..idx].chars().count())
}

fn matched<'a>(text: &str, keywords: &'a [&'a str]) -> Vec<&'a str> {
    keywords.iter().copied().filter(|kw| text.contains(kw)).collect()
}

/// A low-importance phrase followed closely by one of the criterion's keywords
fn is_low_importance(text: &str, positive: &[&str]) -> bool {
    LOW_IMPORTANCE_PHRASES.iter().any(|phrase| {
        find_char(text, phrase).is_some_and(|idx| {
            let following = window(text, idx, idx + LOW_IMPORTANCE_WINDOW);
            positive.iter().any(|kw| following.contains(kw))
        })
    })
}

/// An importance booster near the first occurrence of any matched keyword
fn is_high_importance(text: &str, matched_positive: &[&str]) -> bool {
    matched_positive.iter().any(|kw| {
        find_char(text, kw).is_some_and(|pos| {
            let around = window(
                text,
                pos.saturating_sub(HIGH_IMPORTANCE_WINDOW),
                pos + kw.chars().count() + HIGH_IMPORTANCE_WINDOW,
            );
            HIGH_IMPORTANCE_PHRASES.iter().any(|phrase| around.contains(phrase))
        })
    })
}

/// Weight and importance a single criterion receives from the text
fn analyze_criterion(text: &str, set: &KeywordSet) -> Option<(u8, DetectedCriterion)> {
    let positive = matched(text, set.positive);
    let negative = matched(text, set.negative);
    let low = is_low_importance(text, set.positive);

    if !low && positive.is_empty() && negative.is_empty() {
        return None;
    }

    let matched_keywords: Vec<String> = positive
        .iter()
        .chain(negative.iter())
        .map(|kw| kw.to_string())
        .collect();

    let (weight, importance) = if low {
        (LOW_IMPORTANCE_WEIGHT, Importance::Low)
    } else if negative.len() > positive.len() {
        let penalty = (PER_NEGATIVE_PENALTY as usize).saturating_mul(negative.len());
        ((NEGATIVE_BASE as usize).saturating_sub(penalty) as u8, Importance::Low)
    } else {
        let high = is_high_importance(text, &positive);
        let base = if high { HIGH_IMPORTANCE_BASE } else { NEUTRAL_BASE };
        let boosted = (base as usize + PER_KEYWORD_BONUS as usize * positive.len()).min(100);
        let importance = if high { Importance::High } else { Importance::Neutral };
        (boosted as u8, importance)
    };

    Some((
        weight,
        DetectedCriterion {
            criterion: set.criterion,
            importance,
            matched_keywords,
        },
    ))
}

/// Parse a free-text description into preference weights
///
/// Criteria nobody mentions keep the default of 50. Confidence reaches 1.0 at three or
/// more keyword hits across all criteria. The output depends only on `text`.
pub fn parse_text_to_preferences(text: &str) -> MatcherResult {
    let lower = text.to_lowercase();

    let mut preferences = ScoringPreferences::default();
    let mut detected_criteria = Vec::new();
    let mut total_hits = 0usize;

    for set in KEYWORDS.iter() {
        if let Some((weight, detected)) = analyze_criterion(&lower, set) {
            total_hits += detected.matched_keywords.len();
            preferences.set(set.criterion, weight as i64);
            detected_criteria.push(detected);
        }
    }

    let confidence = (total_hits as f64 / FULL_CONFIDENCE_HITS).min(1.0);

    tracing::debug!(
        "Parsed preference text: {} criteria detected, {} keyword hits",
        detected_criteria.len(),
        total_hits
    );

    MatcherResult {
        preferences,
        detected_criteria,
        confidence,
    }
}
