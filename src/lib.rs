//! Hood Match - personalized neighborhood scoring and matching
//!
//! Turns slider weights, quiz answers or a free-text description into a preference
//! vector, then scores and ranks a static neighborhood catalog against it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{
    calculate_match_percentage, calculate_personalized_score, calculate_preferences_from_quiz,
    get_top_neighborhoods, parse_text_to_preferences, rank_percentiles,
    score_and_sort_neighborhoods, Matcher,
};
pub use models::{
    Criterion, MatcherResult, Neighborhood, RankedNeighborhood, ScoredNeighborhood,
    ScoringPreferences,
};
pub use services::Catalog;
