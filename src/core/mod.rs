// Core engine exports
pub mod commute;
pub mod compare;
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod quiz;
pub mod scoring;
pub mod text_parser;

pub use commute::{estimate_commute, estimate_commutes};
pub use compare::{compare_neighborhoods, Comparison, ComparisonRow, CompareError};
pub use distance::haversine_distance;
pub use filters::{matches_city, matches_query, matches_search};
pub use matcher::{
    get_top_neighborhoods, percentile_for_rank, rank_percentiles, score_and_sort_neighborhoods,
    MatchResult, Matcher,
};
pub use quiz::{calculate_preferences_from_quiz, quiz_questions, quiz_result};
pub use scoring::{calculate_match_percentage, calculate_personalized_score};
pub use text_parser::parse_text_to_preferences;
