// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateQuery, CriteriaScores, Criterion, DetectedCriterion, DiningStyle, Importance,
    MatcherResult, Neighborhood, PartialWeights, QuizOption, QuizQuestion, RankedNeighborhood,
    ScoredNeighborhood, ScoringPreferences, Vibe,
};
pub use requests::{
    CommuteMode, CommuteRequest, CompareRequest, Destination, ParseTextRequest,
    QuizAnswersRequest, RankNeighborhoodsRequest, ReplacePreferencesRequest, UpdateWeightRequest,
};
pub use responses::{
    CommuteEstimate, CommuteResponse, ErrorResponse, HealthResponse, RankNeighborhoodsResponse,
    SessionResponse,
};
