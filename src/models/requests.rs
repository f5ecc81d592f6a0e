use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::{Validate, ValidationError};
use crate::models::domain::{Criterion, ScoringPreferences, Vibe};

/// Request to rank neighborhoods against a preference vector
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankNeighborhoodsRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_preferences"))]
    pub preferences: ScoringPreferences,
    #[serde(alias = "city_id", rename = "cityId")]
    pub city_id: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub vibe: Option<Vibe>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Request to compare several neighborhoods side by side
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompareRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "neighborhoodIds")]
    pub neighborhood_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommuteMode {
    Walk,
    Cycle,
    Transit,
    Drive,
}

/// A personal destination such as an office or school
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Destination {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(default = "default_mode")]
    pub mode: CommuteMode,
}

fn default_mode() -> CommuteMode {
    CommuteMode::Transit
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommuteRequest {
    #[validate(length(min = 1), nested)]
    pub destinations: Vec<Destination>,
}

/// Free-text preference description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParseTextRequest {
    #[validate(length(max = 2000))]
    pub text: String,
}

/// Quiz answers keyed by question id, value is the selected option index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswersRequest {
    pub answers: HashMap<String, i64>,
}

/// Bulk overwrite of a session's preferences
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReplacePreferencesRequest {
    #[validate(custom(function = "validate_preferences"))]
    pub preferences: ScoringPreferences,
}

/// Single slider edit; out-of-range values are clamped, not rejected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWeightRequest {
    pub criterion: Criterion,
    pub value: i64,
}

fn validate_preferences(prefs: &ScoringPreferences) -> Result<(), ValidationError> {
    if prefs.iter().any(|(_, w)| w > crate::models::domain::MAX_WEIGHT) {
        return Err(ValidationError::new("weight_out_of_range"));
    }
    Ok(())
}
