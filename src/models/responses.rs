use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::domain::{RankedNeighborhood, ScoringPreferences};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankNeighborhoodsResponse {
    pub neighborhoods: Vec<RankedNeighborhood>,
    /// Size of the visible set the percentiles were computed over
    pub total_results: usize,
}

/// Estimated travel time to one destination
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuteEstimate {
    pub destination: String,
    pub distance_km: f64,
    pub minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuteResponse {
    pub neighborhood_id: String,
    pub commutes: Vec<CommuteEstimate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub preferences: ScoringPreferences,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub neighborhoods: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
