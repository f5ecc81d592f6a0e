use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use serde::Deserialize;
use validator::Validate;
use crate::core::{compare_neighborhoods, estimate_commutes, CompareError};
use crate::models::{
    CandidateQuery, CommuteRequest, CommuteResponse, CompareRequest, HealthResponse,
    RankNeighborhoodsRequest, RankNeighborhoodsResponse,
};
use super::{error_response, AppState};

/// Configure all neighborhood routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/cities", web::get().to(list_cities))
        .route("/neighborhoods", web::get().to(list_neighborhoods))
        .route("/neighborhoods/rank", web::post().to(rank_neighborhoods))
        .route("/neighborhoods/compare", web::post().to(compare))
        .route("/neighborhoods/{id}", web::get().to(get_neighborhood))
        .route("/neighborhoods/{id}/commute", web::post().to(commute));
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    #[serde(rename = "cityId")]
    city_id: Option<String>,
}

async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        neighborhoods: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

async fn list_cities(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.cities())
}

/// GET /api/v1/neighborhoods?cityId={cityId}
async fn list_neighborhoods(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    match &query.city_id {
        Some(city_id) => {
            let list: Vec<_> = state.catalog.by_city(city_id).collect();
            HttpResponse::Ok().json(list)
        }
        None => HttpResponse::Ok().json(state.catalog.all()),
    }
}

async fn get_neighborhood(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.catalog.get(&id) {
        Some(n) => HttpResponse::Ok().json(n),
        None => error_response(
            StatusCode::NOT_FOUND,
            "Neighborhood not found",
            format!("No neighborhood with id {}", id),
        ),
    }
}

/// Rank neighborhoods endpoint
///
/// POST /api/v1/neighborhoods/rank
///
/// Request body:
/// ```json
/// {
///   "preferences": { "safety": 80, "nightlife": 20 },
///   "cityId": "london",
///   "search": "park",
///   "limit": 10
/// }
/// ```
async fn rank_neighborhoods(
    state: web::Data<AppState>,
    req: web::Json<RankNeighborhoodsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    let req = req.into_inner();
    let query = CandidateQuery {
        city_id: req.city_id,
        search: req.search,
        vibe: req.vibe,
        limit: req.limit.map(usize::from),
    };

    let result = state
        .matcher
        .rank(&req.preferences, state.catalog.all(), &query);

    tracing::info!(
        "Ranked {} neighborhoods (returning {}) for city {:?}",
        result.total_candidates,
        result.neighborhoods.len(),
        query.city_id
    );

    HttpResponse::Ok().json(RankNeighborhoodsResponse {
        neighborhoods: result.neighborhoods,
        total_results: result.total_candidates,
    })
}

async fn compare(state: web::Data<AppState>, req: web::Json<CompareRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    match compare_neighborhoods(state.catalog.all(), &req.neighborhood_ids, state.max_compare) {
        Ok(comparison) => HttpResponse::Ok().json(comparison),
        Err(e @ CompareError::UnknownNeighborhood(_)) => {
            error_response(StatusCode::NOT_FOUND, "Neighborhood not found", e)
        }
        Err(e) => error_response(StatusCode::BAD_REQUEST, "Invalid comparison", e),
    }
}

/// POST /api/v1/neighborhoods/{id}/commute
async fn commute(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<CommuteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    let id = path.into_inner();
    let Some(neighborhood) = state.catalog.get(&id) else {
        return error_response(
            StatusCode::NOT_FOUND,
            "Neighborhood not found",
            format!("No neighborhood with id {}", id),
        );
    };

    if neighborhood.location().is_none() {
        tracing::warn!("Commute requested for {} which has no coordinates", id);
    }

    HttpResponse::Ok().json(CommuteResponse {
        neighborhood_id: id,
        commutes: estimate_commutes(neighborhood, &req.destinations),
    })
}
