use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;
use crate::core::{parse_text_to_preferences, quiz_questions, quiz_result};
use crate::models::{
    ParseTextRequest, QuizAnswersRequest, ReplacePreferencesRequest, SessionResponse,
    UpdateWeightRequest,
};
use crate::services::{PreferenceSession, SessionError};
use super::{error_response, AppState};

/// Configure quiz, text parsing and session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/quiz", web::get().to(get_quiz))
        .route("/quiz/score", web::post().to(score_quiz))
        .route("/preferences/parse", web::post().to(parse_text))
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{id}", web::get().to(get_session))
        .route("/sessions/{id}", web::put().to(replace_session))
        .route("/sessions/{id}/weights", web::patch().to(update_weight));
}

async fn get_quiz() -> impl Responder {
    HttpResponse::Ok().json(quiz_questions())
}

/// POST /api/v1/quiz/score
///
/// Request body:
/// ```json
/// { "answers": { "budget": 0, "weekend": 2 } }
/// ```
async fn score_quiz(req: web::Json<QuizAnswersRequest>) -> impl Responder {
    let result = quiz_result(&req.answers);
    tracing::debug!("Scored quiz with {} answers", req.answers.len());
    HttpResponse::Ok().json(result)
}

/// POST /api/v1/preferences/parse
async fn parse_text(req: web::Json<ParseTextRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }

    let result = parse_text_to_preferences(&req.text);
    tracing::info!(
        "Parsed preference text: {} criteria, confidence {:.2}",
        result.detected_criteria.len(),
        result.confidence
    );
    HttpResponse::Ok().json(result)
}

fn session_reply(result: Result<PreferenceSession, SessionError>) -> HttpResponse {
    match result {
        Ok(session) => HttpResponse::Ok().json(SessionResponse::from(session)),
        Err(e) => error_response(StatusCode::NOT_FOUND, "Session not found", e),
    }
}

fn parse_session_id(raw: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw).map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, "Invalid session id", e)
    })
}

async fn create_session(state: web::Data<AppState>) -> impl Responder {
    let session = state.sessions.create().await;
    HttpResponse::Created().json(SessionResponse::from(session))
}

async fn get_session(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = match parse_session_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    session_reply(state.sessions.get(id).await)
}

/// PUT /api/v1/sessions/{id} - apply a quiz or text result in bulk
async fn replace_session(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<ReplacePreferencesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors);
    }
    let id = match parse_session_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    session_reply(state.sessions.replace(id, req.preferences).await)
}

/// PATCH /api/v1/sessions/{id}/weights - a single slider edit
async fn update_weight(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdateWeightRequest>,
) -> impl Responder {
    let id = match parse_session_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    session_reply(
        state
            .sessions
            .update_weight(id, req.criterion, req.value)
            .await,
    )
}
