// Route exports
pub mod neighborhoods;
pub mod preferences;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use std::fmt;
use std::sync::Arc;
use crate::core::Matcher;
use crate::models::ErrorResponse;
use crate::services::{Catalog, PreferenceSessions};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sessions: PreferenceSessions,
    pub matcher: Matcher,
    pub max_compare: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(neighborhoods::configure)
            .configure(preferences::configure),
    );
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: &str, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            status_code: status.as_u16(),
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl ResponseError for ErrorResponse {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(ResponseError::status_code(self)).json(self)
    }
}

/// JSON error body with a matching status code
pub(crate) fn error_response(status: StatusCode, error: &str, message: impl ToString) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(status, error, message))
}

/// Malformed or mistyped JSON bodies become a 400 `invalid_json` error body
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ErrorResponse::new(StatusCode::BAD_REQUEST, "invalid_json", format!("Invalid JSON: {}", err)).into()
}

pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ErrorResponse::new(StatusCode::BAD_REQUEST, "invalid_query", format!("Invalid query: {}", err)).into()
}
