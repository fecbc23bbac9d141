// src/api/handlers/mod.rs
mod ai_chat;
mod analyze;
mod compile;
mod health;

pub use ai_chat::ai_chat;
pub use analyze::analyze;
pub use compile::compile;
pub use health::health_check;

use actix_web::HttpResponse;
use crate::errors::AnalysisError;
use crate::models::ErrorResponse;

/// `{"error": ...}` with the status the error maps to.
pub(crate) fn error_response(err: &AnalysisError) -> HttpResponse {
    let body = ErrorResponse::from(err);
    match err.status_code() {
        400 => HttpResponse::BadRequest().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}
