// src/api/routes.rs
use actix_cors::Cors;
use actix_web::{HttpResponse, error, web};
use super::handlers;
use super::AppState;
use crate::errors::AnalysisError;
use crate::models::{CompileResponse, ErrorResponse};

/// Registers every route. `max_body_bytes` bounds the `/compile` body, which
/// carries its own JSON error handling.
pub fn configure_routes(cfg: &mut web::ServiceConfig, max_body_bytes: usize) {
    cfg.route("/analyze", web::post().to(handlers::analyze))
        .service(
            web::resource("/compile")
                .app_data(compile_json_config(max_body_bytes))
                .route(web::post().to(handlers::compile)),
        )
        .route("/ai-chat", web::post().to(handlers::ai_chat))
        .route("/health", web::get().to(handlers::health_check));
}

/// Registers shared state, the JSON body limits and every route.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let max_body_bytes = state.config.max_body_bytes;
        cfg.app_data(json_config(max_body_bytes))
            .app_data(web::Data::new(state));
        configure_routes(cfg, max_body_bytes);
    }
}

/// Malformed, oversized or non-JSON bodies are answered with a JSON 400.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let body = ErrorResponse::from(&AnalysisError::InvalidBody(err.to_string()));
            log::warn!("Rejected request body: {}", err);
            error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}

/// `/compile` reports unreadable bodies like any other compile failure: 200
/// with the reason in `output`.
pub fn compile_json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let reason = AnalysisError::InvalidBody(err.to_string());
            log::warn!("Compilation failed: {}", reason);
            let body = CompileResponse {
                output: format!("Compilation failed: {}", reason),
            };
            error::InternalError::from_response(err, HttpResponse::Ok().json(body)).into()
        })
}

/// Cross-origin requests are accepted from anywhere.
pub fn cors() -> Cors {
    Cors::permissive()
}
