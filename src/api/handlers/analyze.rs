// src/api/handlers/analyze.rs
use actix_web::{web, HttpResponse, Result};
use crate::api::AppState;
use crate::models::{AnalyzeResponse, SourceRequest};
use crate::runner;
use super::error_response;

/// `POST /analyze`: run Slither over the submitted contract.
///
/// Anything the tool itself reports, including compilation failures and a
/// non-zero exit, comes back as a 200 with the raw streams. Only request
/// problems (400) and failures to run the tool at all (500) are errors.
pub async fn analyze(
    state: web::Data<AppState>,
    req: web::Json<SourceRequest>,
) -> Result<HttpResponse> {
    let code = match req.into_inner().into_code() {
        Ok(code) => code,
        Err(e) => return Ok(error_response(&e)),
    };

    match runner::analyze_source(&state.config, &code).await {
        Ok(report) => Ok(HttpResponse::Ok().json(AnalyzeResponse::from(report))),
        Err(e) => Ok(error_response(&e)),
    }
}
