// src/api/handlers/compile.rs
use actix_web::{web, HttpResponse, Result};
use crate::api::AppState;
use crate::compiler;
use crate::models::{CompileResponse, SourceRequest};

/// `POST /compile`: always 200; failures are reported inside `output`.
pub async fn compile(
    state: web::Data<AppState>,
    req: web::Json<SourceRequest>,
) -> Result<HttpResponse> {
    let outcome = match req.into_inner().into_code() {
        Ok(code) => compiler::compile_source(&state.config, &code).await,
        Err(e) => Err(e),
    };

    let output = match outcome {
        Ok(output) => output,
        Err(e) => {
            log::warn!("Compilation failed: {}", e);
            format!("Compilation failed: {}", e)
        }
    };

    Ok(HttpResponse::Ok().json(CompileResponse { output }))
}
