// src/api/handlers/ai_chat.rs
use actix_web::{web, HttpResponse, Result};
use crate::api::AppState;
use crate::assistant;
use crate::errors::AnalysisError;
use crate::models::{EditRequest, EditResponse};
use crate::providers::gemini::GeminiProvider;
use super::error_response;

/// `POST /ai-chat`: rewrite the submitted contract according to an instruction.
pub async fn ai_chat(
    state: web::Data<AppState>,
    req: web::Json<EditRequest>,
) -> Result<HttpResponse> {
    let Some(gemini) = state.config.gemini.as_ref() else {
        return Ok(error_response(&AnalysisError::MissingApiKey));
    };

    let (code, instruction) = match req.into_inner().into_parts() {
        Ok(parts) => parts,
        Err(e) => return Ok(error_response(&e)),
    };

    let provider = GeminiProvider::new(state.client.clone(), gemini.clone());
    match assistant::edit_code(&provider, &code, &instruction).await {
        Ok(code) => Ok(HttpResponse::Ok().json(EditResponse { code })),
        Err(e) => {
            log::error!("AI edit failed: {}", e);
            Ok(error_response(&e))
        }
    }
}
