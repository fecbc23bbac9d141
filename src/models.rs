// src/models.rs
use serde::{Deserialize, Serialize};
use crate::errors::{AnalysisError, Result};
use crate::runner::AnalysisReport;

/// Body accepted by `/analyze` and `/compile`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SourceRequest {
    #[serde(default)]
    pub code: Option<String>,
}

impl SourceRequest {
    /// Returns the source text, rejecting a missing, null or empty `code`.
    pub fn into_code(self) -> Result<String> {
        match self.code {
            Some(code) if !code.is_empty() => Ok(code),
            _ => Err(AnalysisError::MissingCode),
        }
    }
}

/// Body accepted by `/ai-chat`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EditRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub instruction: Option<String>,
}

impl EditRequest {
    /// Returns `(code, instruction)`; both must be present and non-empty.
    pub fn into_parts(self) -> Result<(String, String)> {
        match (self.code, self.instruction) {
            (Some(code), Some(instruction)) if !code.is_empty() && !instruction.is_empty() => {
                Ok((code, instruction))
            }
            _ => Err(AnalysisError::MissingEditInput),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EditResponse {
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub slither_output: String,
    pub slither_errors: String,
}

impl From<AnalysisReport> for AnalyzeResponse {
    fn from(report: AnalysisReport) -> Self {
        Self {
            success: true,
            slither_output: report.output,
            slither_errors: report.errors,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompileResponse {
    pub output: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&AnalysisError> for ErrorResponse {
    fn from(err: &AnalysisError) -> Self {
        Self { error: err.to_string() }
    }
}
