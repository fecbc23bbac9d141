// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to prepare workspace: {0}")]
    Workspace(#[source] std::io::Error),

    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while running tool: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{program}' timed out after {secs} seconds")]
    Timeout { program: String, secs: u64 },

    #[error("Failed to decode {stream} as UTF-8: {source}")]
    Decode {
        stream: &'static str,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to read file: {0}")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing Solidity code")]
    MissingCode,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Missing code or instruction")]
    MissingEditInput,

    #[error("Gemini API key not set. Set GEMINI_API_KEY in the server environment.")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("API returned an error: {0}")]
    ApiResponse(String),

    #[error("AI output hit the token limit and was cut off. Try using shorter code or a simpler instruction.")]
    TokenLimit,

    #[error("AI did not return any code.")]
    EmptyResponse,

    #[error("AI response did not contain code block or any code.")]
    NoCodeBlock,
}

impl AnalysisError {
    /// HTTP status the API layer reports for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AnalysisError::MissingCode
            | AnalysisError::InvalidBody(_)
            | AnalysisError::MissingEditInput => 400,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(AnalysisError::MissingCode.status_code(), 400);
        assert_eq!(AnalysisError::InvalidBody("bad".into()).status_code(), 400);
    }

    #[test]
    fn test_invocation_faults_map_to_500() {
        let timeout = AnalysisError::Timeout { program: "slither".into(), secs: 60 };
        assert_eq!(timeout.status_code(), 500);
        assert_eq!(timeout.to_string(), "'slither' timed out after 60 seconds");

        let spawn = AnalysisError::Spawn {
            program: "slither".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(spawn.status_code(), 500);
        assert!(spawn.to_string().starts_with("Failed to start 'slither'"));
    }

    #[test]
    fn test_assistant_errors() {
        assert_eq!(AnalysisError::MissingEditInput.status_code(), 400);
        assert_eq!(AnalysisError::MissingEditInput.to_string(), "Missing code or instruction");
        assert_eq!(AnalysisError::MissingApiKey.status_code(), 500);
        assert_eq!(AnalysisError::TokenLimit.status_code(), 500);
        let upstream = AnalysisError::ApiError { status: 503, body: "overloaded".into() };
        assert_eq!(upstream.status_code(), 500);
        assert!(upstream.to_string().contains("503"));
    }

    #[test]
    fn test_missing_code_message() {
        assert_eq!(AnalysisError::MissingCode.to_string(), "Missing Solidity code");
    }
}
