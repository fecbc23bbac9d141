// src/assistant.rs
use regex::Regex;
use std::sync::LazyLock;

use crate::errors::{AnalysisError, Result};
use crate::providers::LlmProvider;

static SOLIDITY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)```solidity(.*?)```").expect("valid regex"));
static ANY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("valid regex"));

/// Builds the edit prompt. The model is told to answer with code only.
pub fn build_edit_prompt(code: &str, instruction: &str) -> String {
    format!(
        "You are a helpful AI code editor. Here is some code:\n{}\n\nInstruction: {}\n\n\
         REPLY WITH ONLY THE FULL, UPDATED CODE WRAPPED IN TRIPLE BACKTICKS (solidity) \
         AND NOTHING ELSE. DO NOT DESCRIBE CHANGES, DO NOT ADD EXPLANATIONS.",
        code, instruction
    )
}

/// Returns the contents of the first ```` ```solidity ```` block, else of the
/// first fenced block of any kind, else the whole text, trimmed.
pub fn extract_code_block(text: &str) -> String {
    SOLIDITY_FENCE
        .captures(text)
        .or_else(|| ANY_FENCE.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text)
        .trim()
        .to_string()
}

/// Asks the model to apply `instruction` to `code` and returns the new code.
pub async fn edit_code<P: LlmProvider>(provider: &P, code: &str, instruction: &str) -> Result<String> {
    let completion = provider.generate(&build_edit_prompt(code, instruction)).await?;

    if completion.finish_reason.as_deref() == Some("MAX_TOKENS") {
        return Err(AnalysisError::TokenLimit);
    }

    let text = completion
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or(AnalysisError::EmptyResponse)?;

    let edited = extract_code_block(&text);
    if edited.is_empty() {
        return Err(AnalysisError::NoCodeBlock);
    }

    log::info!("✏️  AI edit produced {} bytes in {}ms", edited.len(), completion.latency_ms);
    Ok(edited)
}
