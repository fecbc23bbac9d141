// src/compiler.rs
use log::info;
use serde_json::{Value, json};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::runner::{decode, run_tool};

/// Logical source name the compiler sees.
pub const COMPILER_SOURCE_NAME: &str = "Contract.sol";

/// Builds the compiler's standard-JSON input for a single source unit,
/// selecting every output for every contract.
pub fn standard_json_input(code: &str) -> Value {
    json!({
        "language": "Solidity",
        "sources": {
            (COMPILER_SOURCE_NAME): { "content": code }
        },
        "settings": {
            "outputSelection": { "*": { "*": ["*"] } }
        }
    })
}

/// Picks what the caller sees: the diagnostics if the compiler reported any,
/// otherwise the compiled contracts.
pub fn summarize(compiled: &Value) -> Result<String> {
    let selected = match compiled.get("errors") {
        Some(errors) if !errors.is_null() => errors,
        _ => compiled.get("contracts").unwrap_or(&Value::Null),
    };
    Ok(serde_json::to_string_pretty(selected)?)
}

/// Pipe `code` through `solc --standard-json` and summarize the result.
pub async fn compile_source(config: &AppConfig, code: &str) -> Result<String> {
    let input = serde_json::to_vec(&standard_json_input(code))?;

    let output = run_tool(&config.solc, ["--standard-json"], Some(input.as_slice())).await?;
    info!(
        "🛠️  {} finished in {}ms with {:?}",
        config.solc.program, output.duration_ms, output.exit_code
    );

    let stdout = decode("stdout", output.stdout)?;
    let compiled: Value = serde_json::from_str(&stdout)?;
    summarize(&compiled)
}
