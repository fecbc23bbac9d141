// src/config.rs
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;
use crate::errors::{AnalysisError, Result};

/// How to launch one external tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolConfig {
    /// Executable name or path, resolved through `PATH` when not absolute.
    pub program: String,
    /// Leading arguments placed before the ones each operation appends.
    pub args: Vec<String>,
    /// Wall-clock limit for one invocation.
    pub timeout_secs: u64,
}

/// Configuration for the Gemini-backed code editor.
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

/// High-level application configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on accepted JSON request bodies.
    pub max_body_bytes: usize,
    pub slither: ToolConfig,
    pub solc: ToolConfig,
    /// `None` when `GEMINI_API_KEY` is unset; `/ai-chat` then answers 500.
    pub gemini: Option<GeminiConfig>,
}

/// Optional TOML overlay. Every key may be omitted.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    host: Option<String>,
    port: Option<u16>,
    max_body_bytes: Option<usize>,
    slither: Option<FileToolConfig>,
    solc: Option<FileToolConfig>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileToolConfig {
    program: Option<String>,
    args: Option<Vec<String>>,
    timeout_secs: Option<u64>,
}

const DEFAULT_TIMEOUT_SECS: u64 = 60;

impl ToolConfig {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn apply_file(&mut self, file: FileToolConfig) {
        if let Some(program) = file.program {
            self.program = program;
        }
        if let Some(args) = file.args {
            self.args = args;
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout_secs = secs;
        }
    }

    /// Reads `{prefix}_BIN`, `{prefix}_ARGS` and `{prefix}_TIMEOUT_SECS`.
    fn apply_env<F>(&mut self, lookup: &F, prefix: &str) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(program) = lookup(&format!("{}_BIN", prefix)) {
            self.program = program.trim().to_string();
        }
        if let Some(args) = lookup(&format!("{}_ARGS", prefix)) {
            self.args = args
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        let timeout_key = format!("{}_TIMEOUT_SECS", prefix);
        if let Some(secs) = lookup(&timeout_key) {
            self.timeout_secs = parse_var(&timeout_key, &secs)?;
        }
        Ok(())
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(AnalysisError::Config(format!("{} program must not be empty", name)));
        }
        if self.timeout_secs == 0 {
            return Err(AnalysisError::Config(format!("{} timeout must be at least 1 second", name)));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5005,
            max_body_bytes: 1024 * 1024,
            slither: ToolConfig::new("slither"),
            solc: ToolConfig::new("solc"),
            gemini: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, optionally layered over
    /// the TOML file named by `SLITHER_SERVER_CONFIG`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but with an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(path) = lookup("SLITHER_SERVER_CONFIG") {
            let contents = std::fs::read_to_string(path.trim()).map_err(AnalysisError::FileRead)?;
            config.apply_file(toml::from_str(&contents)?);
        }

        if let Some(host) = lookup("SLITHER_SERVER_HOST") {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("SLITHER_SERVER_PORT") {
            config.port = parse_var("SLITHER_SERVER_PORT", &port)?;
        }
        if let Some(limit) = lookup("SLITHER_SERVER_MAX_BODY_BYTES") {
            config.max_body_bytes = parse_var("SLITHER_SERVER_MAX_BODY_BYTES", &limit)?;
        }

        config.slither.apply_env(&lookup, "SLITHER")?;
        config.solc.apply_env(&lookup, "SOLC")?;

        // The key is a secret, so Gemini is only configured from the environment.
        let api_key = lookup("GEMINI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        if let Some(api_key) = api_key {
            let api_base = lookup("GEMINI_API_BASE")
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string());
            let model = lookup("GEMINI_MODEL").unwrap_or_else(|| "gemini-2.5-flash".to_string());
            config.gemini = Some(GeminiConfig {
                api_base: api_base.trim().to_string(),
                api_key,
                model: model.trim().to_string(),
            });
        }

        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(host) = file.host {
            self.host = host;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(limit) = file.max_body_bytes {
            self.max_body_bytes = limit;
        }
        if let Some(slither) = file.slither {
            self.slither.apply_file(slither);
        }
        if let Some(solc) = file.solc {
            self.solc.apply_file(solc);
        }
    }

    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(AnalysisError::Config("host must not be empty".to_string()));
        }
        if self.max_body_bytes == 0 {
            return Err(AnalysisError::Config("max_body_bytes must be positive".to_string()));
        }
        self.slither.validate("slither")?;
        self.solc.validate("solc")
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AnalysisError::Config(format!("{} has an invalid value: '{}'", key, value)))
}
