use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{LlmSettings, DEFAULT_ANTHROPIC_API_URL};

/// Default cap on uploaded document size: 10 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Only malformed values fail startup; everything has a default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent ⇒ the heuristic engine is the only structuring backend.
    pub anthropic_api_key: Option<String>,
    pub enable_ai_structuring: bool,
    pub anthropic_api_url: String,
    /// Per-request model timeout. Kept short: the heuristics answer anyway.
    pub llm_timeout_secs: u64,
    /// Extra attempts after a 5xx or refused connection. 429s are never retried.
    pub llm_max_retries: u32,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            anthropic_api_key: None,
            enable_ai_structuring: true,
            anthropic_api_url: DEFAULT_ANTHROPIC_API_URL.to_string(),
            llm_timeout_secs: 30,
            llm_max_retries: 1,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            enable_ai_structuring: optional_env("ENABLE_AI_STRUCTURING")
                .map(|v| parse_bool("ENABLE_AI_STRUCTURING", &v))
                .transpose()?
                .unwrap_or(true),
            anthropic_api_url: optional_env("ANTHROPIC_API_URL")
                .unwrap_or_else(|| DEFAULT_ANTHROPIC_API_URL.to_string()),
            llm_timeout_secs: optional_env("LLM_TIMEOUT_SECS")
                .map(|v| v.parse::<u64>().context("LLM_TIMEOUT_SECS must be a number of seconds"))
                .transpose()?
                .unwrap_or(30),
            llm_max_retries: optional_env("LLM_MAX_RETRIES")
                .map(|v| v.parse::<u32>().context("LLM_MAX_RETRIES must be a count"))
                .transpose()?
                .unwrap_or(1),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|v| {
                    v.parse::<usize>()
                        .context("MAX_UPLOAD_BYTES must be a byte count")
                })
                .transpose()?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// True when the hosted model should be tried before the heuristics.
    pub fn ai_structuring_enabled(&self) -> bool {
        self.enable_ai_structuring && self.anthropic_api_key.is_some()
    }

    pub fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            endpoint: self.anthropic_api_url.clone(),
            timeout: Duration::from_secs(self.llm_timeout_secs),
            max_retries: self.llm_max_retries,
        }
    }
}

/// Unset and blank variables both read as `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("{key} must be true or false, got '{other}'"),
    }
}
