use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::safety::validate_api_key;

/// Which synthesizer answers `POST /api/v1/portfolios/generate` by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisBackend {
    #[default]
    Mock,
    Remote,
}

impl std::str::FromStr for SynthesisBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "remote" => Ok(Self::Remote),
            other => bail!("SYNTHESIS_BACKEND must be 'mock' or 'remote', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; without an API key the AI features stay disabled.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    /// Overrides the Messages API endpoint (tests, proxies).
    pub llm_api_url: Option<String>,
    pub synthesis_backend: SynthesisBackend,
    /// When false the mock synthesizer skips its staged pauses.
    pub simulate_latency: bool,
    pub ai_rate_limit_max: usize,
    pub ai_rate_limit_window: Duration,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
            llm_api_url: None,
            synthesis_backend: SynthesisBackend::Mock,
            simulate_latency: true,
            ai_rate_limit_max: 5,
            ai_rate_limit_window: Duration::from_secs(60),
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let anthropic_api_key = var("ANTHROPIC_API_KEY").map(|k| k.trim().to_string());
        if let Some(key) = &anthropic_api_key {
            if !validate_api_key(key) {
                bail!("Invalid API key format. Must start with \"sk-\"");
            }
        }

        let synthesis_backend = match var("SYNTHESIS_BACKEND") {
            Some(raw) => raw.parse::<SynthesisBackend>()?,
            None => defaults.synthesis_backend,
        };
        if synthesis_backend == SynthesisBackend::Remote && anthropic_api_key.is_none() {
            bail!("SYNTHESIS_BACKEND=remote requires ANTHROPIC_API_KEY");
        }

        Ok(Config {
            port: parse_or(var("PORT"), defaults.port, "PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
            anthropic_api_key,
            llm_api_url: var("LLM_API_URL"),
            synthesis_backend,
            simulate_latency: parse_or(
                var("SIMULATE_LATENCY"),
                defaults.simulate_latency,
                "SIMULATE_LATENCY must be true or false",
            )?,
            ai_rate_limit_max: parse_or(
                var("AI_RATE_LIMIT_MAX"),
                defaults.ai_rate_limit_max,
                "AI_RATE_LIMIT_MAX must be a positive integer",
            )?,
            ai_rate_limit_window: parse_or(
                var("AI_RATE_LIMIT_WINDOW_SECS"),
                defaults.ai_rate_limit_window.as_secs(),
                "AI_RATE_LIMIT_WINDOW_SECS must be a number of seconds",
            )
            .map(Duration::from_secs)?,
            max_upload_bytes: parse_or(
                var("MAX_UPLOAD_BYTES"),
                defaults.max_upload_bytes,
                "MAX_UPLOAD_BYTES must be a byte count",
            )?,
        })
    }
}

fn parse_or<T>(raw: Option<String>, default: T, message: &'static str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw.trim().parse::<T>().context(message),
        None => Ok(default),
    }
}
