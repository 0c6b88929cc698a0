//! Remote-model portfolio synthesis.
//!
//! Same contract as the mock path, plus everything a network call needs:
//! rate limiting, input bounds, sanitisation on both sides, a timeout and
//! defensive coercion of whatever JSON comes back.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{system_prompt, JSON_ONLY_SYSTEM};
use crate::llm_client::{strip_json_fences, CompletionRequest, LlmBackend};
use crate::models::{PortfolioRecord, ThemeId};
use crate::portfolio::prompts::{PORTFOLIO_PROMPT_TEMPLATE, PORTFOLIO_SYSTEM_ROLE};
use crate::portfolio::synthesizer::{PortfolioSynthesizer, ProgressFn};
use crate::safety::{
    sanitize_input, sanitize_value, with_timeout, SharedRateLimiter, GENERATION_TIMEOUT,
};

pub const MIN_DESCRIPTION_CHARS: usize = 50;
pub const MAX_DESCRIPTION_CHARS: usize = 3000;

pub const STAGE_GENERATING: &str = "Generating your portfolio...";
pub const STAGE_ANALYZING_DESCRIPTION: &str = "Analyzing your description...";
pub const STAGE_DONE: &str = "Finalizing...";

const PARSE_FAILURE: &str =
    "Failed to parse AI response. Please try again with a different description.";
const INVALID_DATA: &str = "Invalid portfolio data generated. Please try again.";

const GENERATION_MAX_TOKENS: u32 = 4096;
const GENERATION_TEMPERATURE: f32 = 0.7;

/// Sections the model may omit or null out; coerced to `[]`.
const ARRAY_SECTIONS: [&str; 5] = [
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
];

pub struct RemoteSynthesizer {
    llm: Arc<dyn LlmBackend>,
    limiter: SharedRateLimiter,
}

impl RemoteSynthesizer {
    pub fn new(llm: Arc<dyn LlmBackend>, limiter: SharedRateLimiter) -> Self {
        Self { llm, limiter }
    }
}

#[async_trait]
impl PortfolioSynthesizer for RemoteSynthesizer {
    async fn synthesize(
        &self,
        raw_text: &str,
        on_progress: Option<&ProgressFn>,
    ) -> Result<PortfolioRecord, AppError> {
        let slot = self
            .limiter
            .lock()
            .await
            .try_acquire()
            .map_err(|wait_secs| AppError::RateLimited { wait_secs })?;

        let result = self.generate(raw_text, on_progress).await;
        if result.is_err() {
            self.limiter.lock().await.release(slot);
        }
        result
    }

    fn backend(&self) -> &'static str {
        "remote"
    }
}

impl RemoteSynthesizer {
    /// One generation round trip. The caller holds a limiter slot throughout.
    async fn generate(
        &self,
        raw_text: &str,
        on_progress: Option<&ProgressFn>,
    ) -> Result<PortfolioRecord, AppError> {
        let description = validate_description(raw_text)?;

        let report = |label: &str| {
            if let Some(callback) = on_progress {
                callback(label);
            }
        };
        report(STAGE_GENERATING);

        let system = system_prompt(PORTFOLIO_SYSTEM_ROLE, JSON_ONLY_SYSTEM);
        let prompt = PORTFOLIO_PROMPT_TEMPLATE.replace("{description}", &description);

        report(STAGE_ANALYZING_DESCRIPTION);
        let reply = with_timeout(GENERATION_TIMEOUT, async {
            self.llm
                .complete(CompletionRequest {
                    system: &system,
                    prompt: &prompt,
                    max_tokens: GENERATION_MAX_TOKENS,
                    temperature: Some(GENERATION_TEMPERATURE),
                })
                .await
                .map_err(AppError::from)
        })
        .await?;

        let record = coerce_response(&reply)?;

        info!(
            "Remote portfolio generated for '{}'",
            record.personal_info.full_name
        );
        report(STAGE_DONE);

        Ok(record)
    }
}

/// Sanitises and bounds-checks a self-description. Length is counted in characters.
pub fn validate_description(raw_text: &str) -> Result<String, AppError> {
    let description = sanitize_input(raw_text);
    let chars = description.chars().count();
    if chars < MIN_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "Please provide a more detailed description (at least {MIN_DESCRIPTION_CHARS} characters)."
        )));
    }
    if chars > MAX_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "Description is too long. Maximum {MAX_DESCRIPTION_CHARS} characters."
        )));
    }
    Ok(description)
}

/// Turns raw model output into a complete record, or fails without a partial one.
pub fn coerce_response(reply: &str) -> Result<PortfolioRecord, AppError> {
    let mut value: Value = serde_json::from_str(strip_json_fences(reply)).map_err(|e| {
        warn!("Model reply is not JSON: {e}");
        AppError::MalformedResponse(PARSE_FAILURE.to_string())
    })?;

    sanitize_value(&mut value);

    let has_name = value
        .pointer("/personalInfo/fullName")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.trim().is_empty());
    let Some(fields) = value.as_object_mut().filter(|_| has_name) else {
        return Err(AppError::MalformedResponse(INVALID_DATA.to_string()));
    };

    for section in ARRAY_SECTIONS {
        if !fields.get(section).is_some_and(Value::is_array) {
            fields.insert(section.to_string(), Value::Array(Vec::new()));
        }
    }

    let mut record: PortfolioRecord = serde_json::from_value(value).map_err(|e| {
        warn!("Model reply does not match the portfolio shape: {e}");
        AppError::MalformedResponse(INVALID_DATA.to_string())
    })?;

    record.theme = ThemeId::Minimal;
    record.experience = record
        .experience
        .into_iter()
        .map(|entry| entry.normalized())
        .collect();

    Ok(record)
}
