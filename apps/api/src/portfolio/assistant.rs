//! AI assistant: small remote-model helpers for editing an existing portfolio.
//!
//! Shares the LLM backend and the rate limiter with `RemoteSynthesizer`. Every
//! call checks the limiter first, runs under the refinement timeout and is
//! only counted against the quota when it succeeds.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{system_prompt, PLAIN_TEXT_SYSTEM};
use crate::llm_client::{CompletionRequest, LlmBackend};
use crate::models::{EducationEntry, ExperienceEntry, Skill, SkillCategory, SkillLevel};
use crate::portfolio::prompts::{
    ADVISOR_SYSTEM_ROLE, PROJECT_DESCRIPTION_PROMPT_TEMPLATE, REFINE_BIO_INSTRUCTION,
    REFINE_DESCRIPTION_INSTRUCTION, REFINE_GENERAL_INSTRUCTION, REFINE_PROMPT_TEMPLATE,
    REFINE_TITLE_INSTRUCTION, SUGGEST_SKILLS_PROMPT_TEMPLATE,
};
use crate::safety::{sanitize_input, with_timeout, SharedRateLimiter, REFINEMENT_TIMEOUT};

pub const MIN_REFINE_CHARS: usize = 10;
pub const MAX_REFINE_CHARS: usize = 2000;
pub const MAX_SUGGESTED_SKILLS: usize = 12;

const EXPERIENCE_CONTEXT_CHARS: usize = 500;
const EDUCATION_CONTEXT_CHARS: usize = 300;

const REFINE_MAX_TOKENS: u32 = 500;
const PROJECT_MAX_TOKENS: u32 = 300;
const SKILLS_MAX_TOKENS: u32 = 200;
const TEMPERATURE: f32 = 0.7;

/// What kind of text is being refined. Unknown kinds refine as `General`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefineKind {
    Bio,
    Description,
    Title,
    #[default]
    General,
}

impl RefineKind {
    pub fn from_kind(kind: &str) -> Self {
        match kind.trim().to_ascii_lowercase().as_str() {
            "bio" => RefineKind::Bio,
            "description" => RefineKind::Description,
            "title" => RefineKind::Title,
            _ => RefineKind::General,
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            RefineKind::Bio => REFINE_BIO_INSTRUCTION,
            RefineKind::Description => REFINE_DESCRIPTION_INSTRUCTION,
            RefineKind::Title => REFINE_TITLE_INSTRUCTION,
            RefineKind::General => REFINE_GENERAL_INSTRUCTION,
        }
    }
}

impl<'de> Deserialize<'de> for RefineKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RefineKind::from_kind(&raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quota {
    pub remaining: usize,
    pub reset_time_ms: u64,
}

pub struct AiAssistant {
    llm: Arc<dyn LlmBackend>,
    limiter: SharedRateLimiter,
}

impl AiAssistant {
    pub fn new(llm: Arc<dyn LlmBackend>, limiter: SharedRateLimiter) -> Self {
        Self { llm, limiter }
    }

    pub async fn refine_text(&self, text: &str, kind: RefineKind) -> Result<String, AppError> {
        let text = sanitize_input(text);
        let chars = text.chars().count();
        if chars < MIN_REFINE_CHARS {
            return Err(AppError::Validation(
                "Text is too short to refine".to_string(),
            ));
        }
        if chars > MAX_REFINE_CHARS {
            return Err(AppError::Validation(format!(
                "Text is too long. Maximum {MAX_REFINE_CHARS} characters."
            )));
        }

        let prompt = REFINE_PROMPT_TEMPLATE
            .replace("{instruction}", kind.instruction())
            .replace("{text}", &text);
        let refined = self.ask(&prompt, REFINE_MAX_TOKENS).await?;
        info!("Refined {:?} text ({} -> {} chars)", kind, chars, refined.len());

        if refined.is_empty() {
            return Ok(text);
        }
        Ok(refined)
    }

    pub async fn generate_project_description(
        &self,
        name: &str,
        technologies: &str,
    ) -> Result<String, AppError> {
        let name = sanitize_input(name);
        if name.is_empty() {
            return Err(AppError::Validation(
                "Project name cannot be empty".to_string(),
            ));
        }
        let technologies = sanitize_input(technologies);
        let technologies = if technologies.is_empty() {
            "modern technologies".to_string()
        } else {
            technologies
        };

        let prompt = PROJECT_DESCRIPTION_PROMPT_TEMPLATE
            .replace("{name}", &name)
            .replace("{technologies}", &technologies);
        self.ask(&prompt, PROJECT_MAX_TOKENS).await
    }

    /// Returns up to twelve skill names suggested from the given background.
    pub async fn suggest_skills(
        &self,
        experience: &[ExperienceEntry],
        education: &[EducationEntry],
    ) -> Result<Vec<String>, AppError> {
        let experience_json = serde_json::to_string(experience).map_err(anyhow::Error::from)?;
        let education_json = serde_json::to_string(education).map_err(anyhow::Error::from)?;

        let prompt = SUGGEST_SKILLS_PROMPT_TEMPLATE
            .replace(
                "{experience}",
                truncate_chars(&experience_json, EXPERIENCE_CONTEXT_CHARS),
            )
            .replace(
                "{education}",
                truncate_chars(&education_json, EDUCATION_CONTEXT_CHARS),
            );
        let reply = self.ask(&prompt, SKILLS_MAX_TOKENS).await?;

        Ok(reply
            .split(',')
            .map(sanitize_input)
            .filter(|s| !s.is_empty())
            .take(MAX_SUGGESTED_SKILLS)
            .collect())
    }

    pub async fn quota(&self) -> Quota {
        let mut limiter = self.limiter.lock().await;
        Quota {
            remaining: limiter.remaining_requests(),
            reset_time_ms: limiter.reset_time().as_millis() as u64,
        }
    }

    /// Rate-limited, time-boxed single completion. Output is sanitised.
    async fn ask(&self, prompt: &str, max_tokens: u32) -> Result<String, AppError> {
        let slot = self
            .limiter
            .lock()
            .await
            .try_acquire()
            .map_err(|wait_secs| AppError::RateLimited { wait_secs })?;

        let system = system_prompt(ADVISOR_SYSTEM_ROLE, PLAIN_TEXT_SYSTEM);
        let reply = with_timeout(REFINEMENT_TIMEOUT, async {
            self.llm
                .complete(CompletionRequest {
                    system: &system,
                    prompt,
                    max_tokens,
                    temperature: Some(TEMPERATURE),
                })
                .await
                .map_err(AppError::from)
        })
        .await;

        match reply {
            Ok(reply) => Ok(sanitize_input(&reply)),
            Err(e) => {
                self.limiter.lock().await.release(slot);
                Err(e)
            }
        }
    }
}

/// Appends suggestions whose names are not already present (case-insensitive).
/// Returns how many were added.
pub fn merge_suggested_skills(existing: &mut Vec<Skill>, suggested: &[String]) -> usize {
    let before = existing.len();
    for name in suggested {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let lowered = name.to_lowercase();
        if existing.iter().any(|s| s.name.to_lowercase() == lowered) {
            continue;
        }
        existing.push(Skill {
            name: name.to_string(),
            category: SkillCategory::Technical,
            level: SkillLevel::Intermediate,
        });
    }
    existing.len() - before
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
