//! Portfolio synthesis: turns free text into a full `PortfolioRecord`.
//!
//! Two interchangeable strategies implement `PortfolioSynthesizer`:
//! - `MockSynthesizer`: deterministic classifier + content library, staged pauses.
//! - `RemoteSynthesizer` (see `remote.rs`): remote model behind the safety layer.
//!
//! `AppState` carries both behind `Arc<dyn PortfolioSynthesizer>`; handlers pick one per request.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, PortfolioRecord,
    ProjectEntry, Skill, SkillLevel, ThemeId,
};
use crate::portfolio::classifier::{classify, ClassificationResult};
use crate::portfolio::library::{lookup, ContentProfile, ProjectTemplate};

/// Progress callback. Receives one human-readable stage label per call.
pub type ProgressFn = dyn Fn(&str) + Send + Sync;

pub const STAGE_ANALYZING: &str = "Analyzing your profile...";
pub const STAGE_EXPERIENCE: &str = "Generating experience details...";
pub const STAGE_PROJECTS: &str = "Creating project descriptions...";
pub const STAGE_FINALIZING: &str = "Finalizing your portfolio...";

const PLACEHOLDER_PHONE: &str = "+1 (555) 123-4567";
const PLACEHOLDER_WEBSITE: &str = "https://yourportfolio.com";
const PLACEHOLDER_LINKEDIN: &str = "https://linkedin.com/in/yourprofile";
const PLACEHOLDER_GITHUB: &str = "https://github.com/yourusername";
const PLACEHOLDER_CREDENTIAL_URL: &str = "https://certification-link.com";

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// One capability, several backends. Implement this to add a synthesis strategy
/// without touching handlers or callers.
#[async_trait]
pub trait PortfolioSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        raw_text: &str,
        on_progress: Option<&ProgressFn>,
    ) -> Result<PortfolioRecord, AppError>;

    /// Short backend name for responses and logs ("mock" | "remote").
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// MockSynthesizer
// ────────────────────────────────────────────────────────────────────────────

/// Simulated latency after each progress stage. Presentation detail only.
#[derive(Debug, Clone)]
pub struct StageTiming {
    pub analyzing: Duration,
    pub experience: Duration,
    pub projects: Duration,
    pub finalizing: Duration,
}

impl Default for StageTiming {
    fn default() -> Self {
        Self {
            analyzing: Duration::from_millis(800),
            experience: Duration::from_millis(800),
            projects: Duration::from_millis(800),
            finalizing: Duration::from_millis(600),
        }
    }
}

impl StageTiming {
    pub fn instant() -> Self {
        Self {
            analyzing: Duration::ZERO,
            experience: Duration::ZERO,
            projects: Duration::ZERO,
            finalizing: Duration::ZERO,
        }
    }
}

/// Rule-based synthesizer. Total: never fails for any input text.
pub struct MockSynthesizer {
    timing: StageTiming,
}

impl MockSynthesizer {
    pub fn new(timing: StageTiming) -> Self {
        Self { timing }
    }
}

#[async_trait]
impl PortfolioSynthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        raw_text: &str,
        on_progress: Option<&ProgressFn>,
    ) -> Result<PortfolioRecord, AppError> {
        let stages = [
            (STAGE_ANALYZING, self.timing.analyzing),
            (STAGE_EXPERIENCE, self.timing.experience),
            (STAGE_PROJECTS, self.timing.projects),
            (STAGE_FINALIZING, self.timing.finalizing),
        ];
        for (label, pause) in stages {
            if let Some(report) = on_progress {
                report(label);
            }
            if !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
        }

        let classification = classify(raw_text);
        info!(
            "Classified prompt: profession={}, years={}",
            classification.profession_category.label(),
            classification.experience_years
        );

        let profile = lookup(classification.profession_category);
        let record = assemble_record(&classification, profile);
        debug!(
            "Assembled mock portfolio: {} experience, {} projects, {} skills",
            record.experience.len(),
            record.projects.len(),
            record.skills.len()
        );

        Ok(record)
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Record assembly
// ────────────────────────────────────────────────────────────────────────────

/// Merges classifier output with the profession's content table.
///
/// The mock path always emits the `modern` theme even though a fresh record
/// defaults to `minimal`.
pub fn assemble_record(
    classification: &ClassificationResult,
    profile: &ContentProfile,
) -> PortfolioRecord {
    let personal_info = PersonalInfo {
        full_name: classification.extracted_name.clone(),
        title: profile.profession.label().to_string(),
        email: classification.extracted_email.clone(),
        phone: PLACEHOLDER_PHONE.to_string(),
        location: classification.extracted_location.clone(),
        website: PLACEHOLDER_WEBSITE.to_string(),
        linkedin: PLACEHOLDER_LINKEDIN.to_string(),
        github: PLACEHOLDER_GITHUB.to_string(),
        twitter: String::new(),
        bio: profile.bio(&classification.experience_years),
    };

    let experience = profile
        .experience
        .iter()
        .map(|t| {
            ExperienceEntry {
                position: t.position.to_string(),
                company: t.company.to_string(),
                location: t.location.to_string(),
                start_date: t.start_date.to_string(),
                end_date: t.end_date.to_string(),
                current: t.current,
                description: t.description.to_string(),
            }
            .normalized()
        })
        .collect();

    let education = vec![EducationEntry {
        degree: format!("Bachelor of Science in {}", profile.field_of_study),
        institution: "University Name".to_string(),
        location: "City, State".to_string(),
        year: "2014 - 2018".to_string(),
        gpa: Some("3.8/4.0".to_string()),
    }];

    let skills = profile
        .skills
        .iter()
        .map(|(name, category)| Skill {
            name: name.to_string(),
            category: *category,
            level: SkillLevel::Advanced,
        })
        .collect();

    let projects = profile.projects.iter().map(project_entry).collect();

    let certifications = vec![CertificationEntry {
        name: profile.certification_name.to_string(),
        issuer: profile.certification_issuer.to_string(),
        year: "2023".to_string(),
        credential_url: Some(PLACEHOLDER_CREDENTIAL_URL.to_string()),
    }];

    PortfolioRecord {
        personal_info,
        experience,
        education,
        skills,
        projects,
        certifications,
        theme: ThemeId::Modern,
    }
}

/// Source-hosting links become `githubUrl`, showcase links become `liveUrl`.
fn project_entry(template: &ProjectTemplate) -> ProjectEntry {
    let link = Some(template.link.to_string()).filter(|l| !l.is_empty());
    let (github_url, live_url) = match link {
        Some(l) if l.contains("github.com") => (Some(l), None),
        other => (None, other),
    };
    ProjectEntry {
        name: template.name.to_string(),
        description: template.description.to_string(),
        technologies: template.technologies.join(", "),
        live_url,
        github_url,
    }
}
