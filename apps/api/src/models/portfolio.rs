//! The portfolio record: the unit of work for synthesis and export.
//!
//! Serialized camelCase so the JSON shape matches what front-end collaborators
//! and the remote model already speak. Synthesizers create records, callers
//! own and mutate them, renderers only read them.

use serde::{Deserialize, Deserializer, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Theme identifier
// ────────────────────────────────────────────────────────────────────────────

/// Named palette applied uniformly by every renderer.
///
/// Any unrecognized identifier behaves as `Minimal`, both when parsed from a
/// string and when deserialized from a stored record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Minimal,
    Modern,
    Creative,
}

impl ThemeId {
    pub const ALL: [ThemeId; 3] = [ThemeId::Minimal, ThemeId::Modern, ThemeId::Creative];

    /// Lenient parse: case-insensitive, falls back to `Minimal`.
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "modern" => ThemeId::Modern,
            "creative" => ThemeId::Creative,
            _ => ThemeId::Minimal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Minimal => "minimal",
            ThemeId::Modern => "modern",
            ThemeId::Creative => "creative",
        }
    }
}

impl<'de> Deserialize<'de> for ThemeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ThemeId::from_id(&raw))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SkillCategory {
    #[default]
    Technical,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    Tools,
    Languages,
    Other,
}

impl SkillCategory {
    /// Inverse of the serialized label; anything unrecognised is `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Technical" => SkillCategory::Technical,
            "Soft Skills" => SkillCategory::SoftSkills,
            "Tools" => SkillCategory::Tools,
            "Languages" => SkillCategory::Languages,
            _ => SkillCategory::Other,
        }
    }
}

impl<'de> Deserialize<'de> for SkillCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(SkillCategory::from_label(&raw))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
}

// ────────────────────────────────────────────────────────────────────────────
// Record sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
    pub bio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    /// Empty while `current` is true.
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl ExperienceEntry {
    /// Clears `end_date` on a current position.
    pub fn normalized(mut self) -> Self {
        if self.current {
            self.end_date.clear();
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    /// Free text, comma-separated by convention.
    pub technologies: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

/// The full structured portfolio. `Default` is the fresh record a session
/// starts with (and what "reset" returns to).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioRecord {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<Skill>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub theme: ThemeId,
}

impl PortfolioRecord {
    /// True once the fields that gate export are all filled in.
    pub fn is_generated(&self) -> bool {
        let info = &self.personal_info;
        [&info.full_name, &info.title, &info.email]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

/// Returns the trimmed value of an optional text field, or `None` when the
/// field is absent or blank. Renderers use this to suppress fragments.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Same as [`present`] for plain string fields.
pub fn non_blank(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|s| !s.is_empty())
}
