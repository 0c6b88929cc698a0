//! Text classifier: pulls a profession signal and personal fields out of free text.
//!
//! Best-effort keyword and pattern matching, not a grammar. Every extractor is
//! total: no match means the documented placeholder, never an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::portfolio::library::Profession;

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_LOCATION: &str = "Your Location";
pub const DEFAULT_EMAIL: &str = "your.email@example.com";
pub const DEFAULT_EXPERIENCE_YEARS: &str = "5+";

/// Keyword sets in priority order. First set with any substring hit wins.
const PROFESSION_KEYWORDS: &[(Profession, &[&str])] = &[
    (
        Profession::SoftwareEngineer,
        &["software", "developer", "engineer"],
    ),
    (Profession::DataScientist, &["data", "analyst", "scientist"]),
    (Profession::UiUxDesigner, &["design", "ui", "ux"]),
];

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:my name is|i am|i'm)\s+([a-z]+(?:\s+[a-z]+)?)").expect("valid regex")
});

static LOCATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:from|in|based in|located in)\s+([a-z\s,]+?)(?:\.|,|\s+with|\s+i|\s+and|$)",
    )
    .expect("valid regex")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,})").expect("valid regex")
});

static YEARS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*\+?\s*years?").expect("valid regex"));

/// Output of a single classification pass. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub profession_category: Profession,
    pub extracted_name: String,
    pub extracted_location: String,
    pub extracted_email: String,
    pub experience_years: String,
}

/// Classifies raw self-description text. Never fails.
pub fn classify(raw_text: &str) -> ClassificationResult {
    ClassificationResult {
        profession_category: detect_profession(raw_text),
        extracted_name: extract_name(raw_text).unwrap_or_else(|| DEFAULT_NAME.to_string()),
        extracted_location: extract_location(raw_text)
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        extracted_email: extract_email(raw_text).unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
        experience_years: extract_experience_years(raw_text)
            .unwrap_or_else(|| DEFAULT_EXPERIENCE_YEARS.to_string()),
    }
}

pub fn detect_profession(raw_text: &str) -> Profession {
    let lowered = raw_text.to_lowercase();
    PROFESSION_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(profession, _)| *profession)
        .unwrap_or(Profession::Professional)
}

/// One or two word tokens after "my name is" / "i am" / "i'm", title-cased.
pub fn extract_name(raw_text: &str) -> Option<String> {
    let captured = NAME_PATTERN.captures(raw_text)?.get(1)?.as_str();
    let name = captured
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");
    Some(name).filter(|n| !n.is_empty())
}

pub fn extract_location(raw_text: &str) -> Option<String> {
    let captured = LOCATION_PATTERN.captures(raw_text)?.get(1)?.as_str();
    let location = captured.trim().trim_matches(',').trim();
    Some(location.to_string()).filter(|l| !l.is_empty())
}

pub fn extract_email(raw_text: &str) -> Option<String> {
    EMAIL_PATTERN
        .captures(raw_text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn extract_experience_years(raw_text: &str) -> Option<String> {
    YEARS_PATTERN
        .captures(raw_text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn title_case(word: &str) -> String {
    let lowered = word.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
