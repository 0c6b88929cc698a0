//! Theme style registry: fixed palette tokens per theme, shared by every renderer.

use serde::Serialize;

use crate::models::ThemeId;

/// Palette/layout tokens consumed by the renderers. Values are CSS colours or
/// gradients and are embedded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub background: &'static str,
    pub header_background: &'static str,
    pub header_text: &'static str,
    pub heading_color: &'static str,
    pub accent_color: &'static str,
    pub link_color: &'static str,
    pub skill_background: &'static str,
    pub skill_text: &'static str,
}

/// Display metadata for theme pickers.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeInfo {
    pub id: ThemeId,
    pub name: &'static str,
    pub description: &'static str,
    pub tokens: &'static ThemeTokens,
}

static MINIMAL: ThemeTokens = ThemeTokens {
    background: "#ffffff",
    header_background: "#1f2937",
    header_text: "#ffffff",
    heading_color: "#1f2937",
    accent_color: "#3b82f6",
    link_color: "#3b82f6",
    skill_background: "#f3f4f6",
    skill_text: "#1f2937",
};

static MODERN: ThemeTokens = ThemeTokens {
    background: "#f9fafb",
    header_background: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    header_text: "#ffffff",
    heading_color: "#111827",
    accent_color: "#8b5cf6",
    link_color: "#8b5cf6",
    skill_background: "#ede9fe",
    skill_text: "#6d28d9",
};

static CREATIVE: ThemeTokens = ThemeTokens {
    background: "#fef3c7",
    header_background: "linear-gradient(135deg, #f59e0b 0%, #ef4444 100%)",
    header_text: "#ffffff",
    heading_color: "#92400e",
    accent_color: "#f59e0b",
    link_color: "#dc2626",
    skill_background: "#fef3c7",
    skill_text: "#92400e",
};

impl ThemeId {
    pub fn tokens(&self) -> &'static ThemeTokens {
        match self {
            ThemeId::Minimal => &MINIMAL,
            ThemeId::Modern => &MODERN,
            ThemeId::Creative => &CREATIVE,
        }
    }

    pub fn info(&self) -> ThemeInfo {
        let (name, description) = match self {
            ThemeId::Minimal => ("Minimal", "Clean and professional"),
            ThemeId::Modern => ("Modern", "Bold and contemporary"),
            ThemeId::Creative => ("Creative", "Vibrant and unique"),
        };
        ThemeInfo {
            id: *self,
            name,
            description,
            tokens: self.tokens(),
        }
    }
}

/// Looks up the tokens for a theme identifier. Unknown ids get the minimal palette.
pub fn styles_for(theme_id: &str) -> &'static ThemeTokens {
    ThemeId::from_id(theme_id).tokens()
}

pub fn all_themes() -> Vec<ThemeInfo> {
    ThemeId::ALL.iter().map(ThemeId::info).collect()
}
