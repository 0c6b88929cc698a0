// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds the cross-cutting pieces.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt fragment for plain-text answers.
pub const PLAIN_TEXT_SYSTEM: &str = "Respond with the requested text only. \
    Do NOT add headings, quotes, markdown or commentary.";

/// Joins a role description with a cross-cutting fragment.
pub fn system_prompt(role: &str, fragment: &str) -> String {
    format!("{role} {fragment}")
}
