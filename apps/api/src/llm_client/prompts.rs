// Shared prompt fragments.
// Each task's full template lives in generation::prompts; this file contains
// cross-cutting instructions reused by more than one task.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Closing line appended to every template that expects a JSON object back.
pub const RETURN_JSON_ONLY: &str = "Return only the JSON object, no additional text.";
