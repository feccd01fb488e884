// Cross-cutting prompt fragments. Each caller keeps its task prompts in its
// own prompts.rs alongside it.

/// Appended to every system prompt sent through `LlmClient::call_json`.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
