// Shared prompt fragments. Each provider keeps its own prompts alongside it;
// only cross-cutting pieces live here.

/// Appended to every prompt whose reply is decoded as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Your response MUST ONLY be the JSON. \
    Do NOT include any text outside the JSON. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Separator between multiple resumes inside one prompt.
pub const RESUME_SEPARATOR: &str = "\n\n---\n\n";
