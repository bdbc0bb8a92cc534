//! Fixed texts used by the generative fallback.

/// System prompt sent ahead of every fallback question.
pub const SYSTEM_PROMPT: &str = "You are a helpful customer support assistant for Thoughtful AI, a company that specializes in healthcare automation.

Thoughtful AI provides AI-powered automation agents for healthcare processes including:
- EVA (Eligibility Verification Agent) - automates patient eligibility verification
- CAM (Claims Processing Agent) - streamlines claims submission and management
- PHIL (Payment Posting Agent) - automates payment posting to patient accounts

You should be helpful and professional. If asked about topics outside of healthcare automation or Thoughtful AI, politely redirect the conversation back to how Thoughtful AI can help with healthcare automation needs.";

/// Reply to an empty or whitespace question.
pub const EMPTY_QUESTION_MESSAGE: &str =
    "Please ask me a question about Thoughtful AI's healthcare automation solutions.";

/// Reply when no usable API key is set.
pub const MISSING_API_KEY_MESSAGE: &str =
    "API key not configured. Please set up your OpenAI API key to use this feature.";

/// Reply when the provider call fails for any reason.
pub const UNAVAILABLE_MESSAGE: &str = "I'm sorry, I'm currently unable to process your question. Please try again later or contact our support team for assistance with Thoughtful AI's healthcare automation solutions.";

/// Env var holding the provider key.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Placeholder value shipped in sample env files.
pub const API_KEY_PLACEHOLDER: &str = "your-key-here";

/// Returns `true` if `key` is present, non-blank and not the placeholder.
pub fn api_key_usable(key: Option<&str>) -> bool {
    matches!(key, Some(k) if !k.trim().is_empty() && k != API_KEY_PLACEHOLDER)
}

/// Checks `OPENAI_API_KEY` in the current environment.
pub fn openai_api_key_configured() -> bool {
    api_key_usable(std::env::var(ENV_OPENAI_API_KEY).ok().as_deref())
}
