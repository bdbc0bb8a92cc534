//! Cross-cutting, shared constants.
//!
//! Thresholds are nominal values; see [`crate::strategy::MatchStrategy::effective_threshold`]
//! for the cutoff actually applied per strategy.

/// Nominal threshold for the keyword strategy.
pub const DEFAULT_KEYWORD_THRESHOLD: f32 = 0.30;

/// Nominal threshold for the dense-embedding strategy.
pub const DEFAULT_EMBEDDING_THRESHOLD: f32 = 0.40;

/// Lexical-overlap scores run lower than encoder cosine scores for true matches,
/// so the keyword strategy compares against `nominal * KEYWORD_THRESHOLD_SCALE`.
pub const KEYWORD_THRESHOLD_SCALE: f32 = 0.7;

/// Output dimension of the default sentence encoder (all-MiniLM family).
pub const DEFAULT_ENCODER_DIM: usize = 384;

/// Max tokens fed to the sentence encoder.
pub const DEFAULT_ENCODER_MAX_SEQ_LEN: usize = 256;

/// Domain vocabulary for the keyword vector (agent names and domain nouns).
pub const DOMAIN_KEYWORDS: [&str; 16] = [
    "eva",
    "cam",
    "phil",
    "eligibility",
    "verification",
    "claims",
    "processing",
    "payment",
    "posting",
    "agent",
    "automates",
    "benefits",
    "thoughtful",
    "ai",
    "healthcare",
    "automation",
];

/// Keyword vector width: one count per vocabulary term plus the total token count.
pub const KEYWORD_VECTOR_DIM: usize = DOMAIN_KEYWORDS.len() + 1;

/// Default model for the generative fallback.
pub const DEFAULT_LLM_MODEL: &str = "gpt-3.5-turbo";

pub const DEFAULT_LLM_MAX_TOKENS: u32 = 500;

pub const DEFAULT_LLM_TEMPERATURE: f64 = 0.7;

pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Title shown by the terminal front-end.
pub const APP_TITLE: &str = "Thoughtful AI Support Assistant";

/// First assistant message of every chat session.
pub const WELCOME_MESSAGE: &str = "👋 Hello! I'm your Thoughtful AI Support Assistant.

I can help you with questions about our healthcare automation agents:
- EVA (Eligibility Verification Agent)
- CAM (Claims Processing Agent)
- PHIL (Payment Posting Agent)

Feel free to ask me anything about Thoughtful AI!";

/// Prompt shown before each question in the terminal front-end.
pub const INPUT_PROMPT: &str = "Ask me about Thoughtful AI's healthcare automation solutions...";
