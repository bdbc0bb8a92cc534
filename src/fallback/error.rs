use thiserror::Error;

#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,

    #[error("provider request failed: {0}")]
    Provider(#[from] genai::Error),

    #[error("provider did not answer within {secs}s")]
    Timeout { secs: u64 },

    #[error("provider returned no text")]
    EmptyResponse,
}
