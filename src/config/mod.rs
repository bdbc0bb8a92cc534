//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `FAQ_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_LLM_MAX_TOKENS, DEFAULT_LLM_MODEL, DEFAULT_LLM_TEMPERATURE, DEFAULT_LLM_TIMEOUT_SECS,
};
use crate::strategy::{KeywordScoring, StrategyKind};

/// Router configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `FAQ_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strategy tried first when building the matcher. Default: embedding.
    pub strategy: StrategyKind,

    /// Sentence-encoder directory (`config.json`, `model.safetensors`, `tokenizer.json`).
    pub model_path: Option<PathBuf>,

    /// Similarity pairing for the keyword strategy. Default: overlap.
    ///
    /// `FAQ_KEYWORD_SCORING=cosine` scores nearly every question above the
    /// cutoff, so off-topic questions get a curated answer instead of the fallback.
    pub keyword_scoring: KeywordScoring,

    /// Nominal threshold override; `None` uses the active strategy's default.
    pub threshold: Option<f32>,

    /// JSON corpus replacing the built-in knowledge base.
    pub corpus_path: Option<PathBuf>,

    /// Model name for the generative fallback. Default: `gpt-3.5-turbo`.
    pub llm_model: String,

    /// Completion token cap for the fallback. Default: `500`.
    pub llm_max_tokens: u32,

    /// Sampling temperature for the fallback. Default: `0.7`.
    pub llm_temperature: f64,

    /// Fallback request timeout in seconds. Default: `30`.
    pub llm_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Embedding,
            model_path: None,
            keyword_scoring: KeywordScoring::default(),
            threshold: None,
            corpus_path: None,
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_max_tokens: DEFAULT_LLM_MAX_TOKENS,
            llm_temperature: DEFAULT_LLM_TEMPERATURE,
            llm_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
        }
    }
}

impl Config {
    const ENV_STRATEGY: &'static str = "FAQ_STRATEGY";
    const ENV_MODEL_PATH: &'static str = "FAQ_MODEL_PATH";
    const ENV_KEYWORD_SCORING: &'static str = "FAQ_KEYWORD_SCORING";
    const ENV_THRESHOLD: &'static str = "FAQ_THRESHOLD";
    const ENV_CORPUS_PATH: &'static str = "FAQ_CORPUS_PATH";
    const ENV_LLM_MODEL: &'static str = "FAQ_LLM_MODEL";
    const ENV_LLM_MAX_TOKENS: &'static str = "FAQ_LLM_MAX_TOKENS";
    const ENV_LLM_TEMPERATURE: &'static str = "FAQ_LLM_TEMPERATURE";
    const ENV_LLM_TIMEOUT_SECS: &'static str = "FAQ_LLM_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let strategy = Self::parse_choice_from_env(Self::ENV_STRATEGY, defaults.strategy)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let keyword_scoring =
            Self::parse_choice_from_env(Self::ENV_KEYWORD_SCORING, defaults.keyword_scoring)?;
        let threshold = Self::parse_optional_number_from_env::<f32>(Self::ENV_THRESHOLD)?;
        let corpus_path = Self::parse_optional_path_from_env(Self::ENV_CORPUS_PATH);
        let llm_model = Self::parse_string_from_env(Self::ENV_LLM_MODEL, defaults.llm_model);
        let llm_max_tokens = Self::parse_optional_number_from_env(Self::ENV_LLM_MAX_TOKENS)?
            .unwrap_or(defaults.llm_max_tokens);
        let llm_temperature = Self::parse_optional_number_from_env(Self::ENV_LLM_TEMPERATURE)?
            .unwrap_or(defaults.llm_temperature);
        let llm_timeout_secs = Self::parse_optional_number_from_env(Self::ENV_LLM_TIMEOUT_SECS)?
            .unwrap_or(defaults.llm_timeout_secs);

        Ok(Self {
            strategy,
            model_path,
            keyword_scoring,
            threshold,
            corpus_path,
            llm_model,
            llm_max_tokens,
            llm_temperature,
            llm_timeout_secs,
        })
    }

    /// Validates ranges and paths (does not load anything).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(value) = self.threshold
            && !(0.0..=1.0).contains(&value)
        {
            return Err(ConfigError::ThresholdOutOfRange { value });
        }

        if !(0.0..=2.0).contains(&self.llm_temperature) {
            return Err(ConfigError::TemperatureOutOfRange {
                value: self.llm_temperature,
            });
        }

        if self.llm_max_tokens == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_LLM_MAX_TOKENS,
            });
        }

        if self.llm_timeout_secs == 0 {
            return Err(ConfigError::ZeroValue {
                name: Self::ENV_LLM_TIMEOUT_SECS,
            });
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if let Some(ref path) = self.corpus_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    fn parse_choice_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr<Err = String>,
    {
        match env::var(var_name) {
            Ok(value) if !value.trim().is_empty() => value
                .parse()
                .map_err(|reason| ConfigError::InvalidChoice {
                    name: var_name,
                    reason,
                }),
            _ => Ok(default),
        }
    }

    fn parse_optional_number_from_env<T: FromStr>(
        var_name: &'static str,
    ) -> Result<Option<T>, ConfigError> {
        match env::var(var_name) {
            Ok(value) if !value.trim().is_empty() => value
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                }),
            _ => Ok(None),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }
}
