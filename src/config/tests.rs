use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_faq_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("FAQ_STRATEGY");
        env::remove_var("FAQ_MODEL_PATH");
        env::remove_var("FAQ_KEYWORD_SCORING");
        env::remove_var("FAQ_THRESHOLD");
        env::remove_var("FAQ_CORPUS_PATH");
        env::remove_var("FAQ_LLM_MODEL");
        env::remove_var("FAQ_LLM_MAX_TOKENS");
        env::remove_var("FAQ_LLM_TEMPERATURE");
        env::remove_var("FAQ_LLM_TIMEOUT_SECS");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.strategy, StrategyKind::Embedding);
    assert_eq!(config.keyword_scoring, KeywordScoring::Overlap);
    assert!(config.model_path.is_none());
    assert!(config.threshold.is_none());
    assert!(config.corpus_path.is_none());
    assert_eq!(config.llm_model, "gpt-3.5-turbo");
    assert_eq!(config.llm_max_tokens, 500);
    assert_eq!(config.llm_temperature, 0.7);
    assert_eq!(config.llm_timeout_secs, 30);
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_faq_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.strategy, StrategyKind::Embedding);
    assert!(config.threshold.is_none());
}

#[test]
#[serial]
fn test_from_env_keyword_strategy() {
    clear_faq_env();

    with_env_vars(
        &[("FAQ_STRATEGY", "Keyword"), ("FAQ_KEYWORD_SCORING", "cosine")],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.strategy, StrategyKind::Keyword);
            assert_eq!(config.keyword_scoring, KeywordScoring::Cosine);
        },
    );
}

#[test]
#[serial]
fn test_from_env_unknown_strategy() {
    clear_faq_env();

    with_env_vars(&[("FAQ_STRATEGY", "telepathy")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidChoice {
                name: "FAQ_STRATEGY",
                ..
            }
        ));
        assert!(err.to_string().contains("telepathy"));
    });
}

#[test]
#[serial]
fn test_from_env_threshold_and_llm_settings() {
    clear_faq_env();

    with_env_vars(
        &[
            ("FAQ_THRESHOLD", "0.55"),
            ("FAQ_LLM_MODEL", "gpt-4o-mini"),
            ("FAQ_LLM_MAX_TOKENS", "256"),
            ("FAQ_LLM_TEMPERATURE", "0.2"),
            ("FAQ_LLM_TIMEOUT_SECS", "5"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.threshold, Some(0.55));
            assert_eq!(config.llm_model, "gpt-4o-mini");
            assert_eq!(config.llm_max_tokens, 256);
            assert_eq!(config.llm_temperature, 0.2);
            assert_eq!(config.llm_timeout_secs, 5);
        },
    );
}

#[test]
#[serial]
fn test_from_env_invalid_threshold_number() {
    clear_faq_env();

    with_env_vars(&[("FAQ_THRESHOLD", "high")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                name: "FAQ_THRESHOLD",
                ..
            }
        ));
    });
}

#[test]
#[serial]
fn test_from_env_blank_values_use_defaults() {
    clear_faq_env();

    with_env_vars(
        &[
            ("FAQ_STRATEGY", "  "),
            ("FAQ_MODEL_PATH", ""),
            ("FAQ_THRESHOLD", ""),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.strategy, StrategyKind::Embedding);
            assert!(config.model_path.is_none());
            assert!(config.threshold.is_none());
        },
    );
}

#[test]
#[serial]
fn test_from_env_paths() {
    clear_faq_env();

    with_env_vars(
        &[
            ("FAQ_MODEL_PATH", "/models/all-minilm-l6-v2"),
            ("FAQ_CORPUS_PATH", "/etc/faq/corpus.json"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(
                config.model_path,
                Some(PathBuf::from("/models/all-minilm-l6-v2"))
            );
            assert_eq!(
                config.corpus_path,
                Some(PathBuf::from("/etc/faq/corpus.json"))
            );
        },
    );
}

#[test]
fn test_validate_threshold_out_of_range() {
    let config = Config {
        threshold: Some(1.5),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ThresholdOutOfRange { .. }));
}

#[test]
fn test_validate_temperature_out_of_range() {
    let config = Config {
        llm_temperature: 3.0,
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::TemperatureOutOfRange { .. }));
}

#[test]
fn test_validate_zero_timeout() {
    let config = Config {
        llm_timeout_secs: 0,
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::ZeroValue { .. }));
}

#[test]
fn test_validate_nonexistent_model_path() {
    let config = Config {
        model_path: Some(PathBuf::from("/nonexistent/path/to/encoder")),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PathNotFound { .. }));
}

#[test]
fn test_validate_model_path_is_file() {
    let config = Config {
        model_path: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotADirectory { .. }));
}

#[test]
fn test_validate_corpus_path_is_directory() {
    let config = Config {
        corpus_path: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src")),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotAFile { .. }));
}

#[test]
fn test_validate_success_with_valid_paths() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let config = Config {
        model_path: Some(manifest_dir.join("src")),
        corpus_path: Some(manifest_dir.join("Cargo.toml")),
        threshold: Some(0.3),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::ThresholdOutOfRange { value: 2.0 };
    assert!(err.to_string().contains("between 0.0 and 1.0"));

    let err = ConfigError::PathNotFound {
        path: PathBuf::from("/some/path"),
    };
    assert!(err.to_string().contains("/some/path"));

    let err = ConfigError::InvalidNumber {
        name: "FAQ_LLM_MAX_TOKENS",
        value: "lots".to_string(),
    };
    assert!(err.to_string().contains("FAQ_LLM_MAX_TOKENS"));
    assert!(err.to_string().contains("lots"));
}
