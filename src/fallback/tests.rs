use super::*;
use futures_util::stream::{self, StreamExt};
use serial_test::serial;
use std::env;
use std::time::Duration;

use crate::config::Config;
use provider::text_chunks;

fn set_api_key(value: Option<&str>) {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        match value {
            Some(v) => env::set_var(prompt::ENV_OPENAI_API_KEY, v),
            None => env::remove_var(prompt::ENV_OPENAI_API_KEY),
        }
    }
}

#[test]
fn test_api_key_usable() {
    assert!(api_key_usable(Some("sk-test")));
    assert!(!api_key_usable(None));
    assert!(!api_key_usable(Some("")));
    assert!(!api_key_usable(Some("   ")));
    assert!(!api_key_usable(Some("your-key-here")));
}

#[test]
fn test_system_prompt_mentions_agents() {
    for agent in ["EVA", "CAM", "PHIL", "Thoughtful AI"] {
        assert!(SYSTEM_PROMPT.contains(agent));
    }
}

#[test]
fn test_from_config() {
    let config = Config {
        llm_model: "gpt-4o-mini".to_string(),
        llm_timeout_secs: 5,
        ..Default::default()
    };
    let fallback = GenaiFallback::from_config(&config);

    assert_eq!(fallback.model(), "gpt-4o-mini");
    assert_eq!(fallback.timeout(), Duration::from_secs(5));
    assert_eq!(GenaiFallback::default().model(), "gpt-3.5-turbo");
}

mod genai_tests {
    use super::*;

    #[tokio::test]
    #[serial]
    async fn test_blank_question_skips_provider() {
        set_api_key(Some("sk-test"));
        let fallback = GenaiFallback::default();

        assert_eq!(fallback.answer("   ").await, EMPTY_QUESTION_MESSAGE);
        let chunks: Vec<String> = fallback.answer_stream("").collect().await;
        assert_eq!(chunks, vec![EMPTY_QUESTION_MESSAGE.to_string()]);

        set_api_key(None);
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_key_message() {
        let fallback = GenaiFallback::default();

        for key in [None, Some(""), Some("your-key-here")] {
            set_api_key(key);
            assert!(!openai_api_key_configured());
            assert_eq!(fallback.answer("What is RCM?").await, MISSING_API_KEY_MESSAGE);

            let chunks: Vec<String> = fallback.answer_stream("What is RCM?").collect().await;
            assert_eq!(chunks, vec![MISSING_API_KEY_MESSAGE.to_string()]);
        }

        set_api_key(None);
    }

    #[tokio::test]
    #[serial]
    async fn test_complete_reports_missing_key() {
        set_api_key(None);
        let err = GenaiFallback::default()
            .complete("What is RCM?")
            .await
            .unwrap_err();
        assert!(matches!(err, FallbackError::MissingApiKey));
    }
}

mod stream_tests {
    use super::*;

    #[tokio::test]
    async fn test_chunks_skip_empty_events() {
        let events = stream::iter(vec![
            Ok::<_, &str>(None),
            Ok(Some("Hello".to_string())),
            Ok(Some(String::new())),
            Ok(Some(", world".to_string())),
            Ok(None),
        ])
        .boxed();

        let chunks: Vec<String> = text_chunks(events).collect().await;
        assert_eq!(chunks, vec!["Hello".to_string(), ", world".to_string()]);
    }

    #[tokio::test]
    async fn test_mid_stream_error_yields_apology_and_ends() {
        let events = stream::iter(vec![
            Ok(Some("Partial".to_string())),
            Err("connection reset"),
            Ok(Some("never seen".to_string())),
        ])
        .boxed();

        let chunks: Vec<String> = text_chunks(events).collect().await;
        assert_eq!(
            chunks,
            vec!["Partial".to_string(), UNAVAILABLE_MESSAGE.to_string()]
        );
    }

    #[tokio::test]
    async fn test_empty_stream() {
        let events = stream::iter(Vec::<Result<Option<String>, &str>>::new()).boxed();
        let chunks: Vec<String> = text_chunks(events).collect().await;
        assert!(chunks.is_empty());
    }
}

mod local_tests {
    use super::*;

    #[tokio::test]
    async fn test_static_fallback() {
        let fallback = StaticFallback::new("Offline.");

        assert_eq!(fallback.answer("anything").await, "Offline.");
        assert_eq!(fallback.answer(" ").await, EMPTY_QUESTION_MESSAGE);
        let chunks: Vec<String> = fallback.answer_stream("anything").collect().await;
        assert_eq!(chunks.concat(), "Offline.");
        assert_eq!(StaticFallback::default().answer("x").await, UNAVAILABLE_MESSAGE);
    }

    #[tokio::test]
    async fn test_mock_records_questions() {
        let fallback = MockFallback::new("Generated answer here");

        assert_eq!(fallback.answer("first").await, "Generated answer here");
        let chunks: Vec<String> = fallback.answer_stream("second").collect().await;

        assert_eq!(chunks, vec!["Generated ", "answer ", "here"]);
        assert_eq!(chunks.concat(), "Generated answer here");
        assert_eq!(fallback.questions(), vec!["first", "second"]);
        assert_eq!(fallback.call_count(), 2);
    }
}
