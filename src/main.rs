//! FAQ router terminal front-end.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, bail};
use mimalloc::MiMalloc;
use tokio::io::{AsyncBufReadExt, BufReader};

use faq_router::assistant::SupportAssistant;
use faq_router::config::Config;
use faq_router::constants::{APP_TITLE, INPUT_PROMPT};
use faq_router::corpus::Corpus;
use faq_router::fallback::{GenaiFallback, openai_api_key_configured};
use faq_router::matcher::{MatchOutcome, Matcher, MatcherBuilder, ScoredEntry};
use faq_router::session::ChatSession;
use faq_router::strategy::StrategyKind;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage: faq-router [--ask <question> | --explain <question> | --list]";

#[derive(Debug, PartialEq)]
enum Mode {
    Repl,
    Ask(String),
    Explain(String),
    List,
}

fn parse_mode(args: &[String]) -> anyhow::Result<Mode> {
    match args {
        [] => Ok(Mode::Repl),
        [flag] if flag == "--list" => Ok(Mode::List),
        [flag, rest @ ..] if flag == "--ask" && !rest.is_empty() => Ok(Mode::Ask(rest.join(" "))),
        [flag, rest @ ..] if flag == "--explain" && !rest.is_empty() => {
            Ok(Mode::Explain(rest.join(" ")))
        }
        _ => bail!("{USAGE}"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return Ok(());
    }
    let mode = parse_mode(&args)?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let corpus = match &config.corpus_path {
        Some(path) => Corpus::from_path(path)
            .with_context(|| format!("failed to load corpus from {}", path.display()))?,
        None => Corpus::load(),
    };

    let matcher = Arc::new(MatcherBuilder::from_config(&config, corpus).build());

    match mode {
        Mode::List => {
            for (index, entry) in matcher.corpus().iter().enumerate() {
                println!("{:>2}. {}", index + 1, entry.question);
            }
            Ok(())
        }
        Mode::Explain(question) => explain(&matcher, &question, config.threshold),
        Mode::Ask(question) => {
            let assistant = build_assistant(&config, matcher);
            let mut session = ChatSession::new();
            assistant
                .respond_streaming(&mut session, &question, print_chunk)
                .await;
            println!();
            Ok(())
        }
        Mode::Repl => {
            let assistant = build_assistant(&config, matcher);
            repl(&assistant).await
        }
    }
}

fn build_assistant(config: &Config, matcher: Arc<Matcher>) -> SupportAssistant {
    if !openai_api_key_configured() {
        tracing::warn!("OPENAI_API_KEY not configured; unmatched questions get a setup notice");
    }
    let fallback = Arc::new(GenaiFallback::from_config(config));
    SupportAssistant::new(matcher, fallback).with_threshold(config.threshold)
}

fn print_chunk(chunk: &str) {
    if let Err(e) = write_chunk(&mut std::io::stdout(), chunk) {
        tracing::debug!(error = %e, "Failed to write reply chunk");
    }
}

fn write_chunk<W: Write>(out: &mut W, chunk: &str) -> std::io::Result<()> {
    out.write_all(chunk.as_bytes())?;
    out.flush()
}

fn explain(matcher: &Matcher, question: &str, threshold: Option<f32>) -> anyhow::Result<()> {
    let selection = matcher.selection();
    println!("strategy: {} (preferred: {})", selection.active, selection.preferred);
    if let Some(reason) = &selection.fallback_reason {
        println!("fallback reason: {reason}");
    }

    let primary = matcher
        .rank(question)
        .and_then(|ranking| Ok((ranking, matcher.explain(question, threshold)?)));

    match primary {
        Ok((ranking, outcome)) => print_decision(matcher, &ranking, &outcome),
        Err(error) => {
            println!("{} strategy failed: {error}", selection.active);
            let (Some(ranking), Some(outcome)) = (
                matcher.degraded_rank(question),
                matcher.degraded_explain(question, threshold),
            ) else {
                return Err(error.into());
            };
            println!("degraded to {} for this query", StrategyKind::Keyword);
            print_decision(matcher, &ranking?, &outcome?);
        }
    }
    Ok(())
}

fn print_decision(matcher: &Matcher, ranking: &[ScoredEntry], outcome: &MatchOutcome) {
    for scored in ranking {
        let question = matcher
            .corpus()
            .get(scored.index)
            .map(|e| e.question.as_str())
            .unwrap_or_default();
        println!("  [{}] {:.4}  {}", scored.index, scored.score, question);
    }

    println!("decision: {outcome}");
    if let MatchOutcome::Matched { index, .. } = *outcome
        && let Some(entry) = matcher.corpus().get(index)
    {
        println!("answer: {}", entry.answer);
    }
}

async fn repl(assistant: &SupportAssistant) -> anyhow::Result<()> {
    println!(
        r#"
 ___ _   ___    ___           _
| __/_\ / _ \  | _ \___ _  _| |_ ___ _ _
| _/ _ \ (_) | |   / _ \ || |  _/ -_) '_|
|_/_/ \_\__\_\ |_|_\___/\_,_|\__\___|_|

        {APP_TITLE}
"#
    );

    let mut session = ChatSession::with_welcome();
    if let Some(welcome) = session.last() {
        println!("assistant> {}\n", welcome.content);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{INPUT_PROMPT}\nyou> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if matches!(question, "exit" | "quit") {
            break;
        }

        print!("assistant> ");
        let reply = assistant
            .respond_streaming(&mut session, question, print_chunk)
            .await;
        println!();
        if let Some(score) = reply.score() {
            tracing::debug!(score, "Served curated answer");
        }
        println!();
    }

    tracing::info!(messages = session.len(), "Session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode(&args(&[])).unwrap(), Mode::Repl);
        assert_eq!(parse_mode(&args(&["--list"])).unwrap(), Mode::List);
        assert_eq!(
            parse_mode(&args(&["--ask", "What", "does", "EVA", "do?"])).unwrap(),
            Mode::Ask("What does EVA do?".to_string())
        );
        assert_eq!(
            parse_mode(&args(&["--explain", "claims"])).unwrap(),
            Mode::Explain("claims".to_string())
        );
        assert!(parse_mode(&args(&["--ask"])).is_err());
        assert!(parse_mode(&args(&["--bogus"])).is_err());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_chunk() {
        let mut out = Vec::new();
        write_chunk(&mut out, "EVA ").unwrap();
        write_chunk(&mut out, "automates").unwrap();
        assert_eq!(out, b"EVA automates");

        let err = write_chunk(&mut ClosedPipe, "lost").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
