use super::*;
use std::io::Write;

#[test]
fn test_builtin_corpus_shape() {
    let corpus = Corpus::load();

    assert_eq!(corpus.len(), 5);
    assert!(!corpus.is_empty());
    assert_eq!(
        corpus.get(0).map(|e| e.question.as_str()),
        Some("What does the eligibility verification agent (EVA) do?")
    );
    assert!(corpus.get(5).is_none());
}

#[test]
fn test_builtin_corpus_entries_are_complete() {
    for entry in &Corpus::load() {
        assert!(!entry.question.trim().is_empty());
        assert!(!entry.answer.trim().is_empty());
    }
}

#[test]
fn test_questions_and_answers_preserve_order() {
    let corpus = Corpus::load();
    let questions = corpus.questions();
    let answers = corpus.answers();

    assert_eq!(questions.len(), answers.len());
    assert!(questions[1].contains("(CAM)"));
    assert!(answers[1].starts_with("CAM streamlines"));
    assert!(questions[2].contains("(PHIL)"));
    assert!(answers[2].starts_with("PHIL automates"));
}

#[test]
fn test_clone_shares_entries() {
    let corpus = Corpus::load();
    let cloned = corpus.clone();

    assert_eq!(corpus, cloned);
    assert!(std::ptr::eq(
        corpus.entries().as_ptr(),
        cloned.entries().as_ptr()
    ));
}

#[test]
fn test_from_json_valid() {
    let corpus = Corpus::from_json(
        r#"[
            {"question": "What is the refund policy?", "answer": "30 days."},
            {"question": "Do you ship abroad?", "answer": "Yes."}
        ]"#,
    )
    .expect("valid corpus");

    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.answers(), vec!["30 days.", "Yes."]);
}

#[test]
fn test_from_json_missing_answer() {
    let err = Corpus::from_json(
        r#"[
            {"question": "One?", "answer": "1"},
            {"question": "Two?"}
        ]"#,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        CorpusError::MalformedEntry {
            index: 1,
            field: "answer"
        }
    ));
}

#[test]
fn test_from_json_blank_question() {
    let err = Corpus::from_json(r#"[{"question": "   ", "answer": "a"}]"#).unwrap_err();

    assert!(matches!(
        err,
        CorpusError::MalformedEntry {
            index: 0,
            field: "question"
        }
    ));
}

#[test]
fn test_from_json_empty_list() {
    let err = Corpus::from_json("[]").unwrap_err();
    assert!(matches!(err, CorpusError::Empty));
}

#[test]
fn test_from_json_not_json() {
    let err = Corpus::from_json("question: answer").unwrap_err();
    assert!(matches!(err, CorpusError::Parse(_)));
}

#[test]
fn test_from_path_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{"question": "Where is the office?", "answer": "Downtown."}}]"#
    )
    .expect("write corpus");

    let corpus = Corpus::from_path(file.path()).expect("load corpus");
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.get(0).map(|e| e.answer.as_str()), Some("Downtown."));
}

#[test]
fn test_from_path_missing_file() {
    let err = Corpus::from_path(Path::new("/nonexistent/corpus.json")).unwrap_err();
    assert!(matches!(err, CorpusError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/corpus.json"));
}
