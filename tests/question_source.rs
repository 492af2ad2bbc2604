use quizterm::quiz::Question;
use quizterm::source::{validate_questions, MockQuestionSource, QuestionSource, SourceError};

fn question(id: u32, options: &[&str], correct: usize) -> Question {
    Question {
        id,
        prompt: format!("Q{id}"),
        options: options.iter().map(|s| s.to_string()).collect(),
        correct_option_index: correct,
    }
}

#[test]
fn wire_format_decodes_into_questions() {
    let body = r#"[
        {"id": 1, "question": "Q1", "options": ["A", "B"], "correctOptionIndex": 0},
        {"id": 2, "question": "Q2", "options": ["A", "B", "C"], "correctOptionIndex": 2}
    ]"#;
    let questions: Vec<Question> = serde_json::from_str(body).unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].prompt, "Q1");
    assert_eq!(questions[1].correct_option_index, 2);
}

#[test]
fn validation_accepts_playable_sets() {
    let questions = vec![question(1, &["A", "B"], 1), question(2, &["A", "B", "C"], 0)];
    assert!(validate_questions(questions).is_ok());
}

#[test]
fn validation_accepts_the_empty_set() {
    assert!(validate_questions(Vec::new()).is_ok());
}

#[test]
fn validation_rejects_single_option_questions() {
    let questions = vec![question(1, &["only"], 0)];
    let err = validate_questions(questions).unwrap_err();
    assert!(matches!(err, SourceError::Decode(_)));
}

#[test]
fn validation_rejects_out_of_range_correct_index() {
    let questions = vec![question(1, &["A", "B"], 2)];
    let err = validate_questions(questions).unwrap_err();
    assert!(matches!(err, SourceError::Decode(_)));
}

#[tokio::test]
async fn mock_source_returns_queued_questions() {
    let source = MockQuestionSource::new();
    source.queue(Ok(vec![question(1, &["A", "B"], 0)]));

    let questions = source.fetch_questions().await.unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn mock_source_surfaces_queued_errors() {
    let source = MockQuestionSource::new();
    source.queue(Err(SourceError::Status { status: 503 }));

    let err = source.fetch_questions().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 503 }));
}

#[tokio::test]
async fn mock_source_fails_without_a_queued_outcome() {
    let source = MockQuestionSource::new();
    let err = source.fetch_questions().await.unwrap_err();
    assert!(matches!(err, SourceError::Request(_)));
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn retry_consumes_outcomes_in_order() {
    let source = MockQuestionSource::new();
    source.queue(Err(SourceError::Request("connection refused".to_string())));
    source.queue(Ok(vec![question(1, &["A", "B"], 0)]));

    assert!(source.fetch_questions().await.is_err());
    assert!(source.fetch_questions().await.is_ok());
    assert_eq!(source.fetch_count(), 2);
}
