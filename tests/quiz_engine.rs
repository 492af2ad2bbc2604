use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use quizterm::quiz::{Question, QuizEngine, QuizState};

fn questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            prompt: "Q1".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            correct_option_index: 0,
        },
        Question {
            id: 2,
            prompt: "Q2".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            correct_option_index: 1,
        },
    ]
}

#[test]
fn load_notifies_observers() {
    let mut engine = QuizEngine::new();
    let notified = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notified);
    engine.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    engine.load(questions());
    assert_eq!(notified.load(Ordering::SeqCst), 1);
}

#[test]
fn observer_sees_the_new_state() {
    let mut engine = QuizEngine::new();
    let seen: Arc<Mutex<Option<QuizState>>> = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&seen);
    engine.subscribe(move |state| {
        *slot.lock().unwrap() = Some(state.clone());
    });

    engine.load(questions());
    engine.select_answer(0);

    let state = seen.lock().unwrap().clone().expect("observer not called");
    assert_eq!(state.score, 1);
    assert!(state.answer_revealed);
}

#[test]
fn noop_dispatch_does_not_notify() {
    let mut engine = QuizEngine::new();
    engine.load(questions());
    engine.select_answer(0);

    let notified = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notified);
    engine.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Second selection after the reveal is a guarded no-op.
    engine.select_answer(1);
    assert_eq!(notified.load(Ordering::SeqCst), 0);

    // Advancing past completion is a no-op too.
    engine.advance();
    engine.advance();
    engine.select_answer(0);
    engine.advance();
    let after_completion = notified.load(Ordering::SeqCst);
    engine.advance();
    assert_eq!(notified.load(Ordering::SeqCst), after_completion);
}

#[test]
fn engine_walks_the_state_machine() {
    let mut engine = QuizEngine::new();
    engine.load(questions());
    assert_eq!(engine.current_question().map(|q| q.id), Some(1));
    assert!(!engine.is_last_question());

    engine.select_answer(0);
    assert_eq!(engine.state().score, 1);

    engine.advance();
    assert_eq!(engine.current_question().map(|q| q.id), Some(2));
    assert!(engine.is_last_question());

    engine.select_answer(0); // wrong
    engine.advance();
    assert!(engine.state().completed);

    engine.restart();
    assert!(!engine.state().completed);
    assert_eq!(engine.state().score, 0);
    assert_eq!(engine.current_question().map(|q| q.id), Some(1));
}

#[test]
fn skip_advances_without_scoring() {
    let mut engine = QuizEngine::new();
    engine.load(questions());
    engine.skip();
    assert_eq!(engine.state().current_index, 1);
    assert_eq!(engine.state().score, 0);
    assert_eq!(engine.state().streak, 0);
}

#[test]
fn empty_engine_has_no_current_question() {
    let engine = QuizEngine::new();
    assert!(engine.current_question().is_none());
    assert!(engine.is_last_question());
}
