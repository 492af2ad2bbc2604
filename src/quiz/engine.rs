use tracing::debug;

use crate::mvi::Reducer;
use crate::quiz::intent::QuizIntent;
use crate::quiz::reducer::QuizReducer;
use crate::quiz::state::{Question, QuizState};

type Observer = Box<dyn Fn(&QuizState) + Send>;

/// Owns the quiz state and is its sole mutator.
///
/// Every action funnels through [`QuizReducer`]; subscribed observers are
/// notified whenever a dispatch actually changes the state. Intended to be
/// passed by reference to whichever presentation component needs it —
/// there is no global instance.
#[derive(Default)]
pub struct QuizEngine {
    state: QuizState,
    observers: Vec<Observer>,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state-change callback. Called after every mutation with
    /// the new state.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&QuizState) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn load(&mut self, questions: Vec<Question>) {
        self.dispatch(QuizIntent::Load { questions });
    }

    pub fn select_answer(&mut self, option_index: usize) {
        self.dispatch(QuizIntent::SelectAnswer { option_index });
    }

    pub fn skip(&mut self) {
        self.dispatch(QuizIntent::Skip);
    }

    pub fn advance(&mut self) {
        self.dispatch(QuizIntent::Advance);
    }

    pub fn restart(&mut self) {
        self.dispatch(QuizIntent::Restart);
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.state.current_question()
    }

    pub fn is_last_question(&self) -> bool {
        self.state.is_last_question()
    }

    fn dispatch(&mut self, intent: QuizIntent) {
        let next = QuizReducer::reduce(self.state.clone(), intent);
        if next == self.state {
            return;
        }
        debug!(
            index = next.current_index,
            score = next.score,
            streak = next.streak,
            completed = next.completed,
            "quiz state changed"
        );
        self.state = next;
        for observer in &self.observers {
            observer(&self.state);
        }
    }
}
