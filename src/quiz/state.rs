use serde::Deserialize;

use crate::mvi::UiState;

/// A single multiple-choice question.
///
/// Field renames match the JSON the question endpoint serves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "correctOptionIndex")]
    pub correct_option_index: usize,
}

/// Full state of a quiz session.
///
/// Mutated exclusively through `QuizReducer`; `selected_answer` is `None`
/// whenever `answer_revealed` is false, and `highest_streak >= streak`
/// always holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizState {
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub selected_answer: Option<usize>,
    pub answer_revealed: bool,
    pub score: u32,
    pub streak: u32,
    pub highest_streak: u32,
    /// Transient achievement message, cleared on advance.
    pub streak_message: Option<String>,
    pub completed: bool,
}

impl UiState for QuizState {}

impl QuizState {
    /// Fresh state for a question set. Also the restart target.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// True on the last question, and for the empty set.
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Final score as a rounded percentage.
    pub fn score_percentage(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        let ratio = f64::from(self.score) * 100.0 / self.questions.len() as f64;
        ratio.round() as u32
    }
}
