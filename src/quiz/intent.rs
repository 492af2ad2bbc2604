use crate::mvi::Intent;
use crate::quiz::state::Question;

#[derive(Debug, Clone)]
pub enum QuizIntent {
    /// A question set finished loading. Resets the whole session.
    Load { questions: Vec<Question> },
    /// User picked an option for the current question. Ignored once the
    /// answer is revealed.
    SelectAnswer { option_index: usize },
    /// Advance without recording an answer. Score and streak neutral.
    Skip,
    /// Move to the next question, or complete the quiz on the last one.
    Advance,
    /// Back to the first question with the same question set.
    Restart,
}

impl Intent for QuizIntent {}
