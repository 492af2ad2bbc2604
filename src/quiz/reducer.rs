use crate::mvi::Reducer;
use crate::quiz::intent::QuizIntent;
use crate::quiz::state::QuizState;

pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizState;
    type Intent = QuizIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuizIntent::Load { questions } => QuizState::with_questions(questions),
            QuizIntent::SelectAnswer { option_index } => select_answer(state, option_index),
            QuizIntent::Skip | QuizIntent::Advance => advance(state),
            QuizIntent::Restart => QuizState::with_questions(state.questions),
        }
    }
}

fn select_answer(mut state: QuizState, option_index: usize) -> QuizState {
    // One scoring event per question: a revealed answer cannot be changed.
    if state.answer_revealed || state.completed {
        return state;
    }
    let Some(question) = state.current_question() else {
        return state;
    };

    // An out-of-range index is just an incorrect answer.
    let is_correct = option_index == question.correct_option_index;
    state.selected_answer = Some(option_index);
    state.answer_revealed = true;

    if is_correct {
        state.score += 1;
        state.streak += 1;
        state.highest_streak = state.highest_streak.max(state.streak);
        state.streak_message = milestone_message(state.streak);
    } else {
        state.streak = 0;
        state.streak_message = None;
    }
    state
}

fn advance(mut state: QuizState) -> QuizState {
    if state.current_index + 1 < state.questions.len() {
        state.current_index += 1;
        state.selected_answer = None;
        state.answer_revealed = false;
        state.streak_message = None;
    } else {
        // Last question (or empty set): the index stays put.
        state.completed = true;
    }
    state
}

/// Achievement message for streaks that cross a milestone.
fn milestone_message(streak: u32) -> Option<String> {
    match streak {
        3 | 5 | 7 => Some(format!("{streak} questions streak achieved !!")),
        10 => Some("Perfect! 10 questions streak achieved !!".to_string()),
        _ => None,
    }
}
