//! Quiz state machine.
//!
//! `QuizReducer` holds every progression rule (scoring, streaks, milestone
//! messages, completion); `QuizEngine` wraps it with ownership of the
//! current state and observer notification for the presentation layer.

mod engine;
mod intent;
mod reducer;
mod state;

pub use engine::QuizEngine;
pub use intent::QuizIntent;
pub use reducer::QuizReducer;
pub use state::{Question, QuizState};
