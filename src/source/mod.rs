//! Question sources.
//!
//! The quiz engine only needs an ordered list of questions; where they come
//! from is behind the [`QuestionSource`] trait. The real implementation
//! fetches JSON over HTTP, the mock is for tests.

mod http;
mod mock;

pub use http::HttpQuestionSource;
pub use mock::MockQuestionSource;

use async_trait::async_trait;
use thiserror::Error;

use crate::quiz::Question;

/// Errors produced while fetching or decoding a question set.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server returned status {status}")]
    Status { status: u16 },

    #[error("invalid question data: {0}")]
    Decode(String),
}

/// Asynchronous provider of an ordered question set.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the full question list. The caller invokes the engine's
    /// `load` only on success; on failure the UI surfaces the error and
    /// offers a retry.
    async fn fetch_questions(&self) -> Result<Vec<Question>, SourceError>;
}

/// Reject question sets the quiz cannot play.
///
/// Each question needs at least two options and a correct index that
/// points at one of them. An empty set is accepted; the engine completes
/// it immediately.
pub fn validate_questions(questions: Vec<Question>) -> Result<Vec<Question>, SourceError> {
    for question in &questions {
        if question.options.len() < 2 {
            return Err(SourceError::Decode(format!(
                "question {} has {} option(s), need at least 2",
                question.id,
                question.options.len()
            )));
        }
        if question.correct_option_index >= question.options.len() {
            return Err(SourceError::Decode(format!(
                "question {} marks option {} correct but has only {} options",
                question.id,
                question.correct_option_index,
                question.options.len()
            )));
        }
    }
    Ok(questions)
}
