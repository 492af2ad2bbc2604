//! Mock question source for tests.
//!
//! Queues fetch outcomes and counts calls so tests can drive both the
//! success and the failure path without a server.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::quiz::Question;
use crate::source::{QuestionSource, SourceError};

#[derive(Default)]
pub struct MockQuestionSource {
    inner: Mutex<MockInner>,
}

#[derive(Default)]
struct MockInner {
    outcomes: VecDeque<Result<Vec<Question>, SourceError>>,
    fetch_count: usize,
}

impl MockQuestionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next `fetch_questions()` call.
    pub fn queue(&self, outcome: Result<Vec<Question>, SourceError>) {
        self.inner.lock().outcomes.push_back(outcome);
    }

    /// Number of fetches performed so far.
    pub fn fetch_count(&self) -> usize {
        self.inner.lock().fetch_count
    }
}

#[async_trait]
impl QuestionSource for MockQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, SourceError> {
        let mut inner = self.inner.lock();
        inner.fetch_count += 1;
        inner
            .outcomes
            .pop_front()
            .unwrap_or_else(|| Err(SourceError::Request("no queued outcome".to_string())))
    }
}
