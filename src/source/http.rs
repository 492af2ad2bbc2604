use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::SourceConfig;
use crate::quiz::Question;
use crate::source::{validate_questions, QuestionSource, SourceError};

/// Fetches questions as a JSON array from a configured HTTP endpoint.
pub struct HttpQuestionSource {
    client: Client,
    endpoint: String,
}

impl HttpQuestionSource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|e| SourceError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url.clone(),
        })
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, SourceError> {
        debug!(endpoint = %self.endpoint, "fetching questions");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "question fetch rejected");
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let questions: Vec<Question> = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))?;

        debug!(count = questions.len(), "questions fetched");
        validate_questions(questions)
    }
}
