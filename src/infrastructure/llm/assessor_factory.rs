use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{CompetencyAssessor, TopicModel};
use crate::presentation::config::{ScoringProvider, TopicsProvider};

use crate::infrastructure::llm::{OpenAiAssessor, OpenAiTopicModel};

pub struct AssessorFactory;

#[derive(Debug, thiserror::Error)]
pub enum AssessorFactoryError {
    #[error("missing API key: OpenAI analysis requires OPENAI_API_KEY")]
    MissingApiKey,
}

impl AssessorFactory {
    /// `Offline` wiring yields `None`: the pipeline then runs on keyword
    /// analysis alone.
    pub fn create_assessor(
        provider: ScoringProvider,
        model: String,
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Option<Arc<dyn CompetencyAssessor>>, AssessorFactoryError> {
        match provider {
            ScoringProvider::Offline => {
                tracing::info!("Competency scoring configured offline, using keyword analysis");
                Ok(None)
            }
            ScoringProvider::OpenAi => {
                let key = api_key
                    .filter(|k| !k.is_empty())
                    .ok_or(AssessorFactoryError::MissingApiKey)?;
                tracing::info!(model = %model, "Using OpenAI competency assessor");
                Ok(Some(Arc::new(OpenAiAssessor::new(
                    key,
                    base_url,
                    Some(model),
                    timeout,
                ))))
            }
        }
    }

    pub fn create_topic_model(
        provider: TopicsProvider,
        model: String,
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Option<Arc<dyn TopicModel>>, AssessorFactoryError> {
        match provider {
            TopicsProvider::Offline => {
                tracing::info!("Topic extraction configured offline, using keyword matching");
                Ok(None)
            }
            TopicsProvider::OpenAi => {
                let key = api_key
                    .filter(|k| !k.is_empty())
                    .ok_or(AssessorFactoryError::MissingApiKey)?;
                tracing::info!(model = %model, "Using OpenAI topic model");
                Ok(Some(Arc::new(OpenAiTopicModel::new(
                    key,
                    base_url,
                    Some(model),
                    timeout,
                ))))
            }
        }
    }
}
