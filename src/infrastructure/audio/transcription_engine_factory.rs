use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::TranscriptionEngine;
use crate::presentation::config::TranscriptionProvider;

use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionEngineFactory;

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionFactoryError {
    #[error("missing API key: OpenAI Whisper requires OPENAI_API_KEY")]
    MissingApiKey,
}

impl TranscriptionEngineFactory {
    /// `Disabled` wiring yields `None`: media uploads are then rejected and
    /// only ready transcripts are accepted.
    pub fn create(
        provider: TranscriptionProvider,
        model: String,
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Option<Arc<dyn TranscriptionEngine>>, TranscriptionFactoryError> {
        match provider {
            TranscriptionProvider::Disabled => {
                tracing::info!("Transcription disabled, accepting transcript input only");
                Ok(None)
            }
            TranscriptionProvider::OpenAi => {
                let key = api_key
                    .filter(|k| !k.is_empty())
                    .ok_or(TranscriptionFactoryError::MissingApiKey)?;
                tracing::info!(model = %model, "Using OpenAI Whisper transcription");
                Ok(Some(Arc::new(OpenAiWhisperEngine::new(
                    key,
                    base_url,
                    Some(model),
                    timeout,
                ))))
            }
        }
    }
}
