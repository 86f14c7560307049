use std::sync::Arc;

use crate::application::ports::{
    AudioExtractError, AudioExtractor, CompetencyAssessor, TopicModel, TranscriptionEngine,
    TranscriptionError,
};
use crate::application::services::{keyword_analyzer, topic_extractor};
use crate::domain::{
    format_duration, generate_insights, overall_score, recommend, AnalysisReport, CompetencySet,
};

/// What the caller hands in for analysis: a ready transcript, or raw media
/// that still needs transcription.
pub enum AnalysisInput {
    Transcript(String),
    Media {
        data: Vec<u8>,
        language: Option<String>,
    },
}

/// Runs the full analysis pipeline: transcript resolution, competency
/// scoring, topic extraction, aggregation, and report assembly. Collaborators
/// are optional; a missing assessor or topic model routes that stage straight
/// to its deterministic fallback, and missing transcription wiring rejects
/// media input.
pub struct AnalysisService {
    assessor: Option<Arc<dyn CompetencyAssessor>>,
    topic_model: Option<Arc<dyn TopicModel>>,
    transcription_engine: Option<Arc<dyn TranscriptionEngine>>,
    audio_extractor: Option<Arc<dyn AudioExtractor>>,
}

impl AnalysisService {
    pub fn new(
        assessor: Option<Arc<dyn CompetencyAssessor>>,
        topic_model: Option<Arc<dyn TopicModel>>,
        transcription_engine: Option<Arc<dyn TranscriptionEngine>>,
        audio_extractor: Option<Arc<dyn AudioExtractor>>,
    ) -> Self {
        Self {
            assessor,
            topic_model,
            transcription_engine,
            audio_extractor,
        }
    }

    pub async fn run(
        &self,
        input: AnalysisInput,
        file_name: Option<String>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let (transcript, duration_secs) = self.resolve_transcript(input).await?;

        if transcript.trim().is_empty() {
            return Err(AnalysisError::EmptyTranscript);
        }

        let (scores, topics) = tokio::join!(
            self.score_transcript(&transcript),
            self.extract_topics(&transcript)
        );

        let overall = overall_score(&scores);
        let recommendation = recommend(overall);
        let insights = generate_insights(&scores);

        Ok(AnalysisReport::new(
            file_name,
            format_duration(duration_secs),
            transcript,
            scores,
            overall,
            recommendation,
            topics,
            insights,
        ))
    }

    async fn resolve_transcript(
        &self,
        input: AnalysisInput,
    ) -> Result<(String, Option<f64>), AnalysisError> {
        match input {
            AnalysisInput::Transcript(text) => Ok((text, None)),
            AnalysisInput::Media { data, language } => {
                let extractor = self
                    .audio_extractor
                    .as_ref()
                    .ok_or(AnalysisError::TranscriptionDisabled)?;
                let engine = self
                    .transcription_engine
                    .as_ref()
                    .ok_or(AnalysisError::TranscriptionDisabled)?;

                let audio = extractor.extract_audio(&data).await?;
                tracing::debug!(
                    audio_bytes = audio.data.len(),
                    duration_secs = ?audio.duration_secs,
                    "Audio extracted from uploaded media"
                );

                let transcript = engine.transcribe(&audio.data, language.as_deref()).await?;

                Ok((transcript, audio.duration_secs))
            }
        }
    }

    async fn score_transcript(&self, transcript: &str) -> CompetencySet {
        match &self.assessor {
            Some(assessor) => match assessor.assess(transcript).await {
                Ok(scores) => scores,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Competency assessment failed, falling back to keyword analysis"
                    );
                    keyword_analyzer::analyze(transcript)
                }
            },
            None => keyword_analyzer::analyze(transcript),
        }
    }

    async fn extract_topics(&self, transcript: &str) -> Vec<String> {
        match &self.topic_model {
            Some(model) => match model.extract_topics(transcript).await {
                Ok(mut topics) => {
                    topics.truncate(topic_extractor::MAX_TOPICS);
                    topics
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Topic extraction failed, falling back to keyword topics"
                    );
                    topic_extractor::extract(transcript)
                }
            },
            None => topic_extractor::extract(transcript),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("No data provided. Please provide either transcript or video data.")]
    MissingInput,
    #[error("No transcript provided. Please provide the interview transcript.")]
    EmptyTranscript,
    #[error("Video transcription is not available. Please provide the interview transcript.")]
    TranscriptionDisabled,
    #[error("audio extraction: {0}")]
    AudioExtraction(#[from] AudioExtractError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
}

impl AnalysisError {
    /// Errors caused by the request itself rather than by processing.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::MissingInput
                | AnalysisError::EmptyTranscript
                | AnalysisError::TranscriptionDisabled
        )
    }
}
