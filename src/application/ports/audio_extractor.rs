use async_trait::async_trait;

/// Audio pulled out of an uploaded video, ready for transcription.
#[derive(Debug, Clone)]
pub struct ExtractedAudio {
    pub data: Vec<u8>,
    /// Source duration in seconds when the probe succeeds. Extraction never
    /// fails on a missing duration.
    pub duration_secs: Option<f64>,
}

#[async_trait]
pub trait AudioExtractor: Send + Sync {
    async fn extract_audio(&self, video: &[u8]) -> Result<ExtractedAudio, AudioExtractError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioExtractError {
    #[error("extraction tool unavailable: {0}")]
    ToolUnavailable(String),
    #[error("audio extraction failed: {0}")]
    ExtractionFailed(String),
}
