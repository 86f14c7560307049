use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub openai: OpenAiSettings,
    pub analysis: AnalysisSettings,
    pub upload: UploadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    /// Overrides the public API endpoint, mainly for tests and proxies.
    pub base_url: Option<String>,
    pub scoring_model: String,
    pub topics_model: String,
    pub whisper_model: String,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    pub scoring: ScoringProvider,
    pub topics: TopicsProvider,
    pub transcription: TranscriptionProvider,
    /// ISO 639-1 hint handed to the transcription engine when the request
    /// does not carry one.
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringProvider {
    OpenAi,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicsProvider {
    OpenAi,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProvider {
    OpenAi,
    Disabled,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}
