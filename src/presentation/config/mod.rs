mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AnalysisSettings, LoggingSettings, OpenAiSettings, ScoringProvider, ServerSettings, Settings,
    TopicsProvider, TranscriptionProvider, UploadSettings,
};
