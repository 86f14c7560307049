mod audio_extractor;
mod competency_assessor;
mod topic_model;
mod transcription_engine;

pub use audio_extractor::{AudioExtractError, AudioExtractor, ExtractedAudio};
pub use competency_assessor::{AssessorError, CompetencyAssessor};
pub use topic_model::{TopicModel, TopicModelError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
