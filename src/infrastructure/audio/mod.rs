mod ffmpeg_audio_extractor;
mod openai_whisper_engine;
mod transcription_engine_factory;

pub use ffmpeg_audio_extractor::FfmpegAudioExtractor;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use transcription_engine_factory::{TranscriptionEngineFactory, TranscriptionFactoryError};
