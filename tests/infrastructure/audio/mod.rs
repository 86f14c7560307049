#[cfg(target_os = "linux")]
mod ffmpeg_audio_extractor_test;
