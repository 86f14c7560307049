use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioExtractError, AudioExtractor, ExtractedAudio};

/// Pulls the audio track out of uploaded video by shelling out to ffmpeg.
/// Mono 16 kHz 64 kbps mp3 keeps long interviews under the Whisper API's
/// 25 MB upload cap.
pub struct FfmpegAudioExtractor {
    ffmpeg_path: String,
    ffprobe_path: String,
}

impl FfmpegAudioExtractor {
    pub fn new(ffmpeg_path: Option<String>, ffprobe_path: Option<String>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.unwrap_or_else(|| "ffmpeg".to_string()),
            ffprobe_path: ffprobe_path.unwrap_or_else(|| "ffprobe".to_string()),
        }
    }

    async fn run_ffmpeg(&self, input: &Path, output: &Path) -> Result<(), AudioExtractError> {
        let result = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(input)
            .args(["-vn", "-ac", "1", "-ar", "16000", "-b:a", "64k", "-y"])
            .arg(output)
            // The request future can be dropped mid-transcode when the client
            // disconnects; the child must not outlive it.
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    AudioExtractError::ToolUnavailable(self.ffmpeg_path.clone())
                }
                _ => AudioExtractError::ExtractionFailed(e.to_string()),
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let detail = stderr.lines().last().unwrap_or("no error detail");
            return Err(AudioExtractError::ExtractionFailed(detail.to_string()));
        }

        Ok(())
    }

    /// Best effort: a failed probe yields `None`, never an error.
    async fn probe_duration(&self, path: &Path) -> Option<f64> {
        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error", "-show_entries", "format=duration", "-of", "json"])
            .arg(path)
            .kill_on_drop(true)
            .output()
            .await
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).ok()?;
        json["format"]["duration"]
            .as_str()
            .and_then(|s| s.parse::<f64>().ok())
    }
}

#[async_trait]
impl AudioExtractor for FfmpegAudioExtractor {
    async fn extract_audio(&self, video: &[u8]) -> Result<ExtractedAudio, AudioExtractError> {
        let video_file = tempfile::NamedTempFile::new()
            .map_err(|e| AudioExtractError::ExtractionFailed(format!("temp file: {}", e)))?;
        tokio::fs::write(video_file.path(), video)
            .await
            .map_err(|e| AudioExtractError::ExtractionFailed(format!("temp file: {}", e)))?;

        let audio_file = tempfile::Builder::new()
            .suffix(".mp3")
            .tempfile()
            .map_err(|e| AudioExtractError::ExtractionFailed(format!("temp file: {}", e)))?;

        self.run_ffmpeg(video_file.path(), audio_file.path()).await?;

        let data = tokio::fs::read(audio_file.path())
            .await
            .map_err(|e| AudioExtractError::ExtractionFailed(format!("read audio: {}", e)))?;

        if data.is_empty() {
            return Err(AudioExtractError::ExtractionFailed(
                "ffmpeg produced no audio output".to_string(),
            ));
        }

        let duration_secs = self.probe_duration(video_file.path()).await;

        tracing::debug!(
            video_bytes = video.len(),
            audio_bytes = data.len(),
            "Audio track extracted"
        );

        Ok(ExtractedAudio {
            data,
            duration_secs,
        })
    }
}
