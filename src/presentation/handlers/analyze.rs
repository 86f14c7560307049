use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::engine::general_purpose;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::application::services::{AnalysisError, AnalysisInput};
use crate::domain::AnalysisReport;
use crate::infrastructure::observability::sanitize_transcript;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub transcript: Option<String>,
    /// Base64-encoded video content. Kept loose in the contract; anything
    /// other than a non-empty base64 string is rejected.
    #[serde(default)]
    pub video_data: Option<serde_json::Value>,
    #[serde(default)]
    pub file_name: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub data: AnalysisReport,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
    pub details: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let transcript = request.transcript.unwrap_or_default();
    let video_data = match request.video_data {
        Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) if s.is_empty() => None,
        other => other,
    };

    let input = if !transcript.trim().is_empty() {
        tracing::debug!(
            transcript = %sanitize_transcript(&transcript),
            "Processing transcript analysis"
        );
        AnalysisInput::Transcript(transcript)
    } else if let Some(video) = video_data {
        let encoded = match video.as_str() {
            Some(encoded) => encoded,
            None => {
                tracing::warn!("Analyze request with non-string videoData");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "videoData must be a base64-encoded string.".to_string(),
                    }),
                )
                    .into_response();
            }
        };

        match decode_video_payload(encoded) {
            Ok(data) => {
                tracing::debug!(video_bytes = data.len(), "Processing video analysis");
                AnalysisInput::Media {
                    data,
                    language: Some(state.settings.analysis.language.clone()),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Analyze request with undecodable videoData");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "videoData is not valid base64 content.".to_string(),
                    }),
                )
                    .into_response();
            }
        }
    } else if !transcript.is_empty() {
        // Whitespace-only transcript with no video: let the pipeline report
        // it as an empty transcript rather than missing input.
        AnalysisInput::Transcript(transcript)
    } else {
        tracing::warn!("Analyze request with no transcript or video data");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: AnalysisError::MissingInput.to_string(),
            }),
        )
            .into_response();
    };

    run_analysis(&state, input, request.file_name).await
}

/// Shared by the JSON and multipart entry points: run the pipeline and wrap
/// the outcome in the response envelope.
pub(super) async fn run_analysis(
    state: &AppState,
    input: AnalysisInput,
    file_name: Option<String>,
) -> Response {
    match state.analysis_service.run(input, file_name).await {
        Ok(report) => {
            tracing::info!(overall_score = report.overall_score, "Analysis completed");
            (
                StatusCode::OK,
                Json(AnalyzeResponse {
                    success: true,
                    data: report,
                }),
            )
                .into_response()
        }
        Err(e) if e.is_input_error() => {
            tracing::warn!(error = %e, "Analysis rejected invalid input");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse {
                    success: false,
                    error: "Failed to analyze interview".to_string(),
                    details: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Accepts raw base64 or a `data:` URL with a base64 payload.
fn decode_video_payload(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let encoded = encoded
        .split_once(";base64,")
        .map(|(_, tail)| tail)
        .unwrap_or(encoded);
    general_purpose::STANDARD.decode(encoded)
}
