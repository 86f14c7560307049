use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::services::AnalysisInput;
use crate::presentation::state::AppState;

use super::analyze::{run_analysis, ErrorResponse};

/// Multipart variant of the analyze endpoint: a `video` file field plus
/// optional `fileName` and `language` text fields. An explicit `fileName`
/// field wins over the upload's own filename.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut video: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut language: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "video" => {
                if file_name.is_none() {
                    file_name = field.file_name().map(String::from);
                }
                match field.bytes().await {
                    Ok(data) => video = Some(data.to_vec()),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read video bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read file: {}", e),
                            }),
                        )
                            .into_response();
                    }
                }
            }
            "fileName" => match field.text().await {
                Ok(value) => file_name = Some(value),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read fileName field");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read fileName: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            "language" => match field.text().await {
                Ok(value) if !value.is_empty() => language = Some(value),
                Ok(_) => {}
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read language field");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read language: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            _ => {}
        }
    }

    let video = match video {
        Some(data) if !data.is_empty() => data,
        _ => {
            tracing::warn!("Upload request with no video file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No video file uploaded. Provide a multipart 'video' field."
                        .to_string(),
                }),
            )
                .into_response();
        }
    };

    let language = language.unwrap_or_else(|| state.settings.analysis.language.clone());

    tracing::debug!(
        video_bytes = video.len(),
        file_name = ?file_name,
        language = %language,
        "Processing video upload"
    );

    run_analysis(
        &state,
        AnalysisInput::Media {
            data: video,
            language: Some(language),
        },
        file_name,
    )
    .await
}
