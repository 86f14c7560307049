use std::time::Duration;

use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use wawancara::application::ports::{AssessorError, CompetencyAssessor};
use wawancara::domain::{Competency, Evidence};
use wawancara::infrastructure::llm::OpenAiAssessor;

async fn start_mock_openai_server(
    response_status: u16,
    response_body: String,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/chat/completions",
        post(move || {
            let body = response_body.clone();
            async move {
                let status = axum::http::StatusCode::from_u16(response_status).unwrap();
                (status, body).into_response()
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn chat_envelope(content: &serde_json::Value) -> String {
    serde_json::json!({
        "choices": [{ "message": { "content": content.to_string() } }]
    })
    .to_string()
}

fn assessment_content(score: f64) -> serde_json::Value {
    let entry = serde_json::json!({
        "score": score,
        "analysis": "Kandidat berbicara dengan jelas",
        "evidence": "Saya menjelaskan kepada pelanggan"
    });
    serde_json::json!({
        "publicSpeaking": entry,
        "analyticalThinking": entry,
        "criticalThinking": entry,
        "problemSolving": entry,
        "presentationSkills": entry,
        "conflictManagement": entry
    })
}

fn assessor_for(base_url: &str) -> OpenAiAssessor {
    OpenAiAssessor::new(
        "sk-test-key".to_string(),
        Some(base_url.to_string()),
        Some("gpt-4-turbo-preview".to_string()),
        Duration::from_secs(5),
    )
}

#[tokio::test]
async fn given_complete_payload_when_assessing_then_parses_all_six_scores() {
    let body = chat_envelope(&assessment_content(88.0));
    let (base_url, shutdown_tx) = start_mock_openai_server(200, body).await;

    let result = assessor_for(&base_url).assess("transkrip wawancara").await;

    let scores = result.unwrap();
    for (_, entry) in scores.iter() {
        assert_eq!(entry.score, 88);
        assert_eq!(entry.analysis, "Kandidat berbicara dengan jelas");
        assert_eq!(
            entry.evidence,
            Some(Evidence::Text(
                "Saya menjelaskan kepada pelanggan".to_string()
            ))
        );
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_out_of_range_scores_when_assessing_then_clamps_into_percent_range() {
    let mut content = assessment_content(70.0);
    content["publicSpeaking"]["score"] = serde_json::json!(150.0);
    content["analyticalThinking"]["score"] = serde_json::json!(-12.0);
    let body = chat_envelope(&content);
    let (base_url, shutdown_tx) = start_mock_openai_server(200, body).await;

    let result = assessor_for(&base_url).assess("transkrip").await;

    let scores = result.unwrap();
    assert_eq!(scores.get(Competency::PublicSpeaking).score, 100);
    assert_eq!(scores.get(Competency::AnalyticalThinking).score, 0);
    assert_eq!(scores.get(Competency::CriticalThinking).score, 70);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_fractional_score_when_assessing_then_rounds_to_nearest() {
    let body = chat_envelope(&assessment_content(72.6));
    let (base_url, shutdown_tx) = start_mock_openai_server(200, body).await;

    let result = assessor_for(&base_url).assess("transkrip").await;

    assert_eq!(result.unwrap().get(Competency::PublicSpeaking).score, 73);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_evidence_list_when_assessing_then_parses_items_variant() {
    let mut content = assessment_content(70.0);
    content["publicSpeaking"]["evidence"] =
        serde_json::json!(["artikulasi jelas", "nada percaya diri"]);
    let body = chat_envelope(&content);
    let (base_url, shutdown_tx) = start_mock_openai_server(200, body).await;

    let result = assessor_for(&base_url).assess("transkrip").await;

    let scores = result.unwrap();
    assert_eq!(
        scores.get(Competency::PublicSpeaking).evidence,
        Some(Evidence::Items(vec![
            "artikulasi jelas".to_string(),
            "nada percaya diri".to_string()
        ]))
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_competency_key_when_assessing_then_returns_invalid_response() {
    let mut content = assessment_content(70.0);
    content.as_object_mut().unwrap().remove("conflictManagement");
    let body = chat_envelope(&content);
    let (base_url, shutdown_tx) = start_mock_openai_server(200, body).await;

    let result = assessor_for(&base_url).assess("transkrip").await;

    assert!(matches!(result, Err(AssessorError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_json_content_when_assessing_then_returns_invalid_response() {
    let content = serde_json::Value::String("sorry, I cannot help with that".to_string());
    let body = serde_json::json!({ "choices": [{ "message": { "content": content } }] }).to_string();
    let (base_url, shutdown_tx) = start_mock_openai_server(200, body).await;

    let result = assessor_for(&base_url).assess("transkrip").await;

    assert!(matches!(result, Err(AssessorError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_assessing_then_returns_invalid_response() {
    let body = serde_json::json!({ "choices": [] }).to_string();
    let (base_url, shutdown_tx) = start_mock_openai_server(200, body).await;

    let result = assessor_for(&base_url).assess("transkrip").await;

    assert!(matches!(result, Err(AssessorError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_assessing_then_returns_api_request_failed() {
    let body = r#"{"error": {"message": "overloaded"}}"#.to_string();
    let (base_url, shutdown_tx) = start_mock_openai_server(500, body).await;

    let result = assessor_for(&base_url).assess("transkrip").await;

    match result {
        Err(AssessorError::ApiRequestFailed(detail)) => assert!(detail.contains("HTTP 500")),
        other => panic!("expected ApiRequestFailed, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_when_assessing_then_returns_rate_limited() {
    let body = r#"{"error": {"message": "rate limit"}}"#.to_string();
    let (base_url, shutdown_tx) = start_mock_openai_server(429, body).await;

    let result = assessor_for(&base_url).assess("transkrip").await;

    assert!(matches!(result, Err(AssessorError::RateLimited)));
    shutdown_tx.send(()).ok();
}
