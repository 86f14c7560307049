use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TopicModel, TopicModelError};

const TOPICS_PROMPT: &str = r#"Extract 8-10 key topics discussed in this interview transcript.
Focus on competencies and skills relevant to a Service Ambassador role.

Transcript:
"{transcript}"

Return JSON format:
{
  "topics": ["topic1", "topic2", ...]
}"#;

pub struct OpenAiTopicModel {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct TopicsPayload {
    #[serde(default)]
    topics: Vec<String>,
}

impl OpenAiTopicModel {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "gpt-3.5-turbo".to_string()),
        }
    }
}

#[async_trait]
impl TopicModel for OpenAiTopicModel {
    async fn extract_topics(&self, transcript: &str) -> Result<Vec<String>, TopicModelError> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: TOPICS_PROMPT.replace("{transcript}", transcript),
            }],
            temperature: 0.5,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        tracing::debug!(model = %self.model, "Requesting topic extraction");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TopicModelError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TopicModelError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TopicModelError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| TopicModelError::InvalidResponse(format!("body: {}", e)))?;

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| TopicModelError::InvalidResponse("no choices returned".to_string()))?;

        let payload: TopicsPayload = serde_json::from_str(content)
            .map_err(|e| TopicModelError::InvalidResponse(format!("topics json: {}", e)))?;

        tracing::info!(topics = payload.topics.len(), "Topic extraction completed");

        Ok(payload.topics)
    }
}
