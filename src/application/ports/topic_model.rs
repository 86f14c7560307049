use async_trait::async_trait;

#[async_trait]
pub trait TopicModel: Send + Sync {
    async fn extract_topics(&self, transcript: &str) -> Result<Vec<String>, TopicModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TopicModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
