use async_trait::async_trait;

use crate::domain::CompetencySet;

/// Scores a transcript against the six competencies. Implementations must
/// return a complete set; partial assessments are an `InvalidResponse`.
#[async_trait]
pub trait CompetencyAssessor: Send + Sync {
    async fn assess(&self, transcript: &str) -> Result<CompetencySet, AssessorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AssessorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
