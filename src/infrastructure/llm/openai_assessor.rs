use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AssessorError, CompetencyAssessor};
use crate::domain::{CompetencyScore, CompetencySet, Evidence};

const SYSTEM_PROMPT: &str = "You are an expert HR assessor. Provide objective analysis based \
                             ONLY on evidence from the transcript. If no evidence exists for a \
                             competency, give a low score.";

const SCORING_PROMPT: &str = r#"Anda adalah ahli HR yang mengevaluasi kandidat Service Ambassador.
Analisis transkrip wawancara berikut dan berikan penilaian OBJEKTIF dan KETAT untuk setiap kompetensi.

PENTING:
- Berikan skor berdasarkan BUKTI NYATA dari transkrip
- Jika tidak ada bukti untuk suatu kompetensi, berikan skor rendah (30-50)
- Jangan berikan skor tinggi tanpa bukti kuat

Transkrip Wawancara:
"{transcript}"

Berikan penilaian untuk:
1. Public Speaking (kejelasan bicara, artikulasi, kepercayaan diri)
2. Analytical Thinking (kemampuan analisis sistematis)
3. Critical Thinking (evaluasi objektif, multiple perspectives)
4. Problem Solving (identifikasi masalah dan solusi)
5. Presentation Skills (struktur penyampaian, clarity)
6. Conflict Management (handling konflik, mediasi)

Format response dalam JSON:
{
  "publicSpeaking": {
    "score": [skor 0-100 berdasarkan bukti],
    "analysis": "analisis spesifik dari transkrip",
    "evidence": "kutipan dari transkrip yang mendukung skor"
  },
  "analyticalThinking": { ... },
  "criticalThinking": { ... },
  "problemSolving": { ... },
  "presentationSkills": { ... },
  "conflictManagement": { ... }
}"#;

pub struct OpenAiAssessor {
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

/// The JSON document the model is instructed to produce. All six keys are
/// required; anything less is an invalid response.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentPayload {
    public_speaking: WireScore,
    analytical_thinking: WireScore,
    critical_thinking: WireScore,
    problem_solving: WireScore,
    presentation_skills: WireScore,
    conflict_management: WireScore,
}

#[derive(Deserialize)]
struct WireScore {
    score: f64,
    #[serde(default)]
    analysis: Option<String>,
    #[serde(default)]
    evidence: Option<Evidence>,
    #[serde(default)]
    improvements: Option<Vec<String>>,
}

impl WireScore {
    fn into_score(self) -> CompetencyScore {
        CompetencyScore {
            // Models occasionally step outside the requested 0-100 range.
            score: self.score.clamp(0.0, 100.0).round() as u8,
            analysis: self.analysis.unwrap_or_default(),
            evidence: self.evidence,
            improvements: self.improvements,
        }
    }
}

impl AssessmentPayload {
    fn into_scores(self) -> CompetencySet {
        CompetencySet {
            public_speaking: self.public_speaking.into_score(),
            analytical_thinking: self.analytical_thinking.into_score(),
            critical_thinking: self.critical_thinking.into_score(),
            problem_solving: self.problem_solving.into_score(),
            presentation_skills: self.presentation_skills.into_score(),
            conflict_management: self.conflict_management.into_score(),
        }
    }
}

impl OpenAiAssessor {
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
            model: model.unwrap_or_else(|| "gpt-4-turbo-preview".to_string()),
        }
    }
}

#[async_trait]
impl CompetencyAssessor for OpenAiAssessor {
    async fn assess(&self, transcript: &str) -> Result<CompetencySet, AssessorError> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: SCORING_PROMPT.replace("{transcript}", transcript),
                },
            ],
            temperature: 0.3,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        tracing::debug!(model = %self.model, "Requesting competency assessment");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AssessorError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AssessorError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AssessorError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AssessorError::InvalidResponse(format!("body: {}", e)))?;

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| AssessorError::InvalidResponse("no choices returned".to_string()))?;

        let payload: AssessmentPayload = serde_json::from_str(content)
            .map_err(|e| AssessorError::InvalidResponse(format!("assessment json: {}", e)))?;

        tracing::info!("Competency assessment completed");

        Ok(payload.into_scores())
    }
}
