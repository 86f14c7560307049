use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{CompetencySet, InsightReport, Recommendation};

pub const REPORT_VERSION: &str = "2.0.0";
pub const REPORT_CONFIDENCE: f64 = 0.95;
pub const DEFAULT_FILE_NAME: &str = "interview_video.mp4";
const PROCESSING_TIME: &str = "Real-time";

/// The complete analysis document returned to the client: per-competency
/// scores, the aggregate verdict, and the supporting transcript material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub file_name: String,
    pub analysis_date: String,
    pub duration: String,
    pub scores: CompetencySet,
    pub overall_score: u8,
    pub recommendation: Recommendation,
    pub topics: Vec<String>,
    pub transcript: String,
    pub insights: InsightReport,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub processed_at: String,
    pub processing_time: String,
    pub confidence: f64,
    pub version: String,
}

impl AnalysisReport {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        file_name: Option<String>,
        duration: String,
        transcript: String,
        scores: CompetencySet,
        overall_score: u8,
        recommendation: Recommendation,
        topics: Vec<String>,
        insights: InsightReport,
    ) -> Self {
        let now = now_iso();

        Self {
            file_name: file_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
            analysis_date: now.clone(),
            duration,
            scores,
            overall_score,
            recommendation,
            topics,
            transcript,
            insights,
            metadata: ReportMetadata {
                processed_at: now,
                processing_time: PROCESSING_TIME.to_string(),
                confidence: REPORT_CONFIDENCE,
                version: REPORT_VERSION.to_string(),
            },
        }
    }
}

/// Renders a probed media duration as "M:SS", or "N/A" when the duration
/// could not be determined.
pub fn format_duration(duration_secs: Option<f64>) -> String {
    match duration_secs {
        Some(secs) if secs.is_finite() && secs >= 0.0 => {
            let total = secs.round() as u64;
            format!("{}:{:02}", total / 60, total % 60)
        }
        _ => "N/A".to_string(),
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
