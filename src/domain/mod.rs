mod competency;
mod competency_set;
mod insight;
mod report;
mod scoring;

pub use competency::Competency;
pub use competency_set::{CompetencyScore, CompetencySet, Evidence};
pub use insight::{generate_insights, InsightReport, ProficiencyLevel};
pub use report::{
    format_duration, AnalysisReport, ReportMetadata, DEFAULT_FILE_NAME, REPORT_CONFIDENCE,
    REPORT_VERSION,
};
pub use scoring::{overall_score, recommend, Priority, Recommendation, RecommendationStatus};
