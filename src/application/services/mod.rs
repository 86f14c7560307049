mod analysis_service;
pub mod keyword_analyzer;
pub mod topic_extractor;

pub use analysis_service::{AnalysisError, AnalysisInput, AnalysisService};
