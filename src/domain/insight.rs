use std::fmt;

use serde::{Deserialize, Serialize};

use super::CompetencySet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProficiencyLevel {
    Advanced,
    Proficient,
    Developing,
    Beginner,
}

impl ProficiencyLevel {
    pub fn for_score(score: u8) -> Self {
        match score {
            score if score >= 80 => ProficiencyLevel::Advanced,
            score if score >= 65 => ProficiencyLevel::Proficient,
            score if score >= 50 => ProficiencyLevel::Developing,
            _ => ProficiencyLevel::Beginner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Advanced => "Advanced",
            ProficiencyLevel::Proficient => "Proficient",
            ProficiencyLevel::Developing => "Developing",
            ProficiencyLevel::Beginner => "Beginner",
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
    pub key_competencies: Vec<String>,
}

/// Classifies competencies into strengths (score above 75) and development
/// areas (score below 60); scores in between land in neither list. Every
/// competency additionally gets a "<name>: <level>" entry.
pub fn generate_insights(scores: &CompetencySet) -> InsightReport {
    let mut insights = InsightReport::default();

    for (competency, entry) in scores.iter() {
        if entry.score > 75 {
            insights
                .strengths
                .push(competency.display_name().to_string());
        } else if entry.score < 60 {
            insights
                .development_areas
                .push(competency.display_name().to_string());
        }
    }

    for (competency, entry) in scores.iter() {
        let level = ProficiencyLevel::for_score(entry.score);
        insights
            .key_competencies
            .push(format!("{}: {}", competency.display_name(), level));
    }

    insights
}
