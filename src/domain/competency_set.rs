use serde::{Deserialize, Serialize};

use super::Competency;

/// Supporting material behind a competency score: either a quote-style text
/// passage or a list of observed strengths, depending on which analysis path
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Evidence {
    Text(String),
    Items(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyScore {
    pub score: u8,
    pub analysis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvements: Option<Vec<String>>,
}

impl CompetencyScore {
    pub fn new(score: u8, analysis: impl Into<String>, evidence: impl Into<String>) -> Self {
        Self {
            score,
            analysis: analysis.into(),
            evidence: Some(Evidence::Text(evidence.into())),
            improvements: None,
        }
    }
}

/// A complete assessment: one score per competency. Every set carries all six
/// entries by construction; no path may drop a competency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetencySet {
    pub public_speaking: CompetencyScore,
    pub analytical_thinking: CompetencyScore,
    pub critical_thinking: CompetencyScore,
    pub problem_solving: CompetencyScore,
    pub presentation_skills: CompetencyScore,
    pub conflict_management: CompetencyScore,
}

impl CompetencySet {
    /// Builds a set by scoring each competency in report order.
    pub fn from_fn(mut score: impl FnMut(Competency) -> CompetencyScore) -> Self {
        Self {
            public_speaking: score(Competency::PublicSpeaking),
            analytical_thinking: score(Competency::AnalyticalThinking),
            critical_thinking: score(Competency::CriticalThinking),
            problem_solving: score(Competency::ProblemSolving),
            presentation_skills: score(Competency::PresentationSkills),
            conflict_management: score(Competency::ConflictManagement),
        }
    }

    pub fn get(&self, competency: Competency) -> &CompetencyScore {
        match competency {
            Competency::PublicSpeaking => &self.public_speaking,
            Competency::AnalyticalThinking => &self.analytical_thinking,
            Competency::CriticalThinking => &self.critical_thinking,
            Competency::ProblemSolving => &self.problem_solving,
            Competency::PresentationSkills => &self.presentation_skills,
            Competency::ConflictManagement => &self.conflict_management,
        }
    }

    /// Entries in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Competency, &CompetencyScore)> {
        Competency::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}
