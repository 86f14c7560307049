use std::fmt;

/// One of the six fixed interview-assessment dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Competency {
    PublicSpeaking,
    AnalyticalThinking,
    CriticalThinking,
    ProblemSolving,
    PresentationSkills,
    ConflictManagement,
}

impl Competency {
    /// All competencies in report order.
    pub const ALL: [Competency; 6] = [
        Competency::PublicSpeaking,
        Competency::AnalyticalThinking,
        Competency::CriticalThinking,
        Competency::ProblemSolving,
        Competency::PresentationSkills,
        Competency::ConflictManagement,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Competency::PublicSpeaking => "Public Speaking",
            Competency::AnalyticalThinking => "Analytical Thinking",
            Competency::CriticalThinking => "Critical Thinking",
            Competency::ProblemSolving => "Problem Solving",
            Competency::PresentationSkills => "Presentation Skills",
            Competency::ConflictManagement => "Conflict Management",
        }
    }

    /// The camelCase key used in report JSON and in the LLM response contract.
    pub fn key(&self) -> &'static str {
        match self {
            Competency::PublicSpeaking => "publicSpeaking",
            Competency::AnalyticalThinking => "analyticalThinking",
            Competency::CriticalThinking => "criticalThinking",
            Competency::ProblemSolving => "problemSolving",
            Competency::PresentationSkills => "presentationSkills",
            Competency::ConflictManagement => "conflictManagement",
        }
    }
}

impl fmt::Display for Competency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
