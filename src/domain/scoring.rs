use serde::{Deserialize, Serialize};

use super::CompetencySet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationStatus {
    HighlyRecommended,
    Recommended,
    Conditional,
    NotRecommended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
    None,
}

/// Hiring recommendation derived from the overall score. Always recomputed,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub status: RecommendationStatus,
    pub text: String,
    pub action: String,
    pub priority: Priority,
}

/// Rounded mean of the competency scores greater than zero. A zero score
/// means "no evidence" and is excluded; if every score is zero the overall
/// score is zero.
pub fn overall_score(scores: &CompetencySet) -> u8 {
    let valid: Vec<u32> = scores
        .iter()
        .map(|(_, entry)| u32::from(entry.score))
        .filter(|&score| score > 0)
        .collect();

    if valid.is_empty() {
        return 0;
    }

    let sum: u32 = valid.iter().sum();
    (f64::from(sum) / valid.len() as f64).round() as u8
}

/// Recommendation tier for an overall score. Inclusive lower bounds; the four
/// tiers cover the whole 0-100 domain without overlap.
pub fn recommend(overall: u8) -> Recommendation {
    match overall {
        score if score >= 85 => Recommendation {
            status: RecommendationStatus::HighlyRecommended,
            text: "Kandidat sangat direkomendasikan. Menunjukkan kompetensi excellent \
                   berdasarkan analisis transkrip."
                .to_string(),
            action: "Lanjut ke final interview dengan senior management".to_string(),
            priority: Priority::High,
        },
        score if score >= 70 => Recommendation {
            status: RecommendationStatus::Recommended,
            text: "Kandidat direkomendasikan dengan catatan pengembangan. Menunjukkan \
                   potensi baik."
                .to_string(),
            action: "Lanjut dengan assessment tambahan".to_string(),
            priority: Priority::Medium,
        },
        score if score >= 55 => Recommendation {
            status: RecommendationStatus::Conditional,
            text: "Kandidat dapat dipertimbangkan dengan program development intensif."
                .to_string(),
            action: "Pertimbangkan untuk posisi junior dengan training".to_string(),
            priority: Priority::Low,
        },
        _ => Recommendation {
            status: RecommendationStatus::NotRecommended,
            text: "Kandidat belum memenuhi standar minimal berdasarkan analisis interview."
                .to_string(),
            action: "Sarankan pengembangan skill terlebih dahulu".to_string(),
            priority: Priority::None,
        },
    }
}
