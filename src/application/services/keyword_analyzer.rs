use crate::domain::{Competency, CompetencyScore, CompetencySet};

fn indicators(competency: Competency) -> [&'static str; 6] {
    match competency {
        Competency::PublicSpeaking => [
            "saya",
            "kami",
            "pelanggan",
            "komunikasi",
            "menjelaskan",
            "sampaikan",
        ],
        Competency::AnalyticalThinking => [
            "analisis",
            "data",
            "evaluasi",
            "pertimbangan",
            "faktor",
            "aspek",
        ],
        Competency::CriticalThinking => [
            "namun",
            "tetapi",
            "sisi lain",
            "perspektif",
            "pandangan",
            "objektif",
        ],
        Competency::ProblemSolving => [
            "solusi",
            "masalah",
            "mengatasi",
            "penyelesaian",
            "langkah",
            "cara",
        ],
        Competency::PresentationSkills => [
            "pertama",
            "kedua",
            "ketiga",
            "kesimpulan",
            "poin",
            "struktur",
        ],
        Competency::ConflictManagement => [
            "konflik",
            "mediasi",
            "negosiasi",
            "win-win",
            "kompromi",
            "tenang",
        ],
    }
}

/// Deterministic competency scoring from indicator keywords. Each competency
/// scores `min(50 + 10 * matched_indicators, 85)`, plus 10 when the
/// transcript runs past 200 words, capped at 95. Total: empty input scores
/// six 50s rather than erroring.
pub fn analyze(transcript: &str) -> CompetencySet {
    let text = transcript.to_lowercase();
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();

    CompetencySet::from_fn(|competency| {
        let count = indicators(competency)
            .into_iter()
            .filter(|keyword| words.contains(keyword))
            .count();

        let base_score = (50 + count * 10).min(85);
        let length_bonus = if word_count > 200 { 10 } else { 0 };

        CompetencyScore::new(
            (base_score + length_bonus).min(95) as u8,
            "Analysis based on transcript content and keyword relevance.",
            format!("Found {} relevant indicators in the transcript.", count),
        )
    })
}
