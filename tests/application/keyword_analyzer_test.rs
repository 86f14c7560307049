use wawancara::application::services::keyword_analyzer;
use wawancara::domain::{Competency, Evidence};

#[test]
fn given_empty_transcript_when_analyzing_then_scores_all_fifty() {
    let scores = keyword_analyzer::analyze("");

    for (_, entry) in scores.iter() {
        assert_eq!(entry.score, 50);
        assert_eq!(
            entry.analysis,
            "Analysis based on transcript content and keyword relevance."
        );
        assert_eq!(
            entry.evidence,
            Some(Evidence::Text(
                "Found 0 relevant indicators in the transcript.".to_string()
            ))
        );
    }
}

#[test]
fn given_one_indicator_per_competency_when_analyzing_then_each_scores_sixty() {
    let scores = keyword_analyzer::analyze("saya analisis namun solusi pertama konflik");

    for (_, entry) in scores.iter() {
        assert_eq!(entry.score, 60);
        assert_eq!(
            entry.evidence,
            Some(Evidence::Text(
                "Found 1 relevant indicators in the transcript.".to_string()
            ))
        );
    }
}

#[test]
fn given_all_indicators_when_analyzing_then_base_score_caps_at_eighty_five() {
    let scores =
        keyword_analyzer::analyze("saya kami pelanggan komunikasi menjelaskan sampaikan");

    assert_eq!(scores.get(Competency::PublicSpeaking).score, 85);
    assert_eq!(
        scores.get(Competency::PublicSpeaking).evidence,
        Some(Evidence::Text(
            "Found 6 relevant indicators in the transcript.".to_string()
        ))
    );
}

#[test]
fn given_long_transcript_when_analyzing_then_adds_length_bonus() {
    let transcript = "kata ".repeat(201);
    let scores = keyword_analyzer::analyze(&transcript);

    assert_eq!(scores.get(Competency::PublicSpeaking).score, 60);
}

#[test]
fn given_exactly_two_hundred_words_when_analyzing_then_no_length_bonus() {
    let transcript = "kata ".repeat(200);
    let scores = keyword_analyzer::analyze(&transcript);

    assert_eq!(scores.get(Competency::PublicSpeaking).score, 50);
}

#[test]
fn given_all_indicators_and_long_transcript_when_analyzing_then_caps_at_ninety_five() {
    let mut transcript = String::from("saya kami pelanggan komunikasi menjelaskan sampaikan ");
    transcript.push_str(&"kata ".repeat(200));

    let scores = keyword_analyzer::analyze(&transcript);

    assert_eq!(scores.get(Competency::PublicSpeaking).score, 95);
}

#[test]
fn given_uppercase_keywords_when_analyzing_then_matches_case_insensitively() {
    let scores = keyword_analyzer::analyze("SAYA dan KAMI");

    assert_eq!(scores.get(Competency::PublicSpeaking).score, 70);
}

#[test]
fn given_repeated_keyword_when_analyzing_then_counts_it_once() {
    let scores = keyword_analyzer::analyze("saya saya saya saya");

    assert_eq!(scores.get(Competency::PublicSpeaking).score, 60);
}

#[test]
fn given_punctuation_attached_when_analyzing_then_token_does_not_match() {
    let scores = keyword_analyzer::analyze("Ada konflik.");

    assert_eq!(scores.get(Competency::ConflictManagement).score, 50);
}

#[test]
fn given_keyword_as_own_token_when_analyzing_then_matches() {
    let scores = keyword_analyzer::analyze("Ada konflik di sini");

    assert_eq!(scores.get(Competency::ConflictManagement).score, 60);
}

#[test]
fn given_multiword_indicator_when_analyzing_then_never_matches_a_token() {
    // "sisi lain" spans two tokens; whole-token comparison cannot see it.
    let scores = keyword_analyzer::analyze("di sisi lain ada pandangan");

    assert_eq!(scores.get(Competency::CriticalThinking).score, 60);
}

#[test]
fn given_substring_of_keyword_when_analyzing_then_does_not_match() {
    // "analisisnya" is not the token "analisis".
    let scores = keyword_analyzer::analyze("analisisnya mendalam");

    assert_eq!(scores.get(Competency::AnalyticalThinking).score, 50);
}
