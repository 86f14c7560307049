const MAX_VISIBLE_CHARS: usize = 120;

/// Compacts transcript text for logging. Interview transcripts run to
/// thousands of words; log lines carry only a prefix plus the total length.
pub fn sanitize_transcript(transcript: &str) -> String {
    let trimmed = transcript.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    match trimmed.char_indices().nth(MAX_VISIBLE_CHARS) {
        Some((cut, _)) => format!(
            "{}... ({} chars total)",
            &trimmed[..cut],
            trimmed.chars().count()
        ),
        None => trimmed.to_string(),
    }
}
