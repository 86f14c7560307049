use wawancara::infrastructure::observability::sanitize_transcript;

#[test]
fn given_empty_transcript_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_transcript(""), "[EMPTY]");
    assert_eq!(sanitize_transcript("   \n\t"), "[EMPTY]");
}

#[test]
fn given_short_transcript_when_sanitizing_then_returns_unchanged() {
    let transcript = "Saya siap membantu pelanggan.";
    assert_eq!(sanitize_transcript(transcript), transcript);
}

#[test]
fn given_whitespace_padded_transcript_when_sanitizing_then_trims() {
    assert_eq!(sanitize_transcript("  Halo dunia  "), "Halo dunia");
}

#[test]
fn given_transcript_at_limit_when_sanitizing_then_returns_unchanged() {
    let transcript = "a".repeat(120);
    assert_eq!(sanitize_transcript(&transcript), transcript);
}

#[test]
fn given_long_transcript_when_sanitizing_then_truncates_with_length() {
    let transcript = "a".repeat(150);
    let result = sanitize_transcript(&transcript);

    assert!(result.starts_with(&"a".repeat(120)));
    assert!(result.ends_with("... (150 chars total)"));
}

#[test]
fn given_multibyte_transcript_when_sanitizing_then_cuts_on_char_boundary() {
    let transcript = "é".repeat(130);
    let result = sanitize_transcript(&transcript);

    assert!(result.starts_with(&"é".repeat(120)));
    assert!(result.ends_with("... (130 chars total)"));
}

#[test]
fn given_long_transcript_when_sanitizing_then_counts_chars_not_bytes() {
    // 125 two-byte chars: the reported total must be 125, not 250.
    let transcript = "é".repeat(125);
    let result = sanitize_transcript(&transcript);

    assert!(result.contains("(125 chars total)"));
}
