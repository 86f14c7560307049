pub const MAX_TOPICS: usize = 10;
const MIN_TOPICS: usize = 5;

const TOPIC_CHECKS: [(&str, &str); 10] = [
    ("customer", "Customer Service"),
    ("komunikasi", "Komunikasi"),
    ("team", "Kerja Tim"),
    ("masalah", "Problem Solving"),
    ("konflik", "Manajemen Konflik"),
    ("target", "Target Orientation"),
    ("digital", "Digital Banking"),
    ("layanan", "Service Excellence"),
    ("produk", "Product Knowledge"),
    ("compliance", "Compliance & Ethics"),
];

const PADDING_TOPICS: [&str; 3] = ["Professional Development", "Adaptability", "Initiative"];

/// Keyword-driven topic detection over the lowercased transcript, in table
/// order. Fewer than five hits gets the generic padding set appended once;
/// the result is capped at ten entries.
pub fn extract(transcript: &str) -> Vec<String> {
    let text = transcript.to_lowercase();

    let mut topics: Vec<String> = TOPIC_CHECKS
        .into_iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, topic)| topic.to_string())
        .collect();

    if topics.len() < MIN_TOPICS {
        topics.extend(PADDING_TOPICS.into_iter().map(String::from));
    }

    topics.truncate(MAX_TOPICS);
    topics
}
