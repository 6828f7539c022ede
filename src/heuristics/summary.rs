use super::{SUMMARY_WORDS, is_text_whitespace};

/// Summarize the transcript as its first 50 words
///
/// Transcripts of 50 words or fewer come back untouched, original spacing
/// included. Longer ones are rejoined with single spaces and end in "...".
pub fn generate_summary(transcript: &str) -> String {
    let words: Vec<&str> = transcript
        .split(is_text_whitespace)
        .filter(|w| !w.is_empty())
        .collect();

    if words.len() <= SUMMARY_WORDS {
        return transcript.to_string();
    }

    format!("{}...", words[..SUMMARY_WORDS].join(" "))
}
