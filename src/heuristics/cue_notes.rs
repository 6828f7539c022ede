use super::{CUE_MAX_CHARS, NOTE_CHUNK_CHARS, is_text_whitespace};

/// Split the transcript into trimmed, non-empty lines
///
/// Recognises the same line boundaries as Unicode-aware line splitting:
/// LF, CR, CRLF, vertical tab, form feed, the file/group/record separators,
/// NEL and the Unicode line/paragraph separators.
pub fn split_transcript_lines(transcript: &str) -> Vec<String> {
    transcript
        .split(is_line_boundary)
        .map(|line| line.trim_matches(is_text_whitespace))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Partition lines into cues and notes
///
/// Lines shorter than 50 characters become cues. Longer lines become notes,
/// and any note over 100 characters is cut into consecutive 100-character
/// pieces. Neither list is capped here.
pub fn generate_cues_and_notes<S: AsRef<str>>(lines: &[S]) -> (Vec<String>, Vec<String>) {
    let mut cues = Vec::new();
    let mut notes = Vec::new();

    for line in lines {
        let line = line.as_ref();
        let len = line.chars().count();

        if len < CUE_MAX_CHARS {
            cues.push(line.to_string());
        } else if len > NOTE_CHUNK_CHARS {
            notes.extend(chunk_chars(line, NOTE_CHUNK_CHARS));
        } else {
            notes.push(line.to_string());
        }
    }

    (cues, notes)
}

/// Cut text into pieces of `size` characters, the last may be shorter
fn chunk_chars(text: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(size).map(|c| c.iter().collect()).collect()
}
