pub mod citations;
pub mod cue_notes;
pub mod key_concepts;
pub mod questions;
pub mod summary;

pub use citations::*;
pub use cue_notes::*;
pub use key_concepts::*;
pub use questions::*;
pub use summary::*;

use tracing::debug;

use crate::models::{NoteRequest, NoteResponse};

/// Lines shorter than this many characters are cues
pub const CUE_MAX_CHARS: usize = 50;
/// Notes longer than this are cut into pieces of this many characters
pub const NOTE_CHUNK_CHARS: usize = 100;
/// Word count kept by the summary
pub const SUMMARY_WORDS: usize = 50;
/// Capitalized words of this length or shorter are not concepts
pub const MIN_CONCEPT_LEN: usize = 3;
/// Number of ranked concepts the extractor returns
pub const KEY_CONCEPT_CANDIDATES: usize = 10;
/// Number of key concepts that get their own questions
pub const CONCEPTS_FOR_QUESTIONS: usize = 3;
/// Slide references longer than this are truncated
pub const REFERENCE_MAX_CHARS: usize = 100;

pub const MAX_CUES: usize = 10;
pub const MAX_NOTES: usize = 15;
pub const MAX_KEY_CONCEPTS: usize = 8;
pub const MAX_QUESTIONS: usize = 5;

/// Build Cornell notes for a request
///
/// Runs each transformer over the request in a fixed order:
/// 1. Extract key concepts from the raw transcript
/// 2. Split trimmed lines into cues and notes
/// 3. Summarize the transcript
/// 4. Generate study questions from the key concepts
/// 5. Turn slides into citations
///
/// Caps are applied last, after every list is complete.
pub fn build_cornell_notes(request: &NoteRequest) -> NoteResponse {
    let lines = split_transcript_lines(&request.transcript);
    let key_concepts = extract_key_concepts(&request.transcript);
    let (cues, notes) = generate_cues_and_notes(&lines);
    let summary = generate_summary(&request.transcript);
    let questions = generate_study_questions(&key_concepts);
    let citations = process_citations(&request.slides);

    debug!(
        "Generated {} lines, {} cues, {} notes, {} concepts, {} questions before capping",
        lines.len(),
        cues.len(),
        notes.len(),
        key_concepts.len(),
        questions.len()
    );

    NoteResponse {
        cues: capped(cues, MAX_CUES),
        notes: capped(notes, MAX_NOTES),
        summary,
        citations,
        key_concepts: capped(key_concepts, MAX_KEY_CONCEPTS),
        questions: capped(questions, MAX_QUESTIONS),
    }
}

/// Whitespace as text tools usually see it: Unicode `White_Space` plus the
/// ASCII information separators `\x1c`..=`\x1f`
pub fn is_text_whitespace(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

fn capped(mut items: Vec<String>, max: usize) -> Vec<String> {
    items.truncate(max);
    items
}
