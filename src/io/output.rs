use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::NoteResponse;

/// Write notes to a pretty-printed JSON file
pub fn write_json(response: &NoteResponse, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, response).context("Failed to write JSON")?;
    Ok(())
}

/// Human-readable Cornell sheet
pub struct CornellSheet<'a> {
    response: &'a NoteResponse,
}

impl<'a> CornellSheet<'a> {
    pub fn new(response: &'a NoteResponse) -> Self {
        Self { response }
    }

    /// Format the notes as plain text, one section per part of the sheet
    pub fn format(&self) -> String {
        let r = self.response;
        let mut output = String::new();

        push_section(&mut output, "KEY CONCEPTS", r.key_concepts.iter().map(|c| format!("- {}", c)));
        push_section(&mut output, "CUES", r.cues.iter().map(|c| format!("- {}", c)));
        push_section(&mut output, "NOTES", r.notes.iter().map(|n| format!("- {}", n)));

        output.push_str("SUMMARY\n");
        if r.summary.trim().is_empty() {
            output.push_str("(none)\n");
        } else {
            output.push_str(&wrap_text(&r.summary, 80));
            output.push('\n');
        }
        output.push('\n');

        push_section(
            &mut output,
            "STUDY QUESTIONS",
            r.questions.iter().enumerate().map(|(i, q)| format!("{}. {}", i + 1, q)),
        );
        push_section(
            &mut output,
            "CITATIONS",
            r.citations.iter().map(|c| format!("[p.{}] {}", c.page, c.reference)),
        );

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

/// Render the notes as a human-readable Cornell sheet
pub fn render_cornell_sheet(response: &NoteResponse) -> String {
    CornellSheet::new(response).format()
}

fn push_section(output: &mut String, title: &str, lines: impl Iterator<Item = String>) {
    output.push_str(title);
    output.push('\n');

    let mut empty = true;
    for line in lines {
        output.push_str(&line);
        output.push('\n');
        empty = false;
    }
    if empty {
        output.push_str("(none)\n");
    }
    output.push('\n');
}

/// Wrap text at approximately the given width
fn wrap_text(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len + word_len + 1 > width && line_len > 0 {
            result.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            result.push(' ');
            line_len += 1;
        }
        result.push_str(word);
        line_len += word_len;
    }

    result
}
