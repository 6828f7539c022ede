use std::path::Path;

use anyhow::{Context, Result};

use crate::models::NoteRequest;

/// Load a request from disk
///
/// A `.json` input is parsed as a full `NoteRequest`. Anything else is read
/// as a raw transcript. When `slides` is given, its non-empty lines are
/// appended to the request's slides.
pub fn load_request(input: &Path, slides: Option<&Path>) -> Result<NoteRequest> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read file: {:?}", input))?;

    let is_json = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let mut request = if is_json {
        parse_request_json(&content)?
    } else {
        NoteRequest::new(content, vec![])
    };

    if let Some(path) = slides {
        request.slides.extend(parse_slides_file(path)?);
    }

    Ok(request)
}

/// Parse a JSON request body
pub fn parse_request_json(json: &str) -> Result<NoteRequest> {
    serde_json::from_str(json).context("Failed to parse note request JSON")
}

/// Read one slide per non-empty, trimmed line
pub fn parse_slides_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read slides file: {:?}", path))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
