use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input to the notes generator: a lecture transcript plus optional slide text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteRequest {
    /// Free-form transcript text, may be empty
    pub transcript: String,
    /// Slide texts in presentation order
    #[serde(default)]
    pub slides: Vec<String>,
}

impl NoteRequest {
    pub fn new(transcript: impl Into<String>, slides: Vec<String>) -> Self {
        Self {
            transcript: transcript.into(),
            slides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_default_to_empty() {
        let request: NoteRequest = serde_json::from_str(r#"{"transcript": "Hello"}"#).unwrap();

        assert_eq!(request.transcript, "Hello");
        assert!(request.slides.is_empty());
    }

    #[test]
    fn test_transcript_is_required() {
        let result = serde_json::from_str::<NoteRequest>(r#"{"slides": ["Intro"]}"#);
        assert!(result.is_err());
    }
}
