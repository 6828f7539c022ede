use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of source a citation points at. Slides are the only source today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CitationType {
    Slide,
}

/// A reference record derived from one input slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Citation {
    #[serde(rename = "type")]
    pub citation_type: CitationType,
    /// Slide text, truncated to 100 characters plus "..." when longer
    pub reference: String,
    /// 1-based position of the slide in the request
    pub page: usize,
    /// When this citation was generated
    pub timestamp: DateTime<Utc>,
}

/// Cornell-style notes produced for one request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    /// Short prompt lines (at most 10)
    pub cues: Vec<String>,
    /// Detail lines, each at most 100 characters (at most 15)
    pub notes: Vec<String>,
    pub summary: String,
    /// One per input slide, in input order
    pub citations: Vec<Citation>,
    /// Most frequent capitalized terms (at most 8)
    pub key_concepts: Vec<String>,
    /// Study questions (at most 5)
    pub questions: Vec<String>,
}
