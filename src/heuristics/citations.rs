use chrono::{DateTime, Utc};

use crate::models::{Citation, CitationType};

use super::REFERENCE_MAX_CHARS;

/// Build one citation per slide, reading the clock for each
pub fn process_citations<S: AsRef<str>>(slides: &[S]) -> Vec<Citation> {
    process_citations_with_clock(slides, Utc::now)
}

/// Build citations with a caller-supplied clock
///
/// `clock` is called once per slide, so timestamps within a response may
/// differ slightly.
pub fn process_citations_with_clock<S, F>(slides: &[S], mut clock: F) -> Vec<Citation>
where
    S: AsRef<str>,
    F: FnMut() -> DateTime<Utc>,
{
    slides
        .iter()
        .enumerate()
        .map(|(i, slide)| Citation {
            citation_type: CitationType::Slide,
            reference: truncate_reference(slide.as_ref()),
            page: i + 1,
            timestamp: clock(),
        })
        .collect()
}

fn truncate_reference(slide: &str) -> String {
    match slide.char_indices().nth(REFERENCE_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &slide[..cut]),
        None => slide.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 3, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_no_slides() {
        assert!(process_citations::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_pages_are_one_based() {
        let slides = ["Intro", "Binary Trees Overview", "Hash Tables"];
        let citations = process_citations_with_clock(&slides, fixed_clock);

        assert_eq!(citations.len(), 3);
        for (i, citation) in citations.iter().enumerate() {
            assert_eq!(citation.page, i + 1);
            assert_eq!(citation.reference, slides[i]);
            assert_eq!(citation.citation_type, CitationType::Slide);
            assert_eq!(citation.timestamp, fixed_clock());
        }
    }

    #[test]
    fn test_long_slide_truncated() {
        let slide = "s".repeat(140);
        let citations = process_citations(&[slide.clone()]);
        let reference = &citations[0].reference;

        assert_eq!(reference.len(), 103);
        assert!(reference.ends_with("..."));
        assert_eq!(&reference[..100], &slide[..100]);
    }

    #[test]
    fn test_exactly_100_chars_kept_verbatim() {
        let slide = "t".repeat(100);
        let citations = process_citations(&[slide.clone()]);
        assert_eq!(citations[0].reference, slide);
    }

    #[test]
    fn test_truncation_counts_characters() {
        let slide = "ü".repeat(101);
        let citations = process_citations(&[slide]);

        assert_eq!(citations[0].reference.chars().count(), 103);
        assert!(citations[0].reference.starts_with(&"ü".repeat(100)));
    }

    #[test]
    fn test_clock_read_per_slide() {
        let mut calls = 0;
        let citations = process_citations_with_clock(&["a", "b"], || {
            calls += 1;
            fixed_clock()
        });

        assert_eq!(citations.len(), 2);
        assert_eq!(calls, 2);
    }
}
