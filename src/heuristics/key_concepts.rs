use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use super::{KEY_CONCEPT_CANDIDATES, MIN_CONCEPT_LEN};

lazy_static! {
    // A single ASCII capital followed by lowercase letters, bounded as a whole word
    static ref CAPITALIZED_WORD_REGEX: Regex = Regex::new(r"\b[A-Z][a-z]+\b")
        .expect("Failed to compile capitalized word regex");
}

/// Extract key concepts from the transcript
///
/// Counts capitalized words longer than three characters and returns the
/// ten most frequent. Words with equal counts keep the order in which they
/// first appeared.
pub fn extract_key_concepts(transcript: &str) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for word in CAPITALIZED_WORD_REGEX.find_iter(transcript).map(|m| m.as_str()) {
        if word.chars().count() <= MIN_CONCEPT_LEN {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut ranked: Vec<(&str, usize)> = order.into_iter().map(|w| (w, counts[w])).collect();
    // Stable sort, so ties stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(KEY_CONCEPT_CANDIDATES)
        .map(|(word, _)| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_across_sentences() {
        let concepts = extract_key_concepts("Binary Trees are great. Binary Trees are useful.");
        assert_eq!(concepts, vec!["Binary", "Trees"]);
    }

    #[test]
    fn test_most_frequent_first() {
        let concepts = extract_key_concepts("Graph theory. Sorting helps. Sorting again. Sorting wins.");
        assert_eq!(concepts, vec!["Sorting", "Graph"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let concepts = extract_key_concepts("Zebra Apple Mango Apple Zebra Mango");
        assert_eq!(concepts, vec!["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn test_short_and_lowercase_words_ignored() {
        assert!(extract_key_concepts("The Cat sat on a mat").is_empty());
        assert!(extract_key_concepts("all lowercase words here").is_empty());
        assert!(extract_key_concepts("").is_empty());
    }

    #[test]
    fn test_requires_whole_word_match() {
        // Acronyms and camel case are not capitalized words
        assert!(extract_key_concepts("HTTP and JavaScript and McDonald").is_empty());
        assert_eq!(extract_key_concepts("(Hashing), Hashing."), vec!["Hashing"]);
    }

    #[test]
    fn test_limited_to_ten_candidates() {
        let transcript = "Alpha Bravo Charlie Delta Echos Foxtrot Golf Hotel India Juliet Kilo Lima";
        let concepts = extract_key_concepts(transcript);

        assert_eq!(concepts.len(), 10);
        assert_eq!(concepts[0], "Alpha");
        assert!(!concepts.contains(&"Kilo".to_string()));
        assert!(!concepts.contains(&"Lima".to_string()));
    }
}
