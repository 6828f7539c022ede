use super::CONCEPTS_FOR_QUESTIONS;

/// Comprehension questions appended after the concept questions
pub const GENERIC_QUESTIONS: [&str; 3] = [
    "What are the main points discussed in this lecture?",
    "How do the concepts relate to each other?",
    "What examples were given to illustrate the concepts?",
];

/// Generate study questions
///
/// Two templated questions for each of the first three key concepts, then
/// the three generic questions. The caller applies the final cap, so the
/// generic questions are the first to go when the list is cut.
pub fn generate_study_questions<S: AsRef<str>>(key_concepts: &[S]) -> Vec<String> {
    let mut questions = Vec::new();

    for concept in key_concepts.iter().take(CONCEPTS_FOR_QUESTIONS) {
        let concept = concept.as_ref();
        questions.push(format!("What is {} and how does it work?", concept));
        questions.push(format!("Why is {} important in this context?", concept));
    }

    questions.extend(GENERIC_QUESTIONS.iter().map(|q| q.to_string()));
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_concepts_gives_generic_only() {
        let questions = generate_study_questions::<&str>(&[]);
        assert_eq!(questions, GENERIC_QUESTIONS.to_vec());
    }

    #[test]
    fn test_concept_questions_come_first() {
        let questions = generate_study_questions(&["Hashing"]);

        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0], "What is Hashing and how does it work?");
        assert_eq!(questions[1], "Why is Hashing important in this context?");
        assert_eq!(questions[2..], GENERIC_QUESTIONS.map(String::from));
    }

    #[test]
    fn test_only_first_three_concepts_used() {
        let questions = generate_study_questions(&["Alpha", "Bravo", "Charlie", "Delta"]);

        assert_eq!(questions.len(), 9);
        assert!(questions.iter().all(|q| !q.contains("Delta")));
        assert_eq!(questions[4], "What is Charlie and how does it work?");
    }
}
