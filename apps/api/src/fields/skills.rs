//! Skill extraction against a fixed vocabulary.

/// The skill vocabulary the assembler checks every resume against.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "JavaScript",
    "SQL",
    "Machine Learning",
    "Data Science",
];

/// Returns every vocabulary entry that occurs anywhere in `text`, in vocabulary order.
///
/// Matching is a case-insensitive substring check with no word boundaries, so
/// "Java" is found inside "JavaScript" and "SQL" inside "PostgreSQL".
pub fn extract_skills<'a>(text: &str, vocabulary: &[&'a str]) -> Vec<&'a str> {
    let text_lower = text.to_lowercase();
    vocabulary
        .iter()
        .copied()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .collect()
}
