//! Candidate name via named-entity recognition.

use crate::ner::{Entity, EntityRecognizer, NerError};

/// Reported when the model finds no person in the document.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Returns the first `PERSON` entity in model order, or `"Unknown"`.
pub async fn extract_name(
    text: &str,
    recognizer: &dyn EntityRecognizer,
) -> Result<String, NerError> {
    let entities = recognizer.recognize(text).await?;
    Ok(first_person(&entities).unwrap_or(UNKNOWN_NAME).to_string())
}

fn first_person(entities: &[Entity]) -> Option<&str> {
    entities
        .iter()
        .find(|e| e.is_person())
        .map(|e| e.text.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::testing::{StaticRecognizer, UnavailableRecognizer};

    #[tokio::test]
    async fn test_first_person_in_model_order_wins() {
        let recognizer = StaticRecognizer(vec![
            Entity::new("Acme Corp", "ORG"),
            Entity::new("Jane Doe", "PERSON"),
            Entity::new("John Smith", "PERSON"),
        ]);
        let name = extract_name("irrelevant", &recognizer).await.unwrap();
        assert_eq!(name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_unknown_when_no_person() {
        let recognizer = StaticRecognizer(vec![
            Entity::new("Berlin", "GPE"),
            Entity::new("2019", "DATE"),
        ]);
        let name = extract_name("irrelevant", &recognizer).await.unwrap();
        assert_eq!(name, UNKNOWN_NAME);
    }

    #[tokio::test]
    async fn test_unknown_when_no_entities() {
        let name = extract_name("", &StaticRecognizer(vec![])).await.unwrap();
        assert_eq!(name, "Unknown");
    }

    #[tokio::test]
    async fn test_recognizer_failure_propagates() {
        let result = extract_name("Jane Doe", &UnavailableRecognizer).await;
        assert!(matches!(result, Err(NerError::Service { status: 503, .. })));
    }
}
