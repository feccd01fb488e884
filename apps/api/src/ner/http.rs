//! Recognizer backed by an external NER service (e.g. a spaCy model behind HTTP).
//!
//! Request: `POST {url}` with `{"text": "..."}`.
//! Response: `{"entities": [{"text": "...", "label": "PERSON"}, ...]}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use super::{Entity, EntityRecognizer, NerError, NerResponse};

const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Serialize)]
struct NerRequest<'a> {
    text: &'a str,
}

#[derive(Clone)]
pub struct HttpEntityRecognizer {
    client: Client,
    url: String,
}

impl HttpEntityRecognizer {
    pub fn new(url: String) -> Result<Self, NerError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl EntityRecognizer for HttpEntityRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, NerError> {
        let response = self
            .client
            .post(&self.url)
            .json(&NerRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("NER service returned {}: {}", status, message);
            return Err(NerError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: NerResponse = response.json().await?;
        debug!(entities = parsed.entities.len(), "NER service call succeeded");
        Ok(parsed.entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(NerRequest { text: "Jane Doe" }).unwrap();
        assert_eq!(body, serde_json::json!({"text": "Jane Doe"}));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        // Port 9 (discard) is not expected to be listening.
        let recognizer = HttpEntityRecognizer::new("http://127.0.0.1:9/ner".to_string()).unwrap();
        let err = recognizer.recognize("Jane Doe").await.unwrap_err();
        assert!(matches!(err, NerError::Http(_)));
    }
}
