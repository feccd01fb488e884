//! Recognizer that asks Claude for entities. All calls go through `LlmClient`.

use async_trait::async_trait;
use tracing::debug;

use super::prompts::{NER_PROMPT_TEMPLATE, NER_SYSTEM};
use super::{Entity, EntityRecognizer, NerError, NerResponse};
use crate::llm_client::LlmClient;

pub struct LlmEntityRecognizer {
    llm: LlmClient,
}

impl LlmEntityRecognizer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

pub(crate) fn build_prompt(text: &str) -> String {
    NER_PROMPT_TEMPLATE.replace("{text}", text)
}

#[async_trait]
impl EntityRecognizer for LlmEntityRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, NerError> {
        let response: NerResponse = self.llm.call_json(&build_prompt(text), NER_SYSTEM).await?;
        debug!(entities = response.entities.len(), "LLM entity recognition succeeded");
        Ok(response.entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text_once() {
        let prompt = build_prompt("Jane Doe\nSoftware Engineer");
        assert!(prompt.contains("Jane Doe\nSoftware Engineer"));
        assert!(!prompt.contains("{text}"));
    }
}
