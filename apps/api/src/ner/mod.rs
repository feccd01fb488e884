//! Named-entity recognition, delegated to an external model.
//!
//! The recognizer is built once at startup and shared read-only as
//! `Arc<dyn EntityRecognizer>`; nothing here is reimplemented locally.

pub mod http;
pub mod llm;
pub mod prompts;

use std::str::FromStr;
use std::sync::Arc;

use anyhow::{bail, Context};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::llm_client::{LlmClient, LlmError};

pub use http::HttpEntityRecognizer;
pub use llm::LlmEntityRecognizer;

/// Label the name extractor looks for.
pub const PERSON_LABEL: &str = "PERSON";

/// One recognized span, in the order the model reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    #[serde(alias = "label_")]
    pub label: String,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }

    pub fn is_person(&self) -> bool {
        self.label.eq_ignore_ascii_case(PERSON_LABEL)
    }
}

/// Wire shape shared by every backend. `ents` is accepted for spaCy-style services.
#[derive(Debug, Deserialize)]
pub struct NerResponse {
    #[serde(alias = "ents")]
    pub entities: Vec<Entity>,
}

#[derive(Debug, Error)]
pub enum NerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NER service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Backend-agnostic entity recognizer. Swap implementations without touching
/// the assembler or the handlers.
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, NerError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NerBackend {
    /// External spaCy-style HTTP service.
    #[default]
    Http,
    /// Claude via the shared `LlmClient`.
    Llm,
}

impl FromStr for NerBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(NerBackend::Http),
            "llm" => Ok(NerBackend::Llm),
            other => bail!("unknown NER backend '{other}'"),
        }
    }
}

/// Loads the process-wide recognizer selected by `NER_BACKEND`.
pub fn build_recognizer(config: &Config) -> anyhow::Result<Arc<dyn EntityRecognizer>> {
    match config.ner_backend {
        NerBackend::Http => {
            info!("NER backend: http ({})", config.ner_url);
            let recognizer = HttpEntityRecognizer::new(config.ner_url.clone())
                .context("Failed to build NER HTTP client")?;
            Ok(Arc::new(recognizer))
        }
        NerBackend::Llm => {
            let api_key = config
                .anthropic_api_key
                .clone()
                .context("ANTHROPIC_API_KEY is required when NER_BACKEND=llm")?;
            info!("NER backend: llm (model: {})", crate::llm_client::MODEL);
            let llm = LlmClient::new(api_key).context("Failed to build LLM client")?;
            Ok(Arc::new(LlmEntityRecognizer::new(llm)))
        }
    }
}
