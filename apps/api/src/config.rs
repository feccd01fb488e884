use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::fields::sections::SectionMatchMode;
use crate::ner::NerBackend;

/// Original upload cap: 16 MB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
const DEFAULT_NER_URL: &str = "http://localhost:8000/ner";

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub ner_backend: NerBackend,
    pub ner_url: String,
    /// Only required when `ner_backend` is `Llm`.
    pub anthropic_api_key: Option<String>,
    pub section_match_mode: SectionMatchMode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            ner_backend: optional_env("NER_BACKEND")
                .map(|v| v.parse::<NerBackend>())
                .transpose()
                .context("NER_BACKEND must be 'http' or 'llm'")?
                .unwrap_or_default(),
            ner_url: std::env::var("NER_URL").unwrap_or_else(|_| DEFAULT_NER_URL.to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            section_match_mode: optional_env("SECTION_MATCH_MODE")
                .map(|v| v.parse::<SectionMatchMode>())
                .transpose()
                .context("SECTION_MATCH_MODE must be 'once-per-line' or 'per-keyword'")?
                .unwrap_or_default(),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
