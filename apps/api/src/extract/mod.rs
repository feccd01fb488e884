//! Document text extraction: turns an uploaded PDF or DOCX byte stream into one plain-text string.
//!
//! No OCR and no layout reconstruction. Image-only or encrypted PDFs simply yield
//! whatever text layer they have, which may be nothing.

pub mod docx;
pub mod pdf;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to extract PDF text: {0}")]
    Pdf(String),

    #[error("Failed to extract DOCX text: {0}")]
    Docx(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Formats the extractor understands. Anything else is `UnsupportedFormat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = ExtractError;

    /// Type tags are matched case-insensitively (`PDF`, `Docx`, ...).
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(ExtractError::UnsupportedFormat(tag.to_string())),
        }
    }
}

/// An uploaded document: raw bytes plus the declared format. Consumed by `extract_text`.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
}

impl RawDocument {
    pub fn new(bytes: Vec<u8>, format: DocumentFormat) -> Self {
        Self { bytes, format }
    }

    /// Builds a document from a free-form type tag such as a file extension.
    pub fn from_tagged(bytes: Vec<u8>, tag: &str) -> Result<Self, ExtractError> {
        Ok(Self::new(bytes, tag.parse()?))
    }

    /// Reads a stored file. The tag is checked before touching the filesystem.
    pub async fn read(path: &Path, tag: &str) -> Result<Self, ExtractError> {
        let format: DocumentFormat = tag.parse()?;
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(bytes, format))
    }
}

/// Extracts the plain text of a document.
///
/// Blocking and CPU-bound; async callers should run it on the blocking pool.
pub fn extract_text(doc: RawDocument) -> Result<String, ExtractError> {
    let byte_len = doc.bytes.len();
    let text = match doc.format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(&doc.bytes)?,
        DocumentFormat::Docx => docx::extract_docx_text(&doc.bytes)?,
    };
    debug!(
        format = %doc.format,
        bytes = byte_len,
        chars = text.chars().count(),
        "Extracted document text"
    );
    Ok(text)
}
