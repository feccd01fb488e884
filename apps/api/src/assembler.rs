//! Resume assembler: one text extraction, then every field extractor over the
//! same text, merged into a single `ResumeRecord`.
//!
//! All or nothing. Any extractor failure (typically the NER backend) fails the
//! whole operation; there is no partial record.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::extract::{extract_text, RawDocument};
use crate::fields::{
    extract_certifications, extract_education, extract_email, extract_languages, extract_name,
    extract_phone_number, extract_projects, extract_skills, extract_work_experience,
    SectionMatchMode, DEFAULT_SKILLS,
};
use crate::models::resume::ResumeRecord;
use crate::ner::EntityRecognizer;

#[derive(Clone)]
pub struct ResumeAssembler {
    recognizer: Arc<dyn EntityRecognizer>,
    mode: SectionMatchMode,
}

impl ResumeAssembler {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>, mode: SectionMatchMode) -> Self {
        Self { recognizer, mode }
    }

    /// Parses a stored file. `file_type` is the extension-style tag (`pdf`, `docx`).
    pub async fn parse_resume(
        &self,
        path: &Path,
        file_type: &str,
    ) -> Result<ResumeRecord, AppError> {
        let doc = RawDocument::read(path, file_type).await?;
        self.parse_document(doc).await
    }

    pub async fn parse_document(&self, doc: RawDocument) -> Result<ResumeRecord, AppError> {
        let format = doc.format;
        let text = tokio::task::spawn_blocking(move || extract_text(doc))
            .await
            .map_err(|e| AppError::Internal(e.into()))??;

        if text.trim().is_empty() {
            info!(%format, "Document has no extractable text");
            return Err(AppError::EmptyResult);
        }

        self.assemble(&text).await
    }

    /// Runs every field extractor over already-extracted plain text.
    pub async fn assemble(&self, text: &str) -> Result<ResumeRecord, AppError> {
        let name = extract_name(text, self.recognizer.as_ref()).await?;
        let email = extract_email(text);
        let phone = extract_phone_number(text);
        let skills = extract_skills(text, DEFAULT_SKILLS);
        debug!(
            email = email.is_some(),
            phone = phone.is_some(),
            skills = skills.len(),
            "Extracted contact fields"
        );

        let work_experience = extract_work_experience(text, self.mode);
        let education = extract_education(text, self.mode);
        let certifications = extract_certifications(text, self.mode);
        let projects = extract_projects(text, self.mode);
        let languages = extract_languages(text, self.mode);

        info!(
            mode = ?self.mode,
            work_experience = work_experience.len(),
            education = education.len(),
            certifications = certifications.len(),
            projects = projects.len(),
            languages = languages.len(),
            "Assembled resume record"
        );

        let record = ResumeRecord {
            name,
            email,
            phone,
            skills: skills.join(", "),
            work_experience: work_experience.join("\n"),
            education: education.join("\n"),
            certifications: certifications.join("\n"),
            projects: projects.join("\n"),
            languages: languages.join("\n"),
        };
        if record.is_empty() {
            warn!("No resume fields matched the document text");
        }
        Ok(record)
    }
}
