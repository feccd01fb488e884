//! Upload layer: accepts a resume, validates and stores it, then hands it to
//! the assembler. Every parsing failure surfaces as the same generic message.

use axum::{
    extract::{multipart::MultipartError, Multipart, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::RawDocument;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

/// Extensions the upload form accepts. `txt` passes validation but has no
/// extraction path, so it fails later as an unsupported format.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

const INVALID_TYPE_MESSAGE: &str = "Invalid file type. Only PDF and DOCX are allowed.";

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head><title>Resume Parser</title></head>
<body>
  <h1>Upload a resume</h1>
  <form action="/upload" method="post" enctype="multipart/form-data">
    <input type="file" name="file" accept=".pdf,.docx">
    <button type="submit">Parse</button>
  </form>
</body>
</html>
"#;

/// Text after the last dot, if there is one.
pub fn file_extension(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}

pub fn allowed_file(filename: &str) -> bool {
    file_extension(filename)
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Reduces a client-supplied filename to a safe single path component:
/// separators and whitespace become `_`, anything outside `[A-Za-z0-9._-]`
/// is dropped, and leading/trailing dots and underscores are stripped.
pub fn secure_filename(filename: &str) -> String {
    let spaced: String = filename
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(e.body_text())
    }
}

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /upload
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRecord>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(multipart_error)?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) = upload.ok_or_else(|| AppError::Validation("No file part".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No selected file".to_string()));
    }
    if !allowed_file(&filename) {
        return Err(AppError::Validation(INVALID_TYPE_MESSAGE.to_string()));
    }

    let safe_name = secure_filename(&filename);
    let stored = state
        .config
        .upload_dir
        .join(format!("{}_{}", Uuid::new_v4().simple(), safe_name));
    tokio::fs::write(&stored, &data)
        .await
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("Failed to store upload")))?;
    info!(
        filename = %safe_name,
        bytes = data.len(),
        path = %stored.display(),
        "Stored upload"
    );

    let file_type = file_extension(&filename).unwrap_or_default();
    let record = state.assembler.parse_resume(&stored, file_type).await?;
    Ok(Json(record))
}

#[derive(Debug, Deserialize)]
pub struct ParseQuery {
    pub format: String,
}

/// POST /api/v1/parse?format=pdf|docx
/// Parses the raw request body without storing it.
pub async fn parse_handler(
    State(state): State<AppState>,
    Query(params): Query<ParseQuery>,
    body: Bytes,
) -> Result<Json<ResumeRecord>, AppError> {
    let doc = RawDocument::from_tagged(body.to_vec(), &params.format)?;
    let record = state.assembler.parse_document(doc).await?;
    Ok(Json(record))
}
