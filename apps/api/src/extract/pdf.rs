//! PDF text extraction via `pdf-extract`, one page at a time.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use super::ExtractError;

/// Concatenates the text layer of every page in page order, with no separator
/// between pages. Pages without any text contribute nothing.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    let pages = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }))
    .map_err(|_| {
        warn!("pdf-extract panicked while decoding document");
        ExtractError::Pdf("document could not be decoded".to_string())
    })?
    .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    debug!(pages = pages.len(), "Decoded PDF pages");
    Ok(join_pages(pages))
}

fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::build_pdf;
    use super::*;

    #[test]
    fn test_single_page_text_is_extracted() {
        let bytes = build_pdf(&["Jane Doe"]);
        let text = extract_pdf_text(&bytes).unwrap();
        assert!(text.contains("Jane Doe"), "got {text:?}");
    }

    #[test]
    fn test_pages_keep_document_order() {
        let bytes = build_pdf(&["Education", "Projects"]);
        let text = extract_pdf_text(&bytes).unwrap();
        let education = text.find("Education").unwrap();
        let projects = text.find("Projects").unwrap();
        assert!(education < projects);
    }

    #[test]
    fn test_blank_pages_contribute_nothing() {
        let bytes = build_pdf(&["", ""]);
        assert_eq!(extract_pdf_text(&bytes).unwrap(), "");
    }

    #[test]
    fn test_garbage_bytes_fail() {
        let err = extract_pdf_text(b"%PDF-1.4 truncated").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }

    #[test]
    fn test_join_pages_has_no_separator() {
        let pages = vec!["first".to_string(), "  \n".to_string(), "second".to_string()];
        assert_eq!(join_pages(pages), "firstsecond");
    }
}
