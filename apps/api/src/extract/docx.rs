//! DOCX text extraction.
//!
//! A DOCX file is a ZIP archive; the body lives in `word/document.xml`. Only
//! top-level body paragraphs are read, in document order, each followed by a
//! newline. Table cells and text boxes are not part of that paragraph list.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use super::ExtractError;

const DOCUMENT_XML: &str = "word/document.xml";

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let xml = read_document_xml(bytes)?;
    let paragraphs = parse_body_paragraphs(&xml)?;
    debug!(paragraphs = paragraphs.len(), "Parsed DOCX body");

    let mut text = String::new();
    for paragraph in &paragraphs {
        text.push_str(paragraph);
        text.push('\n');
    }
    Ok(text)
}

fn read_document_xml(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Docx(format!("not a DOCX archive: {e}")))?;

    let mut entry = archive
        .by_name(DOCUMENT_XML)
        .map_err(|e| ExtractError::Docx(format!("cannot find {DOCUMENT_XML}: {e}")))?;

    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;
    Ok(xml)
}

fn is_body(parents: &[Vec<u8>]) -> bool {
    parents.last().is_some_and(|p| p == b"w:body")
}

/// Returns the text of every `w:p` that is a direct child of `w:body`.
fn parse_body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut parents: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    // Element depth the open body paragraph started at.
    let mut paragraph_depth = 0;
    let mut in_text = false;
    let mut textbox_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.name().as_ref().to_vec();
                match name.as_slice() {
                    b"w:p" if current.is_none() && is_body(&parents) => {
                        current = Some(String::new());
                        paragraph_depth = parents.len();
                    }
                    b"w:t" => in_text = true,
                    b"w:txbxContent" => textbox_depth += 1,
                    _ => {}
                }
                parents.push(name);
            }
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" if current.is_none() && is_body(&parents) => paragraphs.push(String::new()),
                b"w:tab" if textbox_depth == 0 => {
                    if let Some(p) = current.as_mut() {
                        p.push('\t');
                    }
                }
                b"w:br" | b"w:cr" if textbox_depth == 0 => {
                    if let Some(p) = current.as_mut() {
                        p.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::End(e)) => {
                parents.pop();
                match e.name().as_ref() {
                    b"w:t" => in_text = false,
                    b"w:txbxContent" => textbox_depth = textbox_depth.saturating_sub(1),
                    b"w:p" if current.is_some() && parents.len() == paragraph_depth => {
                        paragraphs.extend(current.take());
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                if in_text && textbox_depth == 0 {
                    if let Some(p) = current.as_mut() {
                        let text = e
                            .unescape()
                            .map_err(|e| ExtractError::Docx(e.to_string()))?;
                        p.push_str(&text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractError::Docx(format!(
                    "XML error at position {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::{Cursor, Write};

    use zip::write::SimpleFileOptions;

    const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Builds a DOCX archive whose `w:body` is exactly `body_xml`.
    pub fn build_docx_with_body(body_xml: &str) -> Vec<u8> {
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{W_NS}"><w:body>{body_xml}</w:body></w:document>"#
        );
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    /// Builds a DOCX archive with one single-run paragraph per entry.
    pub fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| {
                format!(
                    r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                    escape(p)
                )
            })
            .collect();
        build_docx_with_body(&body)
    }
}
