//! Resume text extraction.
//!
//! Reads an uploaded PDF and concatenates the text of every page in page order.
//! Pages without extractable text contribute nothing; a file that is not a PDF
//! at all is a hard error for the caller to report.

use lopdf::Document;
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
pub mod fixtures;

const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document is not a readable PDF: {0}")]
    Unreadable(#[from] lopdf::Error),
}

/// Extracts the text of a PDF held in memory.
///
/// The result is the per-page text joined without separators, in ascending
/// page order. A document with no pages yields an empty string.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let document = Document::load_mem(bytes)?;
    let pages = document.get_pages();

    let mut text = String::new();
    for page_number in pages.keys() {
        text.push_str(&page_text(&document, *page_number));
    }

    debug!(
        "Extracted {} chars from {} page(s)",
        text.len(),
        pages.len()
    );
    Ok(text)
}

/// Best-effort text of a single page. Undecodable pages count as empty.
fn page_text(document: &Document, page_number: u32) -> String {
    match document.extract_text(&[page_number]) {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to extract text from page {page_number}: {e}");
            String::new()
        }
    }
}

/// Returns true when an upload looks like a PDF, either by its `.pdf` file
/// extension or by its declared content type.
pub fn is_pdf_upload(file_name: Option<&str>, content_type: Option<&str>) -> bool {
    let by_name = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    let by_type = content_type
        .map(|ct| ct.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
        .unwrap_or(false);

    by_name || by_type
}
