//! PDF text extraction.
//!
//! Converts an uploaded PDF's bytes into one concatenated text string,
//! all pages in document order, no separators. Extraction fidelity is
//! whatever lopdf yields. No OCR, no layout reconstruction.

use kirax_core::{KiraxError, Result};
use lopdf::Document;

/// Extracts the text of every page of a PDF, concatenated in page order.
///
/// # Returns
///
/// - `Ok(String)`: The concatenated page texts (may be empty)
/// - `Err(KiraxError::MalformedDocument)`: Bytes do not form a parseable PDF
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let document = Document::load_mem(bytes)
        .map_err(|err| KiraxError::malformed_document(err.to_string()))?;

    let mut text = String::new();
    for page_number in document.get_pages().keys() {
        match document.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(err) => {
                // A page without extractable text is not an upload error
                tracing::debug!(page = page_number, "skipping unextractable page: {err}");
            }
        }
    }

    Ok(text)
}
