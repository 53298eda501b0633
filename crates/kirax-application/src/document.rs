//! Uploaded-document context.
//!
//! Bridges the PDF extractor into session state. A failed extraction is
//! surfaced to the caller as an upload error and leaves whatever context
//! was previously attached untouched.

use kirax_core::Result;
use kirax_core::session::SessionState;
use kirax_infrastructure::extract_pdf_text;

/// Attaches uploaded PDFs to a session as prompt context.
#[derive(Debug, Default)]
pub struct DocumentContextService;

impl DocumentContextService {
    /// Creates the service.
    pub fn new() -> Self {
        Self
    }

    /// Extracts a PDF's text and stores it on the session.
    ///
    /// # Returns
    ///
    /// - `Ok(usize)`: Number of characters extracted
    /// - `Err(KiraxError::MalformedDocument)`: Bytes are not a parseable
    ///   PDF; the session's existing context is left as it was
    pub fn attach_pdf(&self, session: &mut SessionState, bytes: &[u8]) -> Result<usize> {
        let text = extract_pdf_text(bytes)?;
        let extracted = text.chars().count();
        session.set_pdf_context(text);
        tracing::info!(session = %session.id, chars = extracted, "document context attached");
        Ok(extracted)
    }
}
