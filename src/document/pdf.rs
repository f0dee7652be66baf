//! PDF text extraction, delegated to the `pdf-extract` decoder.

use tracing::debug;

use crate::error::{ArmyPubsError, Result};

/// Extract the text of a PDF document, page-ordered.
///
/// Pages are joined with a single newline. A document that decodes to zero
/// pages of text yields an empty string, which is degenerate but successful;
/// only a decoder rejection is an error.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let pages =
        pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| ArmyPubsError::DecodeError {
            format: "PDF",
            message: e.to_string(),
        })?;

    debug!(pages = pages.len(), "Extracted text from PDF pages");

    let text = pages
        .iter()
        .map(|page| page.trim())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(text.trim().to_string())
}
