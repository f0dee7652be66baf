//! EPUB text extraction, delegated to the `epub` decoder.
//!
//! The decoder only opens containers from a filesystem path, so the
//! downloaded bytes are spooled to a uniquely named temporary file that is
//! removed when the guard drops, on success and on failure alike. Concurrent
//! extractions therefore never collide.

use std::io::Write;

use epub::doc::EpubDoc;
use scraper::Html;
use tracing::debug;

use crate::error::{ArmyPubsError, Result};

/// Extract the text of an EPUB document, chapter-ordered.
///
/// Every HTML item in the container's spine contributes its visible text;
/// `script` and `style` subtrees are dropped. Chapters are separated by a
/// blank line. A container with zero chapters of text yields an empty string;
/// only a decoder rejection is an error.
pub fn extract_epub_text(bytes: &[u8]) -> Result<String> {
    let mut temp_file = tempfile::Builder::new()
        .suffix(".epub")
        .tempfile()
        .map_err(|e| ArmyPubsError::IoError {
            message: format!("failed to create temporary EPUB file: {e}"),
        })?;
    temp_file
        .write_all(bytes)
        .map_err(|e| ArmyPubsError::IoError {
            message: format!("failed to spool EPUB bytes: {e}"),
        })?;

    let mut doc = EpubDoc::new(temp_file.path()).map_err(|e| ArmyPubsError::DecodeError {
        format: "EPUB",
        message: e.to_string(),
    })?;

    let mut chapters: Vec<String> = Vec::new();
    loop {
        if let Some((content, mime)) = doc.get_current_str() {
            if mime.contains("html") {
                let text = visible_text(&content);
                if !text.is_empty() {
                    chapters.push(text);
                }
            }
        }
        if !doc.go_next() {
            break;
        }
    }

    debug!(chapters = chapters.len(), "Extracted text from EPUB chapters");
    Ok(chapters.join("\n\n"))
}

/// Visible text of one chapter document: text nodes outside `script`/`style`,
/// trimmed, joined with newlines.
fn visible_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    let mut fragments: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let suppressed = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|el| matches!(el.name(), "script" | "style"));
        if suppressed {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            fragments.push(trimmed);
        }
    }

    fragments.join("\n")
}
