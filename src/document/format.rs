//! Format resolution for downloaded publications.
//!
//! Catalog metadata is unreliable, so three independent signals are consulted
//! in decreasing order of trust: the listing's own format label, the URL
//! convention, and finally the downloaded bytes themselves. The first signal
//! that answers wins.

/// Container format of a downloaded publication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Epub,
}

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Decide which decoder family applies to a downloaded publication.
///
/// Pure and total: `None` means no signal recognized the content, never an
/// error. `bytes` only needs to carry the first kilobyte of the download.
pub fn resolve_format(
    hint: Option<&str>,
    url: Option<&str>,
    bytes: &[u8],
) -> Option<DocumentFormat> {
    if let Some(hint) = hint {
        let hint = hint.to_lowercase();
        if hint.contains("pdf") {
            return Some(DocumentFormat::Pdf);
        }
        if hint.contains("epub") || hint.contains("ebook") {
            return Some(DocumentFormat::Epub);
        }
    }

    if let Some(url) = url {
        let url = url.to_lowercase();
        if url.ends_with(".pdf") {
            return Some(DocumentFormat::Pdf);
        }
        if url.ends_with(".epub") {
            return Some(DocumentFormat::Epub);
        }
        match mime_guess::from_path(&url).first_raw() {
            Some("application/pdf") => return Some(DocumentFormat::Pdf),
            Some("application/epub+zip") => return Some(DocumentFormat::Epub),
            _ => {}
        }
    }

    if bytes.starts_with(PDF_MAGIC) {
        return Some(DocumentFormat::Pdf);
    }
    // An EPUB is a ZIP container whose early entries name the epub media type
    if bytes.starts_with(ZIP_MAGIC) && contains_epub_marker(bytes) {
        return Some(DocumentFormat::Epub);
    }

    None
}

fn contains_epub_marker(bytes: &[u8]) -> bool {
    let prefix = &bytes[..bytes.len().min(1024)];
    prefix.windows(4).any(|window| window.eq_ignore_ascii_case(b"epub"))
}
