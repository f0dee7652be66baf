//! Document retrieval: download a publication, resolve its container format,
//! and extract its text.

pub mod client;
pub mod epub;
pub mod format;
pub mod pdf;

pub use client::DocumentClient;
pub use epub::extract_epub_text;
pub use format::{resolve_format, DocumentFormat};
pub use pdf::extract_pdf_text;
