//! # Army Pubs Client
//!
//! A Rust client library for the Army Publishing Directorate catalog.
//! It searches the publications catalog by free text and retrieves the full
//! text of individual publications, whether they are distributed as PDF or
//! EPUB.
//!
//! The catalog's search page carries no machine-readable schema, so results
//! are recovered heuristically from the HTML; downloaded documents carry no
//! reliable format metadata, so the container format is resolved from the
//! listing label, the URL, and the bytes themselves. A document that answers
//! with a redirect toward the credential federation service is reported as
//! access-restricted, distinct from a broken link.
//!
//! ## Searching the catalog
//!
//! ```no_run
//! use armypubs_client::CatalogClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new();
//!     let records = client.search("infantry platoon").await?;
//!
//!     for record in records {
//!         println!("{} [{}]: {}", record.document_number, record.file_format, record.url);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Retrieving a publication's text
//!
//! ```no_run
//! use armypubs_client::Client;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new();
//!     let text = client
//!         .get_publication("https://armypubs.army.mil/epubs/DR_pubs/ATP_3-21x8.pdf")
//!         .await;
//!     println!("{text}");
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;

use tracing::warn;

// Re-export main types for convenience
pub use catalog::{CatalogClient, PublicationRecord};
pub use config::ClientConfig;
pub use document::{DocumentClient, DocumentFormat};
pub use error::{ArmyPubsError, Result};

/// Prefix tagging the one failure callers can branch on at the boundary
pub const ACCESS_RESTRICTED_PREFIX: &str = "ACCESS_RESTRICTED: ";

/// Fixed message returned when a publication's text cannot be extracted
pub const EXTRACTION_FAILURE_MESSAGE: &str = "Failed to extract text from the publication. \
    It may not be a supported format or the content could not be retrieved.";

/// Convenience client combining catalog search and document retrieval
#[derive(Clone)]
pub struct Client {
    /// Catalog client for searching publications
    pub catalog: CatalogClient,
    /// Document client for downloading publications and extracting text
    pub document: DocumentClient,
}

impl Client {
    /// Create a new combined client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new combined client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            catalog: CatalogClient::with_config(config.clone()),
            document: DocumentClient::with_config(config),
        }
    }

    /// Search the catalog for publications matching a free-text query.
    ///
    /// Records come back in the catalog's own order. An unparseable results
    /// page yields an empty list; only transport-level problems fail.
    pub async fn search(&self, query: &str) -> Result<Vec<PublicationRecord>> {
        self.catalog.search(query).await
    }

    /// Retrieve the full text of a publication by URL.
    ///
    /// This is the boundary contract for callers that want a plain string:
    /// the extracted text on success, a sentinel prefixed with
    /// [`ACCESS_RESTRICTED_PREFIX`] for credential-gated documents, and the
    /// fixed [`EXTRACTION_FAILURE_MESSAGE`] for every other failure. The
    /// distinction between transport, format, and decode failures is logged
    /// here and deliberately not exposed; use
    /// [`DocumentClient::fetch_publication_text`] for the structured result.
    pub async fn get_publication(&self, url: &str) -> String {
        match self.document.fetch_publication_text(url).await {
            Ok(text) => text,
            Err(ArmyPubsError::AccessRestricted { message }) => {
                format!("{ACCESS_RESTRICTED_PREFIX}{message}")
            }
            Err(err) => {
                warn!(error = %err, "Publication text extraction failed");
                EXTRACTION_FAILURE_MESSAGE.to_string()
            }
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
