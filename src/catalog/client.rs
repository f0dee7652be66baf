use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::catalog::models::PublicationRecord;
use crate::catalog::parser::parse_search_results;
use crate::config::ClientConfig;
use crate::error::{ArmyPubsError, Result};

/// Accept header for search page requests
const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Client for searching the publications catalog
///
/// # Example
///
/// ```no_run
/// use armypubs_client::CatalogClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CatalogClient::new();
///     let records = client.search("physical readiness").await?;
///     for record in records {
///         println!("{}: {}", record.document_number, record.title);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    origin: String,
}

impl CatalogClient {
    /// Create a new catalog client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new catalog client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.effective_base_url().to_string(),
            origin: config.effective_origin().to_string(),
        }
    }

    /// Search the catalog and return the parsed publication records.
    ///
    /// Records come back in the page's own order, which is the catalog's
    /// ranking. A results page the parser cannot make sense of yields an
    /// empty list, not an error; only transport-level problems fail.
    ///
    /// # Errors
    ///
    /// * `ArmyPubsError::RequestError` - if the HTTP request fails
    /// * `ArmyPubsError::ApiError` - if the catalog answers with a non-success status
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search(&self, query: &str) -> Result<Vec<PublicationRecord>> {
        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!("{}?q={}", self.base_url, urlencoding::encode(query));
        debug!("Requesting catalog search page");

        let response = self.client.get(&url).header(ACCEPT, HTML_ACCEPT).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Search request failed with status: {}", status);
            return Err(ArmyPubsError::ApiError {
                status: status.as_u16(),
                message: format!(
                    "HTTP {}: {}",
                    status,
                    status.canonical_reason().unwrap_or("Unknown error")
                ),
            });
        }

        let html = response.text().await?;
        let records = parse_search_results(&html, &self.origin);

        info!(results_found = records.len(), "Search completed");
        Ok(records)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
