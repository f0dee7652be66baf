use reqwest::header::{ACCEPT, LOCATION};
use reqwest::{redirect, Client};
use tokio::task;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::document::epub::extract_epub_text;
use crate::document::format::{resolve_format, DocumentFormat};
use crate::document::pdf::extract_pdf_text;
use crate::error::{ArmyPubsError, Result};

/// Accept header for publication downloads
const BINARY_ACCEPT: &str = "application/pdf,application/epub+zip,*/*";

/// Hostname of the credential federation service that CAC-gated documents
/// redirect to. Matching it inside a stringified transport failure is a
/// heuristic carried over from the catalog's observed behavior, not a
/// verified redirect-chain inspection.
const FEDERATION_HOST: &str = "federation.eams.army";

/// Message carried by the access-restricted outcome
pub const CAC_AUTH_MESSAGE: &str =
    "This document requires Common Access Card (CAC) authentication";

/// Client for downloading publications and extracting their text
///
/// Redirects are deliberately not followed: a CAC-gated document answers with
/// a redirect toward the credential federation service, and that redirect
/// must stay observable to distinguish a credential wall from a broken link.
///
/// # Example
///
/// ```no_run
/// use armypubs_client::DocumentClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = DocumentClient::new();
///     let text = client
///         .fetch_publication_text("https://armypubs.army.mil/epubs/DR_pubs/ATP_3-21x8.pdf")
///         .await?;
///     println!("{} characters extracted", text.len());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct DocumentClient {
    client: Client,
}

impl DocumentClient {
    /// Create a new document client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new document client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.document_timeout)
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Download a publication and extract its full text.
    ///
    /// The decoder family is resolved from the URL's trailing extension, the
    /// URL itself, and the downloaded bytes, in that order; the server's
    /// declared content type is not trusted.
    ///
    /// # Errors
    ///
    /// * `ArmyPubsError::AccessRestricted` - the document sits behind a CAC credential wall
    /// * `ArmyPubsError::UnsupportedFormat` - no signal identified a supported format
    /// * `ArmyPubsError::DecodeError` - the matching decoder rejected the bytes
    /// * `ArmyPubsError::RequestError` / `ArmyPubsError::ApiError` - transport-level failures
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_publication_text(&self, url: &str) -> Result<String> {
        let hint = format_hint_from_url(url);
        debug!(hint = hint.as_deref().unwrap_or(""), "Downloading publication");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, BINARY_ACCEPT)
            .send()
            .await
            .map_err(|e| screen_access_restricted(ArmyPubsError::RequestError(e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = if status.is_redirection() {
                let location = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("<missing>");
                format!("HTTP {status}: redirect to {location}")
            } else {
                format!(
                    "HTTP {}: {}",
                    status,
                    status.canonical_reason().unwrap_or("Unknown error")
                )
            };
            warn!("Publication download failed: {}", message);
            return Err(screen_access_restricted(ArmyPubsError::ApiError {
                status: status.as_u16(),
                message,
            }));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| screen_access_restricted(ArmyPubsError::RequestError(e)))?;
        debug!(bytes = bytes.len(), "Publication downloaded");

        match resolve_format(hint.as_deref(), Some(url), &bytes) {
            Some(DocumentFormat::Pdf) => {
                let bytes = bytes.to_vec();
                run_extraction(move || extract_pdf_text(&bytes)).await
            }
            Some(DocumentFormat::Epub) => {
                let bytes = bytes.to_vec();
                run_extraction(move || extract_epub_text(&bytes)).await
            }
            None => {
                warn!("No format signal matched the downloaded publication");
                Err(ArmyPubsError::UnsupportedFormat)
            }
        }
    }
}

impl Default for DocumentClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoding is file- and CPU-bound, so it runs off the async runtime
async fn run_extraction<F>(extract: F) -> Result<String>
where
    F: FnOnce() -> Result<String> + Send + 'static,
{
    task::spawn_blocking(extract)
        .await
        .map_err(|e| ArmyPubsError::IoError {
            message: format!("extraction task failed: {e}"),
        })?
}

/// Format hint from the URL's trailing extension, when it has one. A suffix
/// with path or port characters in it is not an extension.
fn format_hint_from_url(url: &str) -> Option<String> {
    let (_, suffix) = url.rsplit_once('.')?;
    if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(suffix.to_lowercase())
}

/// Promote a transport failure to the access-restricted outcome when it looks
/// like a redirect toward the credential federation service. Substring match
/// over the stringified error, kept for compatibility with the catalog's
/// observed behavior.
fn screen_access_restricted(err: ArmyPubsError) -> ArmyPubsError {
    let text = err.to_string().to_lowercase();
    if text.contains("redirect") && text.contains(FEDERATION_HOST) {
        return ArmyPubsError::AccessRestricted {
            message: CAC_AUTH_MESSAGE.to_string(),
        };
    }
    err
}
