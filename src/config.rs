use std::time::Duration;

/// Default search endpoint of the Army Publishing Directorate catalog
pub const DEFAULT_BASE_URL: &str =
    "https://armypubs.army.mil/ProductMaps/PubForm/ContentSearch.aspx";

/// Site origin used to absolutize relative publication links
pub const DEFAULT_ORIGIN: &str = "https://armypubs.army.mil";

const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_DOCUMENT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for catalog and document clients
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use armypubs_client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_user_agent("my-tool/1.0")
///     .with_document_timeout(Duration::from_secs(120));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Custom search endpoint (primarily for tests against a mock server)
    pub base_url: Option<String>,
    /// Custom site origin for absolutizing relative links
    pub origin: Option<String>,
    /// Custom User-Agent header value
    pub user_agent: Option<String>,
    /// Timeout for search page requests
    pub timeout: Duration,
    /// Timeout for publication downloads, which can be large binaries
    pub document_timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with catalog defaults
    pub fn new() -> Self {
        Self {
            base_url: None,
            origin: None,
            user_agent: None,
            timeout: DEFAULT_SEARCH_TIMEOUT,
            document_timeout: DEFAULT_DOCUMENT_TIMEOUT,
        }
    }

    /// Set a custom search endpoint URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a custom site origin for absolutizing relative links
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set a custom User-Agent header value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the timeout for search page requests
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout for publication downloads
    pub fn with_document_timeout(mut self, timeout: Duration) -> Self {
        self.document_timeout = timeout;
        self
    }

    /// The search endpoint in effect
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// The site origin in effect
    pub fn effective_origin(&self) -> &str {
        self.origin.as_deref().unwrap_or(DEFAULT_ORIGIN)
    }

    /// The User-Agent header value in effect
    pub fn effective_user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(|| {
            format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
