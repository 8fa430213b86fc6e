//! Akamai EdgeGrid transport

mod credentials;
mod http;
mod sign;

use std::fmt;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;

use crate::error::{ClientError, Result};

pub use credentials::{DEFAULT_SECTION, EdgeGridCredentials, default_edgerc_path};

/// Default `max_body` of an EdgeGrid client (bytes covered by the content hash).
pub const DEFAULT_MAX_BODY: usize = 131_072;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client that signs every request with `EG1-HMAC-SHA256`.
///
/// # Construction
///
/// ```rust,no_run
/// use akamai_config_sdk::EdgeGridClient;
///
/// # fn main() -> akamai_config_sdk::Result<()> {
/// let client = EdgeGridClient::from_edgerc("/home/me/.edgerc", "default")?;
/// # Ok(())
/// # }
/// ```
pub struct EdgeGridClient {
    pub(crate) client: Client,
    pub(crate) credentials: EdgeGridCredentials,
    pub(crate) base_url: String,
}

impl fmt::Debug for EdgeGridClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeGridClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

/// Builder for [`EdgeGridClient`].
pub struct EdgeGridClientBuilder {
    credentials: EdgeGridCredentials,
    base_url: Option<String>,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl EdgeGridClientBuilder {
    fn new(credentials: EdgeGridCredentials) -> Self {
        Self {
            credentials,
            base_url: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Send requests to `base_url` instead of `https://{host}`.
    ///
    /// The signature still covers the configured host.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Set the connect timeout (default: 10s).
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the whole-request timeout (default: 30s).
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the [`EdgeGridClient`] instance.
    pub fn build(self) -> Result<EdgeGridClient> {
        self.credentials.validate()?;

        let client = Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| ClientError::config(format!("Failed to create HTTP client: {e}")))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| format!("https://{}", self.credentials.host));

        Ok(EdgeGridClient {
            client,
            credentials: self.credentials,
            base_url,
        })
    }
}

impl EdgeGridClient {
    /// Creates a client with default settings.
    pub fn new(credentials: EdgeGridCredentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the client configuration.
    pub fn builder(credentials: EdgeGridCredentials) -> EdgeGridClientBuilder {
        EdgeGridClientBuilder::new(credentials)
    }

    /// Creates a client from one section of an `.edgerc` file.
    pub fn from_edgerc(path: impl AsRef<Path>, section: &str) -> Result<Self> {
        Self::new(EdgeGridCredentials::from_edgerc(path, section)?)
    }

    pub fn credentials(&self) -> &EdgeGridCredentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> EdgeGridCredentials {
        EdgeGridCredentials::new(
            "akab-host.luna.akamaiapis.net",
            "akab-client-token",
            "client-secret",
            "akab-access-token",
        )
    }

    #[test]
    fn base_url_defaults_to_https_host() {
        let client = EdgeGridClient::new(credentials()).unwrap();
        assert_eq!(client.base_url(), "https://akab-host.luna.akamaiapis.net");
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let client = EdgeGridClient::builder(credentials())
            .base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
        assert_eq!(client.credentials().host, "akab-host.luna.akamaiapis.net");
    }

    #[test]
    fn debug_masks_credentials() {
        let client = EdgeGridClient::builder(credentials())
            .base_url("http://127.0.0.1:8080")
            .build()
            .unwrap();
        let dump = format!("{client:?}");
        assert!(dump.starts_with("EdgeGridClient {"));
        assert!(dump.contains("base_url: \"http://127.0.0.1:8080\""));
        assert!(dump.contains("akab-host.luna.akamaiapis.net"));
        assert!(!dump.contains("client-secret"));
        assert!(!dump.contains("akab-client-token"));
        assert!(!dump.contains("akab-access-token"));
    }

    #[test]
    fn build_rejects_incomplete_credentials() {
        let result = EdgeGridClient::new(EdgeGridCredentials::new("", "ct", "cs", "at"));
        assert!(matches!(result, Err(ClientError::ConfigError { .. })));
    }
}
