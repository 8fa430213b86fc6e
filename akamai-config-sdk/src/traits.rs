use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::utils::log_sanitizer::truncate_for_log;

/// A fully read HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

/// `application/problem+json` error body (内部使用)
#[derive(Debug, Deserialize)]
struct ProblemDetails {
    #[serde(rename = "type")]
    problem_type: Option<String>,
    title: Option<String>,
    detail: Option<String>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is outside the 2xx range.
    pub fn is_error(&self) -> bool {
        !(200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn decode_body<T: DeserializeOwned>(&self) -> Result<T> {
        HttpUtils::parse_json(&self.body)
    }

    /// Build a [`ClientError::ApiError`] from this response.
    ///
    /// The problem fields are filled when the body is a problem document;
    /// otherwise only the status and raw body are kept.
    pub fn to_api_error(&self) -> ClientError {
        let problem = serde_json::from_str::<ProblemDetails>(&self.body).ok();
        let (problem_type, title, detail) = problem
            .map(|p| (p.problem_type, p.title, p.detail))
            .unwrap_or_default();

        ClientError::ApiError {
            status: self.status,
            problem_type,
            title,
            detail,
            raw_body: self.body.clone(),
        }
    }

    /// Turn a non-2xx response into an error, passing 2xx responses through.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_error() {
            let err = self.to_api_error();
            if err.is_expected() {
                log::warn!("{err}");
            } else {
                log::error!("{err}");
                log::error!("Raw response: {}", truncate_for_log(&self.body));
            }
            return Err(err);
        }
        Ok(self)
    }
}

/// Signed-request transport used by the API groups.
///
/// [`EdgeGridClient`](crate::EdgeGridClient) is the production implementation.
/// `path` carries the path and query string relative to the API host.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Issue one request and return the fully read response.
    ///
    /// Only transport failures are errors here; non-2xx statuses are returned
    /// as a normal [`ApiResponse`].
    async fn request(&self, method: Method, path: &str, body: Option<String>)
    -> Result<ApiResponse>;
}

/// GET `path` and decode a 2xx body as `T`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    transport: &dyn ApiTransport,
    path: &str,
) -> Result<T> {
    transport
        .request(Method::GET, path, None)
        .await?
        .error_for_status()?
        .decode_body()
}
