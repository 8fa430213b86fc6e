//! Generic HTTP client tools
//!
//! Sending, logging and reading responses live here so the EdgeGrid
//! transport only has to build and sign the `RequestBuilder`.
//! Requests are sent exactly once; there is no retry layer.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name (for logging)
    /// * `url` - target URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - for every HTTP status, 2xx or not
    /// * `Err(ClientError::Timeout)` - the request timed out
    /// * `Err(ClientError::NetworkError)` - any other transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ClientError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}
