//! EdgeGrid HTTP request execution

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Method;
use uuid::Uuid;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ApiResponse, ApiTransport};
use crate::utils::log_sanitizer::truncate_for_log;

use super::EdgeGridClient;
use super::sign::edgegrid_timestamp;

#[async_trait]
impl ApiTransport for EdgeGridClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse> {
        let url = format!("{}{path}", self.base_url);
        let payload = body.unwrap_or_default();

        let timestamp = edgegrid_timestamp(Utc::now());
        let nonce = Uuid::new_v4().to_string();
        let authorization = self.sign(method.as_str(), path, &payload, &timestamp, &nonce);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("Accept", "application/json")
            .header("Authorization", authorization);

        if !payload.is_empty() {
            log::debug!("Request Body: {}", truncate_for_log(&payload));
            request = request
                .header("Content-Type", "application/json")
                .body(payload);
        }

        let (status, response_text) =
            HttpUtils::execute_request(request, method.as_str(), &url).await?;

        Ok(ApiResponse::new(status, response_text))
    }
}
