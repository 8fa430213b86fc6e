//! EdgeGrid `EG1-HMAC-SHA256` request signing

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::utils::log_sanitizer::mask_secret;

use super::EdgeGridClient;

type HmacSha256 = Hmac<Sha256>;

const AUTH_SCHEME: &str = "EG1-HMAC-SHA256";

/// HMAC-SHA256 计算
fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    #[allow(clippy::expect_used)]
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// EdgeGrid timestamp, e.g. `20240101T00:00:00+0000`
pub(crate) fn edgegrid_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y%m%dT%H:%M:%S+0000").to_string()
}

impl EdgeGridClient {
    /// Build the `Authorization` header value for one request.
    /// Reference: <https://techdocs.akamai.com/developer/docs/authenticate-with-edgegrid>
    ///
    /// `path_and_query` is the request path including any query string.
    pub(crate) fn sign(
        &self,
        method: &str,
        path_and_query: &str,
        body: &str,
        timestamp: &str,
        nonce: &str,
    ) -> String {
        let creds = &self.credentials;

        // 1. Unsigned header prefix; also the last field of the signed data
        let auth_prefix = format!(
            "{AUTH_SCHEME} client_token={};access_token={};timestamp={timestamp};nonce={nonce};",
            creds.client_token, creds.access_token
        );

        // 2. Signing key is derived per timestamp
        let signing_key = STANDARD.encode(hmac_sha256(
            creds.client_secret.as_bytes(),
            timestamp.as_bytes(),
        ));

        // 3. Content hash covers POST bodies only, truncated to max_body
        let method = method.to_uppercase();
        let content_hash = self.content_hash(&method, body);

        // 4. Tab-separated data to sign; no headers are canonicalized
        let data_to_sign = [
            method.as_str(),
            "https",
            creds.host.as_str(),
            path_and_query,
            "",
            content_hash.as_str(),
            auth_prefix.as_str(),
        ]
        .join("\t");

        log::debug!(
            "Signing {method} {path_and_query} (client_token={}, timestamp={timestamp})",
            mask_secret(&creds.client_token)
        );

        let signature = STANDARD.encode(hmac_sha256(
            signing_key.as_bytes(),
            data_to_sign.as_bytes(),
        ));

        format!("{auth_prefix}signature={signature}")
    }

    fn content_hash(&self, method: &str, body: &str) -> String {
        if method != "POST" || body.is_empty() {
            return String::new();
        }
        let bytes = body.as_bytes();
        let covered = &bytes[..bytes.len().min(self.credentials.max_body)];
        if covered.len() < bytes.len() {
            log::debug!(
                "Body of {} bytes exceeds max_body, hashing first {}",
                bytes.len(),
                covered.len()
            );
        }
        STANDARD.encode(Sha256::digest(covered))
    }
}
