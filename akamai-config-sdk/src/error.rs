use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all Akamai configuration API operations.
///
/// All variants are serializable for structured error reporting. Nothing in
/// this crate retries: every failure is returned to the caller as soon as it
/// happens.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API answered with a non-2xx status.
    ///
    /// `problem_type`, `title` and `detail` are filled from an
    /// `application/problem+json` body when the API sent one.
    #[error("{}", format_api_error(*status, title.as_deref(), detail.as_deref()))]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Problem `type` URI.
        problem_type: Option<String>,
        /// Short, human-readable summary.
        title: Option<String>,
        /// Occurrence-specific explanation.
        detail: Option<String>,
        /// Unparsed response body.
        raw_body: String,
    },

    /// Failed to parse an API response.
    #[error("Parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("Serialization error: {detail}")]
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// No contract with the requested id is visible to the account.
    #[error("Contract '{contract_id}' not found")]
    ContractNotFound {
        /// The id that was looked up.
        contract_id: String,
    },

    /// The record-type tag is not one of the supported zone record types.
    #[error("Unsupported record type: {record_type}")]
    UnsupportedRecordType {
        /// The unsupported record type string.
        record_type: String,
    },

    /// A record value does not match the shape of its record type.
    #[error("Invalid {record_type} record: {detail}")]
    InvalidRecord {
        /// Record type the value was decoded as.
        record_type: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// A request parameter is invalid.
    #[error("Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Credentials or client configuration are missing or malformed.
    #[error("Configuration error: {detail}")]
    ConfigError {
        /// Description of what's wrong.
        detail: String,
    },
}

fn format_api_error(status: u16, title: Option<&str>, detail: Option<&str>) -> String {
    match (title, detail) {
        (Some(title), Some(detail)) => format!("API error (HTTP {status}): {title}: {detail}"),
        (Some(msg), None) | (None, Some(msg)) => format!("API error (HTTP {status}): {msg}"),
        (None, None) => format!("API error (HTTP {status})"),
    }
}

impl ClientError {
    /// 是否为预期行为（调用方输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ApiError { status, .. } => (400..500).contains(status),
            Self::ContractNotFound { .. }
            | Self::UnsupportedRecordType { .. }
            | Self::InvalidRecord { .. }
            | Self::InvalidParameter { .. }
            | Self::ConfigError { .. } => true,
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::ParseError { .. }
            | Self::SerializationError { .. } => false,
        }
    }

    /// HTTP status of an [`ApiError`](Self::ApiError), if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn config(detail: impl Into<String>) -> Self {
        Self::ConfigError {
            detail: detail.into(),
        }
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
