//! # akamai-config-sdk
//!
//! Typed client for Akamai configuration APIs, with EdgeGrid
//! (`EG1-HMAC-SHA256`) request signing.
//!
//! ## API Groups
//!
//! | Group | Base Path | Entry Point |
//! |-------|-----------|-------------|
//! | Config DNS | `/config-dns/v1` | [`ConfigDnsApi`] |
//! | Property Manager | `/papi/v0` | [`PapiApi`] |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Credentials
//!
//! Credentials come from a section of an `.edgerc` file, or from
//! `AKAMAI_*` environment variables:
//!
//! ```ini
//! [default]
//! host = akab-xxxxxxxx.luna.akamaiapis.net
//! client_token = akab-client-token
//! client_secret = client-secret
//! access_token = akab-access-token
//! max_body = 131072
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use akamai_config_sdk::{EdgeGridClient, EdgeGridCredentials, PapiApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = EdgeGridCredentials::from_default_edgerc("default")?;
//!     let client = Arc::new(EdgeGridClient::new(credentials)?);
//!     let papi = PapiApi::new(client);
//!
//!     let contracts = papi.fetch_contracts().await?;
//!     for contract in contracts.items() {
//!         println!("{} ({})", contract.contract_id, contract.contract_type_name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Editing a Zone
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use akamai_config_sdk::*;
//! # async fn example(client: Arc<EdgeGridClient>) -> Result<()> {
//! let dns = ConfigDnsApi::new(client);
//! let mut zone = dns.get_zone("example.com").await?;
//! zone.add_record(Record::Mx(MxRecord {
//!     active: true,
//!     name: Some("@".to_string()),
//!     priority: 10,
//!     target: "mail.example.com.".to_string(),
//!     ttl: 3600,
//! }));
//! dns.save_zone(&zone).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError). Non-2xx
//! responses become [`ClientError::ApiError`], carrying the problem document
//! fields when the API sent one. Nothing is retried.

mod configdns;
mod edgegrid;
mod error;
mod http_client;
mod papi;
mod traits;
mod utils;

pub use error::{ClientError, Result};

pub use traits::{ApiResponse, ApiTransport};

pub use edgegrid::{
    DEFAULT_MAX_BODY, DEFAULT_SECTION, EdgeGridClient, EdgeGridClientBuilder, EdgeGridCredentials,
    default_edgerc_path,
};

pub use configdns::{
    AfsdbRecord, BasicRecord, ConfigDnsApi, DnskeyRecord, DsRecord, HinfoRecord, MxRecord,
    NEW_ZONE_TOKEN, NaptrRecord, Nsec3Record, Nsec3paramRecord, Record, RecordType, RpRecord,
    RrsigRecord, SoaRecord, SrvRecord, SshfpRecord, Zone,
};

pub use papi::{Contract, ContractItems, Contracts, PapiApi, Product, ProductItems, Products};
