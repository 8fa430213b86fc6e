//! Config DNS (`/config-dns/v1`) zone management

mod record;
mod zone;

use std::sync::Arc;

use reqwest::Method;

use crate::error::{ClientError, Result};
use crate::traits::{ApiTransport, get_json};

pub use record::{
    AfsdbRecord, BasicRecord, DnskeyRecord, DsRecord, HinfoRecord, MxRecord, NaptrRecord,
    Nsec3Record, Nsec3paramRecord, Record, RecordType, RpRecord, RrsigRecord, SoaRecord,
    SrvRecord, SshfpRecord,
};
pub use zone::{NEW_ZONE_TOKEN, Zone};

const ZONES_PATH: &str = "/config-dns/v1/zones";

fn zone_path(name: &str) -> String {
    format!("{ZONES_PATH}/{}", urlencoding::encode(name))
}

/// Config DNS API group.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use akamai_config_sdk::{BasicRecord, ConfigDnsApi, EdgeGridClient, Record};
///
/// # async fn example() -> akamai_config_sdk::Result<()> {
/// let client = Arc::new(EdgeGridClient::from_edgerc("/home/me/.edgerc", "dns")?);
/// let dns = ConfigDnsApi::new(client);
///
/// let mut zone = dns.get_zone("example.com").await?;
/// zone.add_record(Record::A(BasicRecord::new("www", "192.0.2.10", 300)));
/// dns.save_zone(&zone).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ConfigDnsApi {
    transport: Arc<dyn ApiTransport>,
}

impl ConfigDnsApi {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Fetch the current records of zone `name`.
    pub async fn get_zone(&self, name: &str) -> Result<Zone> {
        let zone: Zone = get_json(self.transport.as_ref(), &zone_path(name)).await?;
        log::debug!(
            "[{name}] Fetched zone with {} records (token {})",
            zone.record_count(),
            zone.token()
        );
        Ok(zone)
    }

    /// Create or replace a zone with the records held locally.
    ///
    /// The zone's token must be the one last issued by the API (or `"new"`);
    /// the API rejects stale tokens with a conflict.
    pub async fn save_zone(&self, zone: &Zone) -> Result<()> {
        if zone.name().is_empty() {
            return Err(ClientError::InvalidParameter {
                param: "zone".to_string(),
                detail: "name must not be empty".to_string(),
            });
        }

        let body = zone.to_json()?;
        self.transport
            .request(Method::POST, &zone_path(zone.name()), Some(body))
            .await?
            .error_for_status()?;

        log::info!(
            "[{}] Saved zone with {} records",
            zone.name(),
            zone.record_count()
        );
        Ok(())
    }
}
