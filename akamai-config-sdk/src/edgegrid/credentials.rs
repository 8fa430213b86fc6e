//! EdgeGrid credentials and `.edgerc` loading

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::mask_secret;

use super::DEFAULT_MAX_BODY;

/// Section read when the caller does not name one.
pub const DEFAULT_SECTION: &str = "default";

/// Credentials for one EdgeGrid API client.
///
/// Usually loaded from a section of an `.edgerc` file:
///
/// ```ini
/// [default]
/// host = akab-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx.luna.akamaiapis.net
/// client_token = akab-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx
/// client_secret = xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx=
/// access_token = akab-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx
/// max_body = 131072
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeGridCredentials {
    /// API host, without scheme or trailing slash.
    pub host: String,
    /// Client token.
    pub client_token: String,
    /// Client secret used to derive the signing key.
    pub client_secret: String,
    /// Access token.
    pub access_token: String,
    /// Maximum number of body bytes covered by the content hash.
    pub max_body: usize,
}

impl fmt::Debug for EdgeGridCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeGridCredentials")
            .field("host", &self.host)
            .field("client_token", &mask_secret(&self.client_token))
            .field("client_secret", &"****")
            .field("access_token", &mask_secret(&self.access_token))
            .field("max_body", &self.max_body)
            .finish()
    }
}

/// One section as read from a source, before validation.
#[derive(Debug, Default, Deserialize)]
struct RawSection {
    host: Option<String>,
    client_token: Option<String>,
    client_secret: Option<String>,
    access_token: Option<String>,
    max_body: Option<String>,
}

impl RawSection {
    fn into_credentials(self, source: &str) -> Result<EdgeGridCredentials> {
        let require = |value: Option<String>, key: &str| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ClientError::config(format!("{source}: missing '{key}'")))
        };

        let max_body = match self.max_body.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_MAX_BODY,
            Some(raw) => raw.parse().map_err(|e| {
                ClientError::config(format!("{source}: invalid 'max_body' {raw:?}: {e}"))
            })?,
        };

        Ok(EdgeGridCredentials {
            host: normalize_host(&require(self.host, "host")?),
            client_token: require(self.client_token, "client_token")?,
            client_secret: require(self.client_secret, "client_secret")?,
            access_token: require(self.access_token, "access_token")?,
            max_body,
        })
    }
}

/// 去掉 scheme 和末尾的斜杠
fn normalize_host(host: &str) -> String {
    let host = host.trim();
    host.strip_prefix("https://")
        .unwrap_or(host)
        .trim_end_matches('/')
        .to_string()
}

impl EdgeGridCredentials {
    pub fn new(
        host: impl Into<String>,
        client_token: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            host: normalize_host(&host.into()),
            client_token: client_token.into(),
            client_secret: client_secret.into(),
            access_token: access_token.into(),
            max_body: DEFAULT_MAX_BODY,
        }
    }

    /// Check that every required field is present.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("host", &self.host),
            ("client_token", &self.client_token),
            ("client_secret", &self.client_secret),
            ("access_token", &self.access_token),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ClientError::config(format!("'{name}' must not be empty")));
            }
        }
        Ok(())
    }

    /// Load `section` from an INI `.edgerc` file. Section names match case-insensitively.
    pub fn from_edgerc(path: impl AsRef<Path>, section: &str) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ClientError::config(format!(
                "edgerc file {} not found",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Ini))
            .build()
            .map_err(|e| ClientError::config(format!("Failed to read {}: {e}", path.display())))?;

        let sections: HashMap<String, config::Value> = settings
            .try_deserialize()
            .map_err(|e| ClientError::config(format!("Failed to parse {}: {e}", path.display())))?;

        let value = sections
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(section))
            .map(|(_, value)| value)
            .ok_or_else(|| {
                ClientError::config(format!(
                    "section [{section}] not found in {}",
                    path.display()
                ))
            })?;

        let source = format!("{} [{section}]", path.display());
        let raw: RawSection = value
            .try_deserialize()
            .map_err(|e| ClientError::config(format!("{source}: {e}")))?;

        let credentials = raw.into_credentials(&source)?;
        log::debug!(
            "Loaded EdgeGrid credentials from {source}: host={}, client_token={}",
            credentials.host,
            mask_secret(&credentials.client_token)
        );
        Ok(credentials)
    }

    /// Load `section` from `~/.edgerc`.
    pub fn from_default_edgerc(section: &str) -> Result<Self> {
        Self::from_edgerc(default_edgerc_path()?, section)
    }

    /// Load credentials from `AKAMAI_*` environment variables.
    ///
    /// The default section reads `AKAMAI_HOST`, `AKAMAI_CLIENT_TOKEN`, ... ;
    /// any other section reads `AKAMAI_{SECTION}_HOST` and so on.
    pub fn from_env(section: &str) -> Result<Self> {
        Self::from_lookup(section, |key| std::env::var(key).ok())
    }

    /// [`from_env`](Self::from_env) with an injectable variable lookup.
    pub fn from_lookup<F>(section: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = if section.eq_ignore_ascii_case(DEFAULT_SECTION) {
            "AKAMAI_".to_string()
        } else {
            format!("AKAMAI_{}_", section.to_uppercase())
        };
        let var = |key: &str| lookup(&format!("{prefix}{key}"));

        let raw = RawSection {
            host: var("HOST"),
            client_token: var("CLIENT_TOKEN"),
            client_secret: var("CLIENT_SECRET"),
            access_token: var("ACCESS_TOKEN"),
            max_body: var("MAX_BODY"),
        };
        raw.into_credentials(&format!("environment ({prefix}*)"))
    }
}

/// `~/.edgerc`
pub fn default_edgerc_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".edgerc"))
        .ok_or_else(|| ClientError::config("Unable to determine home directory"))
}
