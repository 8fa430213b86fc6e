//! Zone record types
//!
//! Field declaration order is alphabetical and must stay that way: it is the
//! key order of the wire format, and re-encoded zones have to match the API's
//! output byte for byte.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Record-type tags a zone can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    A,
    Aaaa,
    Afsdb,
    Cname,
    Dnskey,
    Ds,
    Hinfo,
    Loc,
    Mx,
    Naptr,
    Ns,
    Nsec3,
    Nsec3param,
    Ptr,
    Rp,
    Rrsig,
    Soa,
    Spf,
    Srv,
    Sshfp,
    Txt,
}

impl RecordType {
    /// Every supported tag, in wire order.
    pub const ALL: [Self; 21] = [
        Self::A,
        Self::Aaaa,
        Self::Afsdb,
        Self::Cname,
        Self::Dnskey,
        Self::Ds,
        Self::Hinfo,
        Self::Loc,
        Self::Mx,
        Self::Naptr,
        Self::Ns,
        Self::Nsec3,
        Self::Nsec3param,
        Self::Ptr,
        Self::Rp,
        Self::Rrsig,
        Self::Soa,
        Self::Spf,
        Self::Srv,
        Self::Sshfp,
        Self::Txt,
    ];

    /// Upper-case tag, e.g. `"NSEC3PARAM"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Afsdb => "AFSDB",
            Self::Cname => "CNAME",
            Self::Dnskey => "DNSKEY",
            Self::Ds => "DS",
            Self::Hinfo => "HINFO",
            Self::Loc => "LOC",
            Self::Mx => "MX",
            Self::Naptr => "NAPTR",
            Self::Ns => "NS",
            Self::Nsec3 => "NSEC3",
            Self::Nsec3param => "NSEC3PARAM",
            Self::Ptr => "PTR",
            Self::Rp => "RP",
            Self::Rrsig => "RRSIG",
            Self::Soa => "SOA",
            Self::Spf => "SPF",
            Self::Srv => "SRV",
            Self::Sshfp => "SSHFP",
            Self::Txt => "TXT",
        }
    }

}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ClientError::UnsupportedRecordType {
                record_type: s.to_string(),
            })
    }
}

// ============ Record shapes ============

/// Name/target record: A, AAAA, CNAME, LOC, NS, PTR, SPF and TXT.
///
/// `name` is `None` for records at the zone apex, which the API sends as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicRecord {
    pub active: bool,
    pub name: Option<String>,
    pub target: String,
    pub ttl: u32,
}

impl BasicRecord {
    /// An active record.
    pub fn new(name: impl Into<String>, target: impl Into<String>, ttl: u32) -> Self {
        Self {
            active: true,
            name: Some(name.into()),
            target: target.into(),
            ttl,
        }
    }

    /// An active record at the zone apex.
    pub fn apex(target: impl Into<String>, ttl: u32) -> Self {
        Self {
            active: true,
            name: None,
            target: target.into(),
            ttl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AfsdbRecord {
    pub active: bool,
    pub name: Option<String>,
    pub subtype: u16,
    pub target: String,
    pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnskeyRecord {
    pub active: bool,
    pub algorithm: u8,
    pub flags: u16,
    pub key: String,
    pub name: Option<String>,
    pub protocol: u8,
    pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsRecord {
    pub active: bool,
    pub algorithm: u8,
    pub digest: String,
    pub digest_type: u8,
    pub keytag: u16,
    pub name: Option<String>,
    pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HinfoRecord {
    pub active: bool,
    pub hardware: String,
    pub name: Option<String>,
    pub software: String,
    pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxRecord {
    pub active: bool,
    pub name: Option<String>,
    pub priority: u16,
    pub target: String,
    pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaptrRecord {
    pub active: bool,
    pub flags: String,
    pub name: Option<String>,
    pub order: u16,
    pub preference: u16,
    pub regexp: String,
    pub replacement: String,
    pub service: String,
    pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nsec3Record {
    pub active: bool,
    pub algorithm: u8,
    pub flags: u8,
    pub iterations: u16,
    pub name: Option<String>,
    pub next_hashed_owner_name: String,
    pub salt: String,
    pub ttl: u32,
    pub type_bitmaps: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nsec3paramRecord {
    pub active: bool,
    pub algorithm: u8,
    pub flags: u8,
    pub iterations: u16,
    pub name: Option<String>,
    pub salt: String,
    pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpRecord {
    pub active: bool,
    pub mailbox: String,
    pub name: Option<String>,
    pub ttl: u32,
    pub txt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrsigRecord {
    pub active: bool,
    pub algorithm: u8,
    pub expiration: String,
    pub inception: String,
    pub keytag: u16,
    pub labels: u8,
    pub name: Option<String>,
    pub original_ttl: u32,
    pub signature: String,
    pub signer: String,
    pub ttl: u32,
    pub type_covered: String,
}

/// Start of authority. The zone's only singleton; it has no `name` or `active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoaRecord {
    pub contact: String,
    pub expire: u32,
    pub minimum: u32,
    pub originserver: String,
    pub refresh: u32,
    pub retry: u32,
    pub serial: u32,
    pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvRecord {
    pub active: bool,
    pub name: Option<String>,
    pub port: u16,
    pub priority: u16,
    pub target: String,
    pub ttl: u32,
    pub weight: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshfpRecord {
    pub active: bool,
    pub algorithm: u8,
    pub fingerprint: String,
    pub fingerprint_type: u8,
    pub name: Option<String>,
    pub ttl: u32,
}

// ============ Record ============

/// One zone record, tagged by record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    A(BasicRecord),
    Aaaa(BasicRecord),
    Afsdb(AfsdbRecord),
    Cname(BasicRecord),
    Dnskey(DnskeyRecord),
    Ds(DsRecord),
    Hinfo(HinfoRecord),
    Loc(BasicRecord),
    Mx(MxRecord),
    Naptr(NaptrRecord),
    Ns(BasicRecord),
    Nsec3(Nsec3Record),
    Nsec3param(Nsec3paramRecord),
    Ptr(BasicRecord),
    Rp(RpRecord),
    Rrsig(RrsigRecord),
    Soa(SoaRecord),
    Spf(BasicRecord),
    Srv(SrvRecord),
    Sshfp(SshfpRecord),
    Txt(BasicRecord),
}

fn decode<T: DeserializeOwned>(
    record_type: RecordType,
    value: serde_json::Value,
) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::InvalidRecord {
        record_type: record_type.to_string(),
        detail: e.to_string(),
    })
}

impl Record {
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::A(_) => RecordType::A,
            Self::Aaaa(_) => RecordType::Aaaa,
            Self::Afsdb(_) => RecordType::Afsdb,
            Self::Cname(_) => RecordType::Cname,
            Self::Dnskey(_) => RecordType::Dnskey,
            Self::Ds(_) => RecordType::Ds,
            Self::Hinfo(_) => RecordType::Hinfo,
            Self::Loc(_) => RecordType::Loc,
            Self::Mx(_) => RecordType::Mx,
            Self::Naptr(_) => RecordType::Naptr,
            Self::Ns(_) => RecordType::Ns,
            Self::Nsec3(_) => RecordType::Nsec3,
            Self::Nsec3param(_) => RecordType::Nsec3param,
            Self::Ptr(_) => RecordType::Ptr,
            Self::Rp(_) => RecordType::Rp,
            Self::Rrsig(_) => RecordType::Rrsig,
            Self::Soa(_) => RecordType::Soa,
            Self::Spf(_) => RecordType::Spf,
            Self::Srv(_) => RecordType::Srv,
            Self::Sshfp(_) => RecordType::Sshfp,
            Self::Txt(_) => RecordType::Txt,
        }
    }

    /// Owner name; `None` at the zone apex and for SOA.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::A(r)
            | Self::Aaaa(r)
            | Self::Cname(r)
            | Self::Loc(r)
            | Self::Ns(r)
            | Self::Ptr(r)
            | Self::Spf(r)
            | Self::Txt(r) => r.name.as_deref(),
            Self::Afsdb(r) => r.name.as_deref(),
            Self::Dnskey(r) => r.name.as_deref(),
            Self::Ds(r) => r.name.as_deref(),
            Self::Hinfo(r) => r.name.as_deref(),
            Self::Mx(r) => r.name.as_deref(),
            Self::Naptr(r) => r.name.as_deref(),
            Self::Nsec3(r) => r.name.as_deref(),
            Self::Nsec3param(r) => r.name.as_deref(),
            Self::Rp(r) => r.name.as_deref(),
            Self::Rrsig(r) => r.name.as_deref(),
            Self::Srv(r) => r.name.as_deref(),
            Self::Sshfp(r) => r.name.as_deref(),
            Self::Soa(_) => None,
        }
    }

    /// Decode a wire-format record object as the record type named by `type_tag`.
    ///
    /// Fails with [`ClientError::UnsupportedRecordType`] for an unknown tag and
    /// [`ClientError::InvalidRecord`] when the object doesn't fit the type.
    pub fn from_value(type_tag: &str, value: serde_json::Value) -> Result<Self, ClientError> {
        let record_type: RecordType = type_tag.parse()?;
        let t = record_type;
        Ok(match record_type {
            RecordType::A => Self::A(decode(t, value)?),
            RecordType::Aaaa => Self::Aaaa(decode(t, value)?),
            RecordType::Afsdb => Self::Afsdb(decode(t, value)?),
            RecordType::Cname => Self::Cname(decode(t, value)?),
            RecordType::Dnskey => Self::Dnskey(decode(t, value)?),
            RecordType::Ds => Self::Ds(decode(t, value)?),
            RecordType::Hinfo => Self::Hinfo(decode(t, value)?),
            RecordType::Loc => Self::Loc(decode(t, value)?),
            RecordType::Mx => Self::Mx(decode(t, value)?),
            RecordType::Naptr => Self::Naptr(decode(t, value)?),
            RecordType::Ns => Self::Ns(decode(t, value)?),
            RecordType::Nsec3 => Self::Nsec3(decode(t, value)?),
            RecordType::Nsec3param => Self::Nsec3param(decode(t, value)?),
            RecordType::Ptr => Self::Ptr(decode(t, value)?),
            RecordType::Rp => Self::Rp(decode(t, value)?),
            RecordType::Rrsig => Self::Rrsig(decode(t, value)?),
            RecordType::Soa => Self::Soa(decode(t, value)?),
            RecordType::Spf => Self::Spf(decode(t, value)?),
            RecordType::Srv => Self::Srv(decode(t, value)?),
            RecordType::Sshfp => Self::Sshfp(decode(t, value)?),
            RecordType::Txt => Self::Txt(decode(t, value)?),
        })
    }
}
