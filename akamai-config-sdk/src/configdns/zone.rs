//! Zone record-set model

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

use super::record::{
    AfsdbRecord, BasicRecord, DnskeyRecord, DsRecord, HinfoRecord, MxRecord, NaptrRecord,
    Nsec3Record, Nsec3paramRecord, Record, RecordType, RpRecord, RrsigRecord, SoaRecord,
    SrvRecord, SshfpRecord,
};

/// Token carried by a zone that does not exist remotely yet.
pub const NEW_ZONE_TOKEN: &str = "new";

/// A DNS zone: its name and one record set per record type.
///
/// Serializes to the Config DNS wire format:
///
/// ```json
/// {"token": "...", "zone": {"name": "example.com", "a": [...], "soa": {...}}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    token: String,
    #[serde(rename = "zone")]
    records: ZoneRecords,
}

/// The `zone` object of the wire format. Empty sets are omitted on output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ZoneRecords {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    a: Vec<BasicRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    aaaa: Vec<BasicRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    afsdb: Vec<AfsdbRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    cname: Vec<BasicRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dnskey: Vec<DnskeyRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    ds: Vec<DsRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    hinfo: Vec<HinfoRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    loc: Vec<BasicRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    mx: Vec<MxRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    naptr: Vec<NaptrRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    ns: Vec<BasicRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    nsec3: Vec<Nsec3Record>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    nsec3param: Vec<Nsec3paramRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    ptr: Vec<BasicRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    rp: Vec<RpRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    rrsig: Vec<RrsigRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    soa: Option<SoaRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    spf: Vec<BasicRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    srv: Vec<SrvRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    sshfp: Vec<SshfpRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    txt: Vec<BasicRecord>,
}

/// Append `record` unless an equal one is already present.
fn insert_unique<T: PartialEq>(set: &mut Vec<T>, record: T) -> bool {
    if set.contains(&record) {
        return false;
    }
    set.push(record);
    true
}

fn remove_equal<T: PartialEq>(set: &mut Vec<T>, record: &T) -> bool {
    let before = set.len();
    set.retain(|r| r != record);
    set.len() != before
}

fn wrap<T: Clone>(set: &[T], variant: fn(T) -> Record) -> Vec<Record> {
    set.iter().cloned().map(variant).collect()
}

impl Zone {
    /// An empty zone that has not been created remotely yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            token: NEW_ZONE_TOKEN.to_string(),
            records: ZoneRecords {
                name: name.into(),
                ..ZoneRecords::default()
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.records.name
    }

    /// Concurrency token issued by the API; `"new"` for a local zone.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_new(&self) -> bool {
        self.token == NEW_ZONE_TOKEN
    }

    pub fn soa(&self) -> Option<&SoaRecord> {
        self.records.soa.as_ref()
    }

    /// Add `record` to the set for its type.
    ///
    /// Adding a record equal to one already present is a no-op. An SOA
    /// replaces the current SOA. Returns whether the zone changed.
    pub fn add_record(&mut self, record: Record) -> bool {
        let r = &mut self.records;
        let changed = match record {
            Record::A(x) => insert_unique(&mut r.a, x),
            Record::Aaaa(x) => insert_unique(&mut r.aaaa, x),
            Record::Afsdb(x) => insert_unique(&mut r.afsdb, x),
            Record::Cname(x) => insert_unique(&mut r.cname, x),
            Record::Dnskey(x) => insert_unique(&mut r.dnskey, x),
            Record::Ds(x) => insert_unique(&mut r.ds, x),
            Record::Hinfo(x) => insert_unique(&mut r.hinfo, x),
            Record::Loc(x) => insert_unique(&mut r.loc, x),
            Record::Mx(x) => insert_unique(&mut r.mx, x),
            Record::Naptr(x) => insert_unique(&mut r.naptr, x),
            Record::Ns(x) => insert_unique(&mut r.ns, x),
            Record::Nsec3(x) => insert_unique(&mut r.nsec3, x),
            Record::Nsec3param(x) => insert_unique(&mut r.nsec3param, x),
            Record::Ptr(x) => insert_unique(&mut r.ptr, x),
            Record::Rp(x) => insert_unique(&mut r.rp, x),
            Record::Rrsig(x) => insert_unique(&mut r.rrsig, x),
            Record::Soa(x) => r.soa.replace(x.clone()).as_ref() != Some(&x),
            Record::Spf(x) => insert_unique(&mut r.spf, x),
            Record::Srv(x) => insert_unique(&mut r.srv, x),
            Record::Sshfp(x) => insert_unique(&mut r.sshfp, x),
            Record::Txt(x) => insert_unique(&mut r.txt, x),
        };
        if !changed {
            log::debug!("[{}] Duplicate record ignored", self.records.name);
        }
        changed
    }

    /// Decode a wire-format record of type `type_tag` and add it.
    ///
    /// The zone is left unchanged when the tag is unknown or the value doesn't
    /// fit the type.
    pub fn add_record_value(&mut self, type_tag: &str, value: serde_json::Value) -> Result<bool> {
        let record = Record::from_value(type_tag, value).inspect_err(|e| {
            log::warn!("[{}] Rejected record: {e}", self.records.name);
        })?;
        Ok(self.add_record(record))
    }

    /// Remove the record equal to `record`, if present. Returns whether the zone changed.
    pub fn remove_record(&mut self, record: &Record) -> bool {
        let r = &mut self.records;
        match record {
            Record::A(x) => remove_equal(&mut r.a, x),
            Record::Aaaa(x) => remove_equal(&mut r.aaaa, x),
            Record::Afsdb(x) => remove_equal(&mut r.afsdb, x),
            Record::Cname(x) => remove_equal(&mut r.cname, x),
            Record::Dnskey(x) => remove_equal(&mut r.dnskey, x),
            Record::Ds(x) => remove_equal(&mut r.ds, x),
            Record::Hinfo(x) => remove_equal(&mut r.hinfo, x),
            Record::Loc(x) => remove_equal(&mut r.loc, x),
            Record::Mx(x) => remove_equal(&mut r.mx, x),
            Record::Naptr(x) => remove_equal(&mut r.naptr, x),
            Record::Ns(x) => remove_equal(&mut r.ns, x),
            Record::Nsec3(x) => remove_equal(&mut r.nsec3, x),
            Record::Nsec3param(x) => remove_equal(&mut r.nsec3param, x),
            Record::Ptr(x) => remove_equal(&mut r.ptr, x),
            Record::Rp(x) => remove_equal(&mut r.rp, x),
            Record::Rrsig(x) => remove_equal(&mut r.rrsig, x),
            Record::Soa(x) => {
                if r.soa.as_ref() == Some(x) {
                    r.soa = None;
                    true
                } else {
                    false
                }
            }
            Record::Spf(x) => remove_equal(&mut r.spf, x),
            Record::Srv(x) => remove_equal(&mut r.srv, x),
            Record::Sshfp(x) => remove_equal(&mut r.sshfp, x),
            Record::Txt(x) => remove_equal(&mut r.txt, x),
        }
    }

    /// Records of one type, in insertion order. Empty when the zone has none.
    pub fn records(&self, record_type: RecordType) -> Vec<Record> {
        let r = &self.records;
        match record_type {
            RecordType::A => wrap(&r.a, Record::A),
            RecordType::Aaaa => wrap(&r.aaaa, Record::Aaaa),
            RecordType::Afsdb => wrap(&r.afsdb, Record::Afsdb),
            RecordType::Cname => wrap(&r.cname, Record::Cname),
            RecordType::Dnskey => wrap(&r.dnskey, Record::Dnskey),
            RecordType::Ds => wrap(&r.ds, Record::Ds),
            RecordType::Hinfo => wrap(&r.hinfo, Record::Hinfo),
            RecordType::Loc => wrap(&r.loc, Record::Loc),
            RecordType::Mx => wrap(&r.mx, Record::Mx),
            RecordType::Naptr => wrap(&r.naptr, Record::Naptr),
            RecordType::Ns => wrap(&r.ns, Record::Ns),
            RecordType::Nsec3 => wrap(&r.nsec3, Record::Nsec3),
            RecordType::Nsec3param => wrap(&r.nsec3param, Record::Nsec3param),
            RecordType::Ptr => wrap(&r.ptr, Record::Ptr),
            RecordType::Rp => wrap(&r.rp, Record::Rp),
            RecordType::Rrsig => wrap(&r.rrsig, Record::Rrsig),
            RecordType::Soa => r.soa.iter().cloned().map(Record::Soa).collect(),
            RecordType::Spf => wrap(&r.spf, Record::Spf),
            RecordType::Srv => wrap(&r.srv, Record::Srv),
            RecordType::Sshfp => wrap(&r.sshfp, Record::Sshfp),
            RecordType::Txt => wrap(&r.txt, Record::Txt),
        }
    }

    /// Every record in the zone, grouped by type in wire order.
    pub fn all_records(&self) -> Vec<Record> {
        RecordType::ALL
            .into_iter()
            .flat_map(|t| self.records(t))
            .collect()
    }

    /// Total number of records, SOA included.
    pub fn record_count(&self) -> usize {
        RecordType::ALL
            .into_iter()
            .map(|t| self.records(t).len())
            .sum()
    }

    /// Decode wire JSON as is.
    ///
    /// Duplicate records in the input are kept; only [`add_record`](Self::add_record)
    /// deduplicates.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ClientError::ParseError {
            detail: e.to_string(),
        })
    }

    /// Compact wire JSON, as sent to the API.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ClientError::SerializationError {
            detail: e.to_string(),
        })
    }

    /// Tab-indented wire JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|e| ClientError::SerializationError {
                detail: e.to_string(),
            })?;
        String::from_utf8(buf).map_err(|e| ClientError::SerializationError {
            detail: e.to_string(),
        })
    }
}
