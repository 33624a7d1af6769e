use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Host information from `/shodan/host/{ip}`.
///
/// Every field other than `ip_str` is optional on the wire; absent fields
/// deserialize to their defaults. Unknown fields are ignored so new API
/// attributes don't break parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    /// IP address as string
    pub ip_str: String,

    /// Organization that owns the IP
    #[serde(default)]
    pub org: Option<String>,

    /// Operating system (if detected)
    #[serde(default)]
    pub os: Option<String>,

    /// Open ports detected
    #[serde(default)]
    pub ports: Vec<u16>,

    /// Hostnames associated with this IP
    #[serde(default)]
    pub hostnames: Vec<String>,

    /// Full country name
    #[serde(default)]
    pub country_name: Option<String>,

    /// City name
    #[serde(default)]
    pub city: Option<String>,

    /// Internet Service Provider
    #[serde(default)]
    pub isp: Option<String>,

    /// Autonomous System Number
    #[serde(default)]
    pub asn: Option<String>,

    /// Last time the host was scanned
    #[serde(default)]
    pub last_update: Option<String>,

    /// Tags assigned to this host
    #[serde(default)]
    pub tags: Vec<String>,

    /// Known vulnerabilities
    #[serde(default)]
    pub vulns: VulnIds,
}

impl HostInfo {
    /// Returns true if the host has known vulnerabilities
    #[must_use]
    pub fn is_vulnerable(&self) -> bool {
        !self.vulns.is_empty()
    }
}

/// Vulnerability identifiers as returned on the wire.
///
/// The `vulns` field is polymorphic: either a JSON array of CVE ids or a
/// JSON object keyed by CVE id with per-vulnerability detail. Both shapes
/// normalize to a plain identifier sequence via [`VulnIds::identifiers`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VulnIds {
    /// Array shape: `["CVE-2021-1234", ...]`
    List(Vec<String>),
    /// Object shape: `{"CVE-2021-1234": {...}, ...}`
    Map(BTreeMap<String, serde_json::Value>),
}

impl Default for VulnIds {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl VulnIds {
    /// The identifier sequence, in wire order for the array shape and in
    /// key order for the object shape.
    #[must_use]
    pub fn identifiers(&self) -> Vec<&str> {
        match self {
            Self::List(ids) => ids.iter().map(String::as_str).collect(),
            Self::Map(map) => map.keys().map(String::as_str).collect(),
        }
    }

    /// Returns true if no vulnerabilities are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(ids) => ids.is_empty(),
            Self::Map(map) => map.is_empty(),
        }
    }

    /// Number of known vulnerabilities
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::List(ids) => ids.len(),
            Self::Map(map) => map.len(),
        }
    }
}
