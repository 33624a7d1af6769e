use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// DNS resolution result from `/dns/resolve` (hostname -> IP).
///
/// The API maps unresolvable hostnames to JSON `null`, so values are
/// optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsResolution(pub HashMap<String, Option<String>>);

impl DnsResolution {
    /// Get the resolved IP for a hostname, if the hostname is present and
    /// resolved
    #[must_use]
    pub fn ip_for(&self, hostname: &str) -> Option<&str> {
        self.0.get(hostname).and_then(Option::as_deref)
    }

    /// Iterate over hostname-IP pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k, v.as_deref()))
    }
}

/// Reverse DNS result from `/dns/reverse` (IP -> hostnames).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsReverse(pub HashMap<String, Option<Vec<String>>>);

impl DnsReverse {
    /// Get the hostnames for an IP
    #[must_use]
    pub fn hostnames_for(&self, ip: &str) -> Option<&[String]> {
        self.0.get(ip).and_then(|v| v.as_deref())
    }

    /// Get the first hostname for an IP.
    ///
    /// Most reverse lookups return a single hostname; only the first entry
    /// is surfaced.
    #[must_use]
    pub fn first_hostname(&self, ip: &str) -> Option<&str> {
        self.hostnames_for(ip)
            .and_then(|hosts| hosts.first())
            .map(String::as_str)
    }
}
