//! DNS API endpoints.

use crate::ShodanClient;
use lens_core::{DnsResolution, DnsReverse, Result};

/// DNS API endpoints
pub struct DnsApi<'a> {
    client: &'a ShodanClient,
}

impl<'a> DnsApi<'a> {
    pub(crate) fn new(client: &'a ShodanClient) -> Self {
        Self { client }
    }

    /// Resolve hostnames to IP addresses
    pub async fn resolve(&self, hostnames: &[&str]) -> Result<DnsResolution> {
        let hostnames_str = hostnames.join(",");
        self.client
            .get_with_query("/dns/resolve", &[("hostnames", &hostnames_str)])
            .await
    }

    /// Reverse DNS lookup - get hostnames for IP addresses
    pub async fn reverse(&self, ips: &[&str]) -> Result<DnsReverse> {
        let ips_str = ips.join(",");
        self.client
            .get_with_query("/dns/reverse", &[("ips", &ips_str)])
            .await
    }
}
