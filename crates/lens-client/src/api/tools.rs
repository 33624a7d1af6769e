//! Utility API endpoints.

use crate::ShodanClient;
use lens_core::{MyIp, Result};

/// Utility API endpoints
pub struct ToolsApi<'a> {
    client: &'a ShodanClient,
}

impl<'a> ToolsApi<'a> {
    pub(crate) fn new(client: &'a ShodanClient) -> Self {
        Self { client }
    }

    /// Get your current public IP address
    pub async fn my_ip(&self) -> Result<MyIp> {
        self.client.get("/tools/myip").await
    }
}
