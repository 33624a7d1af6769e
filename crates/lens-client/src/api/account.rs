//! Account API endpoints.

use crate::ShodanClient;
use lens_core::{ApiInfo, Result};

/// Account API endpoints
pub struct AccountApi<'a> {
    client: &'a ShodanClient,
}

impl<'a> AccountApi<'a> {
    pub(crate) fn new(client: &'a ShodanClient) -> Self {
        Self { client }
    }

    /// Get API plan information including available credits
    pub async fn api_info(&self) -> Result<ApiInfo> {
        self.client.get("/api-info").await
    }
}
