//! Host lookup and search endpoints.

use crate::ShodanClient;
use lens_core::{HostInfo, Result, SearchResults};

/// Host lookup and search endpoints
pub struct SearchApi<'a> {
    client: &'a ShodanClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a ShodanClient) -> Self {
        Self { client }
    }

    /// Get all information about a host
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let host = client.search().host("8.8.8.8").await?;
    /// println!("Ports: {:?}", host.ports);
    /// ```
    pub async fn host(&self, ip: &str) -> Result<HostInfo> {
        self.client.get(&format!("/shodan/host/{ip}")).await
    }

    /// Search Shodan with a query string
    #[must_use]
    pub fn query(&self, query: impl Into<String>) -> SearchRequestBuilder<'a> {
        SearchRequestBuilder::new(self.client, query.into())
    }
}

/// Builder for search requests
pub struct SearchRequestBuilder<'a> {
    client: &'a ShodanClient,
    query: String,
    page: u32,
}

impl<'a> SearchRequestBuilder<'a> {
    fn new(client: &'a ShodanClient, query: String) -> Self {
        Self {
            client,
            query,
            page: 1,
        }
    }

    /// Set the page number (1-indexed)
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Execute the search
    pub async fn send(self) -> Result<SearchResults> {
        let page_str = self.page.to_string();
        let params = [("query", self.query.as_str()), ("page", page_str.as_str())];

        self.client
            .get_with_query("/shodan/host/search", &params)
            .await
    }
}
