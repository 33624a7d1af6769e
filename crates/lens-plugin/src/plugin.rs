//! Plugin entry point: query dispatch.

use crate::command::Command;
use crate::format;
use crate::host::LauncherHost;
use crate::item::ResultItem;
use crate::settings::Settings;
use async_trait::async_trait;
use lens_client::ShodanClient;
use lens_core::Result;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// The host-facing entry point.
///
/// One logical request per query: at most one outbound network call is
/// issued, and dropping the returned future aborts it. Errors never
/// propagate to the host; they render as a single error row.
#[async_trait]
pub trait QueryPlugin: Send + Sync {
    /// Resolve a free-text query line into result rows.
    async fn query(&self, input: &str) -> Vec<ResultItem>;
}

/// The Shodan launcher plugin.
pub struct ShodanLens {
    host: Arc<dyn LauncherHost>,
    settings: RwLock<Settings>,
    // Cached client, keyed by the API key it was built with. The key is
    // read once per dispatch; a changed key rebuilds the client.
    client: Mutex<Option<(String, ShodanClient)>>,
    base_url: Option<String>,
}

impl ShodanLens {
    /// Create a plugin talking to the production API
    #[must_use]
    pub fn new(host: Arc<dyn LauncherHost>, settings: Settings) -> Self {
        Self {
            host,
            settings: RwLock::new(settings),
            client: Mutex::new(None),
            base_url: None,
        }
    }

    /// Create a plugin talking to a custom base URL (useful for testing
    /// against a stub server)
    #[must_use]
    pub fn with_base_url(
        host: Arc<dyn LauncherHost>,
        settings: Settings,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            host,
            settings: RwLock::new(settings),
            client: Mutex::new(None),
            base_url: Some(base_url.into()),
        }
    }

    /// Current settings snapshot
    pub async fn settings(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Replace the settings, e.g. after the host's settings surface saved
    /// a new API key. The client is rebuilt lazily on the next dispatch.
    pub async fn update_settings(&self, settings: Settings) {
        *self.settings.write().await = settings;
    }

    async fn api_key(&self) -> String {
        self.settings.read().await.api_key.clone()
    }

    /// Get a client for the given key, reusing the cached one while the
    /// key value is unchanged.
    async fn client_for(&self, key: &str) -> ShodanClient {
        let mut cached = self.client.lock().await;

        if let Some((cached_key, client)) = cached.as_ref() {
            if cached_key == key {
                return client.clone();
            }
        }

        let mut builder = ShodanClient::builder(key);
        if let Some(base) = &self.base_url {
            builder = builder.base_url(base.clone());
        }
        let client = builder.build();
        *cached = Some((key.to_string(), client.clone()));
        client
    }

    /// Resolve a free-text query line into result rows.
    pub async fn query(&self, input: &str) -> Vec<ResultItem> {
        let command = Command::parse(input);
        debug!(?command, "dispatching query");

        // Help and unknown input never touch the network.
        match &command {
            Command::Help => return format::help_items(self.host.as_ref()),
            Command::Unknown => return vec![format::unknown_command_item(self.host.as_ref())],
            _ => {}
        }

        let key = self.api_key().await;
        if command.requires_api_key() && key.trim().is_empty() {
            return vec![format::config_needed_item(self.host.as_ref())];
        }

        match self.dispatch(command, &key).await {
            Ok(items) => items,
            Err(err) => {
                warn!(%err, "query failed");
                vec![format::error_item(&err, self.host.as_ref())]
            }
        }
    }

    async fn dispatch(&self, command: Command, key: &str) -> Result<Vec<ResultItem>> {
        let h = self.host.as_ref();
        let client = self.client_for(key).await;

        match command {
            Command::Host(ip) => {
                let info = client.search().host(&ip).await?;
                Ok(format::host_items(&info, h))
            }
            Command::Search(query) => {
                let results = client.search().query(query.as_str()).send().await?;
                Ok(format::search_items(&results, &query, h))
            }
            Command::Info => {
                let info = client.account().api_info().await?;
                Ok(vec![format::info_item(&info, h)])
            }
            Command::MyIp => {
                let ip = client.tools().my_ip().await?;
                Ok(vec![format::myip_item(&ip, h)])
            }
            Command::Dns(hostname) => {
                let resolution = client.dns().resolve(&[hostname.as_str()]).await?;
                Ok(vec![format::resolve_item(
                    &hostname,
                    resolution.ip_for(&hostname),
                    h,
                )])
            }
            Command::Reverse(ip) => {
                let reverse = client.dns().reverse(&[ip.as_str()]).await?;
                Ok(vec![format::reverse_item(
                    &ip,
                    reverse.first_hostname(&ip),
                    h,
                )])
            }
            Command::Help | Command::Unknown => unreachable!("handled before dispatch"),
        }
    }
}

#[async_trait]
impl QueryPlugin for ShodanLens {
    async fn query(&self, input: &str) -> Vec<ResultItem> {
        Self::query(self, input).await
    }
}
