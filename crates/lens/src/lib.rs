//! Launcher-lens plugin core for the Shodan API.
//!
//! A small API-client library plus thin adapters: free-text commands
//! (`host 8.8.8.8`, `search apache country:FR`, `dns google.com`, ...)
//! are dispatched to the Shodan API and rendered as selectable result
//! rows for a launcher to display.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shodan_lens::{QueryPlugin, Settings, ShodanLens};
//!
//! #[tokio::main]
//! async fn main() -> shodan_lens::Result<()> {
//!     let lens = ShodanLens::new(Arc::new(MyLauncherHost), Settings::load()?);
//!
//!     for item in lens.query("host 8.8.8.8").await {
//!         println!("{} - {}", item.title, item.subtitle);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

// Re-export core types
pub use lens_core::*;

// Re-export client
pub use lens_client::{ShodanClient, ShodanClientBuilder};

// Re-export the plugin surface
pub use lens_plugin::{
    Command, LauncherHost, QueryPlugin, ResultAction, ResultItem, Settings, ShodanLens,
    DEFAULT_ICON,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
