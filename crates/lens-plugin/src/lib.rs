//! Command dispatch and result formatting for the shodan-lens launcher
//! plugin.
//!
//! The plugin core is host-agnostic: it receives a free-text query line,
//! resolves it to one Shodan API call at most, and returns an ordered list
//! of [`ResultItem`]s for the launcher to render. Everything the host owns
//! (translations, clipboard, browser, settings surface) is reached through
//! the [`LauncherHost`] capability trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lens_plugin::{QueryPlugin, Settings, ShodanLens};
//!
//! let lens = ShodanLens::new(Arc::new(MyHost), Settings::load()?);
//! let items = lens.query("host 8.8.8.8").await;
//! for item in &items {
//!     println!("{} - {}", item.title, item.subtitle);
//! }
//! ```
//!
//! Cancellation is drop-based: dropping the future returned by
//! [`QueryPlugin::query`] aborts the in-flight network call and no partial
//! results are emitted.

pub mod command;
pub mod format;
pub mod host;
pub mod item;
pub mod plugin;
pub mod settings;
mod strings;

pub use command::Command;
pub use host::LauncherHost;
pub use item::{ResultAction, ResultItem, DEFAULT_ICON};
pub use plugin::{QueryPlugin, ShodanLens};
pub use settings::Settings;
