//! Capability trait for the launcher host.

/// Capabilities the launcher host provides to the plugin.
///
/// The plugin core never touches the OS or the host UI directly; every
/// side effect goes through this trait. Implementations must be cheap to
/// call and safe to share across queries.
pub trait LauncherHost: Send + Sync {
    /// Look up a translated string by key. `None` (or a blank string)
    /// falls back to the built-in English text.
    fn translation(&self, key: &str) -> Option<String>;

    /// Open a URL in the default browser. Returns whether the action
    /// succeeded.
    fn open_url(&self, url: &str) -> bool;

    /// Copy text to the system clipboard. Returns whether the action
    /// succeeded.
    fn copy_to_clipboard(&self, text: &str) -> bool;

    /// Open the plugin's settings surface. Returns whether the action
    /// succeeded.
    fn open_settings(&self) -> bool;
}
