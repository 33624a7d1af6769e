//! Result rows returned to the launcher.

use crate::host::LauncherHost;

/// Default icon reference for result rows.
pub const DEFAULT_ICON: &str = "icon.png";

/// A single selectable row presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// Row title. Never empty.
    pub title: String,

    /// Row subtitle.
    pub subtitle: String,

    /// Icon reference, resolved by the host.
    pub icon: String,

    /// Follow-up action executed when the user selects the row.
    pub action: Option<ResultAction>,
}

impl ResultItem {
    /// Create an item with the default icon and no action
    #[must_use]
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            icon: DEFAULT_ICON.to_string(),
            action: None,
        }
    }

    /// Attach an action to the item
    #[must_use]
    pub fn with_action(mut self, action: ResultAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Execute the item's action against the host, if one is attached.
    /// Returns whether the action succeeded.
    pub fn activate(&self, host: &dyn LauncherHost) -> bool {
        self.action
            .as_ref()
            .is_some_and(|action| action.run(host))
    }
}

/// Follow-up action carried by a result row.
///
/// [`ResultAction::run`] is the zero-argument callback the host invokes
/// when the user selects the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultAction {
    /// Open a web page in the default browser
    OpenUrl(String),
    /// Copy text to the system clipboard
    CopyText(String),
    /// Open the plugin's settings surface
    OpenSettings,
}

impl ResultAction {
    /// Execute the action against the host. Returns whether it succeeded.
    pub fn run(&self, host: &dyn LauncherHost) -> bool {
        match self {
            Self::OpenUrl(url) => host.open_url(url),
            Self::CopyText(text) => host.copy_to_clipboard(text),
            Self::OpenSettings => host.open_settings(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHost {
        opened: Mutex<Vec<String>>,
        copied: Mutex<Vec<String>>,
    }

    impl LauncherHost for RecordingHost {
        fn translation(&self, _key: &str) -> Option<String> {
            None
        }

        fn open_url(&self, url: &str) -> bool {
            self.opened.lock().unwrap().push(url.to_string());
            true
        }

        fn copy_to_clipboard(&self, text: &str) -> bool {
            self.copied.lock().unwrap().push(text.to_string());
            true
        }

        fn open_settings(&self) -> bool {
            true
        }
    }

    #[test]
    fn open_url_action_reaches_host() {
        let host = RecordingHost::default();
        let item = ResultItem::new("t", "s")
            .with_action(ResultAction::OpenUrl("https://example.com".into()));

        assert!(item.activate(&host));
        assert_eq!(host.opened.lock().unwrap().as_slice(), ["https://example.com"]);
    }

    #[test]
    fn copy_action_reaches_host() {
        let host = RecordingHost::default();
        assert!(ResultAction::CopyText("plan: dev".into()).run(&host));
        assert_eq!(host.copied.lock().unwrap().as_slice(), ["plan: dev"]);
    }

    #[test]
    fn item_without_action_is_inert() {
        let host = RecordingHost::default();
        assert!(!ResultItem::new("t", "s").activate(&host));
        assert!(host.opened.lock().unwrap().is_empty());
    }
}
