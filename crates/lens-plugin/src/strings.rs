//! Translation lookup with English fallbacks.

use crate::host::LauncherHost;

/// Look up a translated string, falling back to the built-in English text
/// when the host has no translation (or returns a blank one).
pub(crate) fn tr(host: &dyn LauncherHost, key: &str, fallback: &str) -> String {
    match host.translation(key) {
        Some(s) if !s.trim().is_empty() => s,
        _ => fallback.to_string(),
    }
}

/// Substitute `{0}` in a (possibly translated) template.
pub(crate) fn fmt1(template: &str, arg: &str) -> String {
    template.replace("{0}", arg)
}
