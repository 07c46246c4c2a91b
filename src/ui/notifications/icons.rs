// SPDX-License-Identifier: MPL-2.0
//! Icon markup shown next to each notification, keyed by severity.

use super::notification::Severity;
use std::collections::HashMap;

const INFO_ICON: &str = r##"<svg viewBox="0 0 16 16" width="16" height="16"><circle cx="8" cy="8" r="7" fill="#1677ff"/><rect x="7" y="7" width="2" height="5" fill="#fff"/><rect x="7" y="4" width="2" height="2" fill="#fff"/></svg>"##;
const SUCCESS_ICON: &str = r##"<svg viewBox="0 0 16 16" width="16" height="16"><circle cx="8" cy="8" r="7" fill="#52c41a"/><path d="M4.5 8.5l2.5 2.5 4.5-5" stroke="#fff" stroke-width="1.6" fill="none"/></svg>"##;
const WARNING_ICON: &str = r##"<svg viewBox="0 0 16 16" width="16" height="16"><circle cx="8" cy="8" r="7" fill="#faad14"/><rect x="7" y="4" width="2" height="5" fill="#fff"/><rect x="7" y="10" width="2" height="2" fill="#fff"/></svg>"##;
const ERROR_ICON: &str = r##"<svg viewBox="0 0 16 16" width="16" height="16"><circle cx="8" cy="8" r="7" fill="#ff4d4f"/><path d="M5.5 5.5l5 5M10.5 5.5l-5 5" stroke="#fff" stroke-width="1.6"/></svg>"##;

/// Severity-to-markup mapping used when mounting toasts.
#[derive(Debug, Clone)]
pub struct IconRegistry {
    icons: HashMap<Severity, String>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        let icons = [
            (Severity::Info, INFO_ICON),
            (Severity::Success, SUCCESS_ICON),
            (Severity::Warning, WARNING_ICON),
            (Severity::Error, ERROR_ICON),
        ]
        .into_iter()
        .map(|(severity, markup)| (severity, markup.to_string()))
        .collect();
        Self { icons }
    }
}

impl IconRegistry {
    /// A registry with no icons; every lookup yields empty markup.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            icons: HashMap::new(),
        }
    }

    /// Replaces the icon for `severity`.
    pub fn set(&mut self, severity: Severity, markup: impl Into<String>) {
        self.icons.insert(severity, markup.into());
    }

    /// Icon markup for `severity`, empty if none is registered.
    #[must_use]
    pub fn get(&self, severity: Severity) -> &str {
        self.icons.get(&severity).map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_severity() {
        let icons = IconRegistry::default();
        for severity in Severity::ALL {
            assert!(icons.get(severity).starts_with("<svg"), "{severity:?}");
        }
    }

    #[test]
    fn overrides_and_missing_entries() {
        let mut icons = IconRegistry::empty();
        assert_eq!(icons.get(Severity::Error), "");

        icons.set(Severity::Error, "<i>x</i>");
        assert_eq!(icons.get(Severity::Error), "<i>x</i>");
    }
}
