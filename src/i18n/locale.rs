// SPDX-License-Identifier: MPL-2.0
//! Locale tags and start-up locale detection.

use crate::app::config::{Config, FALLBACK_LOCALE};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A normalized locale identifier such as `en-us` or `zh-cn`.
///
/// Normalization replaces `_` with `-`, trims surrounding whitespace, and
/// lowercases the whole tag, so `zh_CN`, `zh-CN` and `zh-cn` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Normalizes `raw` into a tag.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().replace('_', "-").to_lowercase())
    }

    /// The locale used when nothing else matches.
    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_LOCALE.to_string())
    }

    /// Returns the language portion of the tag (everything before the first `-`).
    #[must_use]
    pub fn primary_subtag(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Returns `true` if the tag carries a region or script after the language.
    #[must_use]
    pub fn has_subtags(&self) -> bool {
        self.0.contains('-')
    }

    /// Returns a tag holding only the primary subtag.
    #[must_use]
    pub fn primary(&self) -> Self {
        Self(self.primary_subtag().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleTag {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for LocaleTag {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for LocaleTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for LocaleTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LocaleTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

/// Derives the process locale once at start-up.
///
/// Resolution order:
/// 1. `cli_lang` (the `--lang` flag)
/// 2. the stored preference (`[general] language`)
/// 3. the language reported by the operating system
/// 4. [`FALLBACK_LOCALE`]
///
/// Blank values are skipped.
pub fn detect_locale(cli_lang: Option<&str>, config: &Config) -> LocaleTag {
    detect_locale_with(cli_lang, config, sys_locale::get_locale())
}

/// Same as [`detect_locale`] with the system locale passed in.
pub fn detect_locale_with(
    cli_lang: Option<&str>,
    config: &Config,
    system_locale: Option<String>,
) -> LocaleTag {
    let candidates = [
        cli_lang.map(str::to_string),
        config.general.language.clone(),
        system_locale,
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|raw| !raw.trim().is_empty())
        .map_or_else(LocaleTag::fallback, LocaleTag::new)
}
