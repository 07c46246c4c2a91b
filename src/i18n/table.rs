// SPDX-License-Identifier: MPL-2.0
//! In-memory translation tables.
//!
//! A table maps each locale to either a single string or a set of keyed
//! strings. Both the locales and the keys keep their insertion order; the
//! resolver relies on it when several regional variants share a language.

use super::locale::LocaleTag;
use indexmap::map::Entry as Slot;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Translations registered for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// The locale maps straight to a display string.
    Text(String),
    /// The locale maps translation keys to display strings.
    Keys(IndexMap<String, String>),
}

impl Entry {
    /// Builds a keyed entry from `(key, text)` pairs.
    pub fn keys<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Entry::Keys(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Looks up `key` in a keyed entry. Plain-string entries have no keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            Entry::Keys(map) => map.get(key).map(String::as_str),
            Entry::Text(_) => None,
        }
    }

    /// Returns the string of a plain-string entry.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Entry::Text(text) => Some(text),
            Entry::Keys(_) => None,
        }
    }

    /// Folds `other` into `self`.
    ///
    /// Keyed entries merge key by key with `other` winning on conflicts.
    /// Any other pairing replaces `self` outright.
    pub fn merge(&mut self, other: Entry) {
        match (self, other) {
            (Entry::Keys(existing), Entry::Keys(incoming)) => existing.extend(incoming),
            (slot, incoming) => *slot = incoming,
        }
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Entry::Text(text.to_string())
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Entry::Text(text)
    }
}

/// Locale-to-entry mapping in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: IndexMap<LocaleTag, Entry>,
}

impl TranslationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a locale, returning the table for chaining.
    #[must_use]
    pub fn with(mut self, locale: impl Into<LocaleTag>, entry: impl Into<Entry>) -> Self {
        self.insert(locale, entry);
        self
    }

    /// Sets the entry for `locale`, replacing any previous one.
    pub fn insert(&mut self, locale: impl Into<LocaleTag>, entry: impl Into<Entry>) {
        self.entries.insert(locale.into(), entry.into());
    }

    /// Merges `entry` into whatever `locale` already holds.
    pub fn merge_entry(&mut self, locale: impl Into<LocaleTag>, entry: impl Into<Entry>) {
        let entry = entry.into();
        match self.entries.entry(locale.into()) {
            Slot::Occupied(mut slot) => slot.get_mut().merge(entry),
            Slot::Vacant(slot) => {
                slot.insert(entry);
            }
        }
    }

    #[must_use]
    pub fn get(&self, locale: &LocaleTag) -> Option<&Entry> {
        self.entries.get(locale)
    }

    #[must_use]
    pub fn contains(&self, locale: &LocaleTag) -> bool {
        self.entries.contains_key(locale)
    }

    /// Iterates over the registered locales in insertion order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleTag> {
        self.entries.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L, E> FromIterator<(L, E)> for TranslationTable
where
    L: Into<LocaleTag>,
    E: Into<Entry>,
{
    fn from_iter<I: IntoIterator<Item = (L, E)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (locale, entry) in iter {
            table.insert(locale, entry);
        }
        table
    }
}

impl IntoIterator for TranslationTable {
    type Item = (LocaleTag, Entry);
    type IntoIter = indexmap::map::IntoIter<LocaleTag, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
