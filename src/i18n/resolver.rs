// SPDX-License-Identifier: MPL-2.0
//! Locale fallback and translation lookup.
//!
//! Resolution order, first match wins:
//!
//! 1. the requested tag itself (`zh-cn`)
//! 2. its primary subtag (`zh`)
//! 3. the first registered tag sharing that primary subtag (`zh-tw`),
//!    in table insertion order
//! 4. [`LocaleTag::fallback`] (`en`), whether or not the table has it
//!
//! Lookups never fail hard. A missing translation is logged and the key is
//! shown instead.

use super::locale::LocaleTag;
use super::table::{Entry, TranslationTable};

/// Picks the table locale that best serves `requested`.
pub fn resolve_locale(requested: &LocaleTag, table: &TranslationTable) -> LocaleTag {
    if table.contains(requested) {
        return requested.clone();
    }

    let primary = requested.primary();
    if table.contains(&primary) {
        return primary;
    }

    if let Some(cousin) = table
        .locales()
        .find(|candidate| candidate.primary_subtag() == primary.as_str())
    {
        return cousin.clone();
    }

    LocaleTag::fallback()
}

/// Returns the entry for the best locale, if the table has one.
pub fn resolve_entry<'a>(requested: &LocaleTag, table: &'a TranslationTable) -> Option<&'a Entry> {
    table.get(&resolve_locale(requested, table))
}

/// Translates `key` for `locale`.
///
/// Returns `key` unchanged when the resolved locale is missing, holds a plain
/// string instead of keyed translations, or lacks `key`.
pub fn translate(key: &str, table: &TranslationTable, locale: &LocaleTag) -> String {
    let resolved = resolve_locale(locale, table);
    match table.get(&resolved).and_then(|entry| entry.get(key)) {
        Some(text) => text.to_string(),
        None => {
            tracing::warn!(%key, requested = %locale, %resolved, "no translation");
            key.to_string()
        }
    }
}

/// Returns the plain-string entry of the best locale.
///
/// This is the key-less form for tables such as `{en: "Hello", zh: "你好"}`.
pub fn translate_entry<'a>(table: &'a TranslationTable, locale: &LocaleTag) -> Option<&'a str> {
    let resolved = resolve_locale(locale, table);
    let text = table.get(&resolved).and_then(Entry::as_text);
    if text.is_none() {
        tracing::warn!(requested = %locale, %resolved, "no plain-string translation");
    }
    text
}
