// SPDX-License-Identifier: MPL-2.0
//! Application-wide translation registry.

use super::locale::LocaleTag;
use super::resolver;
use super::table::{Entry, TranslationTable};

/// Accumulates translation tables registered by the parts of an application.
///
/// The registry only grows. Later registrations overwrite matching
/// locale and key pairs, and nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    table: TranslationTable,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers translations for a single locale.
    pub fn add(&mut self, locale: impl Into<LocaleTag>, entry: impl Into<Entry>) {
        self.table.merge_entry(locale, entry);
    }

    /// Registers every locale of `table`.
    pub fn merge(&mut self, table: TranslationTable) {
        for (locale, entry) in table {
            self.table.merge_entry(locale, entry);
        }
    }

    /// Translates `key` for `locale`, falling back to the key itself.
    #[must_use]
    pub fn translate(&self, key: &str, locale: &LocaleTag) -> String {
        resolver::translate(key, &self.table, locale)
    }

    /// The locale whose entry would serve `locale`.
    #[must_use]
    pub fn resolve_locale(&self, locale: &LocaleTag) -> LocaleTag {
        resolver::resolve_locale(locale, &self.table)
    }

    #[must_use]
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_merge_accumulate() {
        let mut registry = Registry::new();
        registry.add("en", Entry::keys([("save", "Save")]));
        registry.merge(
            TranslationTable::new()
                .with("en", Entry::keys([("cancel", "Cancel")]))
                .with("zh-CN", Entry::keys([("save", "保存")])),
        );

        let en = LocaleTag::new("en");
        assert_eq!(registry.translate("save", &en), "Save");
        assert_eq!(registry.translate("cancel", &en), "Cancel");
        assert_eq!(registry.translate("save", &"zh".into()), "保存");
    }

    #[test]
    fn later_registration_overwrites_same_key() {
        let mut registry = Registry::new();
        registry.add("en", Entry::keys([("save", "Save")]));
        registry.add("en", Entry::keys([("save", "Store")]));

        assert_eq!(registry.translate("save", &"en-US".into()), "Store");
    }

    #[test]
    fn lookups_leave_registry_untouched() {
        let mut registry = Registry::new();
        registry.add("en", Entry::keys([("save", "Save")]));
        let before = registry.table().clone();

        let _ = registry.translate("missing", &"ja".into());
        let _ = registry.resolve_locale(&"ja".into());

        assert_eq!(registry.table(), &before);
    }
}
