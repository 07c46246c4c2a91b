// SPDX-License-Identifier: MPL-2.0
//! Writes translations into marked elements.
//!
//! Elements opt in with one of two attributes whose value is the
//! translation key:
//!
//! - `data-i18n` - the translation replaces the element's text
//! - `data-i18n_html` - the translation replaces the element's markup
//!
//! Markup translations are inserted as-is. Only register trusted strings
//! under keys used with the HTML marker.

use super::locale::LocaleTag;
use super::registry::Registry;
use super::resolver;
use super::table::TranslationTable;
use crate::ui::target::RenderTarget;

/// Attribute marking elements whose text is translated.
pub const TEXT_MARKER: &str = "data-i18n";

/// Attribute marking elements whose markup is translated.
pub const HTML_MARKER: &str = "data-i18n_html";

/// Translates every marked element under `scope` using the registry.
///
/// `scope` of `None` covers the whole tree. Returns how many elements were
/// written.
pub fn apply_translations<T: RenderTarget>(
    target: &mut T,
    scope: Option<T::Node>,
    registry: &Registry,
    locale: &LocaleTag,
) -> usize {
    apply_translations_with(target, scope, registry.table(), locale)
}

/// Same as [`apply_translations`] with an explicit table instead of the registry.
pub fn apply_translations_with<T: RenderTarget>(
    target: &mut T,
    scope: Option<T::Node>,
    table: &TranslationTable,
    locale: &LocaleTag,
) -> usize {
    let mut written = 0;

    for (node, key) in target.find_marked(scope, TEXT_MARKER) {
        let text = resolver::translate(&key, table, locale);
        target.set_text(node, &text);
        written += 1;
    }

    for (node, key) in target.find_marked(scope, HTML_MARKER) {
        let markup = resolver::translate(&key, table, locale);
        target.set_markup(node, &markup);
        written += 1;
    }

    tracing::trace!(%locale, written, "applied translations");
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::table::Entry;
    use crate::ui::document::Document;
    use crate::ui::target::MountTarget;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.add(
            "en",
            Entry::keys([("title", "Settings"), ("notice", "<b>Saved</b>")]),
        );
        registry.add(
            "zh-CN",
            Entry::keys([("title", "设置"), ("notice", "<b>已保存</b>")]),
        );
        registry
    }

    #[test]
    fn writes_text_and_markup_markers() {
        let mut doc = Document::new();
        let body = doc.body();
        let title = doc.append_element(body, "h1", &[(TEXT_MARKER, "title")]);
        let notice = doc.append_element(body, "p", &[(HTML_MARKER, "notice")]);

        let written = apply_translations(&mut doc, None, &registry(), &"zh-CN".into());

        assert_eq!(written, 2);
        assert_eq!(doc.text(title), Some("设置"));
        assert_eq!(doc.markup(notice), Some("<b>已保存</b>"));
    }

    #[test]
    fn text_marker_never_produces_markup() {
        let mut doc = Document::new();
        let body = doc.body();
        let node = doc.append_element(body, "span", &[(TEXT_MARKER, "notice")]);

        apply_translations(&mut doc, None, &registry(), &"en".into());

        assert_eq!(doc.text(node), Some("<b>Saved</b>"));
        assert_eq!(doc.markup(node), None);
    }

    #[test]
    fn scope_limits_the_walk() {
        let mut doc = Document::new();
        let body = doc.body();
        let outside = doc.append_element(body, "h1", &[(TEXT_MARKER, "title")]);
        let panel = doc.append_element(body, "div", &[]);
        let inside = doc.append_element(panel, "h2", &[(TEXT_MARKER, "title")]);

        let written = apply_translations(&mut doc, Some(panel), &registry(), &"en".into());

        assert_eq!(written, 1);
        assert_eq!(doc.text(inside), Some("Settings"));
        assert_eq!(doc.text(outside), None);
    }

    #[test]
    fn missing_keys_show_the_key() {
        let mut doc = Document::new();
        let body = doc.body();
        let node = doc.append_element(body, "span", &[(TEXT_MARKER, "unknown-key")]);

        apply_translations(&mut doc, None, &registry(), &"en".into());

        assert_eq!(doc.text(node), Some("unknown-key"));
    }

    #[test]
    fn table_override_bypasses_registry() {
        let mut doc = Document::new();
        let body = doc.body();
        let node = doc.append_element(body, "span", &[(TEXT_MARKER, "title")]);
        let table = TranslationTable::new().with("en", Entry::keys([("title", "Overridden")]));

        apply_translations_with(&mut doc, None, &table, &"en".into());

        assert_eq!(doc.text(node), Some("Overridden"));
    }
}
