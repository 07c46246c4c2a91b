// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Translations live in static, in-memory tables keyed by locale. A lookup
//! walks a fixed fallback chain (exact tag, language, sibling region, English)
//! and shows the key itself when nothing matches.
//!
//! # Features
//!
//! - Locale detection from CLI, stored preference, or system settings
//! - Append-only [`Registry`] that modules contribute tables to
//! - [`apply_translations`] to patch marked elements of a render target
//!
//! Pluralization, interpolation and message formats are intentionally absent.

pub mod apply;
pub mod locale;
pub mod registry;
pub mod resolver;
pub mod table;

pub use apply::{apply_translations, apply_translations_with, HTML_MARKER, TEXT_MARKER};
pub use locale::{detect_locale, LocaleTag};
pub use registry::Registry;
pub use resolver::{resolve_locale, translate, translate_entry};
pub use table::{Entry, TranslationTable};
