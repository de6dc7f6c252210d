//! Lightweight JSON-backed translations with per-locale bundles.

use customizer_core::ArticleAttribute;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Supported UI locales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// Russian.
    Ru,
    /// English.
    En,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 2] {
        [Self::Ru, Self::En]
    }

    /// Two-letter language code for the locale.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }

    /// Map an arbitrary browser language tag to a supported locale, falling back to None.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::Ru;

/// Pick the UI locale from an explicit `lang` query value, then the browser
/// language, then [`DEFAULT_LOCALE`].
#[must_use]
pub fn resolve_locale(query_lang: Option<&str>, navigator_lang: Option<&str>) -> LocaleCode {
    query_lang
        .and_then(LocaleCode::from_lang_tag)
        .or_else(|| navigator_lang.and_then(LocaleCode::from_lang_tag))
        .unwrap_or(DEFAULT_LOCALE)
}

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Missing keys fall back to the default locale, then to the caller's literal.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let raw = raw_locale(locale);
        let tree: Value = serde_json::from_str(raw).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with default-locale fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }

    /// Control title for an article attribute.
    #[must_use]
    pub fn attribute_label(&self, attribute: ArticleAttribute) -> String {
        self.text(&format!("panel.{}", attribute.key()), attribute.key())
    }
}

static FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(DEFAULT_LOCALE));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::Ru => include_str!("../../i18n/ru.json"),
        LocaleCode::En => include_str!("../../i18n/en.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text("nonexistent.key", "fallback"), "fallback");
    }

    #[test]
    fn panel_labels_resolve_in_every_locale() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            for key in ["heading", "reset", "apply", "open", "close"] {
                let path = format!("panel.{key}");
                assert_ne!(bundle.text(&path, "<missing>"), "<missing>", "{path}");
            }
            for attribute in ArticleAttribute::all() {
                assert_ne!(bundle.attribute_label(attribute), attribute.key());
            }
        }
    }

    #[test]
    fn russian_bundle_uses_russian_labels() {
        let bundle = TranslationBundle::new(LocaleCode::Ru);
        assert_eq!(bundle.text("panel.apply", ""), "Применить");
        assert_eq!(bundle.text("panel.reset", ""), "Сбросить");
        assert_eq!(
            bundle.attribute_label(ArticleAttribute::ContentWidth),
            "Ширина контента"
        );
    }

    #[test]
    fn bundles_hold_only_label_sections() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            let sections = bundle.tree.as_object().expect("bundle object");
            let mut keys: Vec<&str> = sections.keys().map(String::as_str).collect();
            keys.sort_unstable();
            assert_eq!(keys, ["article", "panel"], "{}", locale.code());
        }
    }

    #[test]
    fn lang_tags_map_to_supported_locales() {
        assert_eq!(LocaleCode::from_lang_tag("en-US"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("RU"), Some(LocaleCode::Ru));
        assert_eq!(LocaleCode::from_lang_tag("pt_BR"), None);
    }

    #[test]
    fn query_lang_wins_over_navigator() {
        assert_eq!(resolve_locale(Some("en"), Some("ru-RU")), LocaleCode::En);
        assert_eq!(resolve_locale(Some("xx"), Some("en-GB")), LocaleCode::En);
        assert_eq!(resolve_locale(None, None), DEFAULT_LOCALE);
    }
}
