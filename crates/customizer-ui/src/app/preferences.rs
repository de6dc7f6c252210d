//! Environment helpers for the app shell.

use crate::i18n::{LocaleCode, resolve_locale};
use gloo::utils::window;
use web_sys::UrlSearchParams;

pub(crate) const LANG_QUERY_KEY: &str = "lang";

/// Resolve the UI locale from the `lang` query parameter or the browser language.
pub(crate) fn load_locale() -> LocaleCode {
    let query_lang = window()
        .location()
        .search()
        .ok()
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get(LANG_QUERY_KEY));
    let navigator_lang = window().navigator().language();
    resolve_locale(query_lang.as_deref(), navigator_lang.as_deref())
}
