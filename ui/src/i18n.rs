//! Localization for `pruftnet-ui`.
//!
//! Fluent bundles live under `i18n/<lang-id>/pruftnet-ui.ftl` (en-US is the
//! fallback and the reference for message IDs), are embedded at compile time
//! with `rust-embed` and selected through `i18n-embed`. Lookups go through the
//! [`t!`](crate::t) macro, which checks IDs against the fallback bundle at
//! compile time.
//!
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let label = crate::t!("hero-cta-waitlist");
//! ```
//!
//! Desktop builds ask the OS for preferred languages, web builds read
//! `navigator.languages`. On wasm the bundles are always embedded.
use std::sync::Once;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation lookup through the shared [`LOADER`], e.g. `t!("waitlist-title")`.
/// Fluent arguments follow the key as `name = value` pairs.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback bundle must be `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "pruftnet-ui";

const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the user's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(error = %err, "Failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Current language code from the platform's context signal (fallback when
/// none is provided). Subscribes the calling component, so prop-less
/// components re-render with fresh `t!` strings after a language switch.
pub fn use_language() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Embedded language tags, sorted (for the locale picker).
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;
    use crate::waitlist::FALLBACK_ERROR_MESSAGE;

    #[test]
    fn all_shipped_languages_are_embedded() {
        assert_eq!(available_languages(), vec!["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn basic_lookup_works() {
        init();
        set_language("en-US").unwrap();
        assert_eq!(fl!(&*LOADER, "nav-home"), "Home");
        assert_eq!(fl!(&*LOADER, "waitlist-submitting"), "Joining...");
    }

    #[test]
    fn english_fallback_error_matches_session_default() {
        init();
        set_language("en-US").unwrap();
        assert_eq!(fl!(&*LOADER, "waitlist-error-fallback"), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn invalid_tag_is_ignored() {
        init();
        let before = fl!(&*LOADER, "nav-home");
        assert!(set_language("not a tag!").is_ok());
        assert_eq!(fl!(&*LOADER, "nav-home"), before);
    }
}
