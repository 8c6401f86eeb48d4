use dioxus::prelude::*;

use crate::i18n::use_language;
use crate::Hero;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    dioxus::logger::tracing::trace!(lang, "Home render");
}

#[component]
pub fn Home() -> Element {
    let _lang_current = use_language();

    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_current);
    }

    rsx! {
        div { style: "display:none", "{_lang_current}" }
        main { class: "page page-home",
            Hero {}
        }
    }
}
