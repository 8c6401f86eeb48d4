use crate::core::config::use_site_config;
use crate::i18n::{self};
use crate::t;
use dioxus::logger::tracing::trace;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform-supplied link constructors.
///
/// `ui` does not know each platform's `Route` enum, so platforms register a
/// builder whose closures wrap the localized label in their own `Link`.
///
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     });
/// }
/// ```
///
/// Without a registered builder, `AppNavbar` renders its `children` instead.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let config = use_site_config();
    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    trace!(lang = %_lang_marker, "AppNavbar render");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let internal_nav = NAV_BUILDER.get().map(|b| (b.home)(&t!("nav-home")));

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Pruftnet" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                nav { class: "navbar__links",
                    if let Some(home) = internal_nav {
                        {home}
                    } else {
                        {children}
                    }
                    a {
                        class: "navbar__link",
                        href: "{config.repository_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!("nav-github")}
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
