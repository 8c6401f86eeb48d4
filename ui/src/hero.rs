use dioxus::prelude::*;

use crate::core::config::use_site_config;
use crate::i18n::use_language;
use crate::t;
use crate::waitlist::WaitlistDialog;

const HERO_ILLUSTRATION: Asset = asset!("/assets/home_svg.svg");

/// Landing hero: pitch, waitlist sign-up and the repository link.
#[component]
pub fn Hero() -> Element {
    // Re-render with fresh strings when the language changes.
    let _lang = use_language();
    let config = use_site_config();

    rsx! {
        section { class: "hero",
            div { class: "hero__glow", aria_hidden: "true" }

            div { class: "container-main",
                div { class: "hero__layout",
                    div { class: "hero__copy",
                        div { class: "hero__badge", {t!("hero-badge")} }

                        h1 { class: "hero__title",
                            {t!("hero-title")}
                            span { class: "hero__title-accent", {t!("hero-title-accent")} }
                        }

                        p { class: "hero__lead", {t!("hero-lead")} }

                        div { class: "hero__actions",
                            WaitlistDialog {}
                            a {
                                class: "button button--outline button--lg hero__repo",
                                href: "{config.repository_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                span { class: "icon icon--github", aria_hidden: "true" }
                                {t!("hero-cta-github")}
                            }
                        }

                        ul { class: "hero__traits",
                            li { {t!("hero-trait-open-source")} }
                            li { {t!("hero-trait-cross-platform")} }
                            li { {t!("hero-trait-web")} }
                        }
                    }

                    div { class: "hero__visual",
                        img {
                            class: "hero__illustration",
                            src: HERO_ILLUSTRATION,
                            alt: t!("hero-illustration-alt"),
                            loading: "eager",
                        }
                    }
                }
            }
        }
    }
}
