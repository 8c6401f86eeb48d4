use dioxus::prelude::*;

use crate::t;

/// Minimal modal dialog.
///
/// Controlled from outside: `open` decides visibility and every dismissal
/// (overlay click, Escape, close button) is reported through `on_open_change`.
#[component]
pub fn Dialog(
    open: bool,
    on_open_change: EventHandler<bool>,
    title: String,
    description: String,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "dialog__overlay",
            onclick: move |_| on_open_change.call(false),
            div {
                class: "dialog__content",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "dialog-title",
                tabindex: -1,
                onclick: move |evt| evt.stop_propagation(),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        on_open_change.call(false);
                    }
                },
                button {
                    r#type: "button",
                    class: "dialog__close",
                    aria_label: t!("dialog-close"),
                    onclick: move |_| on_open_change.call(false),
                    "×"
                }
                header { class: "dialog__header",
                    h2 { id: "dialog-title", class: "dialog__title", "{title}" }
                    p { class: "dialog__description", "{description}" }
                }
                {children}
            }
        }
    }
}
