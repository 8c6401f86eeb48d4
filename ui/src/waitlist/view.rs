use api::WaitlistClient;
use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::components::Dialog;
use crate::core::config::use_site_config;
use crate::i18n::use_language;
use crate::t;

use super::dialog::DialogController;
use super::events::{run_events, WaitlistEvent, WaitlistState};
use super::form_view::{FormView, MessagePanel, SubmitButton};
use super::session::SubmissionSession;

/// "Join the Waitlist" trigger plus the sign-up dialog it opens.
///
/// All session mutations go through one coroutine running [`run_events`].
/// Requests and the close reset timer belong to that coroutine: unmounting
/// drops them, closing the dialog does not.
#[component]
pub fn WaitlistDialog() -> Element {
    // Re-render with fresh strings when the language changes.
    let _lang = use_language();

    let config = use_site_config();
    let session = use_signal(|| SubmissionSession::with_fallback(localized_fallback));
    let dialog = use_signal(|| DialogController::new(config.reset_delay_ms));
    let client = use_hook(|| match WaitlistClient::new(&config.api_base) {
        Ok(client) => Some(client),
        Err(err) => {
            error!(error = %err, "Waitlist client unavailable");
            None
        }
    });

    let coroutine = use_coroutine(move |rx: UnboundedReceiver<WaitlistEvent>| {
        let client = client.clone();
        let join = move |email: String| {
            let client = client.clone();
            async move {
                match client {
                    Some(client) => client.join(&email).await.map_err(|e| e.to_string()),
                    None => Err("waitlist client unavailable".to_string()),
                }
            }
        };
        run_events(rx, SignalState { session, dialog }, join)
    });

    let snapshot = session.read();
    let email = snapshot.email().to_string();
    let view = FormView::derive(snapshot.status());
    drop(snapshot);
    let open = dialog.read().is_open();

    rsx! {
        button {
            r#type: "button",
            class: "button button--primary button--lg hero__cta",
            onclick: move |_| coroutine.send(WaitlistEvent::OpenChange(true)),
            {t!("hero-cta-waitlist")}
            span { class: "icon icon--arrow", aria_hidden: "true", "→" }
        }

        Dialog {
            open,
            on_open_change: move |open: bool| coroutine.send(WaitlistEvent::OpenChange(open)),
            title: t!("waitlist-title"),
            description: t!("waitlist-description"),

            if let MessagePanel::Success(message) = &view.panel {
                div { class: "waitlist__success", role: "status",
                    span { class: "icon icon--check", aria_hidden: "true", "✓" }
                    span { class: "waitlist__success-text", "{message}" }
                }
            }

            if view.show_form {
                form {
                    class: "waitlist__form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        coroutine.send(WaitlistEvent::Submit);
                    },
                    input {
                        r#type: "email",
                        class: "waitlist__input",
                        value: "{email}",
                        placeholder: t!("waitlist-email-placeholder"),
                        required: true,
                        disabled: view.input_disabled,
                        oninput: move |evt| coroutine.send(WaitlistEvent::EmailInput(evt.value())),
                    }
                    button {
                        r#type: "submit",
                        class: "button button--primary button--lg waitlist__submit",
                        disabled: view.button_disabled(),
                        {match view.button {
                            SubmitButton::Joining => rsx! {
                                span { class: "spinner", aria_hidden: "true" }
                                {t!("waitlist-submitting")}
                            },
                            SubmitButton::Join => rsx! {
                                {t!("waitlist-submit")}
                                span { class: "icon icon--arrow", aria_hidden: "true", "→" }
                            },
                        }}
                    }
                }
            }

            if let MessagePanel::Error(message) = &view.panel {
                p { class: "waitlist__error", role: "alert", "{message}" }
            }

            if view.show_privacy_note {
                p { class: "waitlist__privacy", {t!("waitlist-privacy")} }
            }
        }
    }
}

fn localized_fallback() -> String {
    t!("waitlist-error-fallback")
}

struct SignalState {
    session: Signal<SubmissionSession>,
    dialog: Signal<DialogController>,
}

impl WaitlistState for SignalState {
    fn with_session<R>(&mut self, f: impl FnOnce(&mut SubmissionSession) -> R) -> R {
        self.session.with_mut(f)
    }

    fn with_dialog<R>(&mut self, f: impl FnOnce(&mut DialogController) -> R) -> R {
        self.dialog.with_mut(f)
    }
}
