//! Submission state machine for the waitlist form.
//!
//! ```text
//! Idle ──submit──▶ Loading ──reply ok──▶ Success
//!                    │  ▲
//!        reply !ok / │  │ submit
//!        failure     ▼  │
//!                    Error
//! ```
//!
//! `reset` (fired by the dialog close timer) returns any state to `Idle`.
//! The session is pure: network I/O and timers live in the view.

use std::fmt::Display;

use api::JoinReply;
use dioxus::logger::tracing::warn;

/// Shown when no reply could be obtained from the backend.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success { message: String },
    Error { message: String },
}

impl FormStatus {
    /// Message attached to the status; empty while idle or loading.
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Error { message } => message,
            Self::Idle | Self::Loading => "",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Email captured when a submission starts; what the request must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub email: String,
}

/// Produces the text shown when no reply could be obtained.
pub type FallbackMessage = fn() -> String;

fn default_fallback() -> String {
    FALLBACK_ERROR_MESSAGE.to_string()
}

/// Transient state of one waitlist dialog, from mount to unmount.
#[derive(Debug, Clone)]
pub struct SubmissionSession {
    email: String,
    status: FormStatus,
    fallback: FallbackMessage,
}

impl Default for SubmissionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionSession {
    pub fn new() -> Self {
        Self::with_fallback(default_fallback)
    }

    /// Session whose transport failures show the text produced by `fallback`
    /// (e.g. a localized variant of [`FALLBACK_ERROR_MESSAGE`]). It is called
    /// when the failure happens, so it follows the language in effect then.
    pub fn with_fallback(fallback: FallbackMessage) -> Self {
        Self {
            email: String::new(),
            status: FormStatus::Idle,
            fallback,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn message(&self) -> &str {
        self.status.message()
    }

    /// Update the email from the input. Ignored while a request is in flight,
    /// since the input is disabled then.
    pub fn set_email(&mut self, email: impl Into<String>) -> bool {
        if self.status.is_loading() {
            return false;
        }
        self.email = email.into();
        true
    }

    /// Enter `Loading` and hand back what to send.
    ///
    /// Refused while loading (control disabled), after success (form hidden)
    /// and for an empty address (input is `required`).
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        match self.status {
            FormStatus::Loading | FormStatus::Success { .. } => return None,
            FormStatus::Idle | FormStatus::Error { .. } => {}
        }
        if self.email.trim().is_empty() {
            return None;
        }

        self.status = FormStatus::Loading;
        Some(PendingSubmission {
            email: self.email.clone(),
        })
    }

    /// Apply the outcome of a submission.
    ///
    /// Always applied, even if the dialog was closed (and reset) while the
    /// request was in flight: the user sees the real outcome on reopen.
    pub fn resolve<E: Display>(&mut self, outcome: Result<JoinReply, E>) {
        self.status = match outcome {
            Ok(reply) if reply.success => {
                self.email.clear();
                FormStatus::Success {
                    message: reply.message,
                }
            }
            Ok(reply) => FormStatus::Error {
                message: reply.message,
            },
            Err(err) => {
                warn!(error = %err, "Waitlist submission failed");
                FormStatus::Error {
                    message: (self.fallback)(),
                }
            }
        };
    }

    /// Back to `Idle` with no message. The email is kept.
    pub fn reset(&mut self) {
        self.status = FormStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loading_session(email: &str) -> SubmissionSession {
        let mut session = SubmissionSession::new();
        session.set_email(email);
        let pending = session.begin_submit().expect("submission starts");
        assert_eq!(pending.email, email);
        session
    }

    #[test]
    fn starts_idle_and_empty() {
        let session = SubmissionSession::new();
        assert_eq!(session.status(), &FormStatus::Idle);
        assert_eq!(session.email(), "");
        assert_eq!(session.message(), "");
    }

    #[test]
    fn accepted_reply_clears_email_and_shows_message() {
        let mut session = loading_session("ada@example.com");
        session.resolve::<String>(Ok(JoinReply::accepted("Welcome!")));

        assert_eq!(
            session.status(),
            &FormStatus::Success {
                message: "Welcome!".into()
            }
        );
        assert_eq!(session.message(), "Welcome!");
        assert_eq!(session.email(), "");
    }

    #[test]
    fn rejected_reply_keeps_email_and_allows_retry() {
        let mut session = loading_session("ada@example.com");
        session.resolve::<String>(Ok(JoinReply::rejected("Already registered")));

        assert_eq!(session.message(), "Already registered");
        assert!(matches!(session.status(), FormStatus::Error { .. }));
        assert_eq!(session.email(), "ada@example.com");

        assert!(session.set_email("ada@example.org"));
        assert!(session.begin_submit().is_some());
        assert_eq!(session.status(), &FormStatus::Loading);
    }

    #[test]
    fn transport_failure_uses_fallback_message() {
        let mut session = loading_session("ada@example.com");
        session.resolve::<&str>(Err("connection refused"));

        assert_eq!(
            session.status(),
            &FormStatus::Error {
                message: "Something went wrong. Please try again later.".into()
            }
        );
        assert_eq!(session.email(), "ada@example.com");
    }

    thread_local! {
        static SPANISH: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
    }

    fn switchable_fallback() -> String {
        if SPANISH.with(|flag| flag.get()) {
            "Algo salió mal.".to_string()
        } else {
            FALLBACK_ERROR_MESSAGE.to_string()
        }
    }

    #[test]
    fn fallback_message_follows_language_at_failure_time() {
        let mut session = SubmissionSession::with_fallback(switchable_fallback);
        session.set_email("ada@example.com");
        session.begin_submit();

        SPANISH.with(|flag| flag.set(true));
        session.resolve::<&str>(Err("offline"));
        SPANISH.with(|flag| flag.set(false));

        assert_eq!(session.message(), "Algo salió mal.");
    }

    #[test]
    fn loading_blocks_second_submit_and_edits() {
        let mut session = loading_session("ada@example.com");

        assert!(session.begin_submit().is_none());
        assert!(!session.set_email("other@example.com"));
        assert_eq!(session.email(), "ada@example.com");
    }

    #[test]
    fn success_is_terminal_until_reset() {
        let mut session = loading_session("ada@example.com");
        session.resolve::<String>(Ok(JoinReply::accepted("Welcome!")));

        session.set_email("again@example.com");
        assert!(session.begin_submit().is_none());

        session.reset();
        assert_eq!(session.status(), &FormStatus::Idle);
        assert_eq!(session.message(), "");
        assert!(session.begin_submit().is_some());
    }

    #[test]
    fn empty_email_is_not_submitted() {
        let mut session = SubmissionSession::new();
        session.set_email("   ");
        assert!(session.begin_submit().is_none());
        assert_eq!(session.status(), &FormStatus::Idle);
    }

    #[test]
    fn reply_arriving_after_reset_still_lands() {
        let mut session = loading_session("ada@example.com");
        session.reset();
        session.resolve::<String>(Ok(JoinReply::rejected("Already registered")));

        assert_eq!(session.message(), "Already registered");
    }
}
