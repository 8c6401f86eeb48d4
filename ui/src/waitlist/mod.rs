//! Waitlist sign-up: submission state machine, dialog controller, the derived
//! form view and the Dioxus component wiring them to the backend.

mod dialog;
mod events;
mod form_view;
mod session;
mod view;

pub use dialog::{DialogController, DialogEffect};
pub use form_view::{FormView, MessagePanel, SubmitButton};
pub use session::{
    FallbackMessage, FormStatus, PendingSubmission, SubmissionSession, FALLBACK_ERROR_MESSAGE,
};
pub use view::WaitlistDialog;
