//! Render contract of the waitlist form, derived purely from [`FormStatus`].

use super::session::FormStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitButton {
    /// "Join Waitlist" with an arrow.
    Join,
    /// Spinner + "Joining...", disabled.
    Joining,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePanel {
    None,
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Form (input + button) shown; replaced by the success panel otherwise.
    pub show_form: bool,
    pub input_disabled: bool,
    pub button: SubmitButton,
    pub panel: MessagePanel,
    pub show_privacy_note: bool,
}

impl FormView {
    pub fn derive(status: &FormStatus) -> Self {
        let loading = status.is_loading();
        let panel = match status {
            FormStatus::Success { message } => MessagePanel::Success(message.clone()),
            FormStatus::Error { message } => MessagePanel::Error(message.clone()),
            FormStatus::Idle | FormStatus::Loading => MessagePanel::None,
        };
        let succeeded = matches!(panel, MessagePanel::Success(_));

        Self {
            show_form: !succeeded,
            input_disabled: loading,
            button: if loading {
                SubmitButton::Joining
            } else {
                SubmitButton::Join
            },
            panel,
            show_privacy_note: !succeeded,
        }
    }

    pub fn button_disabled(&self) -> bool {
        self.button == SubmitButton::Joining
    }
}
