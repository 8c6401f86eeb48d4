//! Event loop driving one waitlist dialog.
//!
//! User input arrives on a channel. Requests and close-reset timers are kept as
//! futures owned by the loop: dropping the loop (component unmount) drops them,
//! while closing the dialog leaves them running.

use std::future::Future;

use api::JoinReply;
use dioxus::logger::tracing::debug;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::future::LocalBoxFuture;
use futures_util::stream::FuturesUnordered;
use futures_util::{select, FutureExt, StreamExt};

use crate::core::timing;

use super::dialog::{DialogController, DialogEffect};
use super::session::SubmissionSession;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WaitlistEvent {
    OpenChange(bool),
    EmailInput(String),
    Submit,
}

/// Completion of work the loop started itself.
#[derive(Debug)]
enum Settled {
    Resolved(Result<JoinReply, String>),
    ResetElapsed,
}

/// Where the loop keeps the session and dialog (signals in the component).
pub(crate) trait WaitlistState {
    fn with_session<R>(&mut self, f: impl FnOnce(&mut SubmissionSession) -> R) -> R;
    fn with_dialog<R>(&mut self, f: impl FnOnce(&mut DialogController) -> R) -> R;
}

/// Run until the input channel closes.
///
/// `join` posts an email and yields the backend reply or a failure text.
pub(crate) async fn run_events<S, J, Fut>(
    mut rx: UnboundedReceiver<WaitlistEvent>,
    mut state: S,
    join: J,
) where
    S: WaitlistState,
    J: Fn(String) -> Fut,
    Fut: Future<Output = Result<JoinReply, String>> + 'static,
{
    let mut in_flight: FuturesUnordered<LocalBoxFuture<'static, Settled>> = FuturesUnordered::new();

    loop {
        let step = select! {
            event = rx.next() => Step::Input(event),
            settled = in_flight.select_next_some() => Step::Settled(settled),
        };

        match step {
            Step::Input(None) => break,
            Step::Input(Some(event)) => {
                if let Some(work) = handle_event(event, &mut state, &join) {
                    in_flight.push(work);
                }
            }
            Step::Settled(Settled::Resolved(outcome)) => {
                debug!(ok = outcome.is_ok(), "Waitlist submission settled");
                state.with_session(|s| s.resolve(outcome));
            }
            Step::Settled(Settled::ResetElapsed) => state.with_session(|s| s.reset()),
        }
    }
}

enum Step {
    Input(Option<WaitlistEvent>),
    Settled(Settled),
}

fn handle_event<S, J, Fut>(
    event: WaitlistEvent,
    state: &mut S,
    join: &J,
) -> Option<LocalBoxFuture<'static, Settled>>
where
    S: WaitlistState,
    J: Fn(String) -> Fut,
    Fut: Future<Output = Result<JoinReply, String>> + 'static,
{
    match event {
        WaitlistEvent::OpenChange(open) => match state.with_dialog(|d| d.on_open_change(open)) {
            DialogEffect::ScheduleReset { after_ms } => Some(
                async move {
                    timing::sleep_ms(after_ms).await;
                    Settled::ResetElapsed
                }
                .boxed_local(),
            ),
            DialogEffect::None => None,
        },
        WaitlistEvent::EmailInput(value) => {
            state.with_session(|s| s.set_email(value));
            None
        }
        WaitlistEvent::Submit => {
            let pending = state.with_session(|s| s.begin_submit())?;
            let request = join(pending.email);
            Some(async move { Settled::Resolved(request.await) }.boxed_local())
        }
    }
}
