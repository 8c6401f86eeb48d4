//! Visibility of the waitlist dialog and the deferred reset it schedules.

/// Side effect requested by a visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEffect {
    None,
    /// Reset the submission session once `after_ms` has elapsed.
    ScheduleReset { after_ms: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogController {
    open: bool,
    reset_delay_ms: u64,
}

impl Default for DialogController {
    fn default() -> Self {
        Self::new(crate::core::config::DEFAULT_RESET_DELAY_MS)
    }
}

impl DialogController {
    pub fn new(reset_delay_ms: u64) -> Self {
        Self {
            open: false,
            reset_delay_ms,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply an open/close request from the dialog or its trigger.
    ///
    /// Every close schedules a reset, even a redundant one. Scheduled resets
    /// are never cancelled: reopening within the delay shows the previous
    /// state until the timer fires.
    pub fn on_open_change(&mut self, open: bool) -> DialogEffect {
        self.open = open;
        if open {
            DialogEffect::None
        } else {
            DialogEffect::ScheduleReset {
                after_ms: self.reset_delay_ms,
            }
        }
    }
}
