use crate::constants::FORM_BUSY_LABEL;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    /// Button shows the busy label; holds the label to restore.
    Transmitting { restore_label: String },
    /// Confirmation message visible.
    Confirmed,
}

/// Mocked contact-form submission.
///
/// `submit` hands out a ticket; only the latest ticket may dismiss the
/// confirmation, so an older timer cannot hide a newer message.
#[derive(Clone, Debug)]
pub struct FormFlow {
    phase: FormPhase,
    ticket: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitStarted {
    pub ticket: u64,
    pub busy_label: &'static str,
}

impl Default for FormFlow {
    fn default() -> Self {
        Self {
            phase: FormPhase::Idle,
            ticket: 0,
        }
    }
}

impl FormFlow {
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Start a submission. Ignored while one is already in flight.
    pub fn submit(&mut self, button_label: &str) -> Option<SubmitStarted> {
        if matches!(self.phase, FormPhase::Transmitting { .. }) {
            return None;
        }
        self.ticket += 1;
        self.phase = FormPhase::Transmitting {
            restore_label: button_label.to_string(),
        };
        Some(SubmitStarted {
            ticket: self.ticket,
            busy_label: FORM_BUSY_LABEL,
        })
    }

    /// Transmission finished; returns the button label to restore.
    pub fn transmitted(&mut self, ticket: u64) -> Option<String> {
        if ticket != self.ticket {
            return None;
        }
        match std::mem::replace(&mut self.phase, FormPhase::Confirmed) {
            FormPhase::Transmitting { restore_label } => Some(restore_label),
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Returns true if the confirmation for `ticket` should be hidden.
    pub fn dismiss(&mut self, ticket: u64) -> bool {
        if ticket == self.ticket && self.phase == FormPhase::Confirmed {
            self.phase = FormPhase::Idle;
            true
        } else {
            false
        }
    }
}
