//! Contact form submit-button UX.
//!
//! The form posts natively to an external form endpoint. This module only
//! tracks the submit button: busy on submit, restored after a fixed delay
//! whatever the network outcome.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Button markup while a submission is in flight.
pub const BUSY_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Ready,
    Busy {
        original_label: String,
    },
}

/// Label and disabled flag to write onto the button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Default)]
pub struct SubmitRelay {
    phase: SubmitPhase,
}

impl SubmitRelay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// Enter the busy state, remembering `current_label`. Returns `None` when
    /// already busy so the first captured label is the one restored.
    pub fn begin(&mut self, current_label: &str) -> Option<ButtonView> {
        if matches!(self.phase, SubmitPhase::Busy { .. }) {
            return None;
        }
        self.phase = SubmitPhase::Busy { original_label: current_label.to_owned() };
        Some(ButtonView { label: BUSY_LABEL.to_owned(), disabled: true })
    }

    /// Restore the original label. `None` when not busy.
    pub fn reset(&mut self) -> Option<ButtonView> {
        match std::mem::take(&mut self.phase) {
            SubmitPhase::Busy { original_label } => Some(ButtonView { label: original_label, disabled: false }),
            SubmitPhase::Ready => None,
        }
    }
}
