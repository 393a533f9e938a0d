// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// UI-local state that lives outside the content and language services.

/// Contact form submission stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Form is editable and the send button is enabled.
    #[default]
    Idle,
    /// Simulated send in flight; the button is disabled.
    Submitting,
    /// Confirmation notice is showing.
    Submitted,
}

/// Field values and submission phase of the contact form.
///
/// Nothing is transmitted anywhere; a submit waits, clears the fields, and
/// shows a notice for a while.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub phase: SubmitPhase,
}

impl ContactForm {
    /// All four fields carry non-whitespace content.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmitPhase::Submitted
    }

    /// Enter the submitting phase. Returns `false` (and changes nothing)
    /// when a field is missing or a submit is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() || !self.is_complete() {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        true
    }

    /// Complete the simulated send: clear every field and show the notice.
    pub fn finish_submit(&mut self) {
        *self = Self {
            phase: SubmitPhase::Submitted,
            ..Self::default()
        };
    }

    /// Hide the notice. Only affects the submitted phase.
    pub fn clear_notice(&mut self) {
        if self.is_submitted() {
            self.phase = SubmitPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Mona".into(),
            email: "mona@example.com".into(),
            subject: "logo".into(),
            message: "I need a new logo.".into(),
            phase: SubmitPhase::Idle,
        }
    }

    #[test]
    fn incomplete_form_does_not_submit() {
        let mut form = filled();
        form.message = "   ".into();
        assert!(!form.is_complete());
        assert!(!form.begin_submit());
        assert_eq!(form.phase, SubmitPhase::Idle);
    }

    #[test]
    fn full_cycle_clears_fields() {
        let mut form = filled();
        assert!(form.begin_submit());
        assert!(form.is_submitting());

        form.finish_submit();
        assert!(form.is_submitted());
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.subject.is_empty());
        assert!(form.message.is_empty());

        form.clear_notice();
        assert_eq!(form.phase, SubmitPhase::Idle);
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut form = filled();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert!(form.is_submitting());
    }

    #[test]
    fn clear_notice_leaves_other_phases_alone() {
        let mut form = filled();
        form.clear_notice();
        assert_eq!(form.phase, SubmitPhase::Idle);

        form.begin_submit();
        form.clear_notice();
        assert!(form.is_submitting());
    }
}
