//! Risk assessment form controller
//!
//! Owns the field record and the current result, and moves through
//! `Idle -> Submitting -> (Success | ValidationFailed)`. The delay between
//! `Submitting` and `Success` is not handled here: `submit` hands back a
//! [`SubmissionTicket`] and whoever runs the timer calls [`Controller::complete`]
//! with it once the delay has elapsed.

use super::assessment::{evaluate, AssessmentResult};
use super::forms::{validate, FieldKey, FormData, Readings, ValidationError};
use tracing::debug;

/// Controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
    ValidationFailed,
}

/// An accepted submission waiting for its delay to elapse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmissionTicket {
    pub id: u64,
    /// Values as parsed when the submission was accepted
    pub readings: Readings,
}

/// What a call to [`Controller::submit`] did
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation passed; the ticket must be completed after the delay
    Scheduled(SubmissionTicket),
    /// A field failed validation; nothing else changed
    Rejected(ValidationError),
    /// A submission is already in flight
    Ignored,
}

/// Form state plus the last computed result
#[derive(Debug, Clone, Default)]
pub struct Controller {
    form_data: FormData,
    result: AssessmentResult,
    phase: Phase,
    pending: Option<u64>,
    next_id: u64,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    pub fn result(&self) -> &AssessmentResult {
        &self.result
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Replace a field's text (text input edit)
    pub fn edit_field(&mut self, field: FieldKey, value: impl Into<String>) {
        let value = value.into();
        debug!(field = field.key(), %value, "field edited");
        self.form_data.set(field, value);
        if self.phase == Phase::ValidationFailed {
            self.phase = Phase::Idle;
        }
    }

    /// Write a slider value into a field, snapped to the field's step
    pub fn slide_field(&mut self, field: FieldKey, value: f64) {
        let text = field.range().format(value);
        self.edit_field(field, text);
    }

    /// Move a field's slider by a number of steps
    pub fn step_field(&mut self, field: FieldKey, steps: i32) {
        let range = field.range();
        let current = self.slider_position(field);
        self.slide_field(field, current + f64::from(steps) * range.step);
    }

    /// Slider view of a field's text
    pub fn slider_position(&self, field: FieldKey) -> f64 {
        self.form_data.slider_position(field)
    }

    /// Validate and, if every field is numeric, start an assessment
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            debug!("submit ignored while an assessment is pending");
            return SubmitOutcome::Ignored;
        }

        let readings = match validate(&self.form_data) {
            Ok(readings) => readings,
            Err(err) => {
                debug!(field = err.field.key(), "submission rejected");
                self.phase = Phase::ValidationFailed;
                return SubmitOutcome::Rejected(err);
            }
        };

        self.next_id += 1;
        let ticket = SubmissionTicket {
            id: self.next_id,
            readings,
        };
        self.pending = Some(ticket.id);
        self.result = AssessmentResult::default();
        self.phase = Phase::Submitting;
        debug!(id = ticket.id, "assessment started");
        SubmitOutcome::Scheduled(ticket)
    }

    /// Finish the pending assessment. Tickets that are not the pending one
    /// are ignored.
    pub fn complete(&mut self, ticket: &SubmissionTicket) -> Option<&AssessmentResult> {
        if self.pending != Some(ticket.id) {
            debug!(id = ticket.id, "stale assessment ticket ignored");
            return None;
        }

        self.pending = None;
        self.result = evaluate(&ticket.readings);
        self.phase = Phase::Success;
        debug!(
            id = ticket.id,
            prediction = ?self.result.prediction,
            "assessment complete"
        );
        Some(&self.result)
    }
}
