//! Deferred completion of assessments
//!
//! An accepted submission is finished by a background task that waits on a
//! [`Clock`] and then reports back to the UI loop over a channel.

mod clock;
mod task;

pub use clock::{Clock, TokioClock};
pub use task::{AssessmentScheduler, PendingAssessment};

#[cfg(test)]
pub use clock::MockClock;

use crate::state::SubmissionTicket;

/// Events delivered to the UI loop from background tasks
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The delay for a submission has elapsed
    AssessmentReady(SubmissionTicket),
}
