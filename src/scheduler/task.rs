//! Background task that completes an assessment after a delay

use super::{AppEvent, Clock};
use crate::state::SubmissionTicket;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Spawns one delay task per accepted submission
pub struct AssessmentScheduler {
    clock: Arc<dyn Clock>,
    delay: Duration,
    events: UnboundedSender<AppEvent>,
}

impl AssessmentScheduler {
    pub fn new(clock: Arc<dyn Clock>, delay: Duration, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            clock,
            delay,
            events,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start the delay for `ticket`; it is sent back as
    /// [`AppEvent::AssessmentReady`] once the clock resolves.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, ticket: SubmissionTicket) -> PendingAssessment {
        let clock = Arc::clone(&self.clock);
        let events = self.events.clone();
        let delay = self.delay;
        let id = ticket.id;

        tracing::debug!("Scheduling assessment {id} in {delay:?}");
        let handle = tokio::spawn(async move {
            clock.sleep(delay).await;
            if events.send(AppEvent::AssessmentReady(ticket)).is_err() {
                tracing::debug!("Event loop closed before assessment {id} completed");
            }
        });

        PendingAssessment { id, handle }
    }
}

/// Handle to a scheduled assessment
#[derive(Debug)]
pub struct PendingAssessment {
    id: u64,
    handle: JoinHandle<()>,
}

impl PendingAssessment {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Abort the delay; no event is sent for this ticket afterwards
    pub fn cancel(self) {
        tracing::debug!("Cancelling assessment {}", self.id);
        self.handle.abort();
    }
}
