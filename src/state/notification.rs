//! Toast notifications

use super::forms::ValidationError;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Visual treatment of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A notification raised by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

impl From<&ValidationError> for Toast {
    fn from(err: &ValidationError) -> Self {
        Toast::destructive(
            "Missing information",
            format!("Please enter a valid value for {}.", err.field.label()),
        )
    }
}

/// Queue of toasts; the front one is displayed until it expires or is dismissed
#[derive(Debug)]
pub struct ToastQueue {
    queue: VecDeque<Toast>,
    shown_at: Option<Instant>,
    duration: Duration,
}

impl ToastQueue {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

    pub fn new(duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            shown_at: None,
            duration,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        if self.queue.is_empty() {
            self.shown_at = Some(Instant::now());
        }
        self.queue.push_back(toast);
    }

    pub fn current(&self) -> Option<&Toast> {
        self.queue.front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop the displayed toast and start the clock on the next one
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
        self.shown_at = if self.queue.is_empty() {
            None
        } else {
            Some(Instant::now())
        };
    }

    /// Expire the displayed toast if it has been up long enough
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        if let Some(shown_at) = self.shown_at {
            if now.duration_since(shown_at) >= self.duration {
                self.dismiss();
            }
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldKey;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_toast_names_field() {
        let toast = Toast::from(&ValidationError {
            field: FieldKey::BloodPressure,
        });
        assert_eq!(
            toast,
            Toast {
                title: "Missing information".to_string(),
                description: "Please enter a valid value for Blood Pressure.".to_string(),
                variant: ToastVariant::Destructive,
            }
        );
    }

    #[test]
    fn test_queue_shows_oldest_first() {
        let mut queue = ToastQueue::default();
        queue.push(Toast::new("first", ""));
        queue.push(Toast::new("second", ""));
        assert_eq!(queue.current().map(|t| t.title.as_str()), Some("first"));
        queue.dismiss();
        assert_eq!(queue.current().map(|t| t.title.as_str()), Some("second"));
        queue.dismiss();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss_on_empty_is_noop() {
        let mut queue = ToastQueue::default();
        queue.dismiss();
        assert!(queue.current().is_none());
    }

    #[test]
    fn test_tick_expires_after_duration() {
        let mut queue = ToastQueue::new(Duration::from_millis(100));
        queue.push(Toast::new("hello", ""));
        let shown_at = queue.shown_at.unwrap();

        queue.tick_at(shown_at + Duration::from_millis(50));
        assert_eq!(queue.len(), 1);

        queue.tick_at(shown_at + Duration::from_millis(100));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_tick_on_empty_queue_is_noop() {
        let mut queue = ToastQueue::new(Duration::ZERO);
        queue.tick();
        assert!(queue.is_empty());
    }
}
