//! Progress indicator animation for a pending assessment

use std::time::{Duration, Instant};

/// Eased progress over the assessment delay
#[derive(Debug, Clone)]
pub struct SubmitProgress {
    /// When the submission was accepted
    pub start_time: Instant,
    /// Expected delay before the result arrives
    pub duration: Duration,
}

impl SubmitProgress {
    pub fn new(duration: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            duration,
        }
    }

    /// Fraction complete in `0.0..=1.0`
    pub fn ratio(&self) -> f64 {
        self.ratio_at(Instant::now())
    }

    fn ratio_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        let progress = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        // Cubic ease-out: fast start, slow finish
        f64::from(simple_easing::cubic_out(progress)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let progress = SubmitProgress::new(Duration::from_millis(1500));
        assert_eq!(progress.ratio_at(progress.start_time), 0.0);
    }

    #[test]
    fn test_caps_at_one() {
        let progress = SubmitProgress::new(Duration::from_millis(1500));
        let later = progress.start_time + Duration::from_secs(10);
        assert_eq!(progress.ratio_at(later), 1.0);
    }

    #[test]
    fn test_eases_ahead_of_linear() {
        let progress = SubmitProgress::new(Duration::from_millis(1000));
        let halfway = progress.start_time + Duration::from_millis(500);
        assert!(progress.ratio_at(halfway) > 0.5);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let progress = SubmitProgress::new(Duration::ZERO);
        assert_eq!(progress.ratio(), 1.0);
    }
}
