//! Simulated risk decision

use super::forms::Readings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Glucose strictly above this (mg/dL) flags a positive result
pub const GLUCOSE_THRESHOLD: f64 = 140.0;
/// BMI strictly above this flags a positive result
pub const BMI_THRESHOLD: f64 = 30.0;

const POSITIVE_MESSAGE: &str = "High risk of diabetes detected. Please consult a healthcare \
                                professional for a proper diagnosis and guidance.";
const NEGATIVE_MESSAGE: &str =
    "Low risk of diabetes detected. Keep maintaining a healthy lifestyle!";

/// Binary output label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prediction {
    Positive,
    Negative,
}

impl Prediction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::Positive => "Elevated Risk",
            Self::Negative => "Low Risk",
        }
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome shown to the user. `prediction` is `None` until an assessment
/// has completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub prediction: Option<Prediction>,
    pub message: String,
}

impl AssessmentResult {
    pub fn is_empty(&self) -> bool {
        self.prediction.is_none()
    }

    /// Plain-text rendering used for clipboard copy
    pub fn summary(&self) -> Option<String> {
        self.prediction
            .map(|p| format!("Diabetes risk assessment: {p}\n{}", self.message))
    }
}

/// Decide the label. Only glucose and BMI take part; the remaining
/// readings are collected but unused.
pub fn evaluate(readings: &Readings) -> AssessmentResult {
    if readings.glucose > GLUCOSE_THRESHOLD || readings.bmi > BMI_THRESHOLD {
        AssessmentResult {
            prediction: Some(Prediction::Positive),
            message: POSITIVE_MESSAGE.to_string(),
        }
    } else {
        AssessmentResult {
            prediction: Some(Prediction::Negative),
            message: NEGATIVE_MESSAGE.to_string(),
        }
    }
}

/// One completed assessment in the session history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub prediction: Prediction,
    pub glucose: f64,
    pub bmi: f64,
    pub assessed_at: DateTime<Utc>,
}

/// In-memory, most-recent-first log of completed assessments
#[derive(Debug, Clone)]
pub struct AssessmentHistory {
    records: Vec<AssessmentRecord>,
    limit: usize,
}

impl AssessmentHistory {
    pub const DEFAULT_LIMIT: usize = 10;

    pub fn new(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: limit.max(1),
        }
    }

    pub fn record(&mut self, readings: &Readings, prediction: Prediction) {
        self.records.insert(
            0,
            AssessmentRecord {
                prediction,
                glucose: readings.glucose,
                bmi: readings.bmi,
                assessed_at: Utc::now(),
            },
        );
        self.records.truncate(self.limit);
    }

    pub fn records(&self) -> &[AssessmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for AssessmentHistory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(glucose: f64, bmi: f64) -> Readings {
        Readings {
            pregnancies: 1.0,
            glucose,
            blood_pressure: 70.0,
            skin_thickness: 20.0,
            insulin: 80.0,
            bmi,
            diabetes_pedigree: 0.3,
            age: 30.0,
        }
    }

    mod evaluate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_high_glucose_is_positive() {
            let result = evaluate(&readings(150.0, 25.0));
            assert_eq!(result.prediction, Some(Prediction::Positive));
            assert!(result.message.contains("consult a healthcare professional"));
        }

        #[test]
        fn test_high_bmi_alone_is_positive() {
            let result = evaluate(&readings(100.0, 35.0));
            assert_eq!(result.prediction, Some(Prediction::Positive));
        }

        #[test]
        fn test_normal_values_are_negative() {
            let result = evaluate(&readings(100.0, 25.0));
            assert_eq!(result.prediction, Some(Prediction::Negative));
            assert!(result.message.starts_with("Low risk"));
        }

        #[test]
        fn test_thresholds_are_strict() {
            assert_eq!(
                evaluate(&readings(140.0, 20.0)).prediction,
                Some(Prediction::Negative)
            );
            assert_eq!(
                evaluate(&readings(100.0, 30.0)).prediction,
                Some(Prediction::Negative)
            );
            assert_eq!(
                evaluate(&readings(140.5, 20.0)).prediction,
                Some(Prediction::Positive)
            );
        }

        #[test]
        fn test_other_readings_do_not_matter() {
            let base = readings(120.0, 28.0);
            let mut extreme = base;
            extreme.pregnancies = 17.0;
            extreme.blood_pressure = 190.0;
            extreme.skin_thickness = 99.0;
            extreme.insulin = 846.0;
            extreme.diabetes_pedigree = 2.42;
            extreme.age = 81.0;
            assert_eq!(evaluate(&base), evaluate(&extreme));
        }
    }

    mod result {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_empty() {
            let result = AssessmentResult::default();
            assert!(result.is_empty());
            assert_eq!(result.message, "");
            assert_eq!(result.summary(), None);
        }

        #[test]
        fn test_summary_includes_label_and_message() {
            let result = evaluate(&readings(100.0, 25.0));
            let summary = result.summary().unwrap();
            assert!(summary.starts_with("Diabetes risk assessment: negative"));
            assert!(summary.ends_with(&result.message));
        }

        #[test]
        fn test_prediction_serializes_lowercase() {
            assert_eq!(
                serde_json::to_string(&Prediction::Positive).unwrap(),
                "\"positive\""
            );
        }
    }

    mod history {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_most_recent_first() {
            let mut history = AssessmentHistory::default();
            history.record(&readings(100.0, 25.0), Prediction::Negative);
            history.record(&readings(150.0, 25.0), Prediction::Positive);
            assert_eq!(history.len(), 2);
            assert_eq!(history.records()[0].prediction, Prediction::Positive);
            assert_eq!(history.records()[0].glucose, 150.0);
            assert_eq!(history.records()[1].prediction, Prediction::Negative);
        }

        #[test]
        fn test_capped_at_limit() {
            let mut history = AssessmentHistory::new(3);
            for i in 0..5 {
                history.record(&readings(100.0 + i as f64, 25.0), Prediction::Negative);
            }
            assert_eq!(history.len(), 3);
            assert_eq!(history.records()[0].glucose, 104.0);
            assert_eq!(history.records()[2].glucose, 102.0);
        }

        #[test]
        fn test_zero_limit_keeps_one() {
            let mut history = AssessmentHistory::new(0);
            history.record(&readings(100.0, 25.0), Prediction::Negative);
            assert_eq!(history.len(), 1);
        }
    }
}
