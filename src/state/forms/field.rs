//! Form field value objects

use serde::{Deserialize, Serialize};

/// The eight measurements collected by the risk form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    DiabetesPedigree,
    Age,
}

impl FieldKey {
    /// All fields in the order they are rendered and validated
    pub const ALL: [FieldKey; 8] = [
        FieldKey::Pregnancies,
        FieldKey::Glucose,
        FieldKey::BloodPressure,
        FieldKey::SkinThickness,
        FieldKey::Insulin,
        FieldKey::Bmi,
        FieldKey::DiabetesPedigree,
        FieldKey::Age,
    ];

    /// Field at a form position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Form position of this field
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }

    /// camelCase key, as used in the record and in serialized form
    pub fn key(&self) -> &'static str {
        match self {
            Self::Pregnancies => "pregnancies",
            Self::Glucose => "glucose",
            Self::BloodPressure => "bloodPressure",
            Self::SkinThickness => "skinThickness",
            Self::Insulin => "insulin",
            Self::Bmi => "bmi",
            Self::DiabetesPedigree => "diabetesPedigree",
            Self::Age => "age",
        }
    }

    /// Human-readable name, derived from the key
    pub fn label(&self) -> String {
        decamelize(self.key())
    }

    /// Unit hint shown next to the label
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Self::Pregnancies | Self::DiabetesPedigree => None,
            Self::Glucose => Some("mg/dL"),
            Self::BloodPressure => Some("mm Hg"),
            Self::SkinThickness => Some("mm"),
            Self::Insulin => Some("mu U/ml"),
            Self::Bmi => Some("kg/m²"),
            Self::Age => Some("years"),
        }
    }

    /// Slider bounds for this field
    pub fn range(&self) -> FieldRange {
        match self {
            Self::Pregnancies => FieldRange::new(0.0, 20.0, 1.0),
            Self::Glucose => FieldRange::new(0.0, 300.0, 1.0),
            Self::BloodPressure => FieldRange::new(0.0, 200.0, 1.0),
            Self::SkinThickness => FieldRange::new(0.0, 100.0, 1.0),
            Self::Insulin => FieldRange::new(0.0, 900.0, 1.0),
            Self::Bmi => FieldRange::new(0.0, 70.0, 0.1),
            Self::DiabetesPedigree => FieldRange::new(0.0, 3.0, 0.001),
            Self::Age => FieldRange::new(0.0, 120.0, 1.0),
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Slider bounds. Text values outside the range are still accepted on submit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Slider position for a text value: the parsed number clamped to the
    /// range, or `min` when the text is empty or not a number
    pub fn position_of(&self, text: &str) -> f64 {
        parse_number(text)
            .map(|v| v.clamp(self.min, self.max))
            .unwrap_or(self.min)
    }

    /// Snap a slider value to the step grid and clamp it to the range.
    /// NaN snaps to `min`.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Fraction of the range covered by `value`, for gauge rendering
    pub fn ratio(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Stringify a slider value the way the slider writes it into the text field
    pub fn format(&self, value: f64) -> String {
        let snapped = self.snap(value);
        let formatted = format!("{:.*}", self.decimals(), snapped);
        let trimmed = if formatted.contains('.') {
            formatted.trim_end_matches('0').trim_end_matches('.')
        } else {
            formatted.as_str()
        };
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Number of decimal places implied by the step
    fn decimals(&self) -> usize {
        let step = self.step.to_string();
        step.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
    }
}

/// Parse a field's text as a finite number, ignoring surrounding whitespace
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// "bloodPressure" -> "Blood Pressure"
fn decamelize(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.extend(c.to_uppercase());
        } else {
            if c.is_uppercase() {
                label.push(' ');
            }
            label.push(c);
        }
    }
    label
}
