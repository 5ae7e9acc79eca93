//! Form state management: the field record and keyboard focus

use super::field::FieldKey;
use serde::{Deserialize, Serialize};

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Text contents of the eight measurement fields.
///
/// Values are kept as entered so that empty and partially typed states are
/// representable; they are only parsed when the form is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub pregnancies: String,
    pub glucose: String,
    pub blood_pressure: String,
    pub skin_thickness: String,
    pub insulin: String,
    pub bmi: String,
    pub diabetes_pedigree: String,
    pub age: String,
}

impl FormData {
    pub fn value(&self, field: FieldKey) -> &str {
        match field {
            FieldKey::Pregnancies => &self.pregnancies,
            FieldKey::Glucose => &self.glucose,
            FieldKey::BloodPressure => &self.blood_pressure,
            FieldKey::SkinThickness => &self.skin_thickness,
            FieldKey::Insulin => &self.insulin,
            FieldKey::Bmi => &self.bmi,
            FieldKey::DiabetesPedigree => &self.diabetes_pedigree,
            FieldKey::Age => &self.age,
        }
    }

    pub fn value_mut(&mut self, field: FieldKey) -> &mut String {
        match field {
            FieldKey::Pregnancies => &mut self.pregnancies,
            FieldKey::Glucose => &mut self.glucose,
            FieldKey::BloodPressure => &mut self.blood_pressure,
            FieldKey::SkinThickness => &mut self.skin_thickness,
            FieldKey::Insulin => &mut self.insulin,
            FieldKey::Bmi => &mut self.bmi,
            FieldKey::DiabetesPedigree => &mut self.diabetes_pedigree,
            FieldKey::Age => &mut self.age,
        }
    }

    pub fn set(&mut self, field: FieldKey, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// Slider position derived from the field's text
    pub fn slider_position(&self, field: FieldKey) -> f64 {
        field.range().position_of(self.value(field))
    }
}

/// Keyboard focus over the risk form: the eight fields followed by the
/// Assess button row
#[derive(Debug, Clone, Default)]
pub struct FormFocus {
    pub active_field_index: usize,
}

impl FormFocus {
    /// Index of the Assess button row
    pub const BUTTON_INDEX: usize = FieldKey::ALL.len();

    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTON_INDEX
    }

    /// The field under the cursor, `None` on the buttons row
    pub fn active_key(&self) -> Option<FieldKey> {
        FieldKey::from_index(self.active_field_index)
    }

    pub fn focus(&mut self, field: FieldKey) {
        self.active_field_index = field.index();
    }
}

impl Form for FormFocus {
    fn field_count(&self) -> usize {
        Self::BUTTON_INDEX + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTON_INDEX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod form_data {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_all_empty() {
            let data = FormData::default();
            for field in FieldKey::ALL {
                assert_eq!(data.value(field), "");
            }
        }

        #[test]
        fn test_set_writes_only_the_named_field() {
            let mut data = FormData::default();
            data.set(FieldKey::BloodPressure, "72");
            assert_eq!(data.blood_pressure, "72");
            assert_eq!(data.value(FieldKey::BloodPressure), "72");
            assert_eq!(data.glucose, "");
        }

        #[test]
        fn test_value_mut_allows_in_place_edit() {
            let mut data = FormData::default();
            data.value_mut(FieldKey::Age).push('5');
            data.value_mut(FieldKey::Age).push('0');
            assert_eq!(data.age, "50");
        }

        #[test]
        fn test_slider_position_follows_text() {
            let mut data = FormData::default();
            assert_eq!(data.slider_position(FieldKey::Bmi), 0.0);
            data.set(FieldKey::Bmi, "33.6");
            assert_eq!(data.slider_position(FieldKey::Bmi), 33.6);
            data.set(FieldKey::Bmi, "not a number");
            assert_eq!(data.slider_position(FieldKey::Bmi), 0.0);
        }

        #[test]
        fn test_serializes_with_camel_case_keys() {
            let mut data = FormData::default();
            data.set(FieldKey::DiabetesPedigree, "0.627");
            let json = serde_json::to_value(&data).unwrap();
            assert_eq!(json["diabetesPedigree"], "0.627");
            assert_eq!(json["skinThickness"], "");
        }
    }

    mod form_focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_on_first_field() {
            let focus = FormFocus::new();
            assert_eq!(focus.active_key(), Some(FieldKey::Pregnancies));
            assert!(!focus.is_buttons_row_active());
        }

        #[test]
        fn test_field_count_includes_button_row() {
            assert_eq!(FormFocus::new().field_count(), 9);
        }

        #[test]
        fn test_next_field_reaches_button_then_wraps() {
            let mut focus = FormFocus::new();
            for _ in 0..8 {
                focus.next_field();
            }
            assert!(focus.is_buttons_row_active());
            assert_eq!(focus.active_key(), None);
            focus.next_field();
            assert_eq!(focus.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_button() {
            let mut focus = FormFocus::new();
            focus.prev_field();
            assert!(focus.is_buttons_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut focus = FormFocus::new();
            focus.set_active_field(100);
            assert_eq!(focus.active_field_index, FormFocus::BUTTON_INDEX);
        }

        #[test]
        fn test_focus_jumps_to_field() {
            let mut focus = FormFocus::new();
            focus.focus(FieldKey::Insulin);
            assert_eq!(focus.active_key(), Some(FieldKey::Insulin));
        }
    }
}
