//! Submission-time validation of the risk form

use super::field::{parse_number, FieldKey};
use super::form_state::FormData;
use thiserror::Error;

/// A required field was empty or did not hold a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} is missing or not a number")]
pub struct ValidationError {
    pub field: FieldKey,
}

/// The eight measurements, parsed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree: f64,
    pub age: f64,
}

/// Parse every field in form order, stopping at the first one that fails
pub fn validate(data: &FormData) -> Result<Readings, ValidationError> {
    let read = |field: FieldKey| parse_number(data.value(field)).ok_or(ValidationError { field });

    Ok(Readings {
        pregnancies: read(FieldKey::Pregnancies)?,
        glucose: read(FieldKey::Glucose)?,
        blood_pressure: read(FieldKey::BloodPressure)?,
        skin_thickness: read(FieldKey::SkinThickness)?,
        insulin: read(FieldKey::Insulin)?,
        bmi: read(FieldKey::Bmi)?,
        diabetes_pedigree: read(FieldKey::DiabetesPedigree)?,
        age: read(FieldKey::Age)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete_form() -> FormData {
        FormData {
            pregnancies: "6".into(),
            glucose: "148".into(),
            blood_pressure: "72".into(),
            skin_thickness: "35".into(),
            insulin: "0".into(),
            bmi: "33.6".into(),
            diabetes_pedigree: "0.627".into(),
            age: "50".into(),
        }
    }

    #[test]
    fn test_complete_form_parses_every_field() {
        let readings = validate(&complete_form()).unwrap();
        assert_eq!(
            readings,
            Readings {
                pregnancies: 6.0,
                glucose: 148.0,
                blood_pressure: 72.0,
                skin_thickness: 35.0,
                insulin: 0.0,
                bmi: 33.6,
                diabetes_pedigree: 0.627,
                age: 50.0,
            }
        );
    }

    #[test]
    fn test_each_empty_field_is_reported() {
        for field in FieldKey::ALL {
            let mut data = complete_form();
            data.set(field, "");
            assert_eq!(validate(&data), Err(ValidationError { field }));
        }
    }

    #[test]
    fn test_each_non_numeric_field_is_reported() {
        for field in FieldKey::ALL {
            let mut data = complete_form();
            data.set(field, "abc");
            assert_eq!(validate(&data), Err(ValidationError { field }));
        }
    }

    #[test]
    fn test_first_failing_field_wins() {
        let mut data = complete_form();
        data.set(FieldKey::Insulin, "x");
        data.set(FieldKey::Glucose, "");
        data.set(FieldKey::Age, "");
        assert_eq!(
            validate(&data),
            Err(ValidationError {
                field: FieldKey::Glucose
            })
        );
    }

    #[test]
    fn test_out_of_slider_range_is_accepted() {
        let mut data = complete_form();
        data.set(FieldKey::Glucose, "1000");
        data.set(FieldKey::Age, "-4");
        let readings = validate(&data).unwrap();
        assert_eq!(readings.glucose, 1000.0);
        assert_eq!(readings.age, -4.0);
    }

    #[test]
    fn test_error_message_uses_label() {
        let err = ValidationError {
            field: FieldKey::SkinThickness,
        };
        assert_eq!(err.to_string(), "Skin Thickness is missing or not a number");
    }
}
