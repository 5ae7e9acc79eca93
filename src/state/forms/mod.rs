//! Form domain layer
//!
//! Field metadata, the field record, keyboard focus and submission-time
//! validation for the risk form.

mod field;
mod form_state;
mod validation;

pub use field::{parse_number, FieldKey, FieldRange};
pub use form_state::{Form, FormData, FormFocus};
pub use validation::{validate, Readings, ValidationError};
