//! Application state definitions

use super::assessment::AssessmentHistory;
use super::controller::Controller;
use super::forms::{FieldKey, Form, FormFocus};
use super::notification::ToastQueue;
use super::progress::SubmitProgress;
use std::time::Duration;

/// Everything the renderer reads
#[derive(Debug)]
pub struct AppState {
    /// Field record, result and submission phase
    pub controller: Controller,
    /// Keyboard focus over the form
    pub focus: FormFocus,
    /// Pending notifications
    pub toasts: ToastQueue,
    /// Completed assessments this session
    pub history: AssessmentHistory,
    /// Progress animation while an assessment is pending
    pub progress: Option<SubmitProgress>,
    /// Field named by the last rejected submission, until it is edited
    pub invalid_field: Option<FieldKey>,
    /// Key map overlay visible
    pub show_help: bool,
}

impl AppState {
    pub fn new(toast_duration: Duration, history_limit: usize) -> Self {
        Self {
            controller: Controller::new(),
            focus: FormFocus::new(),
            toasts: ToastQueue::new(toast_duration),
            history: AssessmentHistory::new(history_limit),
            progress: None,
            invalid_field: None,
            show_help: false,
        }
    }

    /// Field under the cursor, `None` when the Assess button is focused
    pub fn active_field(&self) -> Option<FieldKey> {
        self.focus.active_key()
    }

    pub fn next_form_field(&mut self) {
        self.focus.next_field();
    }

    pub fn prev_form_field(&mut self) {
        self.focus.prev_field();
    }

    /// Append a typed character to the active field
    pub fn form_input_char(&mut self, c: char) {
        if let Some(field) = self.active_field() {
            let mut value = self.controller.form_data().value(field).to_string();
            value.push(c);
            self.edit(field, value);
        }
    }

    /// Remove the last character of the active field
    pub fn form_backspace(&mut self) {
        if let Some(field) = self.active_field() {
            let mut value = self.controller.form_data().value(field).to_string();
            if value.pop().is_some() {
                self.edit(field, value);
            }
        }
    }

    /// Empty the active field
    pub fn form_clear_field(&mut self) {
        if let Some(field) = self.active_field() {
            self.edit(field, String::new());
        }
    }

    /// Drag the active field's slider by `steps`
    pub fn form_slide(&mut self, steps: i32) {
        if let Some(field) = self.active_field() {
            self.controller.step_field(field, steps);
            self.clear_invalid(field);
        }
    }

    fn edit(&mut self, field: FieldKey, value: String) {
        self.controller.edit_field(field, value);
        self.clear_invalid(field);
    }

    fn clear_invalid(&mut self, field: FieldKey) {
        if self.invalid_field == Some(field) {
            self.invalid_field = None;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ToastQueue::DEFAULT_DURATION, AssessmentHistory::DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormData;
    use pretty_assertions::assert_eq;

    fn state_on(field: FieldKey) -> AppState {
        let mut state = AppState::default();
        state.focus.focus(field);
        state
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.active_field(), Some(FieldKey::Pregnancies));
        assert!(state.toasts.is_empty());
        assert!(state.history.is_empty());
        assert!(state.progress.is_none());
        assert!(state.invalid_field.is_none());
    }

    #[test]
    fn test_typing_appends_to_active_field() {
        let mut state = state_on(FieldKey::Glucose);
        for c in "148".chars() {
            state.form_input_char(c);
        }
        assert_eq!(state.controller.form_data().glucose, "148");
        assert_eq!(state.controller.form_data().pregnancies, "");
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut state = state_on(FieldKey::Bmi);
        state.form_input_char('3');
        state.form_input_char('3');
        state.form_backspace();
        assert_eq!(state.controller.form_data().bmi, "3");
        state.form_backspace();
        state.form_backspace();
        assert_eq!(state.controller.form_data().bmi, "");
    }

    #[test]
    fn test_clear_field() {
        let mut state = state_on(FieldKey::Age);
        state.form_input_char('5');
        state.form_clear_field();
        assert_eq!(state.controller.form_data().age, "");
    }

    #[test]
    fn test_slide_writes_slider_value() {
        let mut state = state_on(FieldKey::Insulin);
        state.form_slide(10);
        assert_eq!(state.controller.form_data().insulin, "10");
        state.form_slide(-3);
        assert_eq!(state.controller.form_data().insulin, "7");
    }

    #[test]
    fn test_input_on_button_row_is_ignored() {
        let mut state = AppState::default();
        state.focus.set_active_field(FormFocus::BUTTON_INDEX);
        state.form_input_char('1');
        state.form_slide(1);
        assert_eq!(state.controller.form_data(), &FormData::default());
    }

    #[test]
    fn test_editing_invalid_field_clears_marker() {
        let mut state = state_on(FieldKey::Glucose);
        state.invalid_field = Some(FieldKey::Glucose);
        state.form_input_char('9');
        assert!(state.invalid_field.is_none());
    }

    #[test]
    fn test_editing_other_field_keeps_marker() {
        let mut state = state_on(FieldKey::Age);
        state.invalid_field = Some(FieldKey::Glucose);
        state.form_input_char('9');
        assert_eq!(state.invalid_field, Some(FieldKey::Glucose));
    }

    #[test]
    fn test_field_navigation() {
        let mut state = AppState::default();
        state.next_form_field();
        assert_eq!(state.active_field(), Some(FieldKey::Glucose));
        state.prev_form_field();
        state.prev_form_field();
        assert_eq!(state.active_field(), None);
    }
}
