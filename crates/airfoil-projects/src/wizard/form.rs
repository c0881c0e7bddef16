//! Form state machine

use super::field::TextField;
use super::Key;
use crate::metadata::{MetadataDraft, MetadataField};
use console::Style;

/// Number of fields in the form
pub const FIELD_COUNT: usize = MetadataField::ALL.len();

const SUBMIT_BUTTON: &str = "[ Submit ]";

/// Where the focus currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// A field is focused
    Editing(usize),
    /// The submit button is focused
    Submitting,
}

/// Result of handling one key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Keep reading input
    Continue,
    /// The form was submitted with these values
    Completed(FormValues),
    /// The user aborted the form
    Cancelled,
}

/// Literal field values at submission time, in wizard order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues([String; FIELD_COUNT]);

impl FormValues {
    pub fn get(&self, field: MetadataField) -> &str {
        &self.0[field.index()]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<FormValues> for MetadataDraft {
    fn from(values: FormValues) -> Self {
        let mut draft = MetadataDraft::default();
        for (field, value) in MetadataField::ALL.into_iter().zip(values.0) {
            draft.set(field, value);
        }
        draft
    }
}

/// The metadata form
///
/// Focus starts on the first field. Tab/Down and Shift+Tab/Up cycle through
/// the fields, wrapping at both ends. Enter on the last field submits; on any
/// other field it advances like Tab. Esc and Ctrl+C cancel. Every other key
/// goes to the focused field.
#[derive(Debug, Clone)]
pub struct FormWizard {
    fields: Vec<TextField>,
    focus_index: usize,
}

impl FormWizard {
    /// Fresh form with the first field focused
    pub fn new() -> Self {
        let fields = MetadataField::ALL
            .into_iter()
            .map(|f| TextField::new(f.placeholder()).with_char_limit(f.char_limit()))
            .collect();

        let mut wizard = Self {
            fields,
            focus_index: 0,
        };
        wizard.sync_focus();
        wizard
    }

    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    pub fn state(&self) -> WizardState {
        if self.focus_index < self.fields.len() {
            WizardState::Editing(self.focus_index)
        } else {
            WizardState::Submitting
        }
    }

    /// Current field values
    pub fn values(&self) -> FormValues {
        FormValues(std::array::from_fn(|i| self.fields[i].value().to_string()))
    }

    /// Handle one key event
    pub fn handle_event(&mut self, key: Key) -> Transition {
        match key {
            Key::CtrlC | Key::Esc => Transition::Cancelled,

            Key::Tab | Key::BackTab | Key::Enter | Key::Up | Key::Down => {
                let last = self.fields.len() - 1;

                // Submission is tied to the last data field, not the button
                if key == Key::Enter && self.focus_index == last {
                    return Transition::Completed(self.values());
                }

                let next = if matches!(key, Key::Up | Key::BackTab) {
                    self.focus_index as isize - 1
                } else {
                    self.focus_index as isize + 1
                };

                self.focus_index = if next > last as isize {
                    0
                } else if next < 0 {
                    last
                } else {
                    next as usize
                };

                self.sync_focus();
                Transition::Continue
            }

            other => {
                if let Some(field) = self.fields.get_mut(self.focus_index) {
                    field.handle_key(other);
                }
                Transition::Continue
            }
        }
    }

    fn sync_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            if i == self.focus_index {
                field.focus();
            } else {
                field.blur();
            }
        }
    }

    /// Render all fields followed by the submit button
    pub fn view(&self) -> String {
        let mut out = self
            .fields
            .iter()
            .map(TextField::view)
            .collect::<Vec<_>>()
            .join("\n");

        let button = if self.state() == WizardState::Submitting {
            Style::new().color256(97).bold().apply_to(SUBMIT_BUTTON)
        } else {
            Style::new().dim().apply_to(SUBMIT_BUTTON)
        };
        out.push_str(&format!("\n\n{}\n", button));
        out
    }
}

impl Default for FormWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(wizard: &mut FormWizard, text: &str) {
        for c in text.chars() {
            assert_eq!(wizard.handle_event(Key::Char(c)), Transition::Continue);
        }
    }

    fn focused_count(wizard: &FormWizard) -> usize {
        wizard.fields().iter().filter(|f| f.is_focused()).count()
    }

    #[test]
    fn test_initial_state() {
        let wizard = FormWizard::new();
        assert_eq!(wizard.fields().len(), 5);
        assert_eq!(wizard.state(), WizardState::Editing(0));
        assert!(wizard.fields()[0].is_focused());
        assert_eq!(focused_count(&wizard), 1);
    }

    #[test]
    fn test_tab_cycles_back_to_first_field() {
        for k in 0..4 {
            let mut wizard = FormWizard::new();
            for _ in 0..(FIELD_COUNT * k) {
                wizard.handle_event(Key::Tab);
            }
            assert_eq!(wizard.focus_index(), 0, "after {} tabs", FIELD_COUNT * k);
        }
    }

    #[test]
    fn test_backtab_cycles_back_to_first_field() {
        for k in 0..4 {
            let mut wizard = FormWizard::new();
            for _ in 0..(FIELD_COUNT * k) {
                wizard.handle_event(Key::BackTab);
            }
            assert_eq!(wizard.focus_index(), 0);
        }
    }

    #[test]
    fn test_down_and_up_match_tab_and_backtab() {
        let mut wizard = FormWizard::new();
        wizard.handle_event(Key::Down);
        wizard.handle_event(Key::Down);
        assert_eq!(wizard.focus_index(), 2);
        wizard.handle_event(Key::Up);
        assert_eq!(wizard.focus_index(), 1);
    }

    #[test]
    fn test_backtab_from_first_wraps_to_last() {
        let mut wizard = FormWizard::new();
        wizard.handle_event(Key::BackTab);
        assert_eq!(wizard.focus_index(), FIELD_COUNT - 1);
        assert!(wizard.fields()[FIELD_COUNT - 1].is_focused());
    }

    #[test]
    fn test_tab_from_last_wraps_to_first() {
        let mut wizard = FormWizard::new();
        for _ in 0..FIELD_COUNT - 1 {
            wizard.handle_event(Key::Tab);
        }
        assert_eq!(wizard.focus_index(), FIELD_COUNT - 1);
        wizard.handle_event(Key::Tab);
        assert_eq!(wizard.focus_index(), 0);
    }

    #[test]
    fn test_exactly_one_field_focused_after_every_move() {
        let mut wizard = FormWizard::new();
        let keys = [
            Key::Tab,
            Key::Tab,
            Key::BackTab,
            Key::Up,
            Key::Up,
            Key::Down,
            Key::Enter,
        ];
        for key in keys {
            wizard.handle_event(key);
            assert_eq!(focused_count(&wizard), 1);
            assert!(wizard.fields()[wizard.focus_index()].is_focused());
        }
    }

    #[test]
    fn test_enter_on_non_last_field_advances() {
        let mut wizard = FormWizard::new();
        assert_eq!(wizard.handle_event(Key::Enter), Transition::Continue);
        assert_eq!(wizard.focus_index(), 1);
    }

    #[test]
    fn test_enter_on_last_field_completes_with_typed_values() {
        let answers = ["demo", "LLM", "gpt2", "12.5", "3.10"];
        let mut wizard = FormWizard::new();

        for (i, answer) in answers.iter().enumerate() {
            type_str(&mut wizard, answer);
            if i < answers.len() - 1 {
                assert_eq!(wizard.handle_event(Key::Enter), Transition::Continue);
            }
        }

        match wizard.handle_event(Key::Enter) {
            Transition::Completed(values) => {
                assert_eq!(values.as_slice(), &answers.map(String::from));
                assert_eq!(values.get(MetadataField::ModelName), "gpt2");
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_completed_values_keep_literal_text() {
        let mut wizard = FormWizard::new();
        type_str(&mut wizard, " spaced name ");
        wizard.handle_event(Key::BackTab);

        match wizard.handle_event(Key::Enter) {
            Transition::Completed(values) => {
                assert_eq!(values.get(MetadataField::Name), " spaced name ");
                assert_eq!(values.get(MetadataField::PythonVersion), "");
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_escape_and_ctrl_c_cancel() {
        let mut wizard = FormWizard::new();
        type_str(&mut wizard, "demo");
        assert_eq!(wizard.handle_event(Key::Esc), Transition::Cancelled);

        let mut wizard = FormWizard::new();
        assert_eq!(wizard.handle_event(Key::CtrlC), Transition::Cancelled);
    }

    #[test]
    fn test_typing_goes_to_focused_field_only() {
        let mut wizard = FormWizard::new();
        wizard.handle_event(Key::Tab);
        wizard.handle_event(Key::Tab);
        type_str(&mut wizard, "gpt2");

        let values = wizard.values();
        assert_eq!(values.get(MetadataField::Name), "");
        assert_eq!(values.get(MetadataField::ModelType), "");
        assert_eq!(values.get(MetadataField::ModelName), "gpt2");
        assert_eq!(wizard.focus_index(), 2);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut wizard = FormWizard::new();
        assert_eq!(wizard.handle_event(Key::Unknown), Transition::Continue);
        assert_eq!(wizard.focus_index(), 0);
        assert_eq!(wizard.values().get(MetadataField::Name), "");
    }

    #[test]
    fn test_model_type_field_is_limited_to_64_chars() {
        let mut wizard = FormWizard::new();
        wizard.handle_event(Key::Tab);
        type_str(&mut wizard, &"x".repeat(80));
        assert_eq!(wizard.values().get(MetadataField::ModelType).len(), 64);
    }

    #[test]
    fn test_view_lists_every_field_and_button() {
        let wizard = FormWizard::new();
        let view = console::strip_ansi_codes(&wizard.view()).to_string();

        for field in MetadataField::ALL {
            assert!(view.contains(&field.placeholder()[1..]), "missing {:?}", field);
        }
        assert!(view.ends_with("\n\n[ Submit ]\n"));
        assert_eq!(view.lines().count(), FIELD_COUNT + 2);
    }

    #[test]
    fn test_values_into_draft() {
        let mut wizard = FormWizard::new();
        type_str(&mut wizard, "demo");
        let draft: MetadataDraft = wizard.values().into();
        assert_eq!(draft.get(MetadataField::Name), Some("demo"));
        assert_eq!(draft.get(MetadataField::ModelType), None);
    }
}
