//! Metadata wizard
//!
//! A five-field form modelled as a plain state machine. Input arrives as
//! [`Key`] values and every call to [`FormWizard::handle_event`] yields a
//! [`Transition`]; [`FormWizard::view`] renders the current state. Nothing
//! here touches the terminal, so the binary supplies the keystrokes and
//! draws the view.

mod field;
mod form;

pub use field::TextField;
pub use form::{FormValues, FormWizard, Transition, WizardState, FIELD_COUNT};

/// A key event understood by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    BackTab,
    Up,
    Down,
    Enter,
    Esc,
    CtrlC,
    Left,
    Right,
    Home,
    End,
    Backspace,
    Delete,
    Char(char),
    /// Any key without a wizard meaning
    Unknown,
}
