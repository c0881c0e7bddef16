//! Terminal driver for the metadata wizard
//!
//! Reads single keystrokes with `console::Term`, feeds them to the
//! [`FormWizard`] state machine and redraws its view in place.

use airfoil_projects::wizard::{FormValues, FormWizard, Key, Transition};
use airfoil_projects::Error as ProjectError;
use anyhow::{bail, Context, Result};
use console::{Key as TermKey, Term};
use tracing::debug;

const HELP: &str = "tab/shift+tab: move  enter: next (submit on last field)  esc: cancel";

/// Hides the cursor while the wizard runs and restores it on drop
struct CursorGuard<'a> {
    term: &'a Term,
}

impl<'a> CursorGuard<'a> {
    fn new(term: &'a Term) -> Result<Self> {
        term.hide_cursor().context("Failed to hide cursor")?;
        Ok(Self { term })
    }
}

impl Drop for CursorGuard<'_> {
    fn drop(&mut self) {
        let _ = self.term.show_cursor();
    }
}

/// Translate a terminal key into a wizard key
pub fn map_key(key: TermKey) -> Key {
    match key {
        TermKey::Tab => Key::Tab,
        TermKey::BackTab => Key::BackTab,
        TermKey::ArrowUp => Key::Up,
        TermKey::ArrowDown => Key::Down,
        TermKey::ArrowLeft => Key::Left,
        TermKey::ArrowRight => Key::Right,
        TermKey::Home => Key::Home,
        TermKey::End => Key::End,
        TermKey::Enter => Key::Enter,
        TermKey::Escape => Key::Esc,
        TermKey::CtrlC => Key::CtrlC,
        TermKey::Backspace => Key::Backspace,
        TermKey::Del => Key::Delete,
        TermKey::Char('\u{3}') => Key::CtrlC,
        TermKey::Char('\t') => Key::Tab,
        TermKey::Char('\r') | TermKey::Char('\n') => Key::Enter,
        TermKey::Char(c) => Key::Char(c),
        _ => Key::Unknown,
    }
}

/// Run the wizard until it completes or is cancelled
///
/// Fails immediately when stdout is not an interactive terminal.
/// Cancellation is reported as [`ProjectError::Cancelled`].
pub fn run_wizard() -> Result<FormValues> {
    let term = Term::stdout();
    if !term.is_term() {
        bail!("The project wizard needs an interactive terminal; pass --name, --type and --model instead");
    }

    let _guard = CursorGuard::new(&term)?;
    let mut wizard = FormWizard::new();
    let mut drawn = draw(&term, &wizard, 0)?;

    loop {
        let key = term.read_key().context("Failed to read key")?;
        let transition = wizard.handle_event(map_key(key));
        debug!(focus = wizard.focus_index(), "wizard key handled");

        match transition {
            Transition::Continue => drawn = draw(&term, &wizard, drawn)?,
            Transition::Completed(values) => {
                term.clear_last_lines(drawn)?;
                return Ok(values);
            }
            Transition::Cancelled => {
                term.clear_last_lines(drawn)?;
                return Err(ProjectError::Cancelled.into());
            }
        }
    }
}

/// Replace the previously drawn frame; returns the number of lines drawn
fn draw(term: &Term, wizard: &FormWizard, previous: usize) -> Result<usize> {
    if previous > 0 {
        term.clear_last_lines(previous)?;
    }

    let frame = format!("{}{}\n", wizard.view(), console::style(HELP).dim());
    term.write_str(&frame)?;
    Ok(frame.lines().count())
}
