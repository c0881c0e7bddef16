//! Single-line text input

use super::Key;
use console::{style, Style};

/// Prompt drawn in front of every field
const PROMPT: &str = "> ";

/// Deep purple used for the focused field
const FOCUS_COLOR: u8 = 97;

/// A single-line text input with a character cursor
#[derive(Debug, Clone)]
pub struct TextField {
    placeholder: String,
    value: String,
    /// Cursor position in characters
    cursor: usize,
    focused: bool,
    char_limit: Option<usize>,
}

impl TextField {
    /// Create an empty, blurred field
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: String::new(),
            cursor: 0,
            focused: false,
            char_limit: None,
        }
    }

    /// Limit the number of characters the field accepts
    pub fn with_char_limit(mut self, limit: Option<usize>) -> Self {
        self.char_limit = limit;
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_limit(&self) -> Option<usize> {
        self.char_limit
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of a character position
    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Apply an editing key. Returns whether the field changed.
    ///
    /// Blurred fields ignore input, as do keys without an editing meaning.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.focused {
            return false;
        }

        match key {
            Key::Char(c) if !c.is_control() => {
                if self.char_limit.is_some_and(|limit| self.len() >= limit) {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            Key::Backspace if self.cursor > 0 => {
                let at = self.byte_index(self.cursor - 1);
                self.value.remove(at);
                self.cursor -= 1;
                true
            }
            Key::Delete if self.cursor < self.len() => {
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            Key::Left if self.cursor > 0 => {
                self.cursor -= 1;
                true
            }
            Key::Right if self.cursor < self.len() => {
                self.cursor += 1;
                true
            }
            Key::Home if self.cursor > 0 => {
                self.cursor = 0;
                true
            }
            Key::End if self.cursor < self.len() => {
                self.cursor = self.len();
                true
            }
            _ => false,
        }
    }

    /// Render the field on one line
    pub fn view(&self) -> String {
        if !self.focused {
            if self.value.is_empty() {
                return format!("{}{}", PROMPT, style(&self.placeholder).dim());
            }
            return format!("{}{}", PROMPT, self.value);
        }

        let accent = Style::new().color256(FOCUS_COLOR);
        let mut line = accent.apply_to(PROMPT).to_string();

        if self.value.is_empty() {
            let mut chars = self.placeholder.chars();
            let first = chars.next().unwrap_or(' ');
            line.push_str(&style(first).reverse().to_string());
            line.push_str(&style(chars.as_str()).dim().to_string());
            return line;
        }

        let at = self.byte_index(self.cursor);
        let (before, rest) = self.value.split_at(at);
        line.push_str(&accent.apply_to(before).to_string());
        let mut rest_chars = rest.chars();
        match rest_chars.next() {
            Some(c) => {
                line.push_str(&style(c).reverse().to_string());
                line.push_str(&accent.apply_to(rest_chars.as_str()).to_string());
            }
            None => line.push_str(&style(' ').reverse().to_string()),
        }
        line
    }
}
