//! Editing session standing in for the host text surface.
//!
//! `EditSession` owns the buffer, the cursor and the user's direction /
//! enabled preferences. Each input event is turned into at most one
//! [`TextEdit`] that the host applies atomically, so the transliteration
//! engine itself never holds a reference to any editor.

mod input_handlers;
mod types;

#[cfg(test)]
mod tests;

use translit_core::{text_stats, Direction, Grammar, Settings, TextStats};

pub use types::{EditResponse, InputEvent, TextEdit};

pub struct EditSession<'g> {
    grammar: &'g Grammar,
    text: String,
    /// Cursor position in characters.
    cursor: usize,
    direction: Direction,
    enabled: bool,
}

impl EditSession<'static> {
    /// Session over the global grammar with default preferences.
    pub fn new() -> Self {
        Self::from_settings(&Settings::default())
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_grammar(Grammar::global(), settings)
    }
}

impl Default for EditSession<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g> EditSession<'g> {
    pub fn with_grammar(grammar: &'g Grammar, settings: &Settings) -> Self {
        Self {
            grammar,
            text: String::new(),
            cursor: 0,
            direction: settings.direction,
            enabled: settings.enabled,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current preferences, for the host to persist.
    pub fn settings(&self) -> Settings {
        Settings {
            enabled: self.enabled,
            direction: self.direction,
        }
    }

    pub fn stats(&self) -> TextStats {
        text_stats(&self.text)
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Text left of the cursor: the committed output the matcher looks back into.
    fn text_before_cursor(&self) -> &str {
        &self.text[..self.byte_offset(self.cursor)]
    }

    /// Apply an edit to the owned buffer, mirroring what the host does.
    fn apply(&mut self, edit: &TextEdit) {
        match edit {
            TextEdit::Splice { delete, insert } => {
                let start = self.cursor.saturating_sub(*delete);
                let from = self.byte_offset(start);
                let to = self.byte_offset(self.cursor);
                self.text.replace_range(from..to, insert);
                self.cursor = start + insert.chars().count();
            }
            TextEdit::ReplaceAll { text } => {
                self.text.clone_from(text);
                self.cursor = self.char_len();
            }
        }
    }
}
