use tracing::{debug, debug_span};

use translit_core::{should_reverse_transliterate, should_transliterate, Direction};

use super::types::{EditResponse, InputEvent, TextEdit};
use super::EditSession;

impl EditSession<'_> {
    /// Process an input event. Returns an EditResponse describing what the host should do.
    pub fn handle_event(&mut self, event: InputEvent) -> EditResponse {
        let _span = debug_span!("handle_event", ?event).entered();

        match event {
            InputEvent::Text(text) => self.handle_text(&text),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Paste(text) => self.paste(&text),
            InputEvent::Load(text) => self.load(&text),
            InputEvent::MoveCursor(pos) => self.move_cursor(pos),
            InputEvent::SetDirection(direction) => self.set_direction(direction),
            InputEvent::ToggleDirection => self.toggle_direction(),
            InputEvent::SetEnabled(enabled) => self.set_enabled(enabled),
            InputEvent::ToggleEnabled => self.toggle_enabled(),
        }
    }

    /// Type `text` at the cursor, one character at a time.
    /// The per-character edits are folded into a single edit.
    pub fn handle_text(&mut self, text: &str) -> EditResponse {
        let mut combined: Option<TextEdit> = None;
        for ch in text.chars() {
            let edit = self.type_char(ch);
            self.apply(&edit);
            combined = Some(match combined {
                Some(prev) => prev.then(edit),
                None => edit,
            });
        }
        match combined {
            Some(edit) => EditResponse::with_edit(edit, self.cursor),
            None => EditResponse::not_consumed(self.cursor),
        }
    }

    fn type_char(&self, ch: char) -> TextEdit {
        if !self.enabled {
            return TextEdit::insert(ch);
        }
        let mut buf = [0; 4];
        let typed: &str = ch.encode_utf8(&mut buf);
        match self.direction {
            Direction::LatinToCyrillic if should_transliterate(ch) => {
                match self
                    .grammar
                    .try_multi_char_translit(self.text_before_cursor(), ch)
                {
                    Some(rev) => {
                        debug!(delete = rev.chars_to_delete, result = %rev.result, "revise");
                        TextEdit::Splice {
                            delete: rev.chars_to_delete,
                            insert: rev.result,
                        }
                    }
                    None => TextEdit::insert(self.grammar.transliterate(typed)),
                }
            }
            Direction::CyrillicToLatin if should_reverse_transliterate(ch) => {
                TextEdit::insert(self.grammar.reverse_transliterate(typed))
            }
            _ => TextEdit::insert(ch),
        }
    }

    pub fn backspace(&mut self) -> EditResponse {
        if self.cursor == 0 {
            return EditResponse::not_consumed(self.cursor);
        }
        let edit = TextEdit::Splice {
            delete: 1,
            insert: String::new(),
        };
        self.apply(&edit);
        EditResponse::with_edit(edit, self.cursor)
    }

    /// Insert pasted text at the cursor, converted in one batch.
    pub fn paste(&mut self, text: &str) -> EditResponse {
        if text.is_empty() {
            return EditResponse::not_consumed(self.cursor);
        }
        let edit = TextEdit::insert(self.convert(text));
        self.apply(&edit);
        EditResponse::with_edit(edit, self.cursor)
    }

    /// Replace the buffer, e.g. when the host restores saved text.
    pub fn load(&mut self, text: &str) -> EditResponse {
        let edit = TextEdit::ReplaceAll {
            text: self.convert(text),
        };
        self.apply(&edit);
        EditResponse::with_edit(edit, self.cursor)
    }

    pub fn move_cursor(&mut self, pos: usize) -> EditResponse {
        self.cursor = pos.min(self.char_len());
        EditResponse::consumed(self.cursor)
    }

    /// Switch direction. An enabled session converts the whole buffer.
    pub fn set_direction(&mut self, direction: Direction) -> EditResponse {
        if direction == self.direction {
            return EditResponse::consumed(self.cursor);
        }
        self.direction = direction;
        if !self.enabled || self.text.is_empty() {
            return EditResponse::consumed(self.cursor);
        }
        let edit = TextEdit::ReplaceAll {
            text: self.convert(&self.text),
        };
        self.apply(&edit);
        EditResponse::with_edit(edit, self.cursor)
    }

    pub fn toggle_direction(&mut self) -> EditResponse {
        self.set_direction(self.direction.toggled())
    }

    pub fn set_enabled(&mut self, enabled: bool) -> EditResponse {
        self.enabled = enabled;
        EditResponse::consumed(self.cursor)
    }

    pub fn toggle_enabled(&mut self) -> EditResponse {
        self.set_enabled(!self.enabled)
    }

    /// Batch conversion in the current direction; verbatim when disabled.
    fn convert(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match self.direction {
            Direction::LatinToCyrillic => self.grammar.transliterate(text),
            Direction::CyrillicToLatin => self.grammar.reverse_transliterate(text),
        }
    }
}
