use translit_core::Direction;

/// Everything the host can ask the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Typed text, usually a single character.
    Text(String),
    Backspace,
    /// Pasted text, converted as a whole.
    Paste(String),
    /// Replace the buffer (initial load), converted as a whole.
    Load(String),
    /// Move the cursor to a character position (clamped).
    MoveCursor(usize),
    SetDirection(Direction),
    ToggleDirection,
    SetEnabled(bool),
    ToggleEnabled,
}

impl InputEvent {
    pub fn text(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// An edit the host applies atomically relative to the keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    /// Delete `delete` characters before the cursor, then insert `insert` at it.
    Splice { delete: usize, insert: String },
    /// Replace the whole buffer; the cursor moves to the end.
    ReplaceAll { text: String },
}

impl TextEdit {
    pub(crate) fn insert(text: impl Into<String>) -> Self {
        Self::Splice {
            delete: 0,
            insert: text.into(),
        }
    }

    /// Compose two edits applied back to back at the same cursor.
    pub(crate) fn then(self, next: TextEdit) -> TextEdit {
        match (self, next) {
            (_, next @ TextEdit::ReplaceAll { .. }) => next,
            (TextEdit::ReplaceAll { text }, TextEdit::Splice { delete, insert }) => {
                let keep = text.chars().count().saturating_sub(delete);
                let mut text: String = text.chars().take(keep).collect();
                text.push_str(&insert);
                TextEdit::ReplaceAll { text }
            }
            (
                TextEdit::Splice {
                    delete: d1,
                    insert: i1,
                },
                TextEdit::Splice {
                    delete: d2,
                    insert: i2,
                },
            ) => {
                let inserted = i1.chars().count();
                if d2 <= inserted {
                    let mut insert: String = i1.chars().take(inserted - d2).collect();
                    insert.push_str(&i2);
                    TextEdit::Splice { delete: d1, insert }
                } else {
                    TextEdit::Splice {
                        delete: d1 + (d2 - inserted),
                        insert: i2,
                    }
                }
            }
        }
    }
}

/// Response from `handle_event`, returned to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResponse {
    pub consumed: bool,
    pub edit: Option<TextEdit>,
    /// Cursor position (in characters) after the event.
    pub cursor: usize,
}

impl EditResponse {
    pub(crate) fn not_consumed(cursor: usize) -> Self {
        Self {
            consumed: false,
            edit: None,
            cursor,
        }
    }

    pub(crate) fn consumed(cursor: usize) -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed(cursor)
        }
    }

    pub(crate) fn with_edit(edit: TextEdit, cursor: usize) -> Self {
        Self {
            consumed: true,
            edit: Some(edit),
            cursor,
        }
    }
}
