use translit_core::transliterate;

use crate::{EditResponse, EditSession, InputEvent, TextEdit};

/// Headless host surface for integration tests.
///
/// Keeps its own buffer and applies only the edits the session returns, the
/// way a real text widget would. After every event its buffer must agree
/// with the session's.
pub(super) struct HeadlessHost {
    pub session: EditSession<'static>,
    buffer: Vec<char>,
    cursor: usize,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self {
            session: EditSession::new(),
            buffer: Vec::new(),
            cursor: 0,
        }
    }

    pub fn send(&mut self, event: InputEvent) -> EditResponse {
        let resp = self.session.handle_event(event);
        if let Some(edit) = &resp.edit {
            self.apply(edit);
        }
        self.cursor = resp.cursor;
        resp
    }

    /// Type `text` one keystroke at a time and return the host buffer.
    pub fn type_keys(&mut self, text: &str) -> String {
        for ch in text.chars() {
            self.send(InputEvent::Text(ch.to_string()));
        }
        self.buffer()
    }

    pub fn buffer(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn apply(&mut self, edit: &TextEdit) {
        match edit {
            TextEdit::Splice { delete, insert } => {
                assert!(
                    *delete <= self.cursor,
                    "edit deletes {delete} chars with cursor at {}",
                    self.cursor
                );
                let start = self.cursor - delete;
                let inserted: Vec<char> = insert.chars().collect();
                let len = inserted.len();
                self.buffer.splice(start..self.cursor, inserted);
                self.cursor = start + len;
            }
            TextEdit::ReplaceAll { text } => {
                self.buffer = text.chars().collect();
                self.cursor = self.buffer.len();
            }
        }
    }
}

#[test]
fn test_headless_words_match_batch() {
    for word in [
        "privet",
        "shchuka",
        "borshch",
        "khorosho",
        "zhizn'",
        "yabloko",
        "chelovek",
        "Shchedrin",
        "SHCHUKA",
        "jeto",
        "ob\"yom",
        "yozh",
        "tsar'",
    ] {
        let mut host = HeadlessHost::new();
        let typed = host.type_keys(word);
        assert_eq!(typed, transliterate(word), "typing {word}");
        assert_eq!(typed, host.session.text());
    }
}

#[test]
fn test_headless_sentence_with_punctuation() {
    let mut host = HeadlessHost::new();
    let typed = host.type_keys("Shchi da kasha - pishcha nasha.");
    assert_eq!(typed, "Щи да каша - пища наша.");
}

#[test]
fn test_headless_edit_in_middle() {
    let mut host = HeadlessHost::new();
    host.type_keys("kasha");
    host.send(InputEvent::MoveCursor(0));
    host.type_keys("Ya ");
    assert_eq!(host.buffer(), "Я каша");
    assert_eq!(host.cursor(), 2);
    assert_eq!(host.buffer(), host.session.text());
}

#[test]
fn test_headless_direction_round_trip() {
    let mut host = HeadlessHost::new();
    host.type_keys("shchetka");
    host.send(InputEvent::ToggleDirection);
    assert_eq!(host.buffer(), "shchetka");
    host.send(InputEvent::ToggleDirection);
    assert_eq!(host.buffer(), "щетка");
}
