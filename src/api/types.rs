use translit_core::{Direction, Revision, TextStats};
use translit_session::{EditResponse, TextEdit};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum TranslitError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct TranslitRevision {
    pub result: String,
    pub chars_to_delete: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct TranslitStats {
    pub chars: u32,
    pub chars_no_spaces: u32,
    pub words: u32,
    pub sentences: u32,
    pub paragraphs: u32,
    pub lines: u32,
}

/// Response to every session call. `cursor` is in characters.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct TranslitEditResponse {
    pub consumed: bool,
    pub edit: Option<TranslitEdit>,
    pub cursor: u32,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum TranslitEdit {
    /// Delete `delete` characters before the cursor, then insert `insert`.
    Splice { delete: u32, insert: String },
    ReplaceAll { text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum TranslitDirection {
    LatinToCyrillic,
    CyrillicToLatin,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl From<Revision> for TranslitRevision {
    fn from(rev: Revision) -> Self {
        Self {
            result: rev.result,
            chars_to_delete: to_u32(rev.chars_to_delete),
        }
    }
}

impl From<TextStats> for TranslitStats {
    fn from(s: TextStats) -> Self {
        Self {
            chars: to_u32(s.chars),
            chars_no_spaces: to_u32(s.chars_no_spaces),
            words: to_u32(s.words),
            sentences: to_u32(s.sentences),
            paragraphs: to_u32(s.paragraphs),
            lines: to_u32(s.lines),
        }
    }
}

impl From<TextEdit> for TranslitEdit {
    fn from(edit: TextEdit) -> Self {
        match edit {
            TextEdit::Splice { delete, insert } => Self::Splice {
                delete: to_u32(delete),
                insert,
            },
            TextEdit::ReplaceAll { text } => Self::ReplaceAll { text },
        }
    }
}

impl From<EditResponse> for TranslitEditResponse {
    fn from(resp: EditResponse) -> Self {
        Self {
            consumed: resp.consumed,
            edit: resp.edit.map(Into::into),
            cursor: to_u32(resp.cursor),
        }
    }
}

impl From<Direction> for TranslitDirection {
    fn from(d: Direction) -> Self {
        match d {
            Direction::LatinToCyrillic => Self::LatinToCyrillic,
            Direction::CyrillicToLatin => Self::CyrillicToLatin,
        }
    }
}

impl From<TranslitDirection> for Direction {
    fn from(d: TranslitDirection) -> Self {
        match d {
            TranslitDirection::LatinToCyrillic => Self::LatinToCyrillic,
            TranslitDirection::CyrillicToLatin => Self::CyrillicToLatin,
        }
    }
}
