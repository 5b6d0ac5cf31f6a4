use translit_core::{Direction, Settings};
use translit_session::{EditSession, InputEvent, TextEdit};
use unicode_width::UnicodeWidthStr;

/// One keystroke fed through the session and what it did to the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    pub key: char,
    pub edit: Option<TextEdit>,
    pub buffer: String,
}

/// Type `text` one character at a time and record every edit.
pub fn trace_keys(text: &str, direction: Direction) -> Vec<TraceStep> {
    let mut session = EditSession::from_settings(&Settings {
        enabled: true,
        direction,
    });
    text.chars()
        .map(|key| {
            let resp = session.handle_event(InputEvent::Text(key.to_string()));
            TraceStep {
                key,
                edit: resp.edit,
                buffer: session.text().to_string(),
            }
        })
        .collect()
}

fn describe(edit: &Option<TextEdit>) -> String {
    match edit {
        None => "-".to_string(),
        Some(TextEdit::Splice { delete: 0, insert }) => format!("+{insert}"),
        Some(TextEdit::Splice { delete, insert }) => format!("-{delete} +{insert}"),
        Some(TextEdit::ReplaceAll { text }) => format!("={text}"),
    }
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// Render steps as `key  edit  buffer` columns.
pub fn format_trace(steps: &[TraceStep]) -> String {
    let edits: Vec<String> = steps.iter().map(|s| describe(&s.edit)).collect();
    let width = edits
        .iter()
        .map(|e| UnicodeWidthStr::width(e.as_str()))
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (step, edit) in steps.iter().zip(&edits) {
        let key = step.key.to_string();
        out.push_str(&pad(&key, 2));
        out.push_str("  ");
        out.push_str(&pad(edit, width));
        out.push_str("  ");
        out.push_str(&step.buffer);
        out.push('\n');
    }
    out
}

pub fn type_cmd(text: &str, reverse: bool) {
    let direction = if reverse {
        Direction::CyrillicToLatin
    } else {
        Direction::LatinToCyrillic
    };
    print!("{}", format_trace(&trace_keys(text, direction)));
}
