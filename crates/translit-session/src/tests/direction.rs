use translit_core::{Direction, Settings};

use super::*;
use crate::TextEdit;

fn reverse_session() -> EditSession<'static> {
    EditSession::from_settings(&Settings {
        enabled: true,
        direction: Direction::CyrillicToLatin,
    })
}

#[test]
fn test_reverse_typing() {
    let mut session = reverse_session();
    type_string(&mut session, "щука!");
    assert_eq!(session.text(), "shchuka!");
    assert_eq!(session.cursor(), 8);
}

#[test]
fn test_reverse_leaves_latin_alone() {
    let mut session = reverse_session();
    type_string(&mut session, "ok ё");
    assert_eq!(session.text(), "ok yo");
}

#[test]
fn test_toggle_direction_converts_buffer() {
    let mut session = EditSession::new();
    type_string(&mut session, "zhurnal");
    assert_eq!(session.text(), "журнал");

    let resp = session.handle_event(InputEvent::ToggleDirection);
    assert_eq!(
        resp.edit,
        Some(TextEdit::ReplaceAll {
            text: "zhurnal".into()
        })
    );
    assert_eq!(session.direction(), Direction::CyrillicToLatin);
    assert_eq!(session.cursor(), 7);

    session.handle_event(InputEvent::SetDirection(Direction::LatinToCyrillic));
    assert_eq!(session.text(), "журнал");
}

#[test]
fn test_same_direction_is_noop() {
    let mut session = EditSession::new();
    type_string(&mut session, "da");
    let resp = session.handle_event(InputEvent::SetDirection(Direction::LatinToCyrillic));
    assert!(resp.consumed);
    assert!(resp.edit.is_none());
}

#[test]
fn test_direction_change_while_disabled_keeps_buffer() {
    let mut session = EditSession::new();
    type_string(&mut session, "da");
    session.set_enabled(false);
    let resp = session.set_direction(Direction::CyrillicToLatin);
    assert!(resp.edit.is_none());
    assert_eq!(session.text(), "да");
}

#[test]
fn test_reverse_paste() {
    let mut session = reverse_session();
    session.paste("Привет, мир");
    assert_eq!(session.text(), "Privet, mir");
}
