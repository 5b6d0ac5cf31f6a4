//! Property-based tests for EditSession.
//!
//! Generates random input sequences via proptest and verifies that the
//! host-side buffer stays in sync and that keystroke-by-keystroke typing of
//! unambiguous text agrees with batch transliteration.

use proptest::prelude::*;

use translit_core::{transliterate, Direction};

use super::simulator::HeadlessHost;
use crate::{InputEvent, TextEdit};

// ---------------------------------------------------------------------------
// Action enum: every host-facing operation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Action {
    TypeLatin(char),
    TypeOther(char),
    Backspace,
    MoveCursor(usize),
    Paste(String),
    ToggleDirection,
    ToggleEnabled,
}

// ---------------------------------------------------------------------------
// Strategy: weighted random Action generation
// ---------------------------------------------------------------------------

fn arb_latin_char() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => prop::sample::select(vec!['a', 'o', 'e', 'i', 'u', 'y']),
        3 => prop::sample::select(vec!['s', 'h', 'c', 'z', 't', 'k', 'j']),
        2 => prop::sample::select(vec![
            'b', 'v', 'g', 'd', 'l', 'm', 'n', 'p', 'r', 'f', 'w', 'x',
            'S', 'H', 'C', 'Y', 'A', '\'', '"',
        ]),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        50 => arb_latin_char().prop_map(Action::TypeLatin),
        5 => prop::sample::select(vec![' ', '.', '1', 'щ', 'Ж', '!'])
            .prop_map(Action::TypeOther),
        8 => Just(Action::Backspace),
        4 => (0usize..40).prop_map(Action::MoveCursor),
        3 => "[a-z ]{0,8}".prop_map(Action::Paste),
        2 => Just(Action::ToggleDirection),
        2 => Just(Action::ToggleEnabled),
    ]
}

fn to_event(action: &Action) -> InputEvent {
    match action {
        Action::TypeLatin(ch) | Action::TypeOther(ch) => InputEvent::Text(ch.to_string()),
        Action::Backspace => InputEvent::Backspace,
        Action::MoveCursor(pos) => InputEvent::MoveCursor(*pos),
        Action::Paste(text) => InputEvent::Paste(text.clone()),
        Action::ToggleDirection => InputEvent::ToggleDirection,
        Action::ToggleEnabled => InputEvent::ToggleEnabled,
    }
}

/// Consonant + vowel syllables. Digraph keys only appear whole, and no two
/// syllables can join into a different key, so typing is unambiguous.
fn arb_syllable() -> impl Strategy<Value = String> {
    let onsets = prop::sample::select(vec![
        "b", "v", "g", "d", "z", "k", "l", "m", "n", "p", "r", "s", "t", "f", "sh", "ch", "zh",
        "kh", "shch",
    ]);
    let vowels = prop::sample::select(vec!["a", "o", "u", "i", "e", "y"]);
    (onsets, vowels).prop_map(|(c, v)| format!("{c}{v}"))
}

// ---------------------------------------------------------------------------
// Invariant checks, run after every action
// ---------------------------------------------------------------------------

fn assert_invariants(host: &HeadlessHost, resp: &crate::EditResponse, action: &Action) {
    // 1. Host buffer mirrors the session
    assert_eq!(
        host.buffer(),
        host.session.text(),
        "host buffer diverged after {:?}",
        action,
    );

    // 2. Cursor within bounds and reported consistently
    assert!(
        resp.cursor <= host.session.text().chars().count(),
        "cursor {} out of bounds after {:?}",
        resp.cursor,
        action,
    );
    assert_eq!(resp.cursor, host.session.cursor());
    assert_eq!(host.cursor(), host.session.cursor());

    // 3. An edit implies the event was consumed
    if resp.edit.is_some() {
        assert!(resp.consumed, "edit without consumed after {:?}", action);
    }

    // 4. Disabled typing never rewrites committed text
    if !host.session.is_enabled() && matches!(action, Action::TypeLatin(_)) {
        if let Some(TextEdit::Splice { delete, .. }) = &resp.edit {
            assert_eq!(*delete, 0, "disabled session revised text after {:?}", action);
        }
    }

    // 5. Reverse direction never revises either
    if host.session.direction() == Direction::CyrillicToLatin
        && matches!(action, Action::TypeLatin(_) | Action::TypeOther(_))
    {
        if let Some(TextEdit::Splice { delete, .. }) = &resp.edit {
            assert_eq!(*delete, 0, "reverse direction revised text after {:?}", action);
        }
    }
}

// ---------------------------------------------------------------------------
// proptest entry point
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn session_invariants_hold(actions in prop::collection::vec(arb_action(), 1..100)) {
        let mut host = HeadlessHost::new();
        for action in &actions {
            let resp = host.send(to_event(action));
            assert_invariants(&host, &resp, action);
        }
    }

    #[test]
    fn incremental_typing_matches_batch(
        syllables in prop::collection::vec(arb_syllable(), 1..12)
    ) {
        let word: String = syllables.concat();
        let mut host = HeadlessHost::new();
        let typed = host.type_keys(&word);
        prop_assert_eq!(typed, transliterate(&word), "typing {}", word);
    }

    #[test]
    fn title_case_words_match_batch(
        syllables in prop::collection::vec(arb_syllable(), 1..6)
    ) {
        let word: String = syllables.concat();
        let mut chars = word.chars();
        let title: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        let mut host = HeadlessHost::new();
        let typed = host.type_keys(&title);
        prop_assert_eq!(typed, transliterate(&title), "typing {}", title);
    }
}
