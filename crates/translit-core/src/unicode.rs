//! Character-level classification for Latin and Cyrillic input.

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Basic Russian alphabet (U+0410..U+044F) plus ё/Ё, which sit outside it.
pub fn is_cyrillic(c: char) -> bool {
    ('\u{0410}'..='\u{044F}').contains(&c) || c == 'ё' || c == 'Ё'
}

/// Whether a typed character goes through Latin→Cyrillic transliteration.
/// The two quote characters stand for the soft and hard signs.
pub fn should_transliterate(c: char) -> bool {
    is_latin(c) || c == '\'' || c == '"'
}

pub fn should_reverse_transliterate(c: char) -> bool {
    is_cyrillic(c)
}
