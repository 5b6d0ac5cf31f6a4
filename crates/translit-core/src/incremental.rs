//! Retroactive revision of committed output as new Latin characters arrive.
//!
//! Typing is append-only, and each keystroke is committed as its shortest
//! match. A later keystroke can prove a longer sequence was meant ("s" then
//! "h" is "ш", not "сх"), so the last few committed characters are mapped
//! back to Latin and re-matched together with the new character.

use tracing::{debug, debug_span};

use crate::grammar::Grammar;

/// Committed characters re-examined per keystroke. Four Latin characters
/// (three committed + the new one) cover the longest key.
pub const MAX_LOOKBACK: usize = 3;

/// Delete the last `chars_to_delete` committed characters, then append `result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub result: String,
    pub chars_to_delete: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reconstruction {
    /// Reverse single-char index only.
    SingleOnly,
    /// Single-char index, falling back to the reverse multi index per character.
    MultiFallback,
}

/// Incremental matching against the global grammar.
pub fn try_multi_char_translit(prev_chars: &str, new_char: char) -> Option<Revision> {
    Grammar::global().try_multi_char_translit(prev_chars, new_char)
}

/// Whether `new_latin` can extend `prev_cyrillic` into a multi entry.
pub fn can_form_multi_char(prev_cyrillic: char, new_latin: char) -> bool {
    Grammar::global().can_form_multi_char(prev_cyrillic, new_latin)
}

impl Grammar {
    /// Decide whether `new_char` retroactively completes a longer entry with
    /// the tail of `prev_chars`. `None` means: append the forward
    /// transliteration of `new_char`.
    pub fn try_multi_char_translit(&self, prev_chars: &str, new_char: char) -> Option<Revision> {
        let _span = debug_span!("try_multi_char_translit", ?new_char).entered();

        let mut tail: Vec<char> = prev_chars.chars().rev().take(MAX_LOOKBACK).collect();
        tail.reverse();

        for lookback in (1..=tail.len()).rev() {
            let window = &tail[tail.len() - lookback..];

            let single = self.reconstruct(window, Reconstruction::SingleOnly);
            let fallback = self
                .reconstruct(window, Reconstruction::MultiFallback)
                .filter(|r| single.as_ref() != Some(r));

            for latin in single.into_iter().chain(fallback) {
                let mut combined = latin;
                combined.push(new_char);

                if let Some(result) = self.match_combined(&combined) {
                    debug!(lookback, %combined, %result, "revision");
                    return Some(Revision {
                        result,
                        chars_to_delete: lookback,
                    });
                }
            }
        }

        None
    }

    /// Map committed Cyrillic back to the Latin that produced it.
    fn reconstruct(&self, window: &[char], strategy: Reconstruction) -> Option<String> {
        let mut latin = String::with_capacity(window.len() * 2);
        for &c in window {
            if let Some(&l) = self.reverse_single.get(&c) {
                latin.push(l);
                continue;
            }
            match strategy {
                Reconstruction::SingleOnly => return None,
                Reconstruction::MultiFallback => latin.push_str(self.reverse_multi.get(&c)?),
            }
        }
        Some(latin)
    }

    /// Test `combined` against the multi keys, longest first.
    ///
    /// An equal key (ignoring case) yields its value. A key that is a strict
    /// prefix yields its value followed by the forward transliteration of
    /// the rest of `combined`.
    fn match_combined(&self, combined: &str) -> Option<String> {
        for (i, entry) in self.multi.iter().enumerate() {
            let Some(rest) = strip_prefix_ignore_case(combined, &entry.key) else {
                continue;
            };
            let segment = &combined[..combined.len() - rest.len()];
            let resolved = &self.multi[self.resolve_variant(segment, i)];

            if rest.is_empty() {
                return Some(resolved.value.clone());
            }
            let mut result = resolved.value.clone();
            result.push_str(&self.transliterate(rest));
            return Some(result);
        }
        None
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.chars();
    for p in prefix.chars() {
        let t = chars.next()?;
        if t != p && !t.to_lowercase().eq(p.to_lowercase()) {
            return None;
        }
    }
    Some(chars.as_str())
}
