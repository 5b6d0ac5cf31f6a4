//! Latin↔Cyrillic transliteration engine.
//!
//! Batch conversion in both directions, plus incremental matching that
//! revises already-committed Cyrillic output when a newly typed Latin
//! character completes a longer sequence.

pub mod forward;
pub mod grammar;
pub mod incremental;
pub mod reverse;
pub mod settings;
pub mod stats;
pub mod unicode;

pub use forward::transliterate;
pub use grammar::Grammar;
pub use incremental::{can_form_multi_char, try_multi_char_translit, Revision, MAX_LOOKBACK};
pub use reverse::{get_latin_from_cyrillic, reverse_transliterate};
pub use settings::{Direction, Settings};
pub use stats::{text_stats, TextStats};
pub use unicode::{should_reverse_transliterate, should_transliterate};
